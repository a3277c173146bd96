// Pet Shelter - Core Library
// In-memory model of a shelter holding dogs and cats behind one contract

pub mod validation;
pub mod entities;
pub mod shelter;
pub mod config;

// Re-export commonly used types
pub use validation::{AgeBand, ValidationError};
pub use entities::{
    Animal, AnimalRecord, ShelterAnimal, Species, StatusChange,
    Dog, DogTraits, TrainingOutcome,
    Cat, CatTraits,
};
pub use shelter::{Shelter, ShelterReport};
pub use config::ShelterConfig;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
