// Entity Models - sheltered animals
//
// Each animal has:
// - A shared AnimalRecord (identity, name, age, breed, adoption status)
// - Species state and rules behind the ShelterAnimal contract
// - A place in the closed `Animal` sum type the shelter stores

pub mod record;
pub mod species;
pub mod dog;
pub mod cat;
pub mod animal;

pub use record::{AnimalRecord, StatusChange};
pub use species::{ShelterAnimal, Species};
pub use dog::{Dog, DogTraits, TrainingOutcome};
pub use cat::{Cat, CatTraits};
pub use animal::Animal;
