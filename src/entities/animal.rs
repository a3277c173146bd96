// 🐾 Animal - closed set of sheltered species
//
// The shelter stores `Animal` values and calls the ShelterAnimal contract on
// them; narrowing to a concrete species is a `match`, never a runtime cast.

use serde::{Deserialize, Serialize};

use super::cat::Cat;
use super::dog::Dog;
use super::record::AnimalRecord;
use super::species::{ShelterAnimal, Species};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "species")]
pub enum Animal {
    Dog(Dog),
    Cat(Cat),
}

impl Animal {
    /// Borrow the contract implementation of whichever species this is
    pub fn as_contract(&self) -> &dyn ShelterAnimal {
        match self {
            Animal::Dog(dog) => dog,
            Animal::Cat(cat) => cat,
        }
    }

    pub fn as_contract_mut(&mut self) -> &mut dyn ShelterAnimal {
        match self {
            Animal::Dog(dog) => dog,
            Animal::Cat(cat) => cat,
        }
    }

    pub fn name(&self) -> &str {
        self.record().name()
    }

    pub fn as_dog(&self) -> Option<&Dog> {
        match self {
            Animal::Dog(dog) => Some(dog),
            _ => None,
        }
    }

    pub fn as_dog_mut(&mut self) -> Option<&mut Dog> {
        match self {
            Animal::Dog(dog) => Some(dog),
            _ => None,
        }
    }

    pub fn as_cat(&self) -> Option<&Cat> {
        match self {
            Animal::Cat(cat) => Some(cat),
            _ => None,
        }
    }

    pub fn as_cat_mut(&mut self) -> Option<&mut Cat> {
        match self {
            Animal::Cat(cat) => Some(cat),
            _ => None,
        }
    }

    /// Household fit in `0..=100`, using the species' own penalties.
    ///
    /// `wants_trait` means "wants a trained dog" for dogs and "wants an
    /// indoor cat" for cats.
    pub fn compatibility_score(
        &self,
        has_kids: bool,
        has_other_same_species: bool,
        wants_trait: bool,
    ) -> u8 {
        match self {
            Animal::Dog(dog) => {
                dog.compatibility_score(has_kids, has_other_same_species, wants_trait)
            }
            Animal::Cat(cat) => {
                cat.compatibility_score(has_kids, has_other_same_species, wants_trait)
            }
        }
    }
}

impl From<Dog> for Animal {
    fn from(dog: Dog) -> Self {
        Animal::Dog(dog)
    }
}

impl From<Cat> for Animal {
    fn from(cat: Cat) -> Self {
        Animal::Cat(cat)
    }
}

// Every contract method forwards to the concrete species, including the
// provided ones, so species overrides are never bypassed.
impl ShelterAnimal for Animal {
    fn record(&self) -> &AnimalRecord {
        self.as_contract().record()
    }

    fn record_mut(&mut self) -> &mut AnimalRecord {
        self.as_contract_mut().record_mut()
    }

    fn species(&self) -> Species {
        self.as_contract().species()
    }

    fn make_sound(&self) -> &'static str {
        self.as_contract().make_sound()
    }

    fn care_instructions(&self) -> String {
        self.as_contract().care_instructions()
    }

    fn exercise_needs(&self) -> String {
        self.as_contract().exercise_needs()
    }

    fn dietary_needs(&self) -> String {
        self.as_contract().dietary_needs()
    }

    fn adoption_fee(&self) -> f64 {
        self.as_contract().adoption_fee()
    }

    fn is_suitable_for_children(&self) -> bool {
        self.as_contract().is_suitable_for_children()
    }

    fn full_profile(&self) -> String {
        self.as_contract().full_profile()
    }

    fn daily_care(&self) -> String {
        self.as_contract().daily_care()
    }

    fn adoption_listing(&self) -> String {
        self.as_contract().adoption_listing()
    }
}

// ============================================================================
// TESTS
// ============================================================================
