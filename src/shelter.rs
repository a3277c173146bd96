// 🏠 Shelter - ordered collection of sheltered animals
//
// Insertion order is preserved. No dedup, no validation on intake.
// The shelter only uses the ShelterAnimal contract; it never asks which
// species it is holding except when filtering by species on request.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::ShelterConfig;
use crate::entities::{Animal, ShelterAnimal, Species};

// ============================================================================
// SHELTER REPORT
// ============================================================================

/// Point-in-time summary of the shelter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShelterReport {
    pub shelter_name: String,
    pub total: usize,
    pub available: usize,
    pub adopted: usize,
    pub dogs: usize,
    pub cats: usize,
    /// Sum of adoption fees over animals still available
    pub available_fees: f64,
    pub listings: Vec<String>,
}

impl ShelterReport {
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize shelter report")
    }
}

// ============================================================================
// SHELTER
// ============================================================================

#[derive(Debug, Clone)]
pub struct Shelter {
    name: String,
    animals: Vec<Animal>,
}

impl Shelter {
    pub fn new() -> Self {
        Shelter::with_config(&ShelterConfig::default())
    }

    pub fn with_config(config: &ShelterConfig) -> Self {
        Shelter {
            name: config.shelter_name.clone(),
            animals: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Append an animal. Duplicates are allowed.
    pub fn add(&mut self, animal: impl Into<Animal>) {
        let animal = animal.into();
        debug!(
            name = %animal.name(),
            species = animal.species().as_str(),
            position = self.animals.len(),
            "animal admitted"
        );
        self.animals.push(animal);
    }

    /// All animals in insertion order
    pub fn all(&self) -> &[Animal] {
        &self.animals
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Animal> {
        self.animals.iter()
    }

    pub fn len(&self) -> usize {
        self.animals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.animals.is_empty()
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Animal> {
        self.animals.get_mut(index)
    }

    /// First animal whose name matches, ignoring case
    pub fn find_by_name(&self, name: &str) -> Option<&Animal> {
        self.animals
            .iter()
            .find(|animal| animal.name().eq_ignore_ascii_case(name))
    }

    pub fn find_by_name_mut(&mut self, name: &str) -> Option<&mut Animal> {
        self.animals
            .iter_mut()
            .find(|animal| animal.name().eq_ignore_ascii_case(name))
    }

    pub fn available(&self) -> Vec<&Animal> {
        self.animals
            .iter()
            .filter(|animal| !animal.record().is_adopted())
            .collect()
    }

    pub fn adopted(&self) -> Vec<&Animal> {
        self.animals
            .iter()
            .filter(|animal| animal.record().is_adopted())
            .collect()
    }

    pub fn by_species(&self, species: Species) -> Vec<&Animal> {
        self.animals
            .iter()
            .filter(|animal| animal.species() == species)
            .collect()
    }

    /// Each animal's own profile, in insertion order
    pub fn all_profiles(&self) -> Vec<String> {
        self.animals.iter().map(|animal| animal.full_profile()).collect()
    }

    /// Print every animal's own profile, in insertion order
    pub fn display_all_profiles(&self) {
        for animal in &self.animals {
            animal.display_full_profile();
            println!();
        }
    }

    pub fn perform_daily_care_all(&self) {
        for animal in &self.animals {
            animal.perform_daily_care();
            println!();
        }
    }

    pub fn adoption_listings(&self) -> Vec<String> {
        self.animals
            .iter()
            .map(|animal| animal.adoption_listing())
            .collect()
    }

    pub fn report(&self) -> ShelterReport {
        let available = self.available();

        ShelterReport {
            shelter_name: self.name.clone(),
            total: self.animals.len(),
            available: available.len(),
            adopted: self.animals.len() - available.len(),
            dogs: self.by_species(Species::Dog).len(),
            cats: self.by_species(Species::Cat).len(),
            available_fees: available.iter().map(|animal| animal.adoption_fee()).sum(),
            listings: self.adoption_listings(),
        }
    }
}

impl Default for Shelter {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a Shelter {
    type Item = &'a Animal;
    type IntoIter = std::slice::Iter<'a, Animal>;

    fn into_iter(self) -> Self::IntoIter {
        self.animals.iter()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Cat, CatTraits, Dog, DogTraits};

    fn sample_shelter() -> Shelter {
        let mut shelter = Shelter::new();
        shelter.add(Dog::with_traits(
            "Buddy",
            3,
            "Labrador",
            "2025-07-01",
            DogTraits {
                trained: true,
                temperament: "Playful".to_string(),
                ..DogTraits::default()
            },
        ));
        shelter.add(Cat::with_traits(
            "Whiskers",
            2,
            "Siamese",
            "2025-07-15",
            CatTraits::default(),
        ));
        shelter
    }

    #[test]
    fn test_new_shelter_is_empty() {
        let shelter = Shelter::new();
        assert!(shelter.is_empty());
        assert_eq!(shelter.len(), 0);
        assert_eq!(shelter.name(), "Digital Pet Shelter");
        assert!(shelter.all_profiles().is_empty());
    }

    #[test]
    fn test_with_config_names_shelter() {
        let config = ShelterConfig {
            shelter_name: "Happy Tails".to_string(),
            ..ShelterConfig::default()
        };
        assert_eq!(Shelter::with_config(&config).name(), "Happy Tails");
    }

    #[test]
    fn test_all_preserves_insertion_order() {
        let shelter = sample_shelter();
        let names: Vec<&str> = shelter.all().iter().map(|a| a.name()).collect();

        assert_eq!(names, vec!["Buddy", "Whiskers"]);
    }

    #[test]
    fn test_profiles_visit_each_animal_with_its_own_layout() {
        let shelter = sample_shelter();
        let profiles = shelter.all_profiles();

        assert_eq!(profiles.len(), 2);
        assert!(profiles[0].starts_with("🐕 === Dog Profile === 🐕\nName: Buddy"));
        assert!(profiles[1].starts_with("🐈 === Cat Profile === 🐈\nName: Whiskers"));

        // Same as asking each animal directly
        assert_eq!(profiles[0], shelter.all()[0].full_profile());
        assert_eq!(profiles[1], shelter.all()[1].full_profile());
    }

    #[test]
    fn test_display_all_profiles_runs_for_mixed_species() {
        let mut shelter = sample_shelter();
        shelter.add(Dog::new("Rex", 11, "Beagle", "2025-06-01"));

        shelter.display_all_profiles();
        shelter.perform_daily_care_all();

        assert_eq!(shelter.len(), 3);
        assert!(shelter.all_profiles()[2].starts_with("🐕 === Dog Profile === 🐕\nName: Rex"));
    }

    #[test]
    fn test_duplicates_allowed() {
        let mut shelter = Shelter::new();
        let dog = Dog::new("Rex", 4, "Beagle", "2025-06-01");

        shelter.add(dog.clone());
        shelter.add(dog);

        assert_eq!(shelter.len(), 2);
        assert_eq!(shelter.all()[0].record().id(), shelter.all()[1].record().id());
    }

    #[test]
    fn test_mutation_through_record_operations() {
        let mut shelter = sample_shelter();

        if let Some(whiskers) = shelter.find_by_name_mut("whiskers") {
            whiskers.record_mut().adopt();
        }

        assert_eq!(shelter.available().len(), 1);
        assert_eq!(shelter.adopted().len(), 1);
        assert_eq!(shelter.adopted()[0].name(), "Whiskers");

        if let Some(buddy) = shelter.get_mut(0).and_then(Animal::as_dog_mut) {
            buddy.set_trained(false);
        }
        assert!(!shelter.all()[0].as_dog().unwrap().is_trained());
    }

    #[test]
    fn test_find_and_filter() {
        let shelter = sample_shelter();

        assert!(shelter.find_by_name("BUDDY").is_some());
        assert!(shelter.find_by_name("Rex").is_none());

        assert_eq!(shelter.by_species(Species::Dog).len(), 1);
        assert_eq!(shelter.by_species(Species::Cat).len(), 1);
    }

    #[test]
    fn test_iteration_matches_all() {
        let shelter = sample_shelter();

        let via_iter: Vec<&str> = shelter.iter().map(|a| a.name()).collect();
        let via_ref: Vec<&str> = (&shelter).into_iter().map(|a| a.name()).collect();
        assert_eq!(via_iter, via_ref);
    }

    #[test]
    fn test_report() {
        let mut shelter = sample_shelter();
        if let Some(buddy) = shelter.find_by_name_mut("Buddy") {
            buddy.record_mut().adopt();
        }

        let report = shelter.report();
        assert_eq!(report.total, 2);
        assert_eq!(report.available, 1);
        assert_eq!(report.adopted, 1);
        assert_eq!(report.dogs, 1);
        assert_eq!(report.cats, 1);
        // Whiskers: 50 + 50 + 10 + 10
        assert_eq!(report.available_fees, 120.0);
        assert!(report.listings[0].contains("ADOPTED"));

        let json = report.to_json().unwrap();
        assert!(json.contains("\"shelter_name\": \"Digital Pet Shelter\""));
    }
}
