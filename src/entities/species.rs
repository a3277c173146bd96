// 🧬 Species contract - what every sheltered animal must answer
//
// Adding a species: implement ShelterAnimal for it and add a variant to
// `Animal`. The shelter only ever talks to this trait.

use serde::{Deserialize, Serialize};

use super::record::AnimalRecord;
use crate::validation::format_fee;

// ============================================================================
// SPECIES TAG
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Species {
    Dog,
    Cat,
}

impl Species {
    pub fn as_str(&self) -> &'static str {
        match self {
            Species::Dog => "Dog",
            Species::Cat => "Cat",
        }
    }
}

// ============================================================================
// CONTRACT
// ============================================================================

/// The abstract animal contract.
///
/// Required methods carry the species rules. Provided methods are built on
/// top of them; variants override `adoption_fee`, `is_suitable_for_children`,
/// `full_profile` and `daily_care` with their own versions.
pub trait ShelterAnimal {
    fn record(&self) -> &AnimalRecord;

    fn record_mut(&mut self) -> &mut AnimalRecord;

    fn species(&self) -> Species;

    /// Species vocalization
    fn make_sound(&self) -> &'static str;

    fn care_instructions(&self) -> String;

    fn exercise_needs(&self) -> String;

    fn dietary_needs(&self) -> String;

    fn adoption_fee(&self) -> f64 {
        self.record().base_adoption_fee()
    }

    fn is_suitable_for_children(&self) -> bool {
        self.record().base_suitable_for_children()
    }

    fn full_profile(&self) -> String {
        [
            "🐾 === Animal Profile === 🐾".to_string(),
            self.record().basic_info(),
            format!("Sound: {}", self.make_sound()),
            format!("Care Instructions: {}", self.care_instructions()),
            format!("Exercise Needs: {}", self.exercise_needs()),
            format!("Dietary Needs: {}", self.dietary_needs()),
            "========================".to_string(),
        ]
        .join("\n")
    }

    fn daily_care(&self) -> String {
        let name = self.record().name();
        [
            format!("🏥 Daily care for {}:", name),
            format!("  - Feeding: {}", self.dietary_needs()),
            format!("  - Exercise: {}", self.exercise_needs()),
            format!("  - Special care: {}", self.care_instructions()),
            format!("  - Health check: {} says {}", name, self.make_sound()),
            format!("  ✅ Daily care completed for {}", name),
        ]
        .join("\n")
    }

    /// One-line listing for adoption boards
    fn adoption_listing(&self) -> String {
        let record = self.record();
        let (status, footer) = if record.is_adopted() {
            ("ADOPTED", "")
        } else {
            ("AVAILABLE", "Contact shelter for more info!")
        };
        format!(
            "{} - {} year old {}. {} Adoption fee: {}. {}",
            record.name(),
            record.age(),
            record.breed(),
            status,
            format_fee(self.adoption_fee()),
            footer
        )
    }

    fn display_full_profile(&self) {
        println!("{}", self.full_profile());
    }

    fn perform_daily_care(&self) {
        println!("{}", self.daily_care());
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Minimal species that relies on every provided method
    struct Hamster {
        record: AnimalRecord,
    }

    impl ShelterAnimal for Hamster {
        fn record(&self) -> &AnimalRecord {
            &self.record
        }

        fn record_mut(&mut self) -> &mut AnimalRecord {
            &mut self.record
        }

        fn species(&self) -> Species {
            Species::Dog
        }

        fn make_sound(&self) -> &'static str {
            "Squeak!"
        }

        fn care_instructions(&self) -> String {
            "Clean cage weekly".to_string()
        }

        fn exercise_needs(&self) -> String {
            "Running wheel".to_string()
        }

        fn dietary_needs(&self) -> String {
            "Seed mix, fresh water always available".to_string()
        }
    }

    fn hamster(age: i32) -> Hamster {
        Hamster {
            record: AnimalRecord::new("Nibbles", age, "Syrian", "2025-08-01"),
        }
    }

    #[test]
    fn test_species_as_str() {
        assert_eq!(Species::Dog.as_str(), "Dog");
        assert_eq!(Species::Cat.as_str(), "Cat");
    }

    #[test]
    fn test_provided_fee_and_suitability_use_base_rules() {
        assert_eq!(hamster(0).adoption_fee(), 150.0);
        assert_eq!(hamster(9).adoption_fee(), 25.0);
        assert!(!hamster(1).is_suitable_for_children());
        assert!(hamster(2).is_suitable_for_children());
    }

    #[test]
    fn test_provided_profile_order() {
        let profile = hamster(1).full_profile();
        let lines: Vec<&str> = profile.lines().collect();

        assert_eq!(lines[0], "🐾 === Animal Profile === 🐾");
        assert_eq!(lines[1], "Name: Nibbles");
        assert!(lines.contains(&"Sound: Squeak!"));

        let sound = profile.find("Sound:").unwrap();
        let care = profile.find("Care Instructions:").unwrap();
        let exercise = profile.find("Exercise Needs:").unwrap();
        let diet = profile.find("Dietary Needs:").unwrap();
        assert!(sound < care && care < exercise && exercise < diet);
    }

    #[test]
    fn test_provided_daily_care() {
        let care = hamster(1).daily_care();

        assert!(care.starts_with("🏥 Daily care for Nibbles:"));
        assert!(care.contains("  - Health check: Nibbles says Squeak!"));
        assert!(care.ends_with("  ✅ Daily care completed for Nibbles"));
    }
}
