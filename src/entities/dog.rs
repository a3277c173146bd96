// 🐕 Dog - ShelterAnimal with training and household flags
//
// Fee: base banding + 25 if trained + 15 if good with kids
// Compatibility: 100 - 50 (kids) - 30 (other dogs) - 20 (wants trained), floor 0

use serde::{Deserialize, Serialize};
use tracing::info;

use super::record::{AnimalRecord, StatusChange};
use super::species::{ShelterAnimal, Species};
use crate::validation::{flag_label, format_fee, join_clauses, AgeBand};

/// Chance threshold: a session teaches the commands when the roll is above it
const TRAINING_FAIL_BELOW: f64 = 0.3;

// ============================================================================
// DOG TRAITS
// ============================================================================

/// Dog-specific state. Defaults are permissive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DogTraits {
    pub trained: bool,
    pub temperament: String,
    pub good_with_kids: bool,
    pub good_with_other_dogs: bool,
}

impl Default for DogTraits {
    fn default() -> Self {
        DogTraits {
            trained: false,
            temperament: "Friendly".to_string(),
            good_with_kids: true,
            good_with_other_dogs: true,
        }
    }
}

// ============================================================================
// TRAINING OUTCOME
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrainingOutcome {
    /// Untrained dog learned the commands this session
    Learned,
    /// Untrained dog needs more practice
    NeedsPractice,
    /// Dog was already trained, commands reinforced
    Reinforced,
}

// ============================================================================
// DOG ENTITY
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dog {
    record: AnimalRecord,
    traits: DogTraits,
}

impl Dog {
    /// New dog with default traits
    pub fn new(name: &str, age: i32, breed: &str, arrival_date: &str) -> Self {
        Dog::with_traits(name, age, breed, arrival_date, DogTraits::default())
    }

    pub fn with_traits(
        name: &str,
        age: i32,
        breed: &str,
        arrival_date: &str,
        traits: DogTraits,
    ) -> Self {
        Dog {
            record: AnimalRecord::new(name, age, breed, arrival_date),
            traits,
        }
    }

    pub fn traits(&self) -> &DogTraits {
        &self.traits
    }

    pub fn is_trained(&self) -> bool {
        self.traits.trained
    }

    pub fn set_trained(&mut self, trained: bool) {
        self.traits.trained = trained;
        if trained {
            info!("🎓 {} is now marked as trained!", self.record.name());
        } else {
            info!("📚 {} needs training.", self.record.name());
        }
    }

    pub fn temperament(&self) -> &str {
        &self.traits.temperament
    }

    pub fn set_temperament(&mut self, temperament: &str) {
        self.traits.temperament = temperament.to_string();
    }

    pub fn is_good_with_kids(&self) -> bool {
        self.traits.good_with_kids
    }

    pub fn set_good_with_kids(&mut self, good_with_kids: bool) {
        self.traits.good_with_kids = good_with_kids;
    }

    pub fn is_good_with_other_dogs(&self) -> bool {
        self.traits.good_with_other_dogs
    }

    pub fn set_good_with_other_dogs(&mut self, good_with_other_dogs: bool) {
        self.traits.good_with_other_dogs = good_with_other_dogs;
    }

    // ------------------------------------------------------------------------
    // Dog-only behaviors
    // ------------------------------------------------------------------------

    pub fn bark(&self) -> String {
        format!("{} barks: {}", self.record.name(), self.make_sound())
    }

    pub fn wag_tail(&self) -> String {
        format!("{} is wagging its tail happily! 🐕", self.record.name())
    }

    pub fn fetch(&self) -> String {
        format!("{} is playing fetch! 🎾", self.record.name())
    }

    pub fn sit(&self) -> String {
        if self.traits.trained {
            format!("{} sits obediently! Good dog! 🐕", self.record.name())
        } else {
            format!(
                "{} doesn't know the sit command yet. Training needed! 📚",
                self.record.name()
            )
        }
    }

    pub fn shake(&self) -> String {
        if self.traits.trained {
            format!("{} gives you a paw shake! 🐾", self.record.name())
        } else {
            format!(
                "{} tilts head in confusion. Training needed! 🤔",
                self.record.name()
            )
        }
    }

    pub fn stay(&self) -> String {
        if self.traits.trained {
            format!("{} stays in place like a good dog!", self.record.name())
        } else {
            format!("{} gets distracted and wanders off!", self.record.name())
        }
    }

    pub fn roll_over(&self) -> String {
        if self.traits.trained {
            format!("{} rolls over! What a smart dog!", self.record.name())
        } else {
            format!(
                "{} looks confused. Maybe some training treats would help!",
                self.record.name()
            )
        }
    }

    /// Mark the dog as trained. No-op (with a notice) if already trained.
    pub fn train(&mut self) -> StatusChange {
        if self.traits.trained {
            info!("{} is already well-trained!", self.record.name());
            return StatusChange::Unchanged;
        }
        info!("Training {}...", self.record.name());
        self.set_trained(true);
        StatusChange::Changed
    }

    /// Run a training session with a random roll in `[0, 1)`
    pub fn conduct_training_session(&mut self) -> TrainingOutcome {
        self.conduct_training_session_with_roll(rand::random::<f64>())
    }

    /// Run a training session; an untrained dog learns when `roll > 0.3`
    pub fn conduct_training_session_with_roll(&mut self, roll: f64) -> TrainingOutcome {
        let name = self.record.name().to_string();
        info!("🎓 Training session with {}:", name);

        if self.traits.trained {
            info!("  Reinforcing existing commands...");
            info!("  {}", self.sit());
            info!("  {}", self.shake());
            info!("  🌟 {} is a well-trained dog!", name);
            return TrainingOutcome::Reinforced;
        }

        info!("  Teaching basic commands...");
        info!("  Practicing sit, stay, and shake...");
        info!("  Using positive reinforcement with treats!");

        if roll > TRAINING_FAIL_BELOW {
            self.set_trained(true);
            info!("  🎉 Training successful! {} learned the commands!", name);
            TrainingOutcome::Learned
        } else {
            info!("  📚 {} needs more practice. Keep training!", name);
            TrainingOutcome::NeedsPractice
        }
    }

    /// Household fit in `0..=100`
    pub fn compatibility_score(
        &self,
        has_kids: bool,
        has_other_dogs: bool,
        wants_trained_dog: bool,
    ) -> u8 {
        let mut score: i32 = 100;

        if has_kids && !self.traits.good_with_kids {
            score -= 50;
        }
        if has_other_dogs && !self.traits.good_with_other_dogs {
            score -= 30;
        }
        if wants_trained_dog && !self.traits.trained {
            score -= 20;
        }

        score.clamp(0, 100) as u8
    }
}

impl ShelterAnimal for Dog {
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
        "Woof! Woof!"
    }

    fn care_instructions(&self) -> String {
        join_clauses(
            "Daily brushing, regular vet checkups",
            [
                (!self.traits.trained).then_some("needs obedience training"),
                (!self.traits.good_with_kids)
                    .then_some("requires adult supervision around children"),
                (!self.traits.good_with_other_dogs)
                    .then_some("should be the only dog in household"),
            ],
        )
    }

    fn exercise_needs(&self) -> String {
        let qualifier = match AgeBand::classify(self.record.age(), 2, 8) {
            AgeBand::Juvenile => "puppy - shorter, more frequent sessions",
            AgeBand::Adult => "adult - 1-2 hours daily",
            AgeBand::Senior => "senior - gentle exercise",
        };
        format!("Daily walks and playtime ({})", qualifier)
    }

    fn dietary_needs(&self) -> String {
        let formula = match AgeBand::classify(self.record.age(), 1, 7) {
            AgeBand::Juvenile => "puppy formula",
            AgeBand::Adult => "adult formula",
            AgeBand::Senior => "senior formula",
        };
        format!(
            "High-quality dog food ({}), fresh water always available",
            formula
        )
    }

    fn adoption_fee(&self) -> f64 {
        let mut fee = self.record.base_adoption_fee();

        if self.traits.trained {
            fee += 25.0;
        }
        if self.traits.good_with_kids {
            fee += 15.0;
        }

        fee
    }

    fn is_suitable_for_children(&self) -> bool {
        self.traits.good_with_kids && (1..=10).contains(&self.record.age())
    }

    fn full_profile(&self) -> String {
        [
            "🐕 === Dog Profile === 🐕".to_string(),
            self.record.basic_info(),
            format!("Temperament: {}", self.traits.temperament),
            format!(
                "Training Status: {}",
                flag_label(self.traits.trained, "Trained ✅", "Needs Training 📚")
            ),
            format!(
                "Good with Kids: {}",
                flag_label(self.traits.good_with_kids, "Yes ✅", "No ❌")
            ),
            format!(
                "Good with Other Dogs: {}",
                flag_label(self.traits.good_with_other_dogs, "Yes ✅", "No ❌")
            ),
            format!("Sound: {}", self.make_sound()),
            format!("Care Instructions: {}", self.care_instructions()),
            format!("Exercise Needs: {}", self.exercise_needs()),
            format!("Dietary Needs: {}", self.dietary_needs()),
            format!("Adoption Fee: {}", format_fee(self.adoption_fee())),
            "=======================".to_string(),
        ]
        .join("\n")
    }

    fn daily_care(&self) -> String {
        let name = self.record.name();
        let mut lines = vec![
            format!("🐕 Daily care routine for {}:", name),
            "  - Morning walk and bathroom break".to_string(),
            format!("  - Feeding: {}", self.dietary_needs()),
            format!("  - Playtime and exercise: {}", self.exercise_needs()),
        ];

        if self.traits.trained {
            lines.push("  - Training reinforcement: practicing commands".to_string());
            lines.push(self.sit());
            lines.push(self.shake());
        } else {
            lines.push("  - Basic training session".to_string());
        }

        lines.push("  - Grooming and health check".to_string());
        lines.push("  - Evening walk".to_string());
        lines.push(self.bark());
        lines.push(self.wag_tail());
        lines.push(format!("  ✅ Daily care completed for {}", name));
        lines.join("\n")
    }
}

// ============================================================================
// TESTS
// ============================================================================
