// 🐈 Cat - ShelterAnimal with indoor and household flags

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::record::{AnimalRecord, StatusChange};
use super::species::{ShelterAnimal, Species};
use crate::validation::{flag_label, format_fee, join_clauses, AgeBand};

// ============================================================================
// CAT TRAITS
// ============================================================================

/// Cat-specific state. Defaults describe a calm indoor cat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatTraits {
    pub indoor: bool,
    pub temperament: String,
    pub good_with_kids: bool,
    pub good_with_other_cats: bool,
    #[serde(default = "default_lives")]
    pub lives_remaining: u8,
}

/// Every cat starts with nine
pub const STARTING_LIVES: u8 = 9;

fn default_lives() -> u8 {
    STARTING_LIVES
}

impl Default for CatTraits {
    fn default() -> Self {
        CatTraits {
            indoor: true,
            temperament: "Calm".to_string(),
            good_with_kids: true,
            good_with_other_cats: true,
            lives_remaining: STARTING_LIVES,
        }
    }
}

// ============================================================================
// CAT ENTITY
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cat {
    record: AnimalRecord,
    traits: CatTraits,
}

impl Cat {
    pub fn new(name: &str, age: i32, breed: &str, arrival_date: &str) -> Self {
        Cat::with_traits(name, age, breed, arrival_date, CatTraits::default())
    }

    pub fn with_traits(
        name: &str,
        age: i32,
        breed: &str,
        arrival_date: &str,
        traits: CatTraits,
    ) -> Self {
        Cat {
            record: AnimalRecord::new(name, age, breed, arrival_date),
            traits,
        }
    }

    pub fn traits(&self) -> &CatTraits {
        &self.traits
    }

    pub fn is_indoor(&self) -> bool {
        self.traits.indoor
    }

    pub fn set_indoor(&mut self, indoor: bool) {
        self.traits.indoor = indoor;
        if indoor {
            info!("{} is now an indoor cat.", self.record.name());
        } else {
            info!("{} is now allowed outdoors.", self.record.name());
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

    pub fn is_good_with_other_cats(&self) -> bool {
        self.traits.good_with_other_cats
    }

    pub fn set_good_with_other_cats(&mut self, good_with_other_cats: bool) {
        self.traits.good_with_other_cats = good_with_other_cats;
    }

    // ------------------------------------------------------------------------
    // Cat-only behaviors
    // ------------------------------------------------------------------------

    pub fn purr(&self) -> String {
        format!("{} purrs softly. 😻", self.record.name())
    }

    pub fn scratch(&self) -> String {
        if self.traits.indoor {
            format!("{} is scratching the post! 🐈", self.record.name())
        } else {
            format!("{} is scratching a tree outside. 🌳", self.record.name())
        }
    }

    pub fn nap(&self) -> String {
        format!("{} is taking a cozy nap. 😴", self.record.name())
    }

    pub fn play(&self) -> String {
        format!("{} is playing with a toy! 🧶", self.record.name())
    }

    pub fn climb(&self) -> String {
        format!("{} climbs up high with amazing agility!", self.record.name())
    }

    pub fn hunt(&self) -> String {
        if self.traits.indoor {
            format!("{} stalks a toy mouse around the house.", self.record.name())
        } else {
            format!("{} hunts for small creatures in the garden.", self.record.name())
        }
    }

    pub fn groom(&self) -> String {
        format!("{} is meticulously grooming its fur.", self.record.name())
    }

    pub fn lives_remaining(&self) -> u8 {
        self.traits.lives_remaining
    }

    /// Lose one life. The last life is never lost.
    pub fn lose_life(&mut self) -> StatusChange {
        if self.traits.lives_remaining > 1 {
            self.traits.lives_remaining -= 1;
            info!(
                "{} lost a life but still has {} lives remaining!",
                self.record.name(),
                self.traits.lives_remaining
            );
            StatusChange::Changed
        } else {
            warn!(
                "{} needs to be extra careful - only 1 life left!",
                self.record.name()
            );
            StatusChange::Unchanged
        }
    }

    /// Household fit in `0..=100`
    pub fn compatibility_score(
        &self,
        has_kids: bool,
        has_other_cats: bool,
        wants_indoor_cat: bool,
    ) -> u8 {
        let mut score: i32 = 100;

        if has_kids && !self.traits.good_with_kids {
            score -= 40;
        }
        if has_other_cats && !self.traits.good_with_other_cats {
            score -= 30;
        }
        if wants_indoor_cat && !self.traits.indoor {
            score -= 20;
        }

        score.clamp(0, 100) as u8
    }
}

impl ShelterAnimal for Cat {
    fn record(&self) -> &AnimalRecord {
        &self.record
    }

    fn record_mut(&mut self) -> &mut AnimalRecord {
        &mut self.record
    }

    fn species(&self) -> Species {
        Species::Cat
    }

    fn make_sound(&self) -> &'static str {
        "Meow!"
    }

    fn care_instructions(&self) -> String {
        join_clauses(
            "Regular grooming, clean litter box",
            [
                (!self.traits.indoor).then_some("monitor outdoor activity"),
                (!self.traits.good_with_kids)
                    .then_some("requires adult supervision around children"),
                (!self.traits.good_with_other_cats)
                    .then_some("should be the only cat in household"),
            ],
        )
    }

    fn exercise_needs(&self) -> String {
        let qualifier = match AgeBand::classify(self.record.age(), 2, 10) {
            AgeBand::Juvenile => "kitten - short, frequent sessions",
            AgeBand::Adult => "adult - daily play recommended",
            AgeBand::Senior => "senior - gentle play",
        };
        format!("Interactive play and climbing ({})", qualifier)
    }

    fn dietary_needs(&self) -> String {
        let formula = match AgeBand::classify(self.record.age(), 1, 8) {
            AgeBand::Juvenile => "kitten formula",
            AgeBand::Adult => "adult formula",
            AgeBand::Senior => "senior formula",
        };
        format!(
            "High-quality cat food ({}), fresh water always available",
            formula
        )
    }

    fn adoption_fee(&self) -> f64 {
        let mut fee = self.record.base_adoption_fee();
        if self.traits.indoor {
            fee += 10.0;
        }
        if self.traits.good_with_kids {
            fee += 10.0;
        }
        fee
    }

    fn is_suitable_for_children(&self) -> bool {
        self.traits.good_with_kids && (1..=15).contains(&self.record.age())
    }

    fn full_profile(&self) -> String {
        [
            "🐈 === Cat Profile === 🐈".to_string(),
            self.record.basic_info(),
            format!("Temperament: {}", self.traits.temperament),
            format!(
                "Indoor Cat: {}",
                flag_label(self.traits.indoor, "Yes 🏠", "No 🌍")
            ),
            format!(
                "Good with Kids: {}",
                flag_label(self.traits.good_with_kids, "Yes 👍", "No 👎")
            ),
            format!(
                "Good with Other Cats: {}",
                flag_label(self.traits.good_with_other_cats, "Yes 🐈", "No 😿")
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
        [
            format!("🐈 Daily care routine for {}:", name),
            format!("  - Morning feeding: {}", self.dietary_needs()),
            "  - Litter box cleaning".to_string(),
            format!("  - Playtime: {}", self.exercise_needs()),
            self.nap(),
            self.purr(),
            "  - Grooming and health check".to_string(),
            "  - Evening feeding".to_string(),
            self.play(),
            format!("  ✅ Daily care completed for {}", name),
        ]
        .join("\n")
    }
}

// ============================================================================
// TESTS
// ============================================================================
