// 🐾 Animal Record - the state every sheltered animal shares
//
// Identity: UUID assigned at intake (never changes)
// Values: name, age (validated), breed, arrival date, adoption status
//
// Writes that break a field rule are rejected: the old value stays,
// a warning is logged and the caller gets the ValidationError back.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::validation::{self, ValidationError, DEFAULT_NAME};

// ============================================================================
// STATUS CHANGE
// ============================================================================

/// Result of an adopt / return transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusChange {
    /// The record moved to the requested state
    Changed,
    /// The record was already in the requested state
    Unchanged,
}

impl StatusChange {
    pub fn is_changed(&self) -> bool {
        matches!(self, StatusChange::Changed)
    }
}

// ============================================================================
// ANIMAL RECORD
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "StoredRecord")]
pub struct AnimalRecord {
    /// Stable identity (UUID) assigned at intake
    id: String,

    name: String,
    age: u32,
    breed: String,

    /// Opaque token as given at intake, never parsed
    arrival_date: String,

    adopted: bool,

    /// When this record entered the system
    recorded_at: DateTime<Utc>,
}

/// Wire shape of a record before the name rule is applied
#[derive(Deserialize)]
struct StoredRecord {
    id: String,
    name: String,
    age: u32,
    breed: String,
    arrival_date: String,
    adopted: bool,
    recorded_at: DateTime<Utc>,
}

impl From<StoredRecord> for AnimalRecord {
    fn from(stored: StoredRecord) -> Self {
        let name = match validation::validate_name(&stored.name) {
            Ok(()) => stored.name,
            Err(err) => {
                warn!(
                    %err,
                    id = %stored.id,
                    fallback = DEFAULT_NAME,
                    "invalid name in stored record"
                );
                DEFAULT_NAME.to_string()
            }
        };

        AnimalRecord {
            id: stored.id,
            name,
            age: stored.age,
            breed: stored.breed,
            arrival_date: stored.arrival_date,
            adopted: stored.adopted,
            recorded_at: stored.recorded_at,
        }
    }
}

impl AnimalRecord {
    /// Create a new record. Invalid name or age fall back to a safe default.
    pub fn new(name: &str, age: i32, breed: &str, arrival_date: &str) -> Self {
        let name = match validation::validate_name(name) {
            Ok(()) => name.to_string(),
            Err(err) => {
                warn!(%err, fallback = DEFAULT_NAME, "invalid name at intake");
                DEFAULT_NAME.to_string()
            }
        };

        let age = validation::validate_age(age).unwrap_or_else(|err| {
            warn!(%err, %name, fallback = 0, "invalid age at intake");
            0
        });

        AnimalRecord {
            id: uuid::Uuid::new_v4().to_string(),
            name,
            age,
            breed: breed.to_string(),
            arrival_date: arrival_date.to_string(),
            adopted: false,
            recorded_at: Utc::now(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn breed(&self) -> &str {
        &self.breed
    }

    pub fn arrival_date(&self) -> &str {
        &self.arrival_date
    }

    pub fn is_adopted(&self) -> bool {
        self.adopted
    }

    pub fn recorded_at(&self) -> DateTime<Utc> {
        self.recorded_at
    }

    pub fn set_name(&mut self, name: &str) -> Result<(), ValidationError> {
        if let Err(err) = validation::validate_name(name) {
            warn!(%err, current = %self.name, "name change rejected");
            return Err(err);
        }
        self.name = name.to_string();
        Ok(())
    }

    pub fn set_age(&mut self, age: i32) -> Result<(), ValidationError> {
        match validation::validate_age(age) {
            Ok(age) => {
                self.age = age;
                Ok(())
            }
            Err(err) => {
                warn!(%err, name = %self.name, current = self.age, "age change rejected");
                Err(err)
            }
        }
    }

    pub fn have_birthday(&mut self) {
        self.age = self.age.saturating_add(1);
        info!(name = %self.name, age = self.age, "🎂 happy birthday");
    }

    /// available → adopted. No-op (with a notice) if already adopted.
    pub fn adopt(&mut self) -> StatusChange {
        if self.adopted {
            info!("{} has already been adopted.", self.name);
            return StatusChange::Unchanged;
        }
        self.adopted = true;
        info!("🎉 {} has been adopted! Congratulations!", self.name);
        StatusChange::Changed
    }

    /// adopted → available. No-op (with a notice) if already in the shelter.
    pub fn return_to_shelter(&mut self) -> StatusChange {
        if !self.adopted {
            info!("{} is already in the shelter.", self.name);
            return StatusChange::Unchanged;
        }
        self.adopted = false;
        info!("😢 {} has been returned to the shelter.", self.name);
        StatusChange::Changed
    }

    /// Shared fee banding. Variants add their surcharges on top of this.
    pub fn base_adoption_fee(&self) -> f64 {
        let mut fee = 50.0;

        if self.age < 1 {
            fee += 100.0;
        } else if self.age < 3 {
            fee += 50.0;
        } else if self.age > 8 {
            fee -= 25.0;
        }

        f64::max(fee, 25.0)
    }

    /// Default child suitability: not too young, not too old
    pub fn base_suitable_for_children(&self) -> bool {
        (2..=10).contains(&self.age)
    }

    pub fn status_label(&self) -> &'static str {
        validation::flag_label(self.adopted, "Adopted ✅", "Available for adoption ❤️")
    }

    /// Name, age, breed, arrival date and status, one per line
    pub fn basic_info(&self) -> String {
        format!(
            "Name: {}\nAge: {} years old\nBreed: {}\nArrival Date: {}\nStatus: {}",
            self.name,
            self.age,
            self.breed,
            self.arrival_date,
            self.status_label()
        )
    }
}

// ============================================================================
// TESTS
// ============================================================================
