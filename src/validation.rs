// ✅ Validation & Formatting - shared by every animal variant
// Field rules live here so that construction and setters agree on them

use thiserror::Error;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A rejected write. State is never changed when one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        ValidationError {
            field,
            message: message.into(),
        }
    }
}

/// Fallback name used when construction receives an empty one
pub const DEFAULT_NAME: &str = "Unknown";

/// Names must contain at least one non-whitespace character
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::new("name", "Name cannot be empty"));
    }
    Ok(())
}

/// Ages are whole years, never negative
pub fn validate_age(age: i32) -> Result<u32, ValidationError> {
    u32::try_from(age)
        .map_err(|_| ValidationError::new("age", format!("Age cannot be negative, got {}", age)))
}

// ============================================================================
// AGE BANDS
// ============================================================================

/// Disjoint life stage used by care, exercise and diet text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeBand {
    Juvenile,
    Adult,
    Senior,
}

impl AgeBand {
    /// `age < juvenile_below` is juvenile, `age > senior_above` is senior.
    pub fn classify(age: u32, juvenile_below: u32, senior_above: u32) -> Self {
        if age < juvenile_below {
            AgeBand::Juvenile
        } else if age > senior_above {
            AgeBand::Senior
        } else {
            AgeBand::Adult
        }
    }
}

// ============================================================================
// FORMATTING
// ============================================================================

/// Dollar amount with two decimals, e.g. `$45.00`
pub fn format_fee(fee: f64) -> String {
    format!("${:.2}", fee)
}

/// Pick a label for a boolean flag
pub fn flag_label(flag: bool, yes: &'static str, no: &'static str) -> &'static str {
    if flag {
        yes
    } else {
        no
    }
}

/// Join a base phrase with optional clauses, comma separated, in order
pub fn join_clauses<'a>(base: &str, clauses: impl IntoIterator<Item = Option<&'a str>>) -> String {
    let mut text = String::from(base);
    for clause in clauses.into_iter().flatten() {
        text.push_str(", ");
        text.push_str(clause);
    }
    text
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name() {
        assert!(validate_name("Buddy").is_ok());
        assert!(validate_name("").is_err());
        assert!(validate_name("   ").is_err());

        let err = validate_name("").unwrap_err();
        assert_eq!(err.field, "name");
        assert_eq!(err.to_string(), "name: Name cannot be empty");
    }

    #[test]
    fn test_validate_age() {
        assert_eq!(validate_age(0), Ok(0));
        assert_eq!(validate_age(12), Ok(12));

        let err = validate_age(-1).unwrap_err();
        assert_eq!(err.field, "age");
        assert!(err.message.contains("-1"));
    }

    #[test]
    fn test_age_band_boundaries() {
        // Dog exercise bands: juvenile < 2, senior > 8
        assert_eq!(AgeBand::classify(0, 2, 8), AgeBand::Juvenile);
        assert_eq!(AgeBand::classify(1, 2, 8), AgeBand::Juvenile);
        assert_eq!(AgeBand::classify(2, 2, 8), AgeBand::Adult);
        assert_eq!(AgeBand::classify(8, 2, 8), AgeBand::Adult);
        assert_eq!(AgeBand::classify(9, 2, 8), AgeBand::Senior);
    }

    #[test]
    fn test_format_fee() {
        assert_eq!(format_fee(45.0), "$45.00");
        assert_eq!(format_fee(127.5), "$127.50");
    }

    #[test]
    fn test_join_clauses_keeps_order() {
        let text = join_clauses("Base", [Some("first"), None, Some("third")]);
        assert_eq!(text, "Base, first, third");

        assert_eq!(join_clauses("Base", [None, None]), "Base");
    }
}
