//! Common validation utilities.

use lazy_static::lazy_static;
use regex::Regex;
use validator::ValidationError;

lazy_static! {
    /// A safe SQL column identifier: letters, digits and underscores, not
    /// starting with a digit. Everything the generic store interpolates
    /// into SQL text must match this.
    static ref IDENTIFIER_RE: Regex = Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$")
        .expect("identifier regex is valid");
}

/// Returns true when `name` is usable as a column identifier.
pub fn is_identifier(name: &str) -> bool {
    IDENTIFIER_RE.is_match(name)
}

/// Validates that a quantity is within the allowed lead-request range.
pub fn validate_lead_quantity(quantity: i32) -> Result<(), ValidationError> {
    if (1..=100).contains(&quantity) {
        Ok(())
    } else {
        let mut err = ValidationError::new("quantity_range");
        err.message = Some("Quantity must be between 1 and 100".into());
        Err(err)
    }
}

/// Validates that a monetary amount is non-negative.
pub fn validate_amount(amount: f64) -> Result<(), ValidationError> {
    if amount >= 0.0 {
        Ok(())
    } else {
        let mut err = ValidationError::new("amount_range");
        err.message = Some("Amount must be non-negative".into());
        Err(err)
    }
}

/// Validates that a hex color is of the `#RRGGBB` form.
pub fn validate_hex_color(color: &str) -> Result<(), ValidationError> {
    let ok = color.len() == 7
        && color.starts_with('#')
        && color[1..].chars().all(|c| c.is_ascii_hexdigit());
    if ok {
        Ok(())
    } else {
        let mut err = ValidationError::new("hex_color");
        err.message = Some("Color must be in #RRGGBB form".into());
        Err(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_identifier_accepts_snake_case() {
        assert!(is_identifier("created_at"));
        assert!(is_identifier("assigned_to"));
        assert!(is_identifier("_private"));
        assert!(is_identifier("col2"));
    }

    #[test]
    fn test_is_identifier_rejects_injection_shapes() {
        assert!(!is_identifier(""));
        assert!(!is_identifier("2fast"));
        assert!(!is_identifier("name; DROP TABLE leads"));
        assert!(!is_identifier("name "));
        assert!(!is_identifier("na-me"));
        assert!(!is_identifier("\"quoted\""));
    }

    #[test]
    fn test_validate_lead_quantity() {
        assert!(validate_lead_quantity(1).is_ok());
        assert!(validate_lead_quantity(100).is_ok());
        assert!(validate_lead_quantity(0).is_err());
        assert!(validate_lead_quantity(101).is_err());
    }

    #[test]
    fn test_validate_amount() {
        assert!(validate_amount(0.0).is_ok());
        assert!(validate_amount(49.99).is_ok());
        assert!(validate_amount(-1.0).is_err());
    }

    #[test]
    fn test_validate_hex_color() {
        assert!(validate_hex_color("#8B5CF6").is_ok());
        assert!(validate_hex_color("#ec4899").is_ok());
        assert!(validate_hex_color("8B5CF6").is_err());
        assert!(validate_hex_color("#8B5CF").is_err());
        assert!(validate_hex_color("#8B5CZ6").is_err());
    }
}
