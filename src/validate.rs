//! Form Validator
//!
//! Field-level validation of a property draft. All rules are checked
//! independently; a draft is submittable iff no field has an error.

use crate::models::{PropertyDraft, PropertyPayload};

/// Per-field validation errors; `None` means the field is valid
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormErrors {
    pub address: Option<String>,
    pub price: Option<String>,
    pub size: Option<String>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.address.is_none() && self.price.is_none() && self.size.is_none()
    }

    #[cfg(test)]
    fn count(&self) -> usize {
        [&self.address, &self.price, &self.size]
            .iter()
            .filter(|e| e.is_some())
            .count()
    }
}

/// Parse a positive number from form text. Empty or non-numeric input is
/// rejected, never coerced to zero.
fn parse_positive(text: &str) -> Option<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite() && *n > 0.0)
}

/// Validate a draft, returning one error per offending field.
pub fn validate(draft: &PropertyDraft) -> FormErrors {
    let mut errors = FormErrors::default();
    if draft.address.trim().is_empty() {
        errors.address = Some("La dirección es requerida".to_string());
    }
    if parse_positive(&draft.price).is_none() {
        errors.price = Some("El precio debe ser mayor a 0".to_string());
    }
    if parse_positive(&draft.size).is_none() {
        errors.size = Some("El tamaño debe ser mayor a 0".to_string());
    }
    errors
}

impl PropertyDraft {
    /// Coerce a valid draft into a mutation payload; `None` when invalid.
    pub fn to_payload(&self) -> Option<PropertyPayload> {
        if !validate(self).is_empty() {
            return None;
        }
        let description = self.description.trim();
        Some(PropertyPayload {
            address: self.address.trim().to_string(),
            price: parse_positive(&self.price)?,
            size: parse_positive(&self.size)?,
            description: (!description.is_empty()).then(|| description.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(address: &str, price: &str, size: &str) -> PropertyDraft {
        PropertyDraft {
            address: address.to_string(),
            price: price.to_string(),
            size: size.to_string(),
            description: String::new(),
        }
    }

    #[test]
    fn blank_address_is_the_only_error() {
        let errors = validate(&draft("", "10", "5"));
        assert_eq!(errors.count(), 1);
        assert!(errors.address.is_some());
    }

    #[test]
    fn whitespace_address_is_rejected() {
        let errors = validate(&draft("   ", "10", "5"));
        assert!(errors.address.is_some());
    }

    #[test]
    fn zero_price_is_the_only_error() {
        let errors = validate(&draft("X", "0", "5"));
        assert_eq!(errors.count(), 1);
        assert!(errors.price.is_some());
    }

    #[test]
    fn negative_size_is_rejected() {
        let errors = validate(&draft("X", "10", "-3"));
        assert_eq!(errors.count(), 1);
        assert!(errors.size.is_some());
    }

    #[test]
    fn non_numeric_price_is_rejected_not_coerced() {
        let errors = validate(&draft("X", "abc", "5"));
        assert_eq!(errors.count(), 1);
        assert!(errors.price.is_some());
    }

    #[test]
    fn empty_numeric_fields_are_rejected() {
        let errors = validate(&draft("X", "", ""));
        assert_eq!(errors.count(), 2);
        assert!(errors.price.is_some());
        assert!(errors.size.is_some());
    }

    #[test]
    fn valid_draft_has_no_errors() {
        let errors = validate(&draft("X", "10", "10"));
        assert!(errors.is_empty());
    }

    #[test]
    fn all_rules_checked_independently() {
        let errors = validate(&draft("", "nope", "0"));
        assert_eq!(errors.count(), 3);
    }

    #[test]
    fn to_payload_trims_and_coerces() {
        let mut d = draft("  Calle 1  ", "120.50", "85");
        d.description = "  con patio  ".to_string();
        let payload = d.to_payload().unwrap();
        assert_eq!(payload.address, "Calle 1");
        assert_eq!(payload.price, 120.50);
        assert_eq!(payload.size, 85.0);
        assert_eq!(payload.description.as_deref(), Some("con patio"));
    }

    #[test]
    fn to_payload_none_for_invalid_draft() {
        assert!(draft("", "10", "5").to_payload().is_none());
    }

    #[test]
    fn empty_description_becomes_none() {
        let payload = draft("Calle 1", "1", "1").to_payload().unwrap();
        assert!(payload.description.is_none());
    }
}
