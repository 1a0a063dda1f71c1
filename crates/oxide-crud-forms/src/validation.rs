//! Posted value collection and required-field validation.

use std::collections::HashMap;

use crate::error::{FormError, Result};
use crate::field::FormField;

/// Trait for field validators.
pub trait Validator: Send + Sync {
    /// Checks a posted value.
    fn validate(&self, field: &FormField, value: &str) -> Result<()>;
}

/// Rejects empty values on fields marked required.
///
/// Whitespace counts as a value; only the empty string is missing.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequiredValidator;

impl Validator for RequiredValidator {
    fn validate(&self, field: &FormField, value: &str) -> Result<()> {
        if field.required && value.is_empty() {
            Err(FormError::MissingField {
                label: field.display_label().to_string(),
            })
        } else {
            Ok(())
        }
    }
}

/// Collects one posted value per named field. Absent inputs read as empty.
///
/// Fields without a name carry no data and are skipped.
pub fn collect_values<'a, F>(fields: &[FormField], lookup: F) -> HashMap<String, String>
where
    F: Fn(&str) -> Option<&'a str>,
{
    fields
        .iter()
        .filter(|field| !field.name.is_empty())
        .map(|field| {
            let value = lookup(&field.name).unwrap_or_default();
            (field.name.clone(), value.to_string())
        })
        .collect()
}

/// Checks required fields in declaration order and stops at the first miss.
pub fn validate_required(fields: &[FormField], values: &HashMap<String, String>) -> Result<()> {
    let validator = RequiredValidator;
    for field in fields.iter().filter(|field| !field.name.is_empty()) {
        let value = values.get(&field.name).map_or("", String::as_str);
        if let Err(err) = validator.validate(field, value) {
            tracing::warn!(field = %field.name, "required field missing");
            return Err(err);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person_fields() -> Vec<FormField> {
        vec![
            FormField::new("first_name", "First Name").required(),
            FormField::new("middle_name", "Middle Name"),
            FormField::new("last_name", "Last Name").required(),
            FormField::raw("<hr>"),
        ]
    }

    #[test]
    fn test_collect_values() {
        let posted: HashMap<&str, &str> = [("first_name", "Ada"), ("other", "x")].into();
        let values = collect_values(&person_fields(), |k| posted.get(k).copied());

        assert_eq!(values.len(), 3);
        assert_eq!(values["first_name"], "Ada");
        assert_eq!(values["middle_name"], "");
        assert!(!values.contains_key("other"));
    }

    #[test]
    fn test_first_missing_field_wins() {
        let values = HashMap::new();
        let err = validate_required(&person_fields(), &values).unwrap_err();
        assert_eq!(err.to_string(), "First Name is required field");
    }

    #[test]
    fn test_declaration_order() {
        let values: HashMap<String, String> =
            [("first_name".to_string(), "Ada".to_string())].into();
        let err = validate_required(&person_fields(), &values).unwrap_err();
        assert_eq!(
            err,
            FormError::MissingField {
                label: "Last Name".to_string()
            }
        );
    }

    #[test]
    fn test_whitespace_is_a_value() {
        let values: HashMap<String, String> = [
            ("first_name".to_string(), " ".to_string()),
            ("last_name".to_string(), "Lovelace".to_string()),
        ]
        .into();
        assert!(validate_required(&person_fields(), &values).is_ok());
    }

    #[test]
    fn test_label_falls_back_to_name() {
        let fields = vec![FormField::new("email", "").required()];
        let err = validate_required(&fields, &HashMap::new()).unwrap_err();
        assert_eq!(err.to_string(), "email is required field");
    }
}
