//! Declarative request-body validation.
//!
//! Each request type declares a schema: one [`Field`] per body field with a
//! required flag, a maximum length, and an optional allowed-value set. The
//! schema is checked before the application core is invoked, so handlers
//! only ever pass well-formed values downstream.

use depot_domain::device::MAX_FIELD_LEN;

/// The three lifecycle states accepted on the wire.
pub const DEVICE_STATES: &[&str] = &["available", "in_use", "inactive"];

/// Validation rules for a single request field.
pub struct Field {
    /// Field name as it appears in the JSON body.
    pub name: &'static str,
    /// Whether the field must be present.
    pub required: bool,
    /// Maximum length in characters (0 means unbounded).
    pub max_len: usize,
    /// Closed set of accepted values, if any.
    pub allowed: Option<&'static [&'static str]>,
}

impl Field {
    /// Check a field value against this rule, appending human-readable
    /// messages to `errors`.
    pub fn check(&self, value: Option<&str>, errors: &mut Vec<String>) {
        let Some(value) = value else {
            if self.required {
                errors.push(format!("{} is required", self.name));
            }
            return;
        };

        if value.is_empty() && self.required {
            errors.push(format!("{} is required", self.name));
            return;
        }

        if self.max_len > 0 && value.chars().count() > self.max_len {
            errors.push(format!(
                "{} must be at most {} characters",
                self.name, self.max_len
            ));
        }

        if let Some(allowed) = self.allowed {
            if !allowed.contains(&value) {
                errors.push(format!(
                    "{} must be one of: {}",
                    self.name,
                    allowed.join(", ")
                ));
            }
        }
    }
}

/// Schema for `POST /api/devices` bodies.
pub const CREATE_DEVICE: &[Field] = &[
    Field {
        name: "name",
        required: true,
        max_len: MAX_FIELD_LEN,
        allowed: None,
    },
    Field {
        name: "brand",
        required: true,
        max_len: MAX_FIELD_LEN,
        allowed: None,
    },
    Field {
        name: "state",
        required: true,
        max_len: 0,
        allowed: Some(DEVICE_STATES),
    },
];

/// Schema for `PATCH /api/devices/{id}` bodies — same rules, nothing
/// required.
pub const UPDATE_DEVICE: &[Field] = &[
    Field {
        name: "name",
        required: false,
        max_len: MAX_FIELD_LEN,
        allowed: None,
    },
    Field {
        name: "brand",
        required: false,
        max_len: MAX_FIELD_LEN,
        allowed: None,
    },
    Field {
        name: "state",
        required: false,
        max_len: 0,
        allowed: Some(DEVICE_STATES),
    },
];

/// Run a schema over the field values, in schema order.
///
/// # Errors
///
/// Returns every violated rule as a human-readable message.
pub fn run(schema: &[Field], values: &[Option<&str>]) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();
    for (field, value) in schema.iter().zip(values) {
        field.check(*value, &mut errors);
    }
    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_pass_valid_create_body() {
        let result = run(
            CREATE_DEVICE,
            &[Some("Pixel 8"), Some("acme"), Some("available")],
        );
        assert!(result.is_ok());
    }

    #[test]
    fn should_report_all_missing_required_fields() {
        let errors = run(CREATE_DEVICE, &[None, None, None]).unwrap_err();
        assert_eq!(
            errors,
            vec![
                "name is required".to_string(),
                "brand is required".to_string(),
                "state is required".to_string(),
            ]
        );
    }

    #[test]
    fn should_treat_empty_required_field_as_missing() {
        let errors = run(CREATE_DEVICE, &[Some(""), Some("acme"), Some("in_use")]).unwrap_err();
        assert_eq!(errors, vec!["name is required".to_string()]);
    }

    #[test]
    fn should_reject_unknown_state_value() {
        let errors = run(
            CREATE_DEVICE,
            &[Some("Pixel 8"), Some("acme"), Some("broken")],
        )
        .unwrap_err();
        assert_eq!(
            errors,
            vec!["state must be one of: available, in_use, inactive".to_string()]
        );
    }

    #[test]
    fn should_reject_overlong_name() {
        let long = "x".repeat(MAX_FIELD_LEN + 1);
        let errors = run(
            CREATE_DEVICE,
            &[Some(long.as_str()), Some("acme"), Some("available")],
        )
        .unwrap_err();
        assert_eq!(errors, vec!["name must be at most 255 characters".to_string()]);
    }

    #[test]
    fn should_allow_empty_update_body() {
        let result = run(UPDATE_DEVICE, &[None, None, None]);
        assert!(result.is_ok());
    }

    #[test]
    fn should_still_check_allowed_values_on_update() {
        let errors = run(UPDATE_DEVICE, &[None, None, Some("broken")]).unwrap_err();
        assert_eq!(
            errors,
            vec!["state must be one of: available, in_use, inactive".to_string()]
        );
    }
}
