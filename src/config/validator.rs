use std::collections::HashMap;
use thiserror::Error;

use crate::config::{ServerSettings, Settings};
use crate::domain::FormDefinition;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },

    #[error("Duplicate entry: {0}")]
    Duplicate(String),
}

pub struct ConfigValidator;

impl ConfigValidator {
    pub fn validate(settings: &Settings) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(e) = Self::validate_server(&settings.server) {
            errors.extend(e);
        }

        if let Err(e) = Self::validate_forms(&settings.forms) {
            errors.extend(e);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn validate_server(server: &ServerSettings) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if server.host.is_empty() {
            errors.push(ValidationError::MissingField("server.host".to_string()));
        }

        if server.port == 0 {
            errors.push(ValidationError::InvalidValue {
                field: "server.port".to_string(),
                reason: "Port must be greater than 0".to_string(),
            });
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Form names and field names must be unique. A radio, checkbox or select
    /// field without options is allowed (it renders an empty control list)
    /// but logged.
    fn validate_forms(forms: &[FormDefinition]) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();
        let mut seen_forms = HashMap::new();

        for (idx, form) in forms.iter().enumerate() {
            if let Some(prev_idx) = seen_forms.insert(&form.name, idx) {
                errors.push(ValidationError::Duplicate(format!(
                    "Form name '{}' appears at indices {} and {}",
                    form.name, prev_idx, idx
                )));
            }

            if form.name.is_empty() {
                errors.push(ValidationError::MissingField(format!("forms[{}].name", idx)));
            }

            let mut seen_fields = HashMap::new();
            for (field_idx, field) in form.fields.iter().enumerate() {
                let path = format!("forms[{}].fields[{}]", idx, field_idx);

                if field.field_name.is_empty() {
                    errors.push(ValidationError::MissingField(format!("{}.fieldName", path)));
                } else if let Some(prev_idx) = seen_fields.insert(&field.field_name, field_idx) {
                    errors.push(ValidationError::Duplicate(format!(
                        "Field name '{}' in form '{}' appears at indices {} and {}",
                        field.field_name, form.name, prev_idx, field_idx
                    )));
                }

                if field.field_type.uses_options() && field.options.is_empty() {
                    tracing::warn!(
                        "Field '{}' in form '{}' has no options and will render no choices",
                        field.field_name,
                        form.name
                    );
                }

                let mut seen_options = HashMap::new();
                for (opt_idx, option) in field.options.iter().enumerate() {
                    if let Some(prev_idx) = seen_options.insert(option, opt_idx) {
                        errors.push(ValidationError::InvalidValue {
                            field: format!("{}.options", path),
                            reason: format!(
                                "Option '{}' appears at indices {} and {}",
                                option, prev_idx, opt_idx
                            ),
                        });
                    }
                }
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
