#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    Validation(String),
}

impl From<validator::ValidationErrors> for CoreError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields: Vec<String> = errors
            .field_errors()
            .into_iter()
            .map(|(field, errs)| {
                let reasons: Vec<String> = errs
                    .iter()
                    .map(|e| {
                        e.message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| e.code.to_string())
                    })
                    .collect();
                format!("{field}: {}", reasons.join(", "))
            })
            .collect();
        fields.sort();
        CoreError::Validation(fields.join("; "))
    }
}

#[cfg(test)]
mod tests {
    use validator::{ValidationError, ValidationErrors};

    use super::*;

    #[test]
    fn validation_errors_name_each_field() {
        let mut errors = ValidationErrors::new();
        errors.add(
            "gas_level",
            ValidationError::new("finite").with_message("must be a finite number".into()),
        );
        errors.add("gas_leak", ValidationError::new("range"));

        let CoreError::Validation(msg) = CoreError::from(errors);
        assert_eq!(msg, "gas_leak: range; gas_level: must be a finite number");
    }
}
