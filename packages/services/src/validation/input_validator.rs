use std::collections::BTreeMap;

/// Field name to messages; ordered so rendered messages are stable.
pub type ValidationErrors = BTreeMap<String, Vec<String>>;

pub trait InputValidator {
    fn validate(&self) -> Result<(), ValidationErrors>;

    fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

// Helper trait for combining validation errors
pub trait ValidationErrorsExt {
    fn add_error(&mut self, field: &str, message: String);
    fn messages(&self) -> Vec<String>;
}

impl ValidationErrorsExt for ValidationErrors {
    fn add_error(&mut self, field: &str, message: String) {
        self.entry(field.to_string())
            .or_default()
            .push(message);
    }

    fn messages(&self) -> Vec<String> {
        self.values().flatten().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_grouped_by_field() {
        let mut errors = ValidationErrors::new();
        errors.add_error("name", "third".to_string());
        errors.add_error("email", "first".to_string());
        errors.add_error("email", "second".to_string());

        assert_eq!(errors["email"], vec!["first", "second"]);
        assert_eq!(errors.messages(), vec!["first", "second", "third"]);
    }
}
