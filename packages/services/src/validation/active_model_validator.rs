use std::collections::BTreeMap;
use std::fmt;

/// A validation error that can be converted into a user-friendly message
#[derive(Debug)]
pub struct ValidationError {
    pub errors: BTreeMap<String, Vec<String>>,
}

impl ValidationError {
    /// Create a new validation error with a single field and message
    pub fn new(field: &str, message: &str) -> Self {
        let mut errors = BTreeMap::new();
        errors.insert(field.to_string(), vec![message.to_string()]);
        Self { errors }
    }

    /// Combine multiple validation errors into one
    pub fn combine(mut self, other: ValidationError) -> Self {
        for (field, messages) in other.errors {
            self.errors.entry(field).or_default().extend(messages);
        }
        self
    }

    /// Get a comma-separated list of all error messages
    pub fn to_string_list(&self) -> String {
        self.errors
            .values()
            .flatten()
            .cloned()
            .collect::<Vec<String>>()
            .join(", ")
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_string_list())
    }
}

impl std::error::Error for ValidationError {}

/// Trait for validating ActiveModel instances before they are written
pub trait ActiveModelValidator {
    fn validate(&self) -> Result<(), ValidationError>;

    fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

/// Folds an optional accumulated error with a new one.
pub(crate) fn push_error(acc: Option<ValidationError>, err: ValidationError) -> Option<ValidationError> {
    Some(match acc {
        Some(e) => e.combine(err),
        None => err,
    })
}
