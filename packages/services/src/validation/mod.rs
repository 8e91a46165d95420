pub mod active_model_validator;
pub mod field_validators;
pub mod input_validator;
pub mod models;
pub mod password;

// Re-export common types and functions
pub use active_model_validator::{ActiveModelValidator, ValidationError};
pub use field_validators::FieldValidator;
pub use input_validator::{InputValidator, ValidationErrorsExt};
pub use password::validate_password;
