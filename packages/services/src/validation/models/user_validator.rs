use models::users;
use sea_orm::ActiveValue;
use crate::validation::{
    active_model_validator::{push_error, ActiveModelValidator, ValidationError},
    field_validators::FieldValidator,
};

impl ActiveModelValidator for users::ActiveModel {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut error: Option<ValidationError> = None;

        if let ActiveValue::Set(ref email) = self.email {
            if !FieldValidator::is_email(email) {
                error = push_error(error, ValidationError::new("email", "Email format is invalid"));
            }
        }

        if let ActiveValue::Set(Some(ref name)) = self.name {
            if name.trim().is_empty() {
                error = push_error(error, ValidationError::new("name", "Name cannot be empty"));
            }
        }

        // Only hashes are ever persisted.
        if let ActiveValue::Set(ref password) = self.password {
            if !password.starts_with("$argon2") {
                error = push_error(
                    error,
                    ValidationError::new("password", "Password must be stored as an argon2 hash"),
                );
            }
        }

        match error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}
