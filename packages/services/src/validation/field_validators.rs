use super::password::validate_password;
use super::input_validator::{ValidationErrors, ValidationErrorsExt};

pub struct FieldValidator;

impl FieldValidator {
    pub fn is_email(email: &str) -> bool {
        if email.is_empty() || email.chars().any(char::is_whitespace) {
            return false;
        }

        let mut parts = email.split('@');
        let (local, domain) = match (parts.next(), parts.next(), parts.next()) {
            (Some(local), Some(domain), None) => (local, domain),
            _ => return false,
        };

        if local.is_empty() || !domain.contains('.') {
            return false;
        }

        domain.split('.').all(|label| !label.is_empty())
    }

    pub fn validate_email(email: &str, errors: &mut ValidationErrors) {
        if !Self::is_email(email.trim()) {
            errors.add_error("email", "The email you entered is invalid".to_string());
        }
    }

    pub fn validate_password_field(password: &str, field_name: &str, errors: &mut ValidationErrors) {
        if password.is_empty() {
            errors.add_error(field_name, format!("{} cannot be empty", field_name));
            return;
        }

        if let Err(password_error) = validate_password(password) {
            errors.add_error(
                field_name,
                format!("The password you entered is not strong enough: {}", password_error),
            );
        }
    }

    pub fn validate_required_string(value: &str, field_name: &str, errors: &mut ValidationErrors) {
        if value.trim().is_empty() {
            errors.add_error(field_name, format!("{} cannot be empty", field_name));
        }
    }

    /// One message for both profile fields, whichever is blank.
    pub fn validate_name_and_bio(name: &str, bio: &str, errors: &mut ValidationErrors) {
        if name.trim().is_empty() || bio.trim().is_empty() {
            errors.add_error("profile", "Invalid name or bio".to_string());
        }
    }
}
