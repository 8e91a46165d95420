use std::fmt;

pub const MIN_PASSWORD_LENGTH: usize = 8;

const COMMON_PASSWORDS: [&str; 5] = [
    "Password1!",
    "Password123!",
    "Qwerty123!",
    "Admin123!",
    "Welcome1!",
];

/// Various types of password validation errors
#[derive(Debug, PartialEq, Eq)]
pub enum PasswordValidationError {
    /// Password is too short
    TooShort,
    /// Password is missing an uppercase letter
    MissingUppercase,
    /// Password is missing a lowercase letter
    MissingLowercase,
    /// Password is missing a digit
    MissingDigit,
    /// Password is missing a special character
    MissingSpecialChar,
    /// Password is a commonly used password
    CommonPassword,
}

impl fmt::Display for PasswordValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PasswordValidationError::TooShort =>
                write!(f, "Password must be at least {} characters long", MIN_PASSWORD_LENGTH),
            PasswordValidationError::MissingUppercase =>
                write!(f, "Password must contain at least one uppercase letter"),
            PasswordValidationError::MissingLowercase =>
                write!(f, "Password must contain at least one lowercase letter"),
            PasswordValidationError::MissingDigit =>
                write!(f, "Password must contain at least one digit"),
            PasswordValidationError::MissingSpecialChar =>
                write!(f, "Password must contain at least one special character"),
            PasswordValidationError::CommonPassword =>
                write!(f, "Password is too common and easily guessable"),
        }
    }
}

impl std::error::Error for PasswordValidationError {}

/// Checks a plaintext password against the signup strength rules.
///
/// Rules are evaluated in order and the first failing one is reported.
pub fn validate_password(password: &str) -> Result<(), PasswordValidationError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(PasswordValidationError::TooShort);
    }

    if !password.chars().any(|c| c.is_uppercase()) {
        return Err(PasswordValidationError::MissingUppercase);
    }

    if !password.chars().any(|c| c.is_lowercase()) {
        return Err(PasswordValidationError::MissingLowercase);
    }

    if !password.chars().any(|c| c.is_numeric()) {
        return Err(PasswordValidationError::MissingDigit);
    }

    if password.chars().all(|c| c.is_alphanumeric()) {
        return Err(PasswordValidationError::MissingSpecialChar);
    }

    if COMMON_PASSWORDS.contains(&password) {
        return Err(PasswordValidationError::CommonPassword);
    }

    Ok(())
}
