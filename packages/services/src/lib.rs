pub mod authentication;
pub mod authorization;
pub mod validation;

#[cfg(test)]
pub mod test_helpers;

pub use authentication::{
    generate_token, get_user, hash_password, verify_password, AuthConfig, AuthError,
    AuthenticationError, Token,
};
pub use authorization::{can_user_mutate_post, PostAccessError};
pub use validation::{
    validate_password, ActiveModelValidator, FieldValidator, InputValidator, ValidationError,
    ValidationErrorsExt,
};
