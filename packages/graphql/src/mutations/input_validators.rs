use async_graphql::InputObject;
use services::validation::input_validator::{InputValidator, ValidationErrors, ValidationErrorsExt};
use services::validation::field_validators::FieldValidator;

#[derive(InputObject, Clone)]
pub struct CredentialInput {
    pub email: String,
    pub password: String,
}

impl CredentialInput {
    /// The email as stored and looked up; surrounding whitespace is dropped.
    pub fn normalized_email(&self) -> &str {
        self.email.trim()
    }
}

/// Sign-in only checks presence; strength rules apply at signup.
impl InputValidator for CredentialInput {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        FieldValidator::validate_required_string(self.normalized_email(), "email", &mut errors);
        FieldValidator::validate_required_string(&self.password, "password", &mut errors);

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Arguments of `signup`, gathered so they validate as one unit.
pub struct SignUpInput {
    pub name: String,
    pub bio: String,
    pub credentials: CredentialInput,
}

impl InputValidator for SignUpInput {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        FieldValidator::validate_email(self.credentials.normalized_email(), &mut errors);
        FieldValidator::validate_password_field(&self.credentials.password, "password", &mut errors);
        FieldValidator::validate_name_and_bio(&self.name, &self.bio, &mut errors);

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[derive(InputObject, Default)]
pub struct PostInput {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl PostInput {
    fn provided(value: &Option<String>) -> bool {
        value.as_deref().is_some_and(|v| !v.trim().is_empty())
    }

    pub fn has_title(&self) -> bool {
        Self::provided(&self.title)
    }

    pub fn has_content(&self) -> bool {
        Self::provided(&self.content)
    }
}

/// Creation rules: both fields present and non-blank.
impl InputValidator for PostInput {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if !self.has_title() || !self.has_content() {
            errors.add_error(
                "input",
                "You must provide title and content to create a post".to_string(),
            );
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
