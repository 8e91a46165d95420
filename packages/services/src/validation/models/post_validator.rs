use models::posts;
use sea_orm::ActiveValue;
use crate::validation::active_model_validator::{push_error, ActiveModelValidator, ValidationError};

impl ActiveModelValidator for posts::ActiveModel {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut error: Option<ValidationError> = None;

        if let ActiveValue::Set(ref title) = self.title {
            if title.trim().is_empty() {
                error = push_error(error, ValidationError::new("title", "Title cannot be empty"));
            }
        }

        if let ActiveValue::Set(ref content) = self.content {
            if content.trim().is_empty() {
                error = push_error(error, ValidationError::new("content", "Content cannot be empty"));
            }
        }

        match error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}
