use async_graphql::SimpleObject;

use crate::errors::UserError;
use crate::types::post::Post;

#[derive(SimpleObject, Debug)]
pub struct PostPayload {
    pub user_errors: Vec<UserError>,
    pub post: Option<Post>,
}

impl PostPayload {
    pub fn success(post: impl Into<Post>) -> Self {
        PostPayload {
            user_errors: Vec::new(),
            post: Some(post.into()),
        }
    }

    pub fn failure(error: impl Into<UserError>) -> Self {
        PostPayload {
            user_errors: vec![error.into()],
            post: None,
        }
    }
}

#[derive(SimpleObject, Debug)]
pub struct AuthPayload {
    pub user_errors: Vec<UserError>,
    pub token: Option<String>,
}

impl AuthPayload {
    pub fn success(token: String) -> Self {
        AuthPayload {
            user_errors: Vec::new(),
            token: Some(token),
        }
    }

    pub fn failure(error: impl Into<UserError>) -> Self {
        Self::failures(vec![error.into()])
    }

    pub fn failures(user_errors: Vec<UserError>) -> Self {
        AuthPayload {
            user_errors,
            token: None,
        }
    }
}
