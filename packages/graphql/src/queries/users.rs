use async_graphql::{Context, Object, Result};
use crate::types::user::User as UserType;
use crate::utilities::requires_auth::RequiresAuth;

#[derive(Default)]
pub struct UserQueries;

impl RequiresAuth for UserQueries {}

#[Object]
impl UserQueries {
    /// The user the request's token belongs to
    async fn me(&self, ctx: &Context<'_>) -> Result<Option<UserType>> {
        match self.require_authenticate_as_user(ctx).await {
            Ok(user) => Ok(user.map(UserType::from)),
            Err(e) => {
                tracing::error!(error = ?e.message, "me lookup failed");
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::test_helpers::*;

    #[tokio::test]
    async fn test_me_without_token_is_null() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_shared();

        let res = execute(&db, "{ me { id email } }", None).await;

        assert!(res.errors.is_empty(), "Errors: {:?}", res.errors);
        let data = res.data.into_json().unwrap();
        assert!(data["me"].is_null());
        assert!(transaction_log(db).is_empty());
    }

    #[tokio::test]
    async fn test_me_returns_token_owner() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![user_model(3, "writer@example.com")]])
            .into_shared();

        let res = execute(&db, "{ me { id email name } }", Some(token_for(3))).await;

        assert!(res.errors.is_empty(), "Errors: {:?}", res.errors);
        let data = res.data.into_json().unwrap();
        assert_eq!(data["me"]["id"], "3");
        assert_eq!(data["me"]["email"], "writer@example.com");
    }

    #[tokio::test]
    async fn test_me_with_garbage_token_is_null() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_shared();

        let res = execute(&db, "{ me { id } }", Some(raw_token("not.a.jwt"))).await;

        let data = res.data.into_json().unwrap();
        assert!(data["me"].is_null());
    }

    #[tokio::test]
    async fn test_me_for_deleted_user_is_null() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<models::users::Model>::new()])
            .into_shared();

        let res = execute(&db, "{ me { id } }", Some(token_for(9))).await;

        let data = res.data.into_json().unwrap();
        assert!(data["me"].is_null());
    }
}
