use chrono::Utc;
use data_access_objects::{ProfileDao, UserDao};
use models::{profiles, users::{self, Model}};
use sea_orm::*;
use services::validation::ActiveModelValidator;
use std::collections::HashMap;
use thiserror::Error;

pub struct UserRepository;

/// Everything signup collects; the password is already hashed.
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub bio: String,
}

#[derive(Debug, Error)]
pub enum CreateUserError {
    #[error("Email is already in use")]
    EmailTaken,
    #[error("{0}")]
    Invalid(String),
    #[error("Database error: {0}")]
    Db(#[from] DbErr),
}

impl UserRepository {
    /// Inserts the user and its profile in one transaction.
    pub async fn create_with_profile(
        db: &DatabaseConnection,
        new_user: NewUser,
    ) -> Result<(Model, profiles::Model), CreateUserError> {
        let now = Utc::now().naive_utc();
        let user = users::ActiveModel {
            name: ActiveValue::set(Some(new_user.name)),
            email: ActiveValue::set(new_user.email),
            password: ActiveValue::set(new_user.password_hash),
            created_at: ActiveValue::set(now),
            updated_at: ActiveValue::set(now),
            ..Default::default()
        };
        if let Err(e) = user.validate() {
            return Err(CreateUserError::Invalid(e.to_string()));
        }

        let txn = db.begin().await?;

        if let ActiveValue::Set(ref email) = user.email {
            if UserDao::find_by_email(&txn, email).await?.is_some() {
                txn.rollback().await?;
                return Err(CreateUserError::EmailTaken);
            }
        }

        let user = match UserDao::insert(&txn, user).await {
            Ok(user) => user,
            Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                txn.rollback().await?;
                return Err(CreateUserError::EmailTaken);
            }
            Err(e) => return Err(e.into()),
        };

        let profile = profiles::ActiveModel {
            bio: ActiveValue::set(new_user.bio),
            user_id: ActiveValue::set(user.id),
            created_at: ActiveValue::set(now),
            updated_at: ActiveValue::set(now),
            ..Default::default()
        };
        let profile = ProfileDao::insert(&txn, profile).await?;

        txn.commit().await?;
        Ok((user, profile))
    }

    pub async fn find_by_email(
        db: &DatabaseConnection,
        email: &str,
    ) -> Result<Option<Model>, DbErr> {
        UserDao::find_by_email(db, email).await
    }

    /// One query for the whole set, keyed by id. Duplicate ids are fetched once.
    pub async fn find_by_ids(
        db: &DatabaseConnection,
        ids: &[i32],
    ) -> Result<HashMap<i32, Model>, DbErr> {
        let mut unique = ids.to_vec();
        unique.sort_unstable();
        unique.dedup();

        let users = UserDao::find_by_ids(db, &unique).await?;
        Ok(users.into_iter().map(|user| (user.id, user)).collect())
    }

    /// Same single query as [`Self::find_by_ids`], laid out in the caller's order.
    /// Ids with no row come back as `None`.
    pub async fn find_by_ids_ordered(
        db: &DatabaseConnection,
        ids: &[i32],
    ) -> Result<Vec<Option<Model>>, DbErr> {
        let by_id = Self::find_by_ids(db, ids).await?;
        Ok(ids.iter().map(|id| by_id.get(id).cloned()).collect())
    }
}
