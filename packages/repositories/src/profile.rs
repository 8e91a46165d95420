use data_access_objects::ProfileDao;
use models::profiles::Model;
use sea_orm::*;

pub struct ProfileRepository;

impl ProfileRepository {
    pub async fn find_by_user_id(
        db: &DatabaseConnection,
        user_id: i32,
    ) -> Result<Option<Model>, DbErr> {
        ProfileDao::find_by_user_id(db, user_id).await
    }
}
