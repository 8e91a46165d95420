pub mod database;
pub mod ids;
pub mod requires_auth;

pub use database::database;
pub use ids::parse_id;
pub use requires_auth::{current_user_id, RequiresAuth};
