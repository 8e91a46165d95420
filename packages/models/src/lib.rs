pub mod posts;
pub mod prelude;
pub mod profiles;
pub mod users;
