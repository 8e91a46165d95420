pub mod post;
pub mod profile;
pub mod user;

pub use post::PostDao;
pub use profile::ProfileDao;
pub use user::UserDao;
