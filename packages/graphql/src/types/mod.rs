pub mod payloads;
pub mod post;
pub mod profile;
pub mod user;

pub use payloads::{AuthPayload, PostPayload};
pub use post::Post;
pub use profile::Profile;
pub use user::User;
