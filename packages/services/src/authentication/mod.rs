pub mod authenticator;
pub mod claims;
pub mod config;
pub mod password;
pub mod token;

pub use authenticator::*;
pub use config::AuthConfig;
pub use password::{hash_password, verify_password};
pub use token::*;
