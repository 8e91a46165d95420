pub mod post;
pub mod profile;
pub mod user;

/// What callers see when the store fails; the cause is only logged.
pub const STORE_FAILURE_MESSAGE: &str = "Something went wrong, please try again";

pub use post::PostRepository;
pub use profile::ProfileRepository;
pub use user::{CreateUserError, NewUser, UserRepository};

#[cfg(test)]
mod test_helpers;
