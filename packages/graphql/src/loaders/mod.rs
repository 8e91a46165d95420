mod user_loader;

pub use user_loader::{RequestUserLoader, UserLoader};
