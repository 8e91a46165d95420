pub mod post_access;

pub use post_access::*;
