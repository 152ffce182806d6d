pub mod identity;
pub mod token;

pub use identity::CallerIdentity;
pub use token::{AuthError, TokenManager};
