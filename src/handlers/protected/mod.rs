// Protected handlers - gated by the bearer-token middleware.
pub mod authors;
pub mod comments;
pub mod files;
pub mod purchases;
