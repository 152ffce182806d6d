//! Persistence interfaces and their Postgres implementations.
//!
//! Services depend on the traits here, never on `PgPool` directly, so tests
//! can swap in in-memory implementations.

pub mod authors;
pub mod comments;
pub mod files;
pub mod purchases;
pub mod users;

pub use authors::{AuthorRepository, PgAuthorRepository};
pub use comments::{CommentRepository, PgCommentRepository};
pub use files::{FileRepository, PgFileRepository};
pub use purchases::{PgPurchaseRepository, PurchaseRepository};
pub use users::{PgUserRepository, UserRepository};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("query failed: {0}")]
    Query(#[from] sqlx::Error),
}
