//! Domain services, one per aggregate.
//!
//! Each service names the collaborators it needs in its constructor and gets
//! them passed in at startup. Nothing here reaches for process globals, so a
//! test can assemble a service from fakes the same way `main` assembles one
//! from Postgres repositories.

pub mod authors;
pub mod comments;
pub mod files;
pub mod purchases;
pub mod users;

pub use authors::AuthorService;
pub use comments::CommentService;
pub use files::FileService;
pub use purchases::PurchaseService;
pub use users::UserService;

use thiserror::Error;

use crate::auth::AuthError;
use crate::repository::RepositoryError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("login '{0}' is already taken")]
    AlreadyExists(String),
    #[error("incorrect login or password")]
    InvalidCredentials,
    #[error("password hashing failed: {0}")]
    PasswordHash(String),
    #[error("token issuing failed: {0}")]
    Token(#[from] AuthError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
