use std::sync::Arc;

use sqlx::PgPool;

use crate::auth::TokenManager;
use crate::repository::{
    PgAuthorRepository, PgCommentRepository, PgFileRepository, PgPurchaseRepository,
    PgUserRepository,
};
use crate::services::{AuthorService, CommentService, FileService, PurchaseService, UserService};

/// Everything handlers and middleware need, cloned per request by axum.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<UserService>,
    pub authors: Arc<AuthorService>,
    pub files: Arc<FileService>,
    pub purchases: Arc<PurchaseService>,
    pub comments: Arc<CommentService>,
    pub tokens: Arc<TokenManager>,
}

impl AppState {
    /// Assemble from explicit parts. Tests use this to run the full router
    /// over fake repositories.
    pub fn new(
        users: UserService,
        authors: AuthorService,
        files: FileService,
        purchases: PurchaseService,
        comments: CommentService,
        tokens: Arc<TokenManager>,
    ) -> Self {
        Self {
            users: Arc::new(users),
            authors: Arc::new(authors),
            files: Arc::new(files),
            purchases: Arc::new(purchases),
            comments: Arc::new(comments),
            tokens,
        }
    }

    /// Wire every service to Postgres repositories sharing one pool.
    pub fn postgres(pool: PgPool, tokens: TokenManager) -> Self {
        let tokens = Arc::new(tokens);
        Self::new(
            UserService::new(Arc::new(PgUserRepository::new(pool.clone())), tokens.clone()),
            AuthorService::new(Arc::new(PgAuthorRepository::new(pool.clone()))),
            FileService::new(Arc::new(PgFileRepository::new(pool.clone()))),
            PurchaseService::new(Arc::new(PgPurchaseRepository::new(pool.clone()))),
            CommentService::new(Arc::new(PgCommentRepository::new(pool))),
            tokens,
        )
    }
}
