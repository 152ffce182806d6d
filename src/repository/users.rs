use async_trait::async_trait;
use sqlx::PgPool;

use super::RepositoryError;
use crate::models::User;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, login: &str, password_hash: &str) -> Result<i64, RepositoryError>;
    async fn find_by_login(&self, login: &str) -> Result<Option<User>, RepositoryError>;
}

pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn create(&self, login: &str, password_hash: &str) -> Result<i64, RepositoryError> {
        let id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO users (login, password_hash) VALUES ($1, $2) RETURNING id",
        )
        .bind(login)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    async fn find_by_login(&self, login: &str) -> Result<Option<User>, RepositoryError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, login, password_hash FROM users WHERE login = $1",
        )
        .bind(login)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }
}
