use async_trait::async_trait;
use sqlx::PgPool;

use super::RepositoryError;
use crate::models::Author;

/// Write operations report the id of the row they touched, `0` when no row
/// matched. Callers turn `0` into the empty 404.
#[async_trait]
pub trait AuthorRepository: Send + Sync {
    async fn create(&self, name: &str) -> Result<i64, RepositoryError>;
    async fn get(&self, id: i64) -> Result<Option<Author>, RepositoryError>;
    async fn list(&self) -> Result<Vec<Author>, RepositoryError>;
    async fn update(&self, id: i64, name: &str) -> Result<i64, RepositoryError>;
    async fn delete(&self, id: i64) -> Result<i64, RepositoryError>;
}

pub struct PgAuthorRepository {
    pool: PgPool,
}

impl PgAuthorRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AuthorRepository for PgAuthorRepository {
    async fn create(&self, name: &str) -> Result<i64, RepositoryError> {
        let id =
            sqlx::query_scalar::<_, i64>("INSERT INTO authors (name) VALUES ($1) RETURNING id")
                .bind(name)
                .fetch_one(&self.pool)
                .await?;

        Ok(id)
    }

    async fn get(&self, id: i64) -> Result<Option<Author>, RepositoryError> {
        let author = sqlx::query_as::<_, Author>("SELECT id, name FROM authors WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(author)
    }

    async fn list(&self) -> Result<Vec<Author>, RepositoryError> {
        let authors = sqlx::query_as::<_, Author>("SELECT id, name FROM authors ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(authors)
    }

    async fn update(&self, id: i64, name: &str) -> Result<i64, RepositoryError> {
        let updated = sqlx::query_scalar::<_, i64>(
            "UPDATE authors SET name = $2 WHERE id = $1 RETURNING id",
        )
        .bind(id)
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(updated.unwrap_or(0))
    }

    async fn delete(&self, id: i64) -> Result<i64, RepositoryError> {
        let deleted =
            sqlx::query_scalar::<_, i64>("DELETE FROM authors WHERE id = $1 RETURNING id")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(deleted.unwrap_or(0))
    }
}
