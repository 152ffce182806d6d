use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use super::RepositoryError;
use crate::models::StoredFile;

#[async_trait]
pub trait FileRepository: Send + Sync {
    async fn create(
        &self,
        author_id: i64,
        name: &str,
        price: i64,
        added_at: DateTime<Utc>,
    ) -> Result<i64, RepositoryError>;
    async fn get(&self, id: i64) -> Result<Option<StoredFile>, RepositoryError>;
    async fn list(&self) -> Result<Vec<StoredFile>, RepositoryError>;
    async fn by_author(&self, author_id: i64) -> Result<Vec<StoredFile>, RepositoryError>;
    async fn update(&self, id: i64, name: &str, price: i64) -> Result<i64, RepositoryError>;
    async fn delete(&self, id: i64) -> Result<i64, RepositoryError>;
}

pub struct PgFileRepository {
    pool: PgPool,
}

impl PgFileRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const FILE_COLUMNS: &str = "id, author_id, name, price, added_at";

#[async_trait]
impl FileRepository for PgFileRepository {
    async fn create(
        &self,
        author_id: i64,
        name: &str,
        price: i64,
        added_at: DateTime<Utc>,
    ) -> Result<i64, RepositoryError> {
        let id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO files (author_id, name, price, added_at) VALUES ($1, $2, $3, $4) RETURNING id",
        )
        .bind(author_id)
        .bind(name)
        .bind(price)
        .bind(added_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    async fn get(&self, id: i64) -> Result<Option<StoredFile>, RepositoryError> {
        let file = sqlx::query_as::<_, StoredFile>(&format!(
            "SELECT {FILE_COLUMNS} FROM files WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(file)
    }

    async fn list(&self) -> Result<Vec<StoredFile>, RepositoryError> {
        let files = sqlx::query_as::<_, StoredFile>(&format!(
            "SELECT {FILE_COLUMNS} FROM files ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(files)
    }

    async fn by_author(&self, author_id: i64) -> Result<Vec<StoredFile>, RepositoryError> {
        let files = sqlx::query_as::<_, StoredFile>(&format!(
            "SELECT {FILE_COLUMNS} FROM files WHERE author_id = $1 ORDER BY id"
        ))
        .bind(author_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(files)
    }

    async fn update(&self, id: i64, name: &str, price: i64) -> Result<i64, RepositoryError> {
        let updated = sqlx::query_scalar::<_, i64>(
            "UPDATE files SET name = $2, price = $3 WHERE id = $1 RETURNING id",
        )
        .bind(id)
        .bind(name)
        .bind(price)
        .fetch_optional(&self.pool)
        .await?;

        Ok(updated.unwrap_or(0))
    }

    async fn delete(&self, id: i64) -> Result<i64, RepositoryError> {
        let deleted = sqlx::query_scalar::<_, i64>("DELETE FROM files WHERE id = $1 RETURNING id")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(deleted.unwrap_or(0))
    }
}
