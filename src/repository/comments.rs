use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use super::RepositoryError;
use crate::models::Comment;

#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn create(
        &self,
        user_id: i64,
        file_id: i64,
        message: &str,
        posted_at: DateTime<Utc>,
    ) -> Result<i64, RepositoryError>;
    async fn by_user(&self, user_id: i64) -> Result<Vec<Comment>, RepositoryError>;
    async fn update(&self, id: i64, message: &str) -> Result<i64, RepositoryError>;
    async fn delete(&self, id: i64) -> Result<i64, RepositoryError>;
}

pub struct PgCommentRepository {
    pool: PgPool,
}

impl PgCommentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentRepository for PgCommentRepository {
    async fn create(
        &self,
        user_id: i64,
        file_id: i64,
        message: &str,
        posted_at: DateTime<Utc>,
    ) -> Result<i64, RepositoryError> {
        let id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO comments (user_id, file_id, message, posted_at) \
             VALUES ($1, $2, $3, $4) RETURNING id",
        )
        .bind(user_id)
        .bind(file_id)
        .bind(message)
        .bind(posted_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    async fn by_user(&self, user_id: i64) -> Result<Vec<Comment>, RepositoryError> {
        let comments = sqlx::query_as::<_, Comment>(
            "SELECT id, user_id, file_id, message, posted_at FROM comments \
             WHERE user_id = $1 ORDER BY id",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(comments)
    }

    async fn update(&self, id: i64, message: &str) -> Result<i64, RepositoryError> {
        let updated = sqlx::query_scalar::<_, i64>(
            "UPDATE comments SET message = $2 WHERE id = $1 RETURNING id",
        )
        .bind(id)
        .bind(message)
        .fetch_optional(&self.pool)
        .await?;

        Ok(updated.unwrap_or(0))
    }

    async fn delete(&self, id: i64) -> Result<i64, RepositoryError> {
        let deleted =
            sqlx::query_scalar::<_, i64>("DELETE FROM comments WHERE id = $1 RETURNING id")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(deleted.unwrap_or(0))
    }
}
