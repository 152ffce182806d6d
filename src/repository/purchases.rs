use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use super::RepositoryError;
use crate::models::Purchase;

#[async_trait]
pub trait PurchaseRepository: Send + Sync {
    async fn create(
        &self,
        user_id: i64,
        file_id: i64,
        ordered_at: DateTime<Utc>,
    ) -> Result<i64, RepositoryError>;
    async fn by_user(&self, user_id: i64) -> Result<Vec<Purchase>, RepositoryError>;
    async fn between(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<Purchase>, RepositoryError>;
}

pub struct PgPurchaseRepository {
    pool: PgPool,
}

impl PgPurchaseRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PurchaseRepository for PgPurchaseRepository {
    async fn create(
        &self,
        user_id: i64,
        file_id: i64,
        ordered_at: DateTime<Utc>,
    ) -> Result<i64, RepositoryError> {
        let id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO purchases (user_id, file_id, ordered_at) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(user_id)
        .bind(file_id)
        .bind(ordered_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    async fn by_user(&self, user_id: i64) -> Result<Vec<Purchase>, RepositoryError> {
        let purchases = sqlx::query_as::<_, Purchase>(
            "SELECT id, user_id, file_id, ordered_at FROM purchases WHERE user_id = $1 ORDER BY id",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(purchases)
    }

    async fn between(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<Purchase>, RepositoryError> {
        let purchases = sqlx::query_as::<_, Purchase>(
            "SELECT id, user_id, file_id, ordered_at FROM purchases \
             WHERE ordered_at BETWEEN $1 AND $2 ORDER BY ordered_at",
        )
        .bind(from)
        .bind(to)
        .fetch_all(&self.pool)
        .await?;

        Ok(purchases)
    }
}
