use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Purchase {
    pub id: i64,
    pub user_id: i64,
    pub file_id: i64,
    pub ordered_at: DateTime<Utc>,
}
