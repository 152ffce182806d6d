use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A file listed for sale. Named to avoid a clash with `std::fs::File`
/// in modules that use both.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct StoredFile {
    pub id: i64,
    pub author_id: i64,
    pub name: String,
    pub price: i64,
    pub added_at: DateTime<Utc>,
}
