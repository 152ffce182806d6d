use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct User {
    pub id: i64,
    pub login: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
}
