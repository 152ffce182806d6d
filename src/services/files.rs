use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::ServiceError;
use crate::extractors::Validate;
use crate::models::StoredFile;
use crate::repository::FileRepository;

#[derive(Debug, Deserialize)]
pub struct CreateFileRequest {
    pub author_id: i64,
    pub name: String,
    pub price: i64,
    #[serde(default)]
    pub added_at: Option<DateTime<Utc>>,
}

impl Validate for CreateFileRequest {
    fn validate(&self) -> Result<(), String> {
        if self.author_id <= 0 {
            return Err("not correct author id".to_string());
        }
        if self.name.trim().is_empty() {
            return Err("name is not set".to_string());
        }
        if self.price < 0 {
            return Err("not correct price".to_string());
        }
        if self.added_at.is_none() {
            return Err("added date is not set".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateFileRequest {
    pub name: String,
    pub price: i64,
}

impl Validate for UpdateFileRequest {
    fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("name is not set".to_string());
        }
        if self.price < 0 {
            return Err("not correct price".to_string());
        }
        Ok(())
    }
}

pub struct FileService {
    files: Arc<dyn FileRepository>,
}

impl FileService {
    pub fn new(files: Arc<dyn FileRepository>) -> Self {
        Self { files }
    }

    pub async fn create(&self, req: CreateFileRequest) -> Result<i64, ServiceError> {
        let added_at = req.added_at.unwrap_or_else(Utc::now);
        Ok(self
            .files
            .create(req.author_id, &req.name, req.price, added_at)
            .await?)
    }

    pub async fn get(&self, id: i64) -> Result<Option<StoredFile>, ServiceError> {
        Ok(self.files.get(id).await?)
    }

    pub async fn list(&self) -> Result<Vec<StoredFile>, ServiceError> {
        Ok(self.files.list().await?)
    }

    pub async fn by_author(&self, author_id: i64) -> Result<Vec<StoredFile>, ServiceError> {
        Ok(self.files.by_author(author_id).await?)
    }

    pub async fn update(&self, id: i64, req: UpdateFileRequest) -> Result<i64, ServiceError> {
        Ok(self.files.update(id, &req.name, req.price).await?)
    }

    pub async fn delete(&self, id: i64) -> Result<i64, ServiceError> {
        Ok(self.files.delete(id).await?)
    }
}
