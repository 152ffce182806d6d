use std::sync::Arc;

use serde::Deserialize;

use super::ServiceError;
use crate::extractors::Validate;
use crate::models::Author;
use crate::repository::AuthorRepository;

#[derive(Debug, Deserialize)]
pub struct CreateAuthorRequest {
    pub name: String,
}

impl Validate for CreateAuthorRequest {
    fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("name is not set".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateAuthorRequest {
    pub name: String,
}

impl Validate for UpdateAuthorRequest {
    fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("name is not set".to_string());
        }
        Ok(())
    }
}

pub struct AuthorService {
    authors: Arc<dyn AuthorRepository>,
}

impl AuthorService {
    pub fn new(authors: Arc<dyn AuthorRepository>) -> Self {
        Self { authors }
    }

    pub async fn create(&self, req: CreateAuthorRequest) -> Result<i64, ServiceError> {
        Ok(self.authors.create(&req.name).await?)
    }

    pub async fn get(&self, id: i64) -> Result<Option<Author>, ServiceError> {
        Ok(self.authors.get(id).await?)
    }

    pub async fn list(&self) -> Result<Vec<Author>, ServiceError> {
        Ok(self.authors.list().await?)
    }

    pub async fn update(&self, id: i64, req: UpdateAuthorRequest) -> Result<i64, ServiceError> {
        Ok(self.authors.update(id, &req.name).await?)
    }

    pub async fn delete(&self, id: i64) -> Result<i64, ServiceError> {
        Ok(self.authors.delete(id).await?)
    }
}
