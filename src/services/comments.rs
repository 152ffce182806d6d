use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::ServiceError;
use crate::extractors::Validate;
use crate::models::Comment;
use crate::repository::CommentRepository;

/// Body of a new comment. The author of the comment is the verified caller,
/// never a field of the body.
#[derive(Debug, Deserialize)]
pub struct CreateCommentRequest {
    pub file_id: i64,
    pub message: String,
    #[serde(default)]
    pub posted_at: Option<DateTime<Utc>>,
}

impl Validate for CreateCommentRequest {
    fn validate(&self) -> Result<(), String> {
        if self.file_id <= 0 {
            return Err("not correct file id".to_string());
        }
        if self.message.trim().is_empty() {
            return Err("message is not set".to_string());
        }
        if self.posted_at.is_none() {
            return Err("posted date is not set".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateCommentRequest {
    pub message: String,
}

impl Validate for UpdateCommentRequest {
    fn validate(&self) -> Result<(), String> {
        if self.message.trim().is_empty() {
            return Err("message is not set".to_string());
        }
        Ok(())
    }
}

pub struct CommentService {
    comments: Arc<dyn CommentRepository>,
}

impl CommentService {
    pub fn new(comments: Arc<dyn CommentRepository>) -> Self {
        Self { comments }
    }

    pub async fn create(
        &self,
        user_id: i64,
        req: CreateCommentRequest,
    ) -> Result<i64, ServiceError> {
        let posted_at = req.posted_at.unwrap_or_else(Utc::now);
        Ok(self
            .comments
            .create(user_id, req.file_id, &req.message, posted_at)
            .await?)
    }

    pub async fn by_user(&self, user_id: i64) -> Result<Vec<Comment>, ServiceError> {
        Ok(self.comments.by_user(user_id).await?)
    }

    pub async fn update(&self, id: i64, req: UpdateCommentRequest) -> Result<i64, ServiceError> {
        Ok(self.comments.update(id, &req.message).await?)
    }

    pub async fn delete(&self, id: i64) -> Result<i64, ServiceError> {
        Ok(self.comments.delete(id).await?)
    }
}
