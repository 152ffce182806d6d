use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::ServiceError;
use crate::extractors::Validate;
use crate::models::Purchase;
use crate::repository::PurchaseRepository;

/// Body of a purchase order. The buyer is never part of the body, it is
/// taken from the verified caller identity at dispatch.
#[derive(Debug, Deserialize)]
pub struct CreatePurchaseRequest {
    pub file_id: i64,
    #[serde(default)]
    pub ordered_at: Option<DateTime<Utc>>,
}

impl Validate for CreatePurchaseRequest {
    fn validate(&self) -> Result<(), String> {
        if self.file_id <= 0 {
            return Err("not correct file id".to_string());
        }
        if self.ordered_at.is_none() {
            return Err("ordered date is not set".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
pub struct PeriodRequest {
    #[serde(default)]
    pub from: Option<DateTime<Utc>>,
    #[serde(default)]
    pub to: Option<DateTime<Utc>>,
}

impl Validate for PeriodRequest {
    fn validate(&self) -> Result<(), String> {
        let (Some(from), Some(to)) = (self.from, self.to) else {
            return Err("period is not set".to_string());
        };
        if from > to {
            return Err("not correct period".to_string());
        }
        Ok(())
    }
}

pub struct PurchaseService {
    purchases: Arc<dyn PurchaseRepository>,
}

impl PurchaseService {
    pub fn new(purchases: Arc<dyn PurchaseRepository>) -> Self {
        Self { purchases }
    }

    pub async fn create(
        &self,
        user_id: i64,
        req: CreatePurchaseRequest,
    ) -> Result<i64, ServiceError> {
        let ordered_at = req.ordered_at.unwrap_or_else(Utc::now);
        Ok(self.purchases.create(user_id, req.file_id, ordered_at).await?)
    }

    pub async fn by_user(&self, user_id: i64) -> Result<Vec<Purchase>, ServiceError> {
        Ok(self.purchases.by_user(user_id).await?)
    }

    pub async fn in_period(&self, req: PeriodRequest) -> Result<Vec<Purchase>, ServiceError> {
        let from = req.from.unwrap_or_default();
        let to = req.to.unwrap_or_else(Utc::now);
        Ok(self.purchases.between(from, to).await?)
    }
}
