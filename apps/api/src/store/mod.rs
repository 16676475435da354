// Resume store: append-only persistence behind a capability trait.
// Postgres in deployment, an in-memory map when no DATABASE_URL is set.

pub mod handlers;
pub mod postgres;

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use serde_json::Value;
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::models::resume::StoredResume;

pub use postgres::PgResumeRepository;

/// Template recorded when a save request names none.
pub const DEFAULT_TEMPLATE_ID: &str = "template-classic";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Every save inserts a new record; nothing is ever updated in place.
#[async_trait]
pub trait ResumeRepository: Send + Sync {
    async fn save(&self, payload: Value, template_id: String) -> Result<StoredResume, StoreError>;

    async fn get(&self, id: Uuid) -> Result<Option<StoredResume>, StoreError>;
}

#[derive(Default)]
pub struct InMemoryResumeRepository {
    records: RwLock<HashMap<Uuid, StoredResume>>,
}

impl InMemoryResumeRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ResumeRepository for InMemoryResumeRepository {
    async fn save(&self, payload: Value, template_id: String) -> Result<StoredResume, StoreError> {
        let record = StoredResume {
            id: Uuid::new_v4(),
            payload,
            template_id,
            created_at: Utc::now(),
        };
        self.records.write().await.insert(record.id, record.clone());
        debug!("Stored resume {} in memory", record.id);
        Ok(record)
    }

    async fn get(&self, id: Uuid) -> Result<Option<StoredResume>, StoreError> {
        Ok(self.records.read().await.get(&id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_save_then_get_returns_same_record() {
        let repo = InMemoryResumeRepository::new();
        let payload = json!({ "personal": { "firstName": "Ann" }, "skills": [] });
        let saved = repo
            .save(payload.clone(), "template-modern".into())
            .await
            .unwrap();

        let fetched = repo.get(saved.id).await.unwrap().unwrap();
        assert_eq!(fetched, saved);
        assert_eq!(fetched.payload, payload);
        assert_eq!(fetched.template_id, "template-modern");
    }

    #[tokio::test]
    async fn test_saving_twice_creates_two_records() {
        let repo = InMemoryResumeRepository::new();
        let a = repo.save(json!({}), DEFAULT_TEMPLATE_ID.into()).await.unwrap();
        let b = repo.save(json!({}), DEFAULT_TEMPLATE_ID.into()).await.unwrap();
        assert_ne!(a.id, b.id);
        assert!(repo.get(a.id).await.unwrap().is_some());
        assert!(repo.get(b.id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_get_unknown_id_is_none() {
        let repo = InMemoryResumeRepository::new();
        assert!(repo.get(Uuid::new_v4()).await.unwrap().is_none());
    }
}
