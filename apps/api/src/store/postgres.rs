use async_trait::async_trait;
use serde_json::Value;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::models::resume::StoredResume;
use crate::store::{ResumeRepository, StoreError};

/// `resumes` table access. The schema lives in `migrations/`.
#[derive(Clone)]
pub struct PgResumeRepository {
    pool: PgPool,
}

impl PgResumeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ResumeRepository for PgResumeRepository {
    async fn save(&self, payload: Value, template_id: String) -> Result<StoredResume, StoreError> {
        let record = sqlx::query_as::<_, StoredResume>(
            r#"
            INSERT INTO resumes (id, payload, template_id, created_at)
            VALUES ($1, $2, $3, NOW())
            RETURNING id, payload, template_id, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&payload)
        .bind(&template_id)
        .fetch_one(&self.pool)
        .await?;

        info!("Saved resume {} ({})", record.id, record.template_id);
        Ok(record)
    }

    async fn get(&self, id: Uuid) -> Result<Option<StoredResume>, StoreError> {
        Ok(sqlx::query_as::<_, StoredResume>(
            "SELECT id, payload, template_id, created_at FROM resumes WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?)
    }
}
