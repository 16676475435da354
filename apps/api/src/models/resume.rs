use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

/// A persisted resume. The payload is kept as the opaque JSON document the
/// client submitted so a save/get round trip returns it unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct StoredResume {
    pub id: Uuid,
    pub payload: Value,
    pub template_id: String,
    pub created_at: DateTime<Utc>,
}
