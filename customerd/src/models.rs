//! Customer record model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Customer entity
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Customer {
    pub id: i64,
    pub name: String,
    pub phone: String,
    pub active: bool,
    pub created: DateTime<Utc>,
}

/// Save payload (form-encoded). `id == 0` means "create".
///
/// Missing `name`/`phone` fields decode as empty strings.
#[derive(Debug, Clone, Deserialize)]
pub struct CustomerSave {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
}
