//! Site configuration models and DTOs.
//!
//! `site_config` is a plain key/value table. Values are arbitrary JSON;
//! no interpretation happens on the server side.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use zengrid_core::types::{DbId, Timestamp};

/// A row from the `site_config` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SiteConfig {
    pub id: DbId,
    pub key: String,
    pub value: serde_json::Value,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for setting a config entry. The key comes from the URL path.
#[derive(Debug, Clone, Deserialize)]
pub struct SetSiteConfig {
    pub value: serde_json::Value,
    pub description: Option<String>,
}
