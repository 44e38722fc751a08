//! Grid item models and DTOs.
//!
//! A grid item is one tile on the homepage grid: display text, a link,
//! an optional image, and categorization/ordering metadata.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use zengrid_core::types::{DbId, Timestamp};

// ---------------------------------------------------------------------------
// Entity structs (database rows)
// ---------------------------------------------------------------------------

/// A row from the `grid_items` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct GridItem {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub url: Option<String>,
    pub image_url: Option<String>,
    pub category: Option<String>,
    pub sort_order: Option<i64>,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// DTO for creating a grid item.
///
/// Deliberately carries no `is_active` field: the store forces new items
/// active, so a caller-supplied value is dropped at the boundary.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateGridItem {
    pub title: String,
    pub description: Option<String>,
    pub url: Option<String>,
    pub image_url: Option<String>,
    pub category: Option<String>,
    pub sort_order: Option<i64>,
}

/// DTO for a sparse patch of a grid item. `None` fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateGridItem {
    pub title: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub image_url: Option<String>,
    pub category: Option<String>,
    pub sort_order: Option<i64>,
    pub is_active: Option<bool>,
}
