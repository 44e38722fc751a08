//! Repository for the `grid_items` table.
//!
//! Provides the query and mutation surface of the grid item store:
//! active-item listings (optionally narrowed by category), creation,
//! sparse-patch updates, and hard deletes.

use sqlx::PgPool;
use zengrid_core::types::DbId;

use crate::models::grid_item::{CreateGridItem, GridItem, UpdateGridItem};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "\
    id, title, description, url, image_url, category, sort_order, \
    is_active, created_at, updated_at";

/// Ordering shared by all listings: ascending by explicit sort position,
/// falling back to insertion order for rows without one.
const ORDERING: &str = "sort_order ASC NULLS LAST, id ASC";

/// Provides data access for grid items.
pub struct GridItemRepo;

impl GridItemRepo {
    /// List all active grid items in display order.
    ///
    /// Inactive rows never appear here; an empty grid is a valid result.
    pub async fn list_active(pool: &PgPool) -> Result<Vec<GridItem>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM grid_items WHERE is_active ORDER BY {ORDERING}");
        sqlx::query_as::<_, GridItem>(&query).fetch_all(pool).await
    }

    /// List active grid items in a single category, in display order.
    ///
    /// Hits the `by_category` index, then drops inactive rows.
    pub async fn list_active_by_category(
        pool: &PgPool,
        category: &str,
    ) -> Result<Vec<GridItem>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM grid_items \
             WHERE category = $1 AND is_active \
             ORDER BY {ORDERING}"
        );
        sqlx::query_as::<_, GridItem>(&query)
            .bind(category)
            .fetch_all(pool)
            .await
    }

    /// Insert a new grid item, returning the created row.
    ///
    /// New items are always active; the DTO has no way to say otherwise.
    pub async fn create(pool: &PgPool, input: &CreateGridItem) -> Result<GridItem, sqlx::Error> {
        let query = format!(
            "INSERT INTO grid_items \
                 (title, description, url, image_url, category, sort_order, is_active) \
             VALUES ($1, $2, $3, $4, $5, $6, TRUE) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, GridItem>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.url)
            .bind(&input.image_url)
            .bind(&input.category)
            .bind(input.sort_order)
            .fetch_one(pool)
            .await
    }

    /// Update a grid item. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateGridItem,
    ) -> Result<Option<GridItem>, sqlx::Error> {
        let query = format!(
            "UPDATE grid_items SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                url = COALESCE($4, url),
                image_url = COALESCE($5, image_url),
                category = COALESCE($6, category),
                sort_order = COALESCE($7, sort_order),
                is_active = COALESCE($8, is_active),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, GridItem>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.url)
            .bind(&input.image_url)
            .bind(&input.category)
            .bind(input.sort_order)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a grid item by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM grid_items WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
