//! Repository for the `site_config` table.
//!
//! Plain key/value access. Keys are unique; `set` is an upsert.

use sqlx::PgPool;

use crate::models::site_config::{SetSiteConfig, SiteConfig};

/// Column list for `site_config` queries.
const COLUMNS: &str = "id, key, value, description, created_at, updated_at";

/// Provides data access for site configuration entries.
pub struct SiteConfigRepo;

impl SiteConfigRepo {
    /// Look up a config entry by key.
    pub async fn get(pool: &PgPool, key: &str) -> Result<Option<SiteConfig>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM site_config WHERE key = $1");
        sqlx::query_as::<_, SiteConfig>(&query)
            .bind(key)
            .fetch_optional(pool)
            .await
    }

    /// Insert or replace the value for a key, returning the stored row.
    ///
    /// Uses `ON CONFLICT (key) DO UPDATE`; a `None` description keeps the
    /// existing one via `COALESCE`.
    pub async fn set(
        pool: &PgPool,
        key: &str,
        input: &SetSiteConfig,
    ) -> Result<SiteConfig, sqlx::Error> {
        let query = format!(
            "INSERT INTO site_config (key, value, description) \
             VALUES ($1, $2, $3) \
             ON CONFLICT (key) DO UPDATE SET \
                 value = $2, \
                 description = COALESCE($3, site_config.description), \
                 updated_at = NOW() \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SiteConfig>(&query)
            .bind(key)
            .bind(&input.value)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// Delete a config entry by key. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, key: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM site_config WHERE key = $1")
            .bind(key)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
