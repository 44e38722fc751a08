//! Handlers for the site configuration key/value store.
//!
//! Placeholder surface only: get, set, delete by key. Values are opaque
//! JSON; nothing here interprets them.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use zengrid_core::error::CoreError;
use zengrid_db::models::site_config::SetSiteConfig;
use zengrid_db::repositories::SiteConfigRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/site-config/{key}
pub async fn get_config(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> AppResult<impl IntoResponse> {
    let entry = SiteConfigRepo::get(&state.pool, &key)
        .await?
        .ok_or_else(|| CoreError::KeyNotFound {
            entity: "site config",
            key: key.clone(),
        })?;

    Ok(Json(DataResponse { data: entry }))
}

/// PUT /api/v1/site-config/{key}
///
/// Upsert: creates the entry if absent, replaces the value otherwise.
pub async fn set_config(
    State(state): State<AppState>,
    Path(key): Path<String>,
    Json(input): Json<SetSiteConfig>,
) -> AppResult<impl IntoResponse> {
    let entry = SiteConfigRepo::set(&state.pool, &key, &input).await?;

    tracing::info!(key = %entry.key, "Site config entry set");

    Ok(Json(DataResponse { data: entry }))
}

/// DELETE /api/v1/site-config/{key}
pub async fn delete_config(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> AppResult<impl IntoResponse> {
    let removed = SiteConfigRepo::delete(&state.pool, &key).await?;
    if !removed {
        return Err(CoreError::KeyNotFound {
            entity: "site config",
            key,
        }
        .into());
    }

    Ok(StatusCode::NO_CONTENT)
}
