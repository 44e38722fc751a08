//! Handlers for the grid item store.
//!
//! Read endpoints serve the homepage grid (active tiles only); write
//! endpoints create, patch, and delete tiles.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use zengrid_core::error::CoreError;
use zengrid_core::types::DbId;
use zengrid_db::models::grid_item::{CreateGridItem, UpdateGridItem};
use zengrid_db::repositories::GridItemRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/grid-items
///
/// List all active grid items in display order. An empty grid is a
/// valid (empty) result, not an error.
pub async fn list_grid_items(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let items = GridItemRepo::list_active(&state.pool).await?;

    Ok(Json(DataResponse { data: items }))
}

/// GET /api/v1/grid-items/by-category/{category}
///
/// List active grid items in one category, in display order.
pub async fn list_grid_items_by_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> AppResult<impl IntoResponse> {
    let items = GridItemRepo::list_active_by_category(&state.pool, &category).await?;

    Ok(Json(DataResponse { data: items }))
}

/// POST /api/v1/grid-items
///
/// Create a grid item. The new item is always active regardless of the
/// request payload; the response carries the stored row with its id.
pub async fn create_grid_item(
    State(state): State<AppState>,
    Json(input): Json<CreateGridItem>,
) -> AppResult<impl IntoResponse> {
    let item = GridItemRepo::create(&state.pool, &input).await?;

    tracing::info!(id = item.id, title = %item.title, "Grid item created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: item })))
}

/// PUT /api/v1/grid-items/{id}
///
/// Sparse patch: only fields present in the payload change. Returns 404
/// if the id does not reference an existing item.
pub async fn update_grid_item(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateGridItem>,
) -> AppResult<impl IntoResponse> {
    let item = GridItemRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "grid item",
            id,
        })?;

    tracing::info!(id = item.id, "Grid item updated");

    Ok(Json(DataResponse { data: item }))
}

/// DELETE /api/v1/grid-items/{id}
///
/// Hard delete. Returns 204 on success, 404 if the id is unknown.
pub async fn delete_grid_item(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let removed = GridItemRepo::delete(&state.pool, id).await?;
    if !removed {
        return Err(CoreError::NotFound {
            entity: "grid item",
            id,
        }
        .into());
    }

    tracing::info!(id, "Grid item deleted");

    Ok(StatusCode::NO_CONTENT)
}
