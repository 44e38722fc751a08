//! Route definitions for the grid item store.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::grid_items;
use crate::state::AppState;

/// Grid item routes mounted at `/grid-items`.
///
/// ```text
/// GET    /                           -> list_grid_items
/// POST   /                           -> create_grid_item
/// GET    /by-category/{category}     -> list_grid_items_by_category
/// PUT    /{id}                       -> update_grid_item
/// DELETE /{id}                       -> delete_grid_item
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(grid_items::list_grid_items).post(grid_items::create_grid_item),
        )
        .route(
            "/by-category/{category}",
            get(grid_items::list_grid_items_by_category),
        )
        .route(
            "/{id}",
            put(grid_items::update_grid_item).delete(grid_items::delete_grid_item),
        )
}
