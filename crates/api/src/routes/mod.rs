pub mod grid_items;
pub mod health;
pub mod site_config;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /grid-items                          list (GET), create (POST)
/// /grid-items/by-category/{category}   list one category (GET)
/// /grid-items/{id}                     update (PUT), delete (DELETE)
///
/// /site-config/{key}                   get, set (PUT), delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/grid-items", grid_items::router())
        .nest("/site-config", site_config::router())
}
