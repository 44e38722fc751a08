//! Route definitions for the site configuration key/value store.

use axum::routing::get;
use axum::Router;

use crate::handlers::site_config;
use crate::state::AppState;

/// Site config routes mounted at `/site-config`.
///
/// ```text
/// GET    /{key}   -> get_config
/// PUT    /{key}   -> set_config
/// DELETE /{key}   -> delete_config
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/{key}",
        get(site_config::get_config)
            .put(site_config::set_config)
            .delete(site_config::delete_config),
    )
}
