//! HTTP handler functions, grouped by entity.

pub mod grid_items;
pub mod site_config;
