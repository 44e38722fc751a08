//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod grid_item_repo;
pub mod site_config_repo;

pub use grid_item_repo::GridItemRepo;
pub use site_config_repo::SiteConfigRepo;
