//! Integration tests for the grid item repository.
//!
//! Exercises the repository layer against a real database:
//! - Forced-active creation
//! - Active-only listings and category narrowing
//! - Display ordering (explicit sort position, then insertion order)
//! - Sparse-patch semantics
//! - Hard delete and not-found behaviour

use sqlx::PgPool;
use zengrid_db::models::grid_item::{CreateGridItem, UpdateGridItem};
use zengrid_db::repositories::GridItemRepo;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_item(title: &str) -> CreateGridItem {
    CreateGridItem {
        title: title.to_string(),
        description: None,
        url: None,
        image_url: None,
        category: None,
        sort_order: None,
    }
}

fn new_item_in(title: &str, category: &str, sort_order: i64) -> CreateGridItem {
    CreateGridItem {
        title: title.to_string(),
        description: None,
        url: None,
        image_url: None,
        category: Some(category.to_string()),
        sort_order: Some(sort_order),
    }
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_assigns_id_and_forces_active(pool: PgPool) {
    let created = GridItemRepo::create(&pool, &new_item_in("A", "news", 1))
        .await
        .unwrap();

    assert!(created.id > 0);
    assert_eq!(created.title, "A");
    assert_eq!(created.category.as_deref(), Some("news"));
    assert_eq!(created.sort_order, Some(1));
    assert!(created.is_active);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_created_ids_are_never_reused(pool: PgPool) {
    let first = GridItemRepo::create(&pool, &new_item("First")).await.unwrap();
    assert!(GridItemRepo::delete(&pool, first.id).await.unwrap());

    let second = GridItemRepo::create(&pool, &new_item("Second"))
        .await
        .unwrap();
    assert_ne!(first.id, second.id);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_category_and_order_is_permitted(pool: PgPool) {
    GridItemRepo::create(&pool, &new_item_in("One", "news", 1))
        .await
        .unwrap();
    GridItemRepo::create(&pool, &new_item_in("Two", "news", 1))
        .await
        .unwrap();

    let items = GridItemRepo::list_active_by_category(&pool, "news")
        .await
        .unwrap();
    assert_eq!(items.len(), 2);
}

// ---------------------------------------------------------------------------
// Listings
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_active_on_empty_table_returns_empty(pool: PgPool) {
    let items = GridItemRepo::list_active(&pool).await.unwrap();
    assert!(items.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_active_excludes_deactivated_items(pool: PgPool) {
    let keep = GridItemRepo::create(&pool, &new_item("Keep")).await.unwrap();
    let hide = GridItemRepo::create(&pool, &new_item("Hide")).await.unwrap();

    let patch = UpdateGridItem {
        is_active: Some(false),
        ..Default::default()
    };
    GridItemRepo::update(&pool, hide.id, &patch).await.unwrap();

    let items = GridItemRepo::list_active(&pool).await.unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, keep.id);
    assert!(items.iter().all(|i| i.is_active));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_listing_orders_by_sort_order_then_insertion(pool: PgPool) {
    // Two items with explicit positions (inserted out of order), two without.
    let third = GridItemRepo::create(&pool, &new_item_in("Third", "x", 30))
        .await
        .unwrap();
    let first = GridItemRepo::create(&pool, &new_item_in("First", "x", 10))
        .await
        .unwrap();
    let unordered_a = GridItemRepo::create(&pool, &new_item("NoOrderA")).await.unwrap();
    let unordered_b = GridItemRepo::create(&pool, &new_item("NoOrderB")).await.unwrap();

    let items = GridItemRepo::list_active(&pool).await.unwrap();
    let ids: Vec<_> = items.iter().map(|i| i.id).collect();

    // Explicit positions ascending, then NULL positions in insertion order.
    assert_eq!(ids, vec![first.id, third.id, unordered_a.id, unordered_b.id]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_category_listing_is_exact_and_active_only(pool: PgPool) {
    let news = GridItemRepo::create(&pool, &new_item_in("News", "news", 1))
        .await
        .unwrap();
    GridItemRepo::create(&pool, &new_item_in("Sports", "sports", 1))
        .await
        .unwrap();
    let hidden = GridItemRepo::create(&pool, &new_item_in("HiddenNews", "news", 2))
        .await
        .unwrap();
    GridItemRepo::update(
        &pool,
        hidden.id,
        &UpdateGridItem {
            is_active: Some(false),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    let items = GridItemRepo::list_active_by_category(&pool, "news")
        .await
        .unwrap();

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, news.id);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unknown_category_returns_empty(pool: PgPool) {
    GridItemRepo::create(&pool, &new_item_in("One", "news", 1))
        .await
        .unwrap();

    let items = GridItemRepo::list_active_by_category(&pool, "nope")
        .await
        .unwrap();
    assert!(items.is_empty());
}

// ---------------------------------------------------------------------------
// Update (sparse patch)
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_changes_only_supplied_fields(pool: PgPool) {
    let created = GridItemRepo::create(
        &pool,
        &CreateGridItem {
            title: "A".to_string(),
            description: Some("desc".to_string()),
            url: Some("https://example.com".to_string()),
            image_url: None,
            category: Some("news".to_string()),
            sort_order: Some(1),
        },
    )
    .await
    .unwrap();

    let patch = UpdateGridItem {
        sort_order: Some(5),
        ..Default::default()
    };
    let updated = GridItemRepo::update(&pool, created.id, &patch)
        .await
        .unwrap()
        .expect("row should exist");

    assert_eq!(updated.sort_order, Some(5));
    // Everything not named in the patch keeps its pre-update value.
    assert_eq!(updated.title, "A");
    assert_eq!(updated.description.as_deref(), Some("desc"));
    assert_eq!(updated.url.as_deref(), Some("https://example.com"));
    assert_eq!(updated.category.as_deref(), Some("news"));
    assert!(updated.is_active);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_can_toggle_active_flag_both_ways(pool: PgPool) {
    let created = GridItemRepo::create(&pool, &new_item("Toggle")).await.unwrap();

    let off = GridItemRepo::update(
        &pool,
        created.id,
        &UpdateGridItem {
            is_active: Some(false),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert!(!off.is_active);

    let on = GridItemRepo::update(
        &pool,
        created.id,
        &UpdateGridItem {
            is_active: Some(true),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert!(on.is_active);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_nonexistent_returns_none(pool: PgPool) {
    let patch = UpdateGridItem {
        title: Some("B".to_string()),
        ..Default::default()
    };
    let result = GridItemRepo::update(&pool, 999_999, &patch).await.unwrap();
    assert!(result.is_none());
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_removes_row_and_second_delete_fails(pool: PgPool) {
    let created = GridItemRepo::create(&pool, &new_item_in("Gone", "news", 1))
        .await
        .unwrap();

    assert!(GridItemRepo::delete(&pool, created.id).await.unwrap());

    let items = GridItemRepo::list_active_by_category(&pool, "news")
        .await
        .unwrap();
    assert!(items.iter().all(|i| i.id != created.id));

    // Both re-delete and update on the vanished id report not-found.
    assert!(!GridItemRepo::delete(&pool, created.id).await.unwrap());
    let patch = UpdateGridItem {
        title: Some("B".to_string()),
        ..Default::default()
    };
    assert!(GridItemRepo::update(&pool, created.id, &patch)
        .await
        .unwrap()
        .is_none());
}

// ---------------------------------------------------------------------------
// Full lifecycle scenario
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_update_delete_scenario(pool: PgPool) {
    let created = GridItemRepo::create(&pool, &new_item_in("A", "news", 1))
        .await
        .unwrap();

    let listed = GridItemRepo::list_active(&pool).await.unwrap();
    let found = listed.iter().find(|i| i.id == created.id).unwrap();
    assert_eq!(found.title, "A");
    assert!(found.is_active);

    GridItemRepo::update(
        &pool,
        created.id,
        &UpdateGridItem {
            sort_order: Some(5),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    let listed = GridItemRepo::list_active(&pool).await.unwrap();
    let found = listed.iter().find(|i| i.id == created.id).unwrap();
    assert_eq!(found.sort_order, Some(5));
    assert_eq!(found.title, "A");

    GridItemRepo::delete(&pool, created.id).await.unwrap();

    let listed = GridItemRepo::list_active(&pool).await.unwrap();
    assert!(listed.iter().all(|i| i.id != created.id));
}
