//! Integration tests for the organization listing: sort allowlist,
//! direction handling and per-row enrichment.

use assert_matches::assert_matches;
use sqlx::PgPool;

use donaria_db::error::DbError;
use donaria_db::models::need::CreateNeed;
use donaria_db::repositories::NeedRepo;

async fn insert_organization(pool: &PgPool, name: &str, slug: &str) -> i64 {
    let row: (i64,) = sqlx::query_as(
        "INSERT INTO organizations (name, slug, email) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(name)
    .bind(slug)
    .bind(format!("{slug}@example.org"))
    .fetch_one(pool)
    .await
    .unwrap();
    row.0
}

fn new_need(organization_id: i64, title: &str) -> CreateNeed {
    CreateNeed {
        category_id: 1,
        organization_id,
        title: title.to_string(),
        description: String::new(),
        required_qty: 10,
        reached_qty: 0,
        due_date: None,
        unit: "units".to_string(),
    }
}

/// Create three needs for a fresh organization, returning their ids in
/// insertion order.
async fn seed_needs(pool: &PgPool, org: i64) -> Vec<i64> {
    let mut ids = Vec::new();
    for title in ["First", "Second", "Third"] {
        let need = NeedRepo::create(pool, &new_need(org, title)).await.unwrap();
        ids.push(need.id);
    }
    ids
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_no_sort_returns_organization_needs_only(pool: PgPool) {
    let org = insert_organization(&pool, "Open Kitchen", "open-kitchen").await;
    let stranger = insert_organization(&pool, "Book Drive", "book-drive").await;
    let ids = seed_needs(&pool, org).await;
    NeedRepo::create(&pool, &new_need(stranger, "Atlases"))
        .await
        .unwrap();

    let needs = NeedRepo::list_by_organization(&pool, org, None, None)
        .await
        .unwrap();
    assert_eq!(needs.len(), ids.len());
    assert!(needs.iter().all(|n| n.need.organization_id == org));
    // Every row comes enriched.
    assert!(needs.iter().all(|n| n.category.id == 1));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_sort_by_id(pool: PgPool) {
    let org = insert_organization(&pool, "Open Kitchen", "open-kitchen").await;
    let ids = seed_needs(&pool, org).await;

    let asc = NeedRepo::list_by_organization(&pool, org, Some("id"), Some("asc"))
        .await
        .unwrap();
    let got: Vec<i64> = asc.iter().map(|n| n.need.id).collect();
    assert_eq!(got, ids);

    let desc = NeedRepo::list_by_organization(&pool, org, Some("id"), Some("desc"))
        .await
        .unwrap();
    let got: Vec<i64> = desc.iter().map(|n| n.need.id).collect();
    let mut reversed = ids.clone();
    reversed.reverse();
    assert_eq!(got, reversed);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_sort_by_updated_at_desc(pool: PgPool) {
    let org = insert_organization(&pool, "Open Kitchen", "open-kitchen").await;
    let ids = seed_needs(&pool, org).await;

    // Give every need a distinct update time out of insertion order.
    for (id, days) in [(ids[0], 3), (ids[1], 1), (ids[2], 2)] {
        sqlx::query("UPDATE needs SET updated_at = NOW() + $2 * INTERVAL '1 day' WHERE id = $1")
            .bind(id)
            .bind(days as f64)
            .execute(&pool)
            .await
            .unwrap();
    }

    let needs = NeedRepo::list_by_organization(&pool, org, Some("updated_at"), Some("desc"))
        .await
        .unwrap();
    let got: Vec<i64> = needs.iter().map(|n| n.need.id).collect();
    assert_eq!(got, vec![ids[0], ids[2], ids[1]]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unknown_sort_column_falls_back_silently(pool: PgPool) {
    let org = insert_organization(&pool, "Open Kitchen", "open-kitchen").await;
    let ids = seed_needs(&pool, org).await;

    let needs = NeedRepo::list_by_organization(&pool, org, Some("bogus"), Some("asc"))
        .await
        .unwrap();
    assert_eq!(needs.len(), ids.len());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_bad_direction_rejected(pool: PgPool) {
    let org = insert_organization(&pool, "Open Kitchen", "open-kitchen").await;
    seed_needs(&pool, org).await;

    let err = NeedRepo::list_by_organization(&pool, org, Some("id"), Some("sideways"))
        .await
        .unwrap_err();
    assert_matches!(err, DbError::Validation { field: "order", .. });
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_listing_embeds_images(pool: PgPool) {
    let org = insert_organization(&pool, "Open Kitchen", "open-kitchen").await;
    let ids = seed_needs(&pool, org).await;

    NeedRepo::create_image(
        &pool,
        &donaria_db::models::need::CreateNeedImage {
            need_id: ids[1],
            name: "shelf".to_string(),
            url: "https://img.example.org/shelf.jpg".to_string(),
        },
    )
    .await
    .unwrap();

    let needs = NeedRepo::list_by_organization(&pool, org, Some("id"), None)
        .await
        .unwrap();
    let with_image = needs.iter().find(|n| n.need.id == ids[1]).unwrap();
    assert_eq!(with_image.images.len(), 1);
    assert!(needs
        .iter()
        .filter(|n| n.need.id != ids[1])
        .all(|n| n.images.is_empty()));
}
