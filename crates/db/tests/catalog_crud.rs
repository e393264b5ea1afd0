//! Integration tests for the customer and product repositories,
//! including the idempotent product seed.

use sqlx::SqlitePool;

use sawmill_core::catalog::DEFAULT_PRODUCT_NAMES;
use sawmill_db::models::customer::CreateCustomer;
use sawmill_db::models::product::CreateProduct;
use sawmill_db::repositories::{CustomerRepo, ProductRepo};

#[sqlx::test]
async fn customer_crud_round_trip(pool: SqlitePool) {
    let created = CustomerRepo::create(
        &pool,
        &CreateCustomer {
            name: "Skolkovo".into(),
        },
    )
    .await
    .unwrap();

    let found = CustomerRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.name, "Skolkovo");

    let all = CustomerRepo::list_all(&pool).await.unwrap();
    assert_eq!(all.len(), 1);

    assert!(CustomerRepo::delete(&pool, created.id).await.unwrap());
    assert!(!CustomerRepo::delete(&pool, created.id).await.unwrap());
    assert!(CustomerRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test]
async fn product_crud_round_trip(pool: SqlitePool) {
    let created = ProductRepo::create(
        &pool,
        &CreateProduct {
            name: "Planed Boards".into(),
            product_type: Some("Planed Boards".into()),
        },
    )
    .await
    .unwrap();
    assert_eq!(created.product_type.as_deref(), Some("Planed Boards"));

    let all = ProductRepo::list_all(&pool).await.unwrap();
    assert_eq!(all.len(), 1);

    assert!(ProductRepo::delete(&pool, created.id).await.unwrap());
    assert!(!ProductRepo::delete(&pool, created.id).await.unwrap());
}

#[sqlx::test]
async fn duplicate_product_name_violates_unique_constraint(pool: SqlitePool) {
    let input = CreateProduct {
        name: "Pellets".into(),
        product_type: None,
    };
    ProductRepo::create(&pool, &input).await.unwrap();

    let err = ProductRepo::create(&pool, &input).await.unwrap_err();
    assert!(matches!(err, sqlx::Error::Database(_)));
}

#[sqlx::test]
async fn seed_defaults_is_idempotent(pool: SqlitePool) {
    let first = ProductRepo::seed_defaults(&pool).await.unwrap();
    assert_eq!(first, DEFAULT_PRODUCT_NAMES.len() as u64);

    let second = ProductRepo::seed_defaults(&pool).await.unwrap();
    assert_eq!(second, 0);

    let all = ProductRepo::list_all(&pool).await.unwrap();
    assert_eq!(all.len(), DEFAULT_PRODUCT_NAMES.len());
}

#[sqlx::test]
async fn seed_defaults_keeps_existing_rows(pool: SqlitePool) {
    // A pre-existing product with a seeded name is left untouched.
    let existing = ProductRepo::create(
        &pool,
        &CreateProduct {
            name: "Beams".into(),
            product_type: Some("Beams".into()),
        },
    )
    .await
    .unwrap();

    ProductRepo::seed_defaults(&pool).await.unwrap();

    let found = ProductRepo::find_by_id(&pool, existing.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.product_type.as_deref(), Some("Beams"));
}
