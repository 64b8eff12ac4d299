mod common;

use axum_storefront_api::{
    dto::{ratings::RateProductRequest, wishlist::AddWishlistRequest},
    error::AppError,
    routes::params::Pagination,
    services::{rating_service, wishlist_service},
};
use rust_decimal::Decimal;

use common::{create_category, create_product, create_user, setup_state};

// Wishlist adds are idempotent and ratings upsert in place.
#[tokio::test]
async fn wishlist_and_rating_flow() -> anyhow::Result<()> {
    let state = match setup_state().await? {
        Some(state) => state,
        None => return Ok(()),
    };

    let user = create_user(&state, "user", "user@example.com").await?;
    let category_id = create_category(&state, "Stickers", "stickers").await?;
    let price: Decimal = "5.00".parse()?;
    let product_id = create_product(&state, category_id, "Rust Sticker Pack", price).await?;

    // Double add leaves exactly one wishlist row.
    for _ in 0..2 {
        wishlist_service::add_to_wishlist(
            &state.pool,
            &user,
            AddWishlistRequest { product_id },
        )
        .await?;
    }
    let wishlist_count: (i64,) =
        sqlx::query_as("SELECT COUNT(*) FROM wishlist_items WHERE user_id = $1")
            .bind(user.user_id)
            .fetch_one(&state.pool)
            .await?;
    assert_eq!(wishlist_count.0, 1);

    let wishlist = wishlist_service::view_wishlist(
        &state.pool,
        &user,
        Pagination {
            page: Some(1),
            per_page: Some(20),
        },
    )
    .await?;
    let items = wishlist.data.unwrap().items;
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, product_id);

    wishlist_service::remove_from_wishlist(&state.pool, &user, product_id).await?;
    let err = wishlist_service::remove_from_wishlist(&state.pool, &user, product_id)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound));

    // Out-of-range stars are rejected without writing anything.
    for stars in [0, 6] {
        let err = rating_service::rate_product(
            &state.pool,
            &user,
            product_id,
            RateProductRequest { stars },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }
    let rating_count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM ratings")
        .fetch_one(&state.pool)
        .await?;
    assert_eq!(rating_count.0, 0);

    // First rating creates, second overwrites the same row.
    let first = rating_service::rate_product(
        &state.pool,
        &user,
        product_id,
        RateProductRequest { stars: 4 },
    )
    .await?
    .data
    .unwrap();
    assert!(first.created);
    assert_eq!(first.rating.stars, 4);

    let second = rating_service::rate_product(
        &state.pool,
        &user,
        product_id,
        RateProductRequest { stars: 2 },
    )
    .await?
    .data
    .unwrap();
    assert!(!second.created);
    assert_eq!(second.rating.stars, 2);

    let rows: Vec<(i32,)> =
        sqlx::query_as("SELECT stars FROM ratings WHERE user_id = $1 AND product_id = $2")
            .bind(user.user_id)
            .bind(product_id)
            .fetch_all(&state.pool)
            .await?;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].0, 2);

    Ok(())
}
