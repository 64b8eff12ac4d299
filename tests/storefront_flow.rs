mod common;

use axum_storefront_api::{
    dto::cart::AddToCartRequest,
    error::AppError,
    services::{cart_service, order_service},
};
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ActiveValue::Set, EntityTrait};

use common::{create_category, create_product, create_user, setup_state};

// Integration flow: repeat adds collapse into one entry, checkout drains the
// cart atomically, and recorded prices survive later catalog edits.
#[tokio::test]
async fn cart_checkout_and_price_snapshot_flow() -> anyhow::Result<()> {
    let state = match setup_state().await? {
        Some(state) => state,
        None => return Ok(()),
    };

    let user = create_user(&state, "user", "user@example.com").await?;
    let other = create_user(&state, "user", "other@example.com").await?;

    let category_id = create_category(&state, "Mugs", "mugs").await?;
    let price: Decimal = "10.00".parse()?;
    let product_id = create_product(&state, category_id, "Ferris Mug", price).await?;

    // Checkout with nothing in the cart creates no order.
    let err = order_service::checkout(&state, &user).await.unwrap_err();
    assert!(matches!(err, AppError::EmptyCart));
    let order_count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM orders")
        .fetch_one(&state.pool)
        .await?;
    assert_eq!(order_count.0, 0);

    // Three adds of the same product end up as one entry with quantity 3.
    for _ in 0..3 {
        cart_service::add_to_cart(
            &state.pool,
            &user,
            AddToCartRequest { product_id },
        )
        .await?;
    }

    let entry_count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM cart_items WHERE user_id = $1")
        .bind(user.user_id)
        .fetch_one(&state.pool)
        .await?;
    assert_eq!(entry_count.0, 1);

    let cart = cart_service::view_cart(&state.pool, &user).await?;
    let cart = cart.data.unwrap();
    assert_eq!(cart.items.len(), 1);
    assert_eq!(cart.items[0].quantity, 3);
    assert_eq!(cart.total, "30.00".parse::<Decimal>()?);

    // A foreign user cannot remove the entry.
    let entry_id = cart.items[0].id;
    let err = cart_service::remove_from_cart(&state.pool, &other, entry_id)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound));

    // Checkout converts the cart into an order with the computed total.
    let checkout = order_service::checkout(&state, &user).await?;
    let converted = checkout.data.unwrap();
    assert_eq!(converted.order.total_price, "30.00".parse::<Decimal>()?);
    assert_eq!(converted.items.len(), 1);
    assert_eq!(converted.items[0].product_id, product_id);
    assert_eq!(converted.items[0].quantity, 3);
    assert_eq!(converted.items[0].price, price);

    let remaining: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM cart_items WHERE user_id = $1")
        .bind(user.user_id)
        .fetch_one(&state.pool)
        .await?;
    assert_eq!(remaining.0, 0);

    // Raising the catalog price afterwards must not rewrite order history.
    let product = axum_storefront_api::entity::Products::find_by_id(product_id)
        .one(&state.orm)
        .await?
        .unwrap();
    let mut active: axum_storefront_api::entity::products::ActiveModel = product.into();
    active.price = Set("99.00".parse()?);
    active.update(&state.orm).await?;

    let history = order_service::order_history(&state, &user).await?;
    let history = history.data.unwrap();
    assert_eq!(history.items.len(), 1);
    assert_eq!(
        history.items[0].order.total_price,
        "30.00".parse::<Decimal>()?
    );
    assert_eq!(history.items[0].items[0].price, price);

    // The order is also visible individually, but not to other users.
    let order_id = history.items[0].order.id;
    let fetched = order_service::get_order(&state, &user, order_id).await?;
    assert_eq!(fetched.data.unwrap().order.id, order_id);
    let err = order_service::get_order(&state, &other, order_id)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound));

    Ok(())
}
