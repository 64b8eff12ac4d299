mod common;

use axum_storefront_api::{
    dto::cart::AddToCartRequest,
    error::AppError,
    services::{analytics_service, cart_service, order_service},
};
use rust_decimal::Decimal;

use common::{create_category, create_product, create_user, setup_state};

// Rollups over committed orders: summary counts, top sellers by units sold,
// revenue grouped per day.
#[tokio::test]
async fn analytics_rollup_flow() -> anyhow::Result<()> {
    let state = match setup_state().await? {
        Some(state) => state,
        None => return Ok(()),
    };

    let admin = create_user(&state, "admin", "admin@example.com").await?;
    let alice = create_user(&state, "user", "alice@example.com").await?;
    let bob = create_user(&state, "user", "bob@example.com").await?;

    let category_id = create_category(&state, "Apparel", "apparel").await?;
    let hoodie_price: Decimal = "55.00".parse()?;
    let shirt_price: Decimal = "20.00".parse()?;
    let hoodie_id = create_product(&state, category_id, "Axum Hoodie", hoodie_price).await?;
    let shirt_id = create_product(&state, category_id, "Tokio Shirt", shirt_price).await?;

    // Analytics are admin-only.
    let err = analytics_service::summary(&state.pool, &alice)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Forbidden));

    // With no orders the summary still reports the catalog size.
    let empty = analytics_service::summary(&state.pool, &admin)
        .await?
        .data
        .unwrap();
    assert_eq!(empty.total_orders, 0);
    assert_eq!(empty.total_revenue, Decimal::ZERO);
    assert_eq!(empty.total_products, 2);

    let daily = analytics_service::daily_sales(&state.pool, &admin)
        .await?
        .data
        .unwrap();
    assert!(daily.items.is_empty());

    // Alice buys 2 hoodies + 1 shirt, Bob buys 1 shirt.
    for _ in 0..2 {
        cart_service::add_to_cart(&state.pool, &alice, AddToCartRequest { product_id: hoodie_id })
            .await?;
    }
    cart_service::add_to_cart(&state.pool, &alice, AddToCartRequest { product_id: shirt_id })
        .await?;
    order_service::checkout(&state, &alice).await?;

    cart_service::add_to_cart(&state.pool, &bob, AddToCartRequest { product_id: shirt_id })
        .await?;
    order_service::checkout(&state, &bob).await?;

    let expected_revenue: Decimal = "150.00".parse()?;

    let summary = analytics_service::summary(&state.pool, &admin)
        .await?
        .data
        .unwrap();
    assert_eq!(summary.total_orders, 2);
    assert_eq!(summary.total_revenue, expected_revenue);
    assert_eq!(summary.total_products, 2);

    // Units sold, not order count: the hoodie (2 units in one order) beats
    // nothing, ties with the shirt (1 + 1 across two orders).
    let top = analytics_service::top_products(&state.pool, &admin, 5)
        .await?
        .data
        .unwrap();
    assert_eq!(top.items.len(), 2);
    assert_eq!(top.items[0].name, "Axum Hoodie");
    assert_eq!(top.items[0].units_sold, 2);
    assert_eq!(top.items[1].name, "Tokio Shirt");
    assert_eq!(top.items[1].units_sold, 2);

    let limited = analytics_service::top_products(&state.pool, &admin, 1)
        .await?
        .data
        .unwrap();
    assert_eq!(limited.items.len(), 1);

    // Both orders were placed just now, so they fall on one calendar day.
    let daily = analytics_service::daily_sales(&state.pool, &admin)
        .await?
        .data
        .unwrap();
    assert_eq!(daily.items.len(), 1);
    assert_eq!(daily.items[0].revenue, expected_revenue);

    Ok(())
}
