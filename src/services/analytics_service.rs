use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::FromRow;

use crate::{
    db::DbPool,
    dto::analytics::{DailySalesEntry, DailySalesList, SalesSummary, TopProduct, TopProductList},
    error::AppResult,
    middleware::auth::{AuthUser, ensure_admin},
    response::{ApiResponse, Meta},
};

pub async fn summary(pool: &DbPool, user: &AuthUser) -> AppResult<ApiResponse<SalesSummary>> {
    ensure_admin(user)?;

    let total_orders: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM orders")
        .fetch_one(pool)
        .await?;

    let total_revenue: (Decimal,) =
        sqlx::query_as("SELECT COALESCE(SUM(total_price), 0) FROM orders")
            .fetch_one(pool)
            .await?;

    let total_products: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM products")
        .fetch_one(pool)
        .await?;

    let data = SalesSummary {
        total_orders: total_orders.0,
        total_revenue: total_revenue.0,
        total_products: total_products.0,
    };

    Ok(ApiResponse::success("Summary", data, Some(Meta::empty())))
}

#[derive(FromRow)]
struct TopProductRow {
    name: String,
    units_sold: i64,
}

/// Top sellers ranked by units sold, i.e. summed order item quantities rather
/// than the number of orders containing the product.
pub async fn top_products(
    pool: &DbPool,
    user: &AuthUser,
    limit: i64,
) -> AppResult<ApiResponse<TopProductList>> {
    ensure_admin(user)?;

    let rows = sqlx::query_as::<_, TopProductRow>(
        r#"
        SELECT p.name, SUM(oi.quantity)::BIGINT AS units_sold
        FROM order_items oi
        JOIN products p ON p.id = oi.product_id
        GROUP BY p.name
        ORDER BY units_sold DESC, p.name ASC
        LIMIT $1
        "#,
    )
    .bind(limit)
    .fetch_all(pool)
    .await?;

    let items = rows
        .into_iter()
        .map(|row| TopProduct {
            name: row.name,
            units_sold: row.units_sold,
        })
        .collect();

    Ok(ApiResponse::success(
        "Top products",
        TopProductList { items },
        Some(Meta::empty()),
    ))
}

#[derive(FromRow)]
struct DailySalesRow {
    day: NaiveDate,
    revenue: Decimal,
}

/// Revenue per UTC calendar day, ascending, one entry per day with at least
/// one order.
pub async fn daily_sales(pool: &DbPool, user: &AuthUser) -> AppResult<ApiResponse<DailySalesList>> {
    ensure_admin(user)?;

    let rows = sqlx::query_as::<_, DailySalesRow>(
        r#"
        SELECT (created_at AT TIME ZONE 'UTC')::DATE AS day, SUM(total_price) AS revenue
        FROM orders
        GROUP BY day
        ORDER BY day ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    let items = rows
        .into_iter()
        .map(|row| DailySalesEntry {
            day: row.day,
            revenue: row.revenue,
        })
        .collect();

    Ok(ApiResponse::success(
        "Daily sales",
        DailySalesList { items },
        Some(Meta::empty()),
    ))
}
