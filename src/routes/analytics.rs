use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};

use crate::{
    dto::analytics::{DailySalesList, SalesSummary, TopProductList},
    error::AppResult,
    middleware::auth::AuthUser,
    response::ApiResponse,
    routes::params::TopProductsQuery,
    services::analytics_service,
    state::AppState,
};

const DEFAULT_TOP_LIMIT: i64 = 5;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/summary", get(summary))
        .route("/top-products", get(top_products))
        .route("/daily-sales", get(daily_sales))
}

#[utoipa::path(
    get,
    path = "/api/analytics/summary",
    responses(
        (status = 200, description = "Order count, revenue sum and product count (admin only)", body = ApiResponse<SalesSummary>),
        (status = 403, description = "Forbidden"),
    ),
    security(("bearer_auth" = [])),
    tag = "Analytics"
)]
pub async fn summary(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<ApiResponse<SalesSummary>>> {
    let resp = analytics_service::summary(&state.pool, &user).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/analytics/top-products",
    params(
        ("limit" = Option<i64>, Query, description = "Number of products, default 5")
    ),
    responses(
        (status = 200, description = "Best sellers by units sold (admin only)", body = ApiResponse<TopProductList>),
        (status = 403, description = "Forbidden"),
    ),
    security(("bearer_auth" = [])),
    tag = "Analytics"
)]
pub async fn top_products(
    State(state): State<AppState>,
    user: AuthUser,
    Query(query): Query<TopProductsQuery>,
) -> AppResult<Json<ApiResponse<TopProductList>>> {
    let limit = query.limit.unwrap_or(DEFAULT_TOP_LIMIT).clamp(1, 100);
    let resp = analytics_service::top_products(&state.pool, &user, limit).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/analytics/daily-sales",
    responses(
        (status = 200, description = "Revenue per calendar day, ascending (admin only)", body = ApiResponse<DailySalesList>),
        (status = 403, description = "Forbidden"),
    ),
    security(("bearer_auth" = [])),
    tag = "Analytics"
)]
pub async fn daily_sales(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<ApiResponse<DailySalesList>>> {
    let resp = analytics_service::daily_sales(&state.pool, &user).await?;
    Ok(Json(resp))
}
