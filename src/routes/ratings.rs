use axum::{
    Json,
    extract::{Path, State},
};
use uuid::Uuid;

use crate::{
    dto::ratings::{RateProductRequest, RatingResponse},
    error::AppResult,
    middleware::auth::AuthUser,
    response::ApiResponse,
    services::rating_service,
    state::AppState,
};

#[utoipa::path(
    put,
    path = "/api/products/{product_id}/rating",
    params(
        ("product_id" = Uuid, Path, description = "Product ID")
    ),
    request_body = RateProductRequest,
    responses(
        (status = 200, description = "Upsert the caller's rating; latest stars win", body = ApiResponse<RatingResponse>),
        (status = 400, description = "Stars outside 1-5"),
        (status = 404, description = "Product not found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Ratings"
)]
pub async fn rate_product(
    State(state): State<AppState>,
    user: AuthUser,
    Path(product_id): Path<Uuid>,
    Json(payload): Json<RateProductRequest>,
) -> AppResult<Json<ApiResponse<RatingResponse>>> {
    let resp = rating_service::rate_product(&state.pool, &user, product_id, payload).await?;
    Ok(Json(resp))
}
