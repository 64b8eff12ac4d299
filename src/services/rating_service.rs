use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use crate::{
    audit::log_audit,
    db::DbPool,
    dto::ratings::{RateProductRequest, RatingResponse},
    error::{AppError, AppResult},
    middleware::auth::AuthUser,
    models::Rating,
    response::{ApiResponse, Meta},
};

#[derive(FromRow)]
struct RatingUpsertRow {
    id: Uuid,
    user_id: Uuid,
    product_id: Uuid,
    stars: i32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    created: bool,
}

pub async fn rate_product(
    pool: &DbPool,
    user: &AuthUser,
    product_id: Uuid,
    payload: RateProductRequest,
) -> AppResult<ApiResponse<RatingResponse>> {
    if !(1..=5).contains(&payload.stars) {
        return Err(AppError::BadRequest(
            "Stars must be between 1 and 5".to_string(),
        ));
    }

    let product_exists: Option<(Uuid,)> = sqlx::query_as("SELECT id FROM products WHERE id = $1")
        .bind(product_id)
        .fetch_optional(pool)
        .await?;
    if product_exists.is_none() {
        return Err(AppError::NotFound);
    }

    // Atomic upsert on the (user, product) key; the latest stars win.
    // xmax = 0 distinguishes an inserted row from an updated one.
    let row: RatingUpsertRow = sqlx::query_as(
        r#"
        INSERT INTO ratings (id, user_id, product_id, stars)
        VALUES ($1, $2, $3, $4)
        ON CONFLICT (user_id, product_id)
        DO UPDATE SET stars = EXCLUDED.stars, updated_at = now()
        RETURNING id, user_id, product_id, stars, created_at, updated_at, (xmax = 0) AS created
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(user.user_id)
    .bind(product_id)
    .bind(payload.stars)
    .fetch_one(pool)
    .await?;

    if let Err(err) = log_audit(
        pool,
        Some(user.user_id),
        "rating_set",
        Some("ratings"),
        Some(serde_json::json!({ "product_id": product_id, "stars": payload.stars })),
    )
    .await
    {
        tracing::warn!(error = %err, "audit log failed");
    }

    let resp = RatingResponse {
        rating: Rating {
            id: row.id,
            user_id: row.user_id,
            product_id: row.product_id,
            stars: row.stars,
            created_at: row.created_at,
            updated_at: row.updated_at,
        },
        created: row.created,
    };

    Ok(ApiResponse::success("Rating saved", resp, Some(Meta::empty())))
}
