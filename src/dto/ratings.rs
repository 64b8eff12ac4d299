use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Rating;

#[derive(Debug, Deserialize, ToSchema)]
pub struct RateProductRequest {
    pub stars: i32,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RatingResponse {
    pub rating: Rating,
    /// True when this call created the rating, false when it overwrote one.
    pub created: bool,
}
