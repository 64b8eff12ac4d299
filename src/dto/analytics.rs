use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct SalesSummary {
    pub total_orders: i64,
    pub total_revenue: Decimal,
    pub total_products: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TopProduct {
    pub name: String,
    pub units_sold: i64,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct TopProductList {
    #[schema(value_type = Vec<TopProduct>)]
    pub items: Vec<TopProduct>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DailySalesEntry {
    pub day: NaiveDate,
    pub revenue: Decimal,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct DailySalesList {
    #[schema(value_type = Vec<DailySalesEntry>)]
    pub items: Vec<DailySalesEntry>,
}
