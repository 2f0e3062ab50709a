use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::dto::api::PageMetaDto;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct CouponDto {
    pub id: i32,
    pub code: String,
    pub status: String,
    pub discount_value: f64,
    pub due_date: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct CouponAttributesDto {
    pub code: Option<String>,
    pub status: Option<String>,
    pub discount_value: Option<f64>,
    pub due_date: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct CouponPayload {
    #[serde(default)]
    pub coupon: CouponAttributesDto,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct CouponResponse {
    pub coupon: CouponDto,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct PaginatedCouponsDto {
    pub coupons: Vec<CouponDto>,
    pub meta: PageMetaDto,
}
