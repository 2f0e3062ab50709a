use std::collections::HashMap;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    dto::{
        api::{ErrorDto, PageMetaDto, ValidationErrorsDto},
        coupon::{CouponPayload, CouponResponse, PaginatedCouponsDto},
    },
    error::AppError,
    middleware::auth::{AuthGuard, Permission},
    model::coupon::{Coupon, CouponParams},
    service::coupon::CouponService,
    state::AppState,
    util::query::parse_loading_params,
};

/// Tag for grouping coupon endpoints in OpenAPI documentation
pub static COUPON_TAG: &str = "coupon";

/// List coupons.
///
/// Accepts `search[<field>]`, `order[<field>]=asc|desc`, `page`, and
/// `length` query parameters. Only accessible by admins.
#[utoipa::path(
    get,
    path = "/admin/v1/coupons",
    tag = COUPON_TAG,
    params(
        ("page" = Option<u64>, Query, description = "1-indexed page number (default: 1)"),
        ("length" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Page of coupons", body = PaginatedCouponsDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto)
    ),
)]
pub async fn index(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let params = parse_loading_params(&query);
    let page = CouponService::new(&state.db).load_page(&params).await?;

    Ok((
        StatusCode::OK,
        Json(PaginatedCouponsDto {
            meta: PageMetaDto::from_page(&page),
            coupons: page.records.into_iter().map(Coupon::into_dto).collect(),
        }),
    ))
}

/// Create a coupon.
#[utoipa::path(
    post,
    path = "/admin/v1/coupons",
    tag = COUPON_TAG,
    request_body = CouponPayload,
    responses(
        (status = 201, description = "Coupon created", body = CouponResponse),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 422, description = "Validation failed", body = ValidationErrorsDto)
    ),
)]
pub async fn create(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CouponPayload>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let params = CouponParams::from_dto(payload.coupon);
    let coupon = CouponService::new(&state.db).create(params).await?;

    Ok((
        StatusCode::CREATED,
        Json(CouponResponse {
            coupon: coupon.into_dto(),
        }),
    ))
}

/// Update a coupon. Only the supplied fields change.
#[utoipa::path(
    patch,
    path = "/admin/v1/coupons/{id}",
    tag = COUPON_TAG,
    params(("id" = i32, Path, description = "Coupon id")),
    request_body = CouponPayload,
    responses(
        (status = 200, description = "Coupon updated", body = CouponResponse),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Coupon not found", body = ErrorDto),
        (status = 422, description = "Validation failed", body = ValidationErrorsDto)
    ),
)]
pub async fn update(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<CouponPayload>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let params = CouponParams::from_dto(payload.coupon);
    let coupon = CouponService::new(&state.db).update(id, params).await?;

    match coupon {
        Some(coupon) => Ok((
            StatusCode::OK,
            Json(CouponResponse {
                coupon: coupon.into_dto(),
            }),
        )),
        None => Err(AppError::NotFound("Coupon not found".to_string())),
    }
}

/// Delete a coupon.
#[utoipa::path(
    delete,
    path = "/admin/v1/coupons/{id}",
    tag = COUPON_TAG,
    params(("id" = i32, Path, description = "Coupon id")),
    responses(
        (status = 204, description = "Coupon deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Coupon not found", body = ErrorDto)
    ),
)]
pub async fn destroy(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let deleted = CouponService::new(&state.db).destroy(id).await?;

    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound("Coupon not found".to_string()))
    }
}
