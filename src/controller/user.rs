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
        user::{PaginatedUsersDto, UserPayload, UserResponse},
    },
    error::AppError,
    middleware::auth::{AuthGuard, Permission},
    model::user::{User, UserParams},
    service::user::UserService,
    state::AppState,
    util::query::parse_loading_params,
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// List users.
///
/// Accepts `search[<field>]`, `order[<field>]=asc|desc`, `page`, and
/// `length` query parameters. Only accessible by admins.
///
/// # Returns
/// - `200 OK` - Page of users plus pagination meta
/// - `401 Unauthorized` / `403 Forbidden` - No admin session
#[utoipa::path(
    get,
    path = "/admin/v1/users",
    tag = USER_TAG,
    params(
        ("page" = Option<u64>, Query, description = "1-indexed page number (default: 1)"),
        ("length" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Page of users", body = PaginatedUsersDto),
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
    let page = UserService::new(&state.db).load_page(&params).await?;

    Ok((
        StatusCode::OK,
        Json(PaginatedUsersDto {
            meta: PageMetaDto::from_page(&page),
            users: page.records.into_iter().map(User::into_dto).collect(),
        }),
    ))
}

/// Create a user.
///
/// # Returns
/// - `201 Created` - The created user's whitelisted fields
/// - `422 Unprocessable Entity` - Field-keyed validation messages
#[utoipa::path(
    post,
    path = "/admin/v1/users",
    tag = USER_TAG,
    request_body = UserPayload,
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 422, description = "Validation failed", body = ValidationErrorsDto)
    ),
)]
pub async fn create(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<UserPayload>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let params = UserParams::from_dto(payload.user);
    let user = UserService::new(&state.db).create(params).await?;

    Ok((
        StatusCode::CREATED,
        Json(UserResponse {
            user: user.into_dto(),
        }),
    ))
}

/// Update a user. Only the supplied fields change.
///
/// # Returns
/// - `200 OK` - The updated user
/// - `404 Not Found` - Unknown user id
/// - `422 Unprocessable Entity` - Field-keyed validation messages
#[utoipa::path(
    patch,
    path = "/admin/v1/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User id")),
    request_body = UserPayload,
    responses(
        (status = 200, description = "User updated", body = UserResponse),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 422, description = "Validation failed", body = ValidationErrorsDto)
    ),
)]
pub async fn update(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UserPayload>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let params = UserParams::from_dto(payload.user);
    let user = UserService::new(&state.db).update(id, params).await?;

    match user {
        Some(user) => Ok((
            StatusCode::OK,
            Json(UserResponse {
                user: user.into_dto(),
            }),
        )),
        None => Err(AppError::NotFound("User not found".to_string())),
    }
}

/// Delete a user.
///
/// # Returns
/// - `204 No Content` - User deleted
/// - `404 Not Found` - Unknown user id
#[utoipa::path(
    delete,
    path = "/admin/v1/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 204, description = "User deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto)
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

    let deleted = UserService::new(&state.db).destroy(id).await?;

    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound("User not found".to_string()))
    }
}
