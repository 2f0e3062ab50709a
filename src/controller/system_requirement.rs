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
        system_requirement::{
            PaginatedSystemRequirementsDto, SystemRequirementPayload, SystemRequirementResponse,
        },
    },
    error::AppError,
    middleware::auth::{AuthGuard, Permission},
    model::system_requirement::{SystemRequirement, SystemRequirementParams},
    service::system_requirement::SystemRequirementService,
    state::AppState,
    util::query::parse_loading_params,
};

/// Tag for grouping system requirement endpoints in OpenAPI documentation
pub static SYSTEM_REQUIREMENT_TAG: &str = "system_requirement";

/// List system requirements.
///
/// Accepts `search[<field>]`, `order[<field>]=asc|desc`, `page`, and
/// `length` query parameters. Only accessible by admins.
#[utoipa::path(
    get,
    path = "/admin/v1/system_requirements",
    tag = SYSTEM_REQUIREMENT_TAG,
    params(
        ("page" = Option<u64>, Query, description = "1-indexed page number (default: 1)"),
        ("length" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Page of system requirements", body = PaginatedSystemRequirementsDto),
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
    let page = SystemRequirementService::new(&state.db)
        .load_page(&params)
        .await?;

    Ok((
        StatusCode::OK,
        Json(PaginatedSystemRequirementsDto {
            meta: PageMetaDto::from_page(&page),
            system_requirements: page
                .records
                .into_iter()
                .map(SystemRequirement::into_dto)
                .collect(),
        }),
    ))
}

/// Create a system requirement.
#[utoipa::path(
    post,
    path = "/admin/v1/system_requirements",
    tag = SYSTEM_REQUIREMENT_TAG,
    request_body = SystemRequirementPayload,
    responses(
        (status = 201, description = "System requirement created", body = SystemRequirementResponse),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 422, description = "Validation failed", body = ValidationErrorsDto)
    ),
)]
pub async fn create(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<SystemRequirementPayload>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let params = SystemRequirementParams::from_dto(payload.system_requirement);
    let requirement = SystemRequirementService::new(&state.db)
        .create(params)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(SystemRequirementResponse {
            system_requirement: requirement.into_dto(),
        }),
    ))
}

/// Update a system requirement. Only the supplied fields change.
#[utoipa::path(
    patch,
    path = "/admin/v1/system_requirements/{id}",
    tag = SYSTEM_REQUIREMENT_TAG,
    params(("id" = i32, Path, description = "System requirement id")),
    request_body = SystemRequirementPayload,
    responses(
        (status = 200, description = "System requirement updated", body = SystemRequirementResponse),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "System requirement not found", body = ErrorDto),
        (status = 422, description = "Validation failed", body = ValidationErrorsDto)
    ),
)]
pub async fn update(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<SystemRequirementPayload>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let params = SystemRequirementParams::from_dto(payload.system_requirement);
    let requirement = SystemRequirementService::new(&state.db)
        .update(id, params)
        .await?;

    match requirement {
        Some(requirement) => Ok((
            StatusCode::OK,
            Json(SystemRequirementResponse {
                system_requirement: requirement.into_dto(),
            }),
        )),
        None => Err(AppError::NotFound(
            "System requirement not found".to_string(),
        )),
    }
}

/// Delete a system requirement.
///
/// A requirement still referenced by games cannot be destroyed; the response
/// carries a base-keyed validation message.
#[utoipa::path(
    delete,
    path = "/admin/v1/system_requirements/{id}",
    tag = SYSTEM_REQUIREMENT_TAG,
    params(("id" = i32, Path, description = "System requirement id")),
    responses(
        (status = 204, description = "System requirement deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "System requirement not found", body = ErrorDto),
        (status = 422, description = "Destroy blocked by dependent games", body = ValidationErrorsDto)
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

    let deleted = SystemRequirementService::new(&state.db).destroy(id).await?;

    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(
            "System requirement not found".to_string(),
        ))
    }
}
