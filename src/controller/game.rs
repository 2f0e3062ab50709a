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
        game::{GamePayload, GameResponse, PaginatedGamesDto},
    },
    error::AppError,
    middleware::auth::{AuthGuard, Permission},
    model::game::{Game, GameParams},
    service::game::GameService,
    state::AppState,
    util::query::parse_loading_params,
};

/// Tag for grouping game endpoints in OpenAPI documentation
pub static GAME_TAG: &str = "game";

/// List games.
///
/// Accepts `search[<field>]`, `order[<field>]=asc|desc`, `page`, and
/// `length` query parameters. Only accessible by admins.
#[utoipa::path(
    get,
    path = "/admin/v1/games",
    tag = GAME_TAG,
    params(
        ("page" = Option<u64>, Query, description = "1-indexed page number (default: 1)"),
        ("length" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Page of games", body = PaginatedGamesDto),
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
    let page = GameService::new(&state.db).load_page(&params).await?;

    Ok((
        StatusCode::OK,
        Json(PaginatedGamesDto {
            meta: PageMetaDto::from_page(&page),
            games: page.records.into_iter().map(Game::into_dto).collect(),
        }),
    ))
}

/// Create a game. The referenced system requirement must exist.
#[utoipa::path(
    post,
    path = "/admin/v1/games",
    tag = GAME_TAG,
    request_body = GamePayload,
    responses(
        (status = 201, description = "Game created", body = GameResponse),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 422, description = "Validation failed", body = ValidationErrorsDto)
    ),
)]
pub async fn create(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<GamePayload>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let params = GameParams::from_dto(payload.game);
    let game = GameService::new(&state.db).create(params).await?;

    Ok((
        StatusCode::CREATED,
        Json(GameResponse {
            game: game.into_dto(),
        }),
    ))
}

/// Update a game. Only the supplied fields change.
#[utoipa::path(
    patch,
    path = "/admin/v1/games/{id}",
    tag = GAME_TAG,
    params(("id" = i32, Path, description = "Game id")),
    request_body = GamePayload,
    responses(
        (status = 200, description = "Game updated", body = GameResponse),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Game not found", body = ErrorDto),
        (status = 422, description = "Validation failed", body = ValidationErrorsDto)
    ),
)]
pub async fn update(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<GamePayload>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let params = GameParams::from_dto(payload.game);
    let game = GameService::new(&state.db).update(id, params).await?;

    match game {
        Some(game) => Ok((
            StatusCode::OK,
            Json(GameResponse {
                game: game.into_dto(),
            }),
        )),
        None => Err(AppError::NotFound("Game not found".to_string())),
    }
}

/// Delete a game.
#[utoipa::path(
    delete,
    path = "/admin/v1/games/{id}",
    tag = GAME_TAG,
    params(("id" = i32, Path, description = "Game id")),
    responses(
        (status = 204, description = "Game deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Game not found", body = ErrorDto)
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

    let deleted = GameService::new(&state.db).destroy(id).await?;

    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound("Game not found".to_string()))
    }
}
