use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    dto::{
        api::ErrorDto,
        auth::LoginPayload,
        user::UserResponse,
    },
    error::AppError,
    middleware::auth::AuthGuard,
    model::user::User,
    service::auth::AuthService,
    state::AppState,
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Session key holding the authenticated user's id.
pub static SESSION_AUTH_USER_ID: &str = "auth/user_id";

/// Authenticate with email and password and open a session.
///
/// # Returns
/// - `200 OK` - Credentials accepted, session established
/// - `401 Unauthorized` - Unknown email or wrong password
#[utoipa::path(
    post,
    path = "/admin/v1/auth/login",
    tag = AUTH_TAG,
    request_body = LoginPayload,
    responses(
        (status = 200, description = "Credentials accepted", body = UserResponse),
        (status = 401, description = "Unknown email or wrong password", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<LoginPayload>,
) -> Result<impl IntoResponse, AppError> {
    let email = payload.login.email.unwrap_or_default();
    let password = payload.login.password.unwrap_or_default();

    let user = AuthService::new(&state.db)
        .authenticate(&email, &password)
        .await?;

    session.insert(SESSION_AUTH_USER_ID, user.id).await?;

    Ok((
        StatusCode::OK,
        Json(UserResponse {
            user: user.into_dto(),
        }),
    ))
}

/// Close the current session.
///
/// # Returns
/// - `204 No Content` - Session cleared (also when none was open)
#[utoipa::path(
    post,
    path = "/admin/v1/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 204, description = "Session cleared")
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    session.flush().await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Get the currently authenticated user.
///
/// # Returns
/// - `200 OK` - The session's user
/// - `401 Unauthorized` - No valid session
#[utoipa::path(
    get,
    path = "/admin/v1/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "The session's user", body = UserResponse),
        (status = 401, description = "No valid session", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    Ok((
        StatusCode::OK,
        Json(UserResponse {
            user: User::from_entity(user)?.into_dto(),
        }),
    ))
}
