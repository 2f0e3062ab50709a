use axum::{
    routing::{get, patch, post},
    Json, Router,
};
use utoipa::OpenApi;

use crate::{
    controller::{auth, coupon, game, system_requirement, user},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Gamestore Admin API", description = "Administrative catalog API"),
    paths(
        auth::login,
        auth::logout,
        auth::get_user,
        user::index,
        user::create,
        user::update,
        user::destroy,
        game::index,
        game::create,
        game::update,
        game::destroy,
        coupon::index,
        coupon::create,
        coupon::update,
        coupon::destroy,
        system_requirement::index,
        system_requirement::create,
        system_requirement::update,
        system_requirement::destroy,
    )
)]
struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/admin/v1/auth/login", post(auth::login))
        .route("/admin/v1/auth/logout", post(auth::logout))
        .route("/admin/v1/auth/user", get(auth::get_user))
        .route("/admin/v1/users", get(user::index).post(user::create))
        .route(
            "/admin/v1/users/{id}",
            patch(user::update).delete(user::destroy),
        )
        .route("/admin/v1/games", get(game::index).post(game::create))
        .route(
            "/admin/v1/games/{id}",
            patch(game::update).delete(game::destroy),
        )
        .route("/admin/v1/coupons", get(coupon::index).post(coupon::create))
        .route(
            "/admin/v1/coupons/{id}",
            patch(coupon::update).delete(coupon::destroy),
        )
        .route(
            "/admin/v1/system_requirements",
            get(system_requirement::index).post(system_requirement::create),
        )
        .route(
            "/admin/v1/system_requirements/{id}",
            patch(system_requirement::update).delete(system_requirement::destroy),
        )
        .route("/admin/v1/docs/openapi.json", get(openapi_json))
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
