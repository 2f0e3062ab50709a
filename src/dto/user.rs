use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::dto::api::PageMetaDto;

/// Whitelisted user fields; the password digest never leaves the server.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub profile: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct UserAttributesDto {
    pub name: Option<String>,
    pub email: Option<String>,
    pub profile: Option<String>,
    pub password: Option<String>,
    pub password_confirmation: Option<String>,
}

/// Request body for create/update: `{"user": {...}}`. A missing `user` key
/// behaves like an empty attribute set.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct UserPayload {
    #[serde(default)]
    pub user: UserAttributesDto,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub user: UserDto,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct PaginatedUsersDto {
    pub users: Vec<UserDto>,
    pub meta: PageMetaDto,
}
