use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::dto::api::PageMetaDto;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct GameDto {
    pub id: i32,
    pub mode: String,
    pub release_date: DateTime<Utc>,
    pub developer: String,
    pub system_requirement_id: i32,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct GameAttributesDto {
    pub mode: Option<String>,
    pub release_date: Option<DateTime<Utc>>,
    pub developer: Option<String>,
    pub system_requirement_id: Option<i32>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct GamePayload {
    #[serde(default)]
    pub game: GameAttributesDto,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct GameResponse {
    pub game: GameDto,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct PaginatedGamesDto {
    pub games: Vec<GameDto>,
    pub meta: PageMetaDto,
}
