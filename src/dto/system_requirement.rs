use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::dto::api::PageMetaDto;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct SystemRequirementDto {
    pub id: i32,
    pub name: String,
    pub operational_system: String,
    pub storage: String,
    pub processor: String,
    pub memory: String,
    pub video_board: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct SystemRequirementAttributesDto {
    pub name: Option<String>,
    pub operational_system: Option<String>,
    pub storage: Option<String>,
    pub processor: Option<String>,
    pub memory: Option<String>,
    pub video_board: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct SystemRequirementPayload {
    #[serde(default)]
    pub system_requirement: SystemRequirementAttributesDto,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct SystemRequirementResponse {
    pub system_requirement: SystemRequirementDto,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct PaginatedSystemRequirementsDto {
    pub system_requirements: Vec<SystemRequirementDto>,
    pub meta: PageMetaDto,
}
