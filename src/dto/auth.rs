use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Default, ToSchema)]
pub struct LoginAttributesDto {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct LoginPayload {
    #[serde(default)]
    pub login: LoginAttributesDto,
}
