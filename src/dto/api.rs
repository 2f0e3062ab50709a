use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{data::loading::LoadedPage, error::validation::ValidationErrors};

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// Body of a 422 response: `{"errors": {"fields": {"name": ["can't be blank"]}}}`.
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ValidationErrorsDto {
    pub errors: ErrorFieldsDto,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ErrorFieldsDto {
    pub fields: BTreeMap<String, Vec<String>>,
}

impl From<ValidationErrors> for ValidationErrorsDto {
    fn from(errors: ValidationErrors) -> Self {
        Self {
            errors: ErrorFieldsDto {
                fields: errors.into_fields(),
            },
        }
    }
}

/// Pagination counts attached to every list response.
#[derive(Serialize, Deserialize, Debug, PartialEq, ToSchema)]
pub struct PageMetaDto {
    /// Total matches before pagination.
    pub total: u64,
    /// 1-indexed page number.
    pub page: u64,
    /// Page size.
    pub length: u64,
    pub total_pages: u64,
}

impl PageMetaDto {
    pub fn from_page<M>(page: &LoadedPage<M>) -> Self {
        Self {
            total: page.total,
            page: page.page,
            length: page.length,
            total_pages: page.total_pages,
        }
    }
}
