use crate::{
    dto::system_requirement::{SystemRequirementAttributesDto, SystemRequirementDto},
    error::validation::ValidationErrors,
    model::blank,
};

#[derive(Debug, Clone, PartialEq)]
pub struct SystemRequirement {
    pub id: i32,
    pub name: String,
    pub operational_system: String,
    pub storage: String,
    pub processor: String,
    pub memory: String,
    pub video_board: String,
}

impl SystemRequirement {
    pub fn from_entity(entity: entity::system_requirement::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            operational_system: entity.operational_system,
            storage: entity.storage,
            processor: entity.processor,
            memory: entity.memory,
            video_board: entity.video_board,
        }
    }

    pub fn into_dto(self) -> SystemRequirementDto {
        SystemRequirementDto {
            id: self.id,
            name: self.name,
            operational_system: self.operational_system,
            storage: self.storage,
            processor: self.processor,
            memory: self.memory,
            video_board: self.video_board,
        }
    }
}

/// Client-supplied attributes for create and update operations.
#[derive(Debug, Clone, Default)]
pub struct SystemRequirementParams {
    pub name: Option<String>,
    pub operational_system: Option<String>,
    pub storage: Option<String>,
    pub processor: Option<String>,
    pub memory: Option<String>,
    pub video_board: Option<String>,
}

impl SystemRequirementParams {
    pub fn from_dto(dto: SystemRequirementAttributesDto) -> Self {
        Self {
            name: dto.name,
            operational_system: dto.operational_system,
            storage: dto.storage,
            processor: dto.processor,
            memory: dto.memory,
            video_board: dto.video_board,
        }
    }

    pub fn merge_into(self, current: &SystemRequirement) -> SystemRequirementParams {
        SystemRequirementParams {
            name: self.name.or_else(|| Some(current.name.clone())),
            operational_system: self
                .operational_system
                .or_else(|| Some(current.operational_system.clone())),
            storage: self.storage.or_else(|| Some(current.storage.clone())),
            processor: self.processor.or_else(|| Some(current.processor.clone())),
            memory: self.memory.or_else(|| Some(current.memory.clone())),
            video_board: self
                .video_board
                .or_else(|| Some(current.video_board.clone())),
        }
    }

    pub fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();

        for (field, value) in [
            ("name", &self.name),
            ("operational_system", &self.operational_system),
            ("storage", &self.storage),
            ("processor", &self.processor),
            ("memory", &self.memory),
            ("video_board", &self.video_board),
        ] {
            if blank(value) {
                errors.add(field, "can't be blank");
            }
        }

        errors
    }
}

/// Finalized attributes for inserting a system requirement.
#[derive(Debug, Clone)]
pub struct NewSystemRequirement {
    pub name: String,
    pub operational_system: String,
    pub storage: String,
    pub processor: String,
    pub memory: String,
    pub video_board: String,
}

/// Column-level changes for an update; unset fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct SystemRequirementChanges {
    pub name: Option<String>,
    pub operational_system: Option<String>,
    pub storage: Option<String>,
    pub processor: Option<String>,
    pub memory: Option<String>,
    pub video_board: Option<String>,
}
