use chrono::{DateTime, Utc};

use crate::{
    dto::game::{GameAttributesDto, GameDto},
    error::{validation::ValidationErrors, AppError},
    model::blank,
};

/// Play mode of a catalog game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    Pvp,
    Pve,
    Both,
}

impl GameMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pvp => "pvp",
            Self::Pve => "pve",
            Self::Both => "both",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pvp" => Some(Self::Pvp),
            "pve" => Some(Self::Pve),
            "both" => Some(Self::Both),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    pub id: i32,
    pub mode: GameMode,
    pub release_date: DateTime<Utc>,
    pub developer: String,
    pub system_requirement_id: i32,
}

impl Game {
    pub fn from_entity(entity: entity::game::Model) -> Result<Self, AppError> {
        let mode = GameMode::parse(&entity.mode).ok_or_else(|| {
            AppError::InternalError(format!(
                "Unknown mode '{}' stored for game {}",
                entity.mode, entity.id
            ))
        })?;

        Ok(Self {
            id: entity.id,
            mode,
            release_date: entity.release_date,
            developer: entity.developer,
            system_requirement_id: entity.system_requirement_id,
        })
    }

    pub fn into_dto(self) -> GameDto {
        GameDto {
            id: self.id,
            mode: self.mode.as_str().to_string(),
            release_date: self.release_date,
            developer: self.developer,
            system_requirement_id: self.system_requirement_id,
        }
    }
}

/// Client-supplied game attributes for create and update operations.
#[derive(Debug, Clone, Default)]
pub struct GameParams {
    pub mode: Option<String>,
    pub release_date: Option<DateTime<Utc>>,
    pub developer: Option<String>,
    pub system_requirement_id: Option<i32>,
}

impl GameParams {
    pub fn from_dto(dto: GameAttributesDto) -> Self {
        Self {
            mode: dto.mode,
            release_date: dto.release_date,
            developer: dto.developer,
            system_requirement_id: dto.system_requirement_id,
        }
    }

    pub fn merge_into(self, current: &Game) -> GameParams {
        GameParams {
            mode: self.mode.or_else(|| Some(current.mode.as_str().to_string())),
            release_date: self.release_date.or(Some(current.release_date)),
            developer: self.developer.or_else(|| Some(current.developer.clone())),
            system_requirement_id: self
                .system_requirement_id
                .or(Some(current.system_requirement_id)),
        }
    }

    /// Presence and membership checks. Whether the referenced system
    /// requirement exists is the service's job.
    pub fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();

        if blank(&self.mode) {
            errors.add("mode", "can't be blank");
        } else if GameMode::parse(self.mode.as_deref().unwrap_or_default()).is_none() {
            errors.add("mode", "is not included in the list");
        }

        if self.release_date.is_none() {
            errors.add("release_date", "can't be blank");
        }

        if blank(&self.developer) {
            errors.add("developer", "can't be blank");
        }

        if self.system_requirement_id.is_none() {
            errors.add("system_requirement", "must exist");
        }

        errors
    }
}

/// Finalized attributes for inserting a game, produced after validation.
#[derive(Debug, Clone)]
pub struct NewGame {
    pub mode: GameMode,
    pub release_date: DateTime<Utc>,
    pub developer: String,
    pub system_requirement_id: i32,
}

/// Column-level changes for an update; unset fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct GameChanges {
    pub mode: Option<GameMode>,
    pub release_date: Option<DateTime<Utc>>,
    pub developer: Option<String>,
    pub system_requirement_id: Option<i32>,
}
