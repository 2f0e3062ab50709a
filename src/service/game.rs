use sea_orm::DatabaseConnection;

use crate::{
    data::{
        game::GameRepository,
        loading::{LoadedPage, LoadingParams},
        system_requirement::SystemRequirementRepository,
    },
    error::AppError,
    model::game::{Game, GameChanges, GameMode, GameParams, NewGame},
};

pub struct GameService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GameService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn load_page(&self, params: &LoadingParams) -> Result<LoadedPage<Game>, AppError> {
        let page = GameRepository::new(self.db).get_paginated(params).await?;

        page.try_map(Game::from_entity)
    }

    pub async fn create(&self, params: GameParams) -> Result<Game, AppError> {
        let repo = GameRepository::new(self.db);

        let mut errors = params.validate();
        if let Some(requirement_id) = params.system_requirement_id {
            if !SystemRequirementRepository::new(self.db)
                .exists(requirement_id)
                .await?
            {
                errors.add("system_requirement", "must exist");
            }
        }
        errors.into_result()?;

        // Validation guarantees presence and membership of these fields.
        let record = NewGame {
            mode: params
                .mode
                .as_deref()
                .and_then(GameMode::parse)
                .unwrap_or(GameMode::Both),
            release_date: params.release_date.unwrap_or_default(),
            developer: params.developer.clone().unwrap_or_default(),
            system_requirement_id: params.system_requirement_id.unwrap_or_default(),
        };

        let created = repo.create(record).await?;

        Game::from_entity(created)
    }

    /// Partial update. Returns None when the game does not exist; validation
    /// runs against the merged attribute set so untouched fields keep their
    /// stored values.
    pub async fn update(&self, id: i32, params: GameParams) -> Result<Option<Game>, AppError> {
        let repo = GameRepository::new(self.db);

        let Some(existing) = repo.get_by_id(id).await? else {
            return Ok(None);
        };
        let current = Game::from_entity(existing)?;

        let merged = params.clone().merge_into(&current);
        let mut errors = merged.validate();
        if let Some(requirement_id) = params.system_requirement_id {
            if !SystemRequirementRepository::new(self.db)
                .exists(requirement_id)
                .await?
            {
                errors.add("system_requirement", "must exist");
            }
        }
        errors.into_result()?;

        let changes = GameChanges {
            mode: params.mode.as_deref().and_then(GameMode::parse),
            release_date: params.release_date,
            developer: params.developer,
            system_requirement_id: params.system_requirement_id,
        };

        let updated = repo.update(id, changes).await?;

        Game::from_entity(updated).map(Some)
    }

    /// Returns true when a game was deleted, false when the id was unknown.
    pub async fn destroy(&self, id: i32) -> Result<bool, AppError> {
        let repo = GameRepository::new(self.db);

        if repo.get_by_id(id).await?.is_none() {
            return Ok(false);
        }

        repo.delete(id).await?;

        Ok(true)
    }
}
