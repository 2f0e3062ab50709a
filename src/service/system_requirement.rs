use sea_orm::DatabaseConnection;

use crate::{
    data::{
        game::GameRepository,
        loading::{LoadedPage, LoadingParams},
        system_requirement::SystemRequirementRepository,
    },
    error::{validation::ValidationErrors, AppError},
    model::system_requirement::{
        NewSystemRequirement, SystemRequirement, SystemRequirementChanges,
        SystemRequirementParams,
    },
};

pub struct SystemRequirementService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SystemRequirementService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn load_page(
        &self,
        params: &LoadingParams,
    ) -> Result<LoadedPage<SystemRequirement>, AppError> {
        let page = SystemRequirementRepository::new(self.db)
            .get_paginated(params)
            .await?;

        Ok(page.map(SystemRequirement::from_entity))
    }

    pub async fn create(
        &self,
        params: SystemRequirementParams,
    ) -> Result<SystemRequirement, AppError> {
        let repo = SystemRequirementRepository::new(self.db);

        params.validate().into_result()?;

        // Validation guarantees presence of every field.
        let record = NewSystemRequirement {
            name: params.name.clone().unwrap_or_default(),
            operational_system: params.operational_system.clone().unwrap_or_default(),
            storage: params.storage.clone().unwrap_or_default(),
            processor: params.processor.clone().unwrap_or_default(),
            memory: params.memory.clone().unwrap_or_default(),
            video_board: params.video_board.clone().unwrap_or_default(),
        };

        let created = repo.create(record).await?;

        Ok(SystemRequirement::from_entity(created))
    }

    /// Partial update. Returns None when the requirement does not exist;
    /// validation runs against the merged attribute set so untouched fields
    /// keep their stored values.
    pub async fn update(
        &self,
        id: i32,
        params: SystemRequirementParams,
    ) -> Result<Option<SystemRequirement>, AppError> {
        let repo = SystemRequirementRepository::new(self.db);

        let Some(existing) = repo.get_by_id(id).await? else {
            return Ok(None);
        };
        let current = SystemRequirement::from_entity(existing);

        let merged = params.clone().merge_into(&current);
        merged.validate().into_result()?;

        let changes = SystemRequirementChanges {
            name: params.name,
            operational_system: params.operational_system,
            storage: params.storage,
            processor: params.processor,
            memory: params.memory,
            video_board: params.video_board,
        };

        let updated = repo.update(id, changes).await?;

        Ok(Some(SystemRequirement::from_entity(updated)))
    }

    /// Returns true when the requirement was deleted, false when the id was
    /// unknown. A requirement still referenced by games cannot be destroyed
    /// and fails with a base-keyed validation error.
    pub async fn destroy(&self, id: i32) -> Result<bool, AppError> {
        let repo = SystemRequirementRepository::new(self.db);

        if repo.get_by_id(id).await?.is_none() {
            return Ok(false);
        }

        let dependent_games = GameRepository::new(self.db)
            .count_for_system_requirement(id)
            .await?;
        if dependent_games > 0 {
            let mut errors = ValidationErrors::new();
            errors.add("base", "cannot be deleted because dependent games exist");
            return Err(errors.into());
        }

        repo.delete(id).await?;

        Ok(true)
    }
}
