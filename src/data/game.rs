use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

use crate::{
    data::loading::{LoadedPage, LoadingParams, ModelLoader, SearchableEntity},
    model::game::{GameChanges, NewGame},
};

impl SearchableEntity for entity::prelude::Game {
    fn column_for(field: &str) -> Option<Self::Column> {
        match field {
            "id" => Some(entity::game::Column::Id),
            "mode" => Some(entity::game::Column::Mode),
            "release_date" => Some(entity::game::Column::ReleaseDate),
            "developer" => Some(entity::game::Column::Developer),
            _ => None,
        }
    }
}

pub struct GameRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GameRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, record: NewGame) -> Result<entity::game::Model, DbErr> {
        entity::game::ActiveModel {
            mode: ActiveValue::Set(record.mode.as_str().to_string()),
            release_date: ActiveValue::Set(record.release_date),
            developer: ActiveValue::Set(record.developer),
            system_requirement_id: ActiveValue::Set(record.system_requirement_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::game::Model>, DbErr> {
        entity::prelude::Game::find_by_id(id).one(self.db).await
    }

    /// Counts games pointing at a system requirement. Used to block destroys
    /// that would orphan catalog entries.
    pub async fn count_for_system_requirement(
        &self,
        system_requirement_id: i32,
    ) -> Result<u64, DbErr> {
        entity::prelude::Game::find()
            .filter(entity::game::Column::SystemRequirementId.eq(system_requirement_id))
            .count(self.db)
            .await
    }

    /// Applies the supplied column changes, leaving unset fields untouched.
    pub async fn update(
        &self,
        id: i32,
        changes: GameChanges,
    ) -> Result<entity::game::Model, DbErr> {
        let game = entity::prelude::Game::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Game with id {} not found",
                id
            )))?;

        let mut active_model: entity::game::ActiveModel = game.into();
        if let Some(mode) = changes.mode {
            active_model.mode = ActiveValue::Set(mode.as_str().to_string());
        }
        if let Some(release_date) = changes.release_date {
            active_model.release_date = ActiveValue::Set(release_date);
        }
        if let Some(developer) = changes.developer {
            active_model.developer = ActiveValue::Set(developer);
        }
        if let Some(system_requirement_id) = changes.system_requirement_id {
            active_model.system_requirement_id = ActiveValue::Set(system_requirement_id);
        }

        active_model.update(self.db).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Game::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    pub async fn get_paginated(
        &self,
        params: &LoadingParams,
    ) -> Result<LoadedPage<entity::game::Model>, DbErr> {
        ModelLoader::new(self.db)
            .load(entity::prelude::Game::find(), params)
            .await
    }
}
