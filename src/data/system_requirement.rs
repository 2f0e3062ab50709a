use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
};

use crate::{
    data::loading::{LoadedPage, LoadingParams, ModelLoader, SearchableEntity},
    model::system_requirement::{NewSystemRequirement, SystemRequirementChanges},
};

impl SearchableEntity for entity::prelude::SystemRequirement {
    fn column_for(field: &str) -> Option<Self::Column> {
        match field {
            "id" => Some(entity::system_requirement::Column::Id),
            "name" => Some(entity::system_requirement::Column::Name),
            "operational_system" => Some(entity::system_requirement::Column::OperationalSystem),
            "storage" => Some(entity::system_requirement::Column::Storage),
            "processor" => Some(entity::system_requirement::Column::Processor),
            "memory" => Some(entity::system_requirement::Column::Memory),
            "video_board" => Some(entity::system_requirement::Column::VideoBoard),
            _ => None,
        }
    }
}

pub struct SystemRequirementRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SystemRequirementRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        record: NewSystemRequirement,
    ) -> Result<entity::system_requirement::Model, DbErr> {
        entity::system_requirement::ActiveModel {
            name: ActiveValue::Set(record.name),
            operational_system: ActiveValue::Set(record.operational_system),
            storage: ActiveValue::Set(record.storage),
            processor: ActiveValue::Set(record.processor),
            memory: ActiveValue::Set(record.memory),
            video_board: ActiveValue::Set(record.video_board),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn get_by_id(
        &self,
        id: i32,
    ) -> Result<Option<entity::system_requirement::Model>, DbErr> {
        entity::prelude::SystemRequirement::find_by_id(id)
            .one(self.db)
            .await
    }

    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::SystemRequirement::find_by_id(id)
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Applies the supplied column changes, leaving unset fields untouched.
    pub async fn update(
        &self,
        id: i32,
        changes: SystemRequirementChanges,
    ) -> Result<entity::system_requirement::Model, DbErr> {
        let requirement = entity::prelude::SystemRequirement::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "System requirement with id {} not found",
                id
            )))?;

        let mut active_model: entity::system_requirement::ActiveModel = requirement.into();
        if let Some(name) = changes.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(operational_system) = changes.operational_system {
            active_model.operational_system = ActiveValue::Set(operational_system);
        }
        if let Some(storage) = changes.storage {
            active_model.storage = ActiveValue::Set(storage);
        }
        if let Some(processor) = changes.processor {
            active_model.processor = ActiveValue::Set(processor);
        }
        if let Some(memory) = changes.memory {
            active_model.memory = ActiveValue::Set(memory);
        }
        if let Some(video_board) = changes.video_board {
            active_model.video_board = ActiveValue::Set(video_board);
        }

        active_model.update(self.db).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::SystemRequirement::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    pub async fn get_paginated(
        &self,
        params: &LoadingParams,
    ) -> Result<LoadedPage<entity::system_requirement::Model>, DbErr> {
        ModelLoader::new(self.db)
            .load(entity::prelude::SystemRequirement::find(), params)
            .await
    }
}
