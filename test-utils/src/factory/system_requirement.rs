use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test system requirements with customizable fields.
pub struct SystemRequirementFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    operational_system: String,
    storage: String,
    processor: String,
    memory: String,
    video_board: String,
}

impl<'a> SystemRequirementFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Requirement {}", id),
            operational_system: "Windows 10".to_string(),
            storage: "500 GB".to_string(),
            processor: "Intel Core i5".to_string(),
            memory: "8 GB".to_string(),
            video_board: "GeForce GTX 1060".to_string(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn operational_system(mut self, operational_system: impl Into<String>) -> Self {
        self.operational_system = operational_system.into();
        self
    }

    pub fn storage(mut self, storage: impl Into<String>) -> Self {
        self.storage = storage.into();
        self
    }

    pub fn processor(mut self, processor: impl Into<String>) -> Self {
        self.processor = processor.into();
        self
    }

    pub fn memory(mut self, memory: impl Into<String>) -> Self {
        self.memory = memory.into();
        self
    }

    pub fn video_board(mut self, video_board: impl Into<String>) -> Self {
        self.video_board = video_board.into();
        self
    }

    pub async fn build(self) -> Result<entity::system_requirement::Model, DbErr> {
        entity::system_requirement::ActiveModel {
            name: ActiveValue::Set(self.name),
            operational_system: ActiveValue::Set(self.operational_system),
            storage: ActiveValue::Set(self.storage),
            processor: ActiveValue::Set(self.processor),
            memory: ActiveValue::Set(self.memory),
            video_board: ActiveValue::Set(self.video_board),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a system requirement with default values.
pub async fn create_system_requirement(
    db: &DatabaseConnection,
) -> Result<entity::system_requirement::Model, DbErr> {
    SystemRequirementFactory::new(db).build().await
}
