use chrono::{DateTime, TimeZone, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test games with customizable fields.
///
/// When no system requirement id is supplied, `build()` creates a default
/// system requirement first, matching the entity's foreign key.
pub struct GameFactory<'a> {
    db: &'a DatabaseConnection,
    mode: String,
    release_date: DateTime<Utc>,
    developer: String,
    system_requirement_id: Option<i32>,
}

impl<'a> GameFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            mode: "pvp".to_string(),
            release_date: Utc.with_ymd_and_hms(2020, 11, 12, 22, 57, 43).unwrap(),
            developer: format!("Developer {}", id),
            system_requirement_id: None,
        }
    }

    pub fn mode(mut self, mode: impl Into<String>) -> Self {
        self.mode = mode.into();
        self
    }

    pub fn release_date(mut self, release_date: DateTime<Utc>) -> Self {
        self.release_date = release_date;
        self
    }

    pub fn developer(mut self, developer: impl Into<String>) -> Self {
        self.developer = developer.into();
        self
    }

    pub fn system_requirement_id(mut self, system_requirement_id: i32) -> Self {
        self.system_requirement_id = Some(system_requirement_id);
        self
    }

    pub async fn build(self) -> Result<entity::game::Model, DbErr> {
        let system_requirement_id = match self.system_requirement_id {
            Some(id) => id,
            None => {
                crate::factory::system_requirement::create_system_requirement(self.db)
                    .await?
                    .id
            }
        };

        entity::game::ActiveModel {
            mode: ActiveValue::Set(self.mode),
            release_date: ActiveValue::Set(self.release_date),
            developer: ActiveValue::Set(self.developer),
            system_requirement_id: ActiveValue::Set(system_requirement_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a game (and its system requirement) with default values.
pub async fn create_game(db: &DatabaseConnection) -> Result<entity::game::Model, DbErr> {
    GameFactory::new(db).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use sea_orm::EntityTrait;

    #[tokio::test]
    async fn creates_game_with_requirement_dependency() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_catalog_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let game = create_game(db).await?;

        let requirement =
            entity::prelude::SystemRequirement::find_by_id(game.system_requirement_id)
                .one(db)
                .await?;
        assert!(requirement.is_some());

        Ok(())
    }
}
