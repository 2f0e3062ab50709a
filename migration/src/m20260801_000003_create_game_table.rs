use sea_orm_migration::{prelude::*, schema::*};

use super::m20260801_000002_create_system_requirement_table::SystemRequirement;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Game::Table)
                    .if_not_exists()
                    .col(pk_auto(Game::Id))
                    .col(string(Game::Mode))
                    .col(timestamp_with_time_zone(Game::ReleaseDate))
                    .col(string(Game::Developer))
                    .col(integer(Game::SystemRequirementId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_game_system_requirement_id")
                            .from(Game::Table, Game::SystemRequirementId)
                            .to(SystemRequirement::Table, SystemRequirement::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Game::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Game {
    Table,
    Id,
    Mode,
    ReleaseDate,
    Developer,
    SystemRequirementId,
}
