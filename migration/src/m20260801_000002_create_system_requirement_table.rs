use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SystemRequirement::Table)
                    .if_not_exists()
                    .col(pk_auto(SystemRequirement::Id))
                    .col(string(SystemRequirement::Name))
                    .col(string(SystemRequirement::OperationalSystem))
                    .col(string(SystemRequirement::Storage))
                    .col(string(SystemRequirement::Processor))
                    .col(string(SystemRequirement::Memory))
                    .col(string(SystemRequirement::VideoBoard))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SystemRequirement::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum SystemRequirement {
    Table,
    Id,
    Name,
    OperationalSystem,
    Storage,
    Processor,
    Memory,
    VideoBoard,
}
