use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Coupon::Table)
                    .if_not_exists()
                    .col(pk_auto(Coupon::Id))
                    .col(string(Coupon::Code))
                    .col(string(Coupon::Status))
                    .col(double(Coupon::DiscountValue))
                    .col(timestamp_with_time_zone(Coupon::DueDate))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Coupon::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Coupon {
    Table,
    Id,
    Code,
    Status,
    DiscountValue,
    DueDate,
}
