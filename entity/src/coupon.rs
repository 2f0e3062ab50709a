use sea_orm::entity::prelude::*;

/// Discount coupon. `status` holds the lifecycle state as text
/// ("active" or "inactive"); the domain layer owns the mapping.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "coupon")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub code: String,
    pub status: String,
    pub discount_value: f64,
    pub due_date: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
