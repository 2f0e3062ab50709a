use sea_orm::entity::prelude::*;

/// Catalog entry for a game. `mode` holds the play mode as text
/// ("pvp", "pve" or "both"); the domain layer owns the mapping.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "game")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub mode: String,
    pub release_date: DateTimeUtc,
    pub developer: String,
    pub system_requirement_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::system_requirement::Entity",
        from = "Column::SystemRequirementId",
        to = "super::system_requirement::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    SystemRequirement,
}

impl Related<super::system_requirement::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SystemRequirement.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
