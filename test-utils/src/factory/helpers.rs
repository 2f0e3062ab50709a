//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests so factory-created entities
/// never collide on unique columns.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a system requirement and a game referencing it, both with default
/// values. Use the individual factories to customize either side.
pub async fn create_game_with_requirement(
    db: &DatabaseConnection,
) -> Result<(entity::system_requirement::Model, entity::game::Model), DbErr> {
    let requirement = crate::factory::system_requirement::create_system_requirement(db).await?;
    let game = crate::factory::game::GameFactory::new(db)
        .system_requirement_id(requirement.id)
        .build()
        .await?;

    Ok((requirement, game))
}
