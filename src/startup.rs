use sea_orm::DatabaseConnection;
use time::Duration;
use tower_sessions::{Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::{
    config::Config,
    data::user::UserRepository,
    error::AppError,
    model::user::{NewUser, Profile},
    service::auth::hash_password,
};

/// Connects to the SQLite database and runs pending migrations.
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the session layer on top of the application database pool.
pub async fn connect_to_session(
    db: &DatabaseConnection,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let pool = db.get_sqlite_connection_pool();
    let session_store = SqliteStore::new(pool.clone());

    session_store
        .migrate()
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to migrate session store: {}", e)))?;

    Ok(SessionManagerLayer::new(session_store)
        .with_expiry(Expiry::OnInactivity(Duration::days(7))))
}

/// Seeds the bootstrap admin from ADMIN_EMAIL/ADMIN_PASSWORD when no admin
/// user exists yet. Without the pair the gap is only logged, since every
/// admin endpoint will reject requests until an admin can log in.
pub async fn check_for_admin(db: &DatabaseConnection, config: &Config) -> Result<(), AppError> {
    let repo = UserRepository::new(db);

    if repo.admin_exists().await? {
        return Ok(());
    }

    let (Some(email), Some(password)) = (
        config.admin_email.as_deref(),
        config.admin_password.as_deref(),
    ) else {
        tracing::warn!(
            "No admin user exists and ADMIN_EMAIL/ADMIN_PASSWORD are not set; \
             admin endpoints will be unreachable"
        );
        return Ok(());
    };

    repo.create(NewUser {
        name: "Administrator".to_string(),
        email: email.to_string(),
        profile: Profile::Admin,
        password_digest: hash_password(password)?,
    })
    .await?;

    tracing::info!("Created bootstrap admin user {}", email);

    Ok(())
}
