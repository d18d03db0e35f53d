use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};
use tracing::info;

use crate::config::db::{db_url, DbOwner, DbProfile};
use crate::error::AppError;

/// Unified database connector that supports different profiles and owners
/// This function does NOT run any migrations
pub async fn connect_db(
    profile: DbProfile,
    owner: DbOwner,
) -> Result<DatabaseConnection, AppError> {
    // Build database URL from environment variables
    let database_url = db_url(profile, owner)?;

    // Connect to database
    let conn = Database::connect(&database_url).await?;
    Ok(conn)
}

/// Single entrypoint used by consumers and tests: connect and migrate.
pub async fn bootstrap_db(
    profile: DbProfile,
    owner: DbOwner,
) -> Result<DatabaseConnection, AppError> {
    let conn = connect_db(profile, owner).await?;
    Migrator::up(&conn, None).await?;
    info!("database bootstrapped and migrated");
    Ok(conn)
}
