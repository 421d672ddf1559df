//! Database migration command.
//!
//! Runs the embedded migrations from `crates/server/migrations/` against
//! the `SQLite` database named by `MARKET_DATABASE_URL`. The server never
//! migrates automatically at startup; this command is the only migration
//! path.

use adorly_server::store::sqlite;

use super::{CommandError, database_url};

/// Run all pending migrations.
///
/// # Errors
///
/// Returns `CommandError` if the database URL is missing, the connection
/// fails, or a migration fails.
pub async fn run() -> Result<(), CommandError> {
    let url = database_url()?;

    tracing::info!("Connecting to database...");
    let pool = sqlite::create_pool(&url).await?;

    tracing::info!("Running migrations...");
    sqlx::migrate!("../server/migrations").run(&pool).await?;

    tracing::info!("Migrations complete");
    Ok(())
}
