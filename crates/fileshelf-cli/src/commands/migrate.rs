//! Database migration command.

use fileshelf_core::config::AppConfig;
use fileshelf_core::error::AppError;
use fileshelf_database::DatabasePool;

use crate::output;

/// Apply pending migrations to the configured PostgreSQL database.
pub async fn execute(config: &AppConfig) -> Result<(), AppError> {
    if config.database.provider != "postgres" {
        return Err(AppError::configuration(format!(
            "Migrations need the postgres provider, configured provider is '{}'",
            config.database.provider
        )));
    }

    let pool = DatabasePool::connect(&config.database).await?;
    let result = pool.migrate().await;
    pool.close().await;
    result?;

    output::print_success("All migrations applied successfully.");
    Ok(())
}
