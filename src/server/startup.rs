use dioxus_logger::tracing;

use crate::server::{config::Config, error::AppError, storage::ThesisStorage};

/// Connects to the database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from configuration, then
/// runs all pending SeaORM migrations (including the worktype seed) so the schema is
/// up-to-date before any request is served.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the staging and published directories for thesis files.
pub async fn prepare_storage(storage: &ThesisStorage) -> Result<(), AppError> {
    storage.ensure_dirs().await?;
    tracing::debug!("Thesis storage ready at {}", storage.root().display());

    Ok(())
}

/// Logs the credentials upload clients and staff need.
///
/// The thesis secret is generated on every start unless configured, so it has to be
/// visible to the operator.
pub fn announce_secrets(config: &Config) {
    tracing::warn!("THESIS_SECRET_KEY: {}", config.thesis_secret_key);
    tracing::info!(
        "Admin panel available at /admin/ for user '{}'",
        config.admin_username
    );
}
