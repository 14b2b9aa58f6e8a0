mod model;
mod server;
mod view;

use clap::{Parser, Subcommand};
use dioxus_logger::tracing::{self, Level};
use tokio::net::TcpListener;

use crate::server::{
    config::Config, error::AppError, freeze::freeze, router::router, startup, state::AppState,
    storage::ThesisStorage,
};

#[derive(Parser)]
#[command(name = "se-site", version, about = "Department of software engineering website")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the web server (default)
    Serve,
    /// Render the public pages into a static site
    Build,
    /// Create the database schema and the upload directories
    Init,
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let cli = Cli::parse();

    dotenvy::dotenv().ok();
    if let Err(e) = dioxus_logger::init(Level::INFO) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    let config = Config::from_env()?;

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => serve(config).await,
        Command::Build => build(config).await,
        Command::Init => init(config).await,
    }
}

async fn serve(config: Config) -> Result<(), AppError> {
    let db = startup::connect_to_database(&config).await?;
    let state = AppState::new(db, config);
    startup::prepare_storage(&state.storage).await?;
    startup::announce_secrets(&state.config);

    let address = state.config.bind_address;
    let listener = TcpListener::bind(address).await?;
    tracing::info!("Starting server on http://{}", address);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn build(config: Config) -> Result<(), AppError> {
    let db = startup::connect_to_database(&config).await?;
    let static_dir = config.static_dir.clone();
    let destination = config.freezer_destination.clone();

    freeze(router(AppState::new(db, config)), &static_dir, &destination).await?;

    Ok(())
}

async fn init(config: Config) -> Result<(), AppError> {
    startup::connect_to_database(&config).await?;
    startup::prepare_storage(&ThesisStorage::new(config.static_dir.clone())).await?;
    tracing::info!("Database at {} is up to date", config.database_url);

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
    tracing::info!("Shutting down");
}
