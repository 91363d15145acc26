pub mod catalog;
pub mod config;
pub mod db;
pub mod interview;
pub mod models;

use tracing_subscriber::EnvFilter;

use catalog::SqliteCatalog;
use db::DatabaseError;
use interview::InterviewEngine;

/// Install the global fmt subscriber. `RUST_LOG` overrides the default filter.
/// Does nothing if a subscriber is already set.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .try_init();
}

/// Engine over the catalog in the application data directory, seeded on first
/// use, with tuning from `interview.json` when present.
pub fn open_default_engine() -> Result<InterviewEngine<SqliteCatalog>, DatabaseError> {
    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    std::fs::create_dir_all(config::app_data_dir())?;

    let catalog = SqliteCatalog::open_seeded(&config::catalog_db_path())?;
    let tuning = config::InterviewConfig::load(&config::interview_config_path())
        .unwrap_or_else(|e| {
            tracing::warn!("{e}; using default interview tuning");
            config::InterviewConfig::default()
        });

    Ok(InterviewEngine::with_config(catalog, tuning))
}
