pub mod repository;
pub mod seed;
pub mod sqlite;

pub use repository::*;
pub use seed::*;
pub use sqlite::*;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Invalid enum value for {field}: {value}")]
    InvalidEnum { field: String, value: String },

    #[error("Migration failed at version {version}: {reason}")]
    MigrationFailed { version: i64, reason: String },

    #[error("Catalog seed parse failed: {0}")]
    SeedParse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
