pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod state;

pub use api::router;

/// Embedded migrations, shared by the binary and the test suites.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");
