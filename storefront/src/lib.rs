//! Storefront: authors, books, categories, customers, products and orders
//! served over HTTP by the `crudkit` engine.

pub mod config;
pub mod db;
pub mod entities;
pub mod error;
pub mod migration;
pub mod seed;
pub mod server;
pub mod telemetry;

pub use config::AppConfig;
pub use error::StartupError;
pub use migration::Migrator;
