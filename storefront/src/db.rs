use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, DbErr};

/// Open a connection pool. On SQLite, foreign key enforcement is switched on
/// explicitly so that invalid references are rejected by the store.
///
/// # Errors
///
/// Returns the driver error when the database cannot be reached.
pub async fn connect(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(database_url);
    options.sqlx_logging(false);

    let db = Database::connect(options).await?;
    if db.get_database_backend() == DatabaseBackend::Sqlite {
        db.execute_unprepared("PRAGMA foreign_keys = ON").await?;
    }
    tracing::info!(backend = ?db.get_database_backend(), "connected to database");
    Ok(db)
}
