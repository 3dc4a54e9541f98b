use thiserror::Error;

/// Failures that stop the binary before or while serving.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    Config(#[from] figment::Error),

    #[error("database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    #[error("seeding failed: {0}")]
    Seed(#[from] crudkit::ApiError),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
