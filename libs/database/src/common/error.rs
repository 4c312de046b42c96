/// Failure raised while managing the relational store itself
///
/// Query failures inside a repository surface as `sea_orm::DbErr` directly;
/// this type covers pool setup, migrations and health checks.
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    /// Connection could not be established after all retries
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Health check failed: {0}")]
    HealthCheckFailed(String),

    #[error("Migration error: {0}")]
    MigrationError(String),
}

pub type DatabaseResult<T> = Result<T, DatabaseError>;
