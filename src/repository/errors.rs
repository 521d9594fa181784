use thiserror::Error;

/// Errors surfaced by the persistence layer.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// No connection could be obtained from the pool.
    #[error("database connection error: {0}")]
    ConnectionError(#[from] diesel::r2d2::PoolError),
    /// A query or transaction statement failed.
    #[error("database error: {0}")]
    DatabaseError(#[from] diesel::result::Error),
    /// A stored row could not be converted into a domain value.
    #[error("validation error: {0}")]
    ValidationError(String),
    /// Embedded migrations could not be applied.
    #[error("migration error: {0}")]
    MigrationError(String),
    /// The database directory could not be prepared.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenient alias for repository results.
pub type RepositoryResult<T> = Result<T, RepositoryError>;
