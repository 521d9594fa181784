//! Error conversion glue between layers.
//!
//! The domain layer must not depend on repository or service error types, so
//! the `From` impls that bridge them live here.

use crate::domain::types::TypeConstraintError;
use crate::repository::errors::RepositoryError;

impl From<TypeConstraintError> for RepositoryError {
    fn from(val: TypeConstraintError) -> Self {
        RepositoryError::ValidationError(val.to_string())
    }
}

#[cfg(feature = "sync")]
mod sync {
    use crate::models::config::ConfigError;
    use crate::services::errors::SyncError;

    impl From<ConfigError> for SyncError {
        fn from(val: ConfigError) -> Self {
            SyncError::Configuration(val.to_string())
        }
    }
}
