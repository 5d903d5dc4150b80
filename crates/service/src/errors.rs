use thiserror::Error;

use models::errors::ModelError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("invalid identifier: {0}")]
    BadIdentifier(i64),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("database error: {0}")]
    Db(String),
    #[error("model error: {0}")]
    Model(#[from] ModelError),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self { Self::NotFound(format!("{} not found", entity)) }

    pub fn invalid(field: &str) -> Self { Self::Validation(format!("{} is out of range", field)) }

    pub fn missing(field: &str) -> Self { Self::Validation(format!("{} is required", field)) }

    /// True when the caller sent something unacceptable (as opposed to a store failure).
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::BadIdentifier(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_) | Self::Model(ModelError::NotFound(_)))
    }
}

impl From<sea_orm::DbErr> for ServiceError {
    fn from(e: sea_orm::DbErr) -> Self { Self::Db(e.to_string()) }
}
