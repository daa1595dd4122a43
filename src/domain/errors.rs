//! Domain error types
//!
//! These errors are framework-agnostic and represent store-level failures.

use std::fmt;

#[derive(Debug)]
pub enum DomainError {
    /// Record not found
    NotFound,
    /// Database/persistence error
    Database(String),
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainError::NotFound => write!(f, "Resource not found"),
            DomainError::Database(msg) => write!(f, "Database error: {}", msg),
        }
    }
}

impl std::error::Error for DomainError {}

// Conversion from SeaORM errors (used in infrastructure layer)
impl From<sea_orm::DbErr> for DomainError {
    fn from(e: sea_orm::DbErr) -> Self {
        match e {
            sea_orm::DbErr::RecordNotFound(_) => DomainError::NotFound,
            other => DomainError::Database(other.to_string()),
        }
    }
}
