//! Domain error types
//!
//! These errors are business-level failures carrying already-localized
//! messages. The API layer translates them to HTTP statuses.

use std::fmt;

#[derive(Debug)]
pub enum DomainError {
    /// Single-entity lookup miss
    NotFound(String),
    /// Collection or page query returned zero rows
    EmptyResult(String),
    /// Request field could not be coerced (bad role type, malformed
    /// reference number, zero page size, non-positive amount)
    Validation(String),
    /// Database/persistence error, carried through unmodified
    Database(String),
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainError::NotFound(msg) => write!(f, "{}", msg),
            DomainError::EmptyResult(msg) => write!(f, "{}", msg),
            DomainError::Validation(msg) => write!(f, "{}", msg),
            DomainError::Database(msg) => write!(f, "Database error: {}", msg),
        }
    }
}

impl std::error::Error for DomainError {}

// Conversion from SeaORM errors (used by repositories and services)
impl From<sea_orm::DbErr> for DomainError {
    fn from(e: sea_orm::DbErr) -> Self {
        DomainError::Database(e.to_string())
    }
}
