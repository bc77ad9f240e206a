//! Repository gateway errors.

use common::AppError;
use sea_orm::{DbErr, RuntimeErr, SqlErr};
use thiserror::Error;
use uuid::Uuid;

use super::entities::customer::{EMAIL_COLUMN_REF, EMAIL_UNIQUE_INDEX};

/// Failures raised by a customer store handle.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The unique index on `email` rejected a write
    #[error("email already stored")]
    DuplicateEmail,

    /// Any other constraint rejected a write (e.g. duplicate primary key)
    #[error("constraint violation: {0}")]
    ConstraintViolation(String),

    /// Update or delete did not touch any row
    #[error("no customer row with id {0}")]
    NotFound(Uuid),

    /// Connectivity, timeout or other storage failure
    #[error("storage failure: {0}")]
    Persistence(DbErr),

    /// The handle was already persisted
    #[error("store handle already closed")]
    Closed,
}

/// Result type alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;

impl From<DbErr> for StoreError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) if violates_email_index(&err) => {
                StoreError::DuplicateEmail
            }
            Some(SqlErr::UniqueConstraintViolation(detail)) => {
                StoreError::ConstraintViolation(detail)
            }
            _ => StoreError::Persistence(err),
        }
    }
}

/// Postgres names the violated index; SQLite only reports `table.column`.
fn violates_email_index(err: &DbErr) -> bool {
    let database_error = match err {
        DbErr::Exec(RuntimeErr::SqlxError(e)) | DbErr::Query(RuntimeErr::SqlxError(e)) => {
            e.as_database_error()
        }
        _ => None,
    };

    match database_error {
        Some(db) => match db.constraint() {
            Some(name) => name == EMAIL_UNIQUE_INDEX,
            None => db.message().contains(EMAIL_COLUMN_REF),
        },
        None => false,
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateEmail => AppError::Conflict,
            StoreError::NotFound(_) => AppError::NotFound,
            other => AppError::persistence(other.to_string()),
        }
    }
}
