// src/error.rs

//! Error types for Foodgram
//!
//! Every failure the store, the recipe filter engine or the shopping list
//! aggregator can produce is one variant of [`Error`]. Nothing here is
//! recovered from inside the library; callers map variants to responses.

use rusqlite::ErrorCode;
use thiserror::Error;

/// Errors produced by the Foodgram library
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed input: predicate values, entity fields, tag slugs
    #[error("Validation error: {0}")]
    Validation(String),

    /// A user-scoped operation was requested without an authenticated user
    #[error("Authentication required: {0}")]
    AuthenticationRequired(String),

    /// The referenced entity does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// The store rejected a write because of a UNIQUE, FOREIGN KEY or CHECK constraint
    #[error("Integrity violation: {0}")]
    IntegrityViolation(String),

    /// Any other store failure
    #[error("Database error: {0}")]
    Database(rusqlite::Error),

    /// Configuration could not be read or parsed
    #[error("Configuration error: {0}")]
    Config(String),

    /// An export could not be serialized
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<rusqlite::Error> for Error {
    fn from(err: rusqlite::Error) -> Self {
        match &err {
            rusqlite::Error::SqliteFailure(failure, message)
                if failure.code == ErrorCode::ConstraintViolation =>
            {
                Error::IntegrityViolation(
                    message.clone().unwrap_or_else(|| failure.to_string()),
                )
            }
            _ => Error::Database(err),
        }
    }
}

/// Result type for Foodgram operations
pub type Result<T> = std::result::Result<T, Error>;
