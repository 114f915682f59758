//! # App Error Type
//!
//! Unified error type for app commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Almacén                                │
//! │                                                                         │
//! │  Button press                                                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Command  ── ValidationError ──► AppError { VALIDATION_ERROR } ──┐      │
//! │       │                                                          │      │
//! │       ├───── DbError ──────────► AppError { DATABASE_ERROR } ────┤      │
//! │       │                                                          ▼      │
//! │       └───── no session ───────► AppError { SESSION_REQUIRED }  dialog  │
//! │                                                                         │
//! │  No error is fatal to the process. The command that produced the        │
//! │  error decides whether a dialog is shown (the update-path validation    │
//! │  deliberately shows none).                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;

use almacen_core::ValidationError;
use almacen_db::DbError;

/// Error surfaced by app commands.
///
/// Carries both a machine-readable `code` and a human-readable `message`;
/// the message is what ends up in the dialog body.
#[derive(Debug, Clone, Serialize)]
pub struct AppError {
    pub code: ErrorCode,
    pub message: String,
}

/// Error codes for command failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Record no longer exists (stale selection).
    NotFound,

    /// A required dialog field is empty.
    ValidationError,

    /// Database operation failed.
    DatabaseError,

    /// Dashboard or management window requested without a live session.
    SessionRequired,

    /// Anything else.
    Internal,
}

impl AppError {
    /// Creates a new app error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        AppError {
            code,
            message: message.into(),
        }
    }

    /// Creates a session-required error.
    pub fn session_required() -> Self {
        AppError::new(
            ErrorCode::SessionRequired,
            "Debe iniciar sesión para abrir esta ventana",
        )
    }
}

/// Converts database errors to app errors.
impl From<DbError> for AppError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::NotFound { entity, id } => AppError::new(
                ErrorCode::NotFound,
                format!("{} not found: {}", entity, id),
            ),
            DbError::UniqueViolation { field, value } => AppError::new(
                ErrorCode::ValidationError,
                format!("{} '{}' already exists", field, value),
            ),
            DbError::ConnectionFailed(e) => {
                tracing::error!("Database connection failed: {}", e);
                AppError::new(ErrorCode::DatabaseError, "Database connection failed")
            }
            DbError::MigrationFailed(e) => {
                tracing::error!("Database migration failed: {}", e);
                AppError::new(ErrorCode::DatabaseError, "Database migration failed")
            }
            DbError::QueryFailed(e) => {
                // Log the actual error but return a generic message
                tracing::error!("Database query failed: {}", e);
                AppError::new(ErrorCode::DatabaseError, "Database operation failed")
            }
            DbError::PoolExhausted => {
                AppError::new(ErrorCode::DatabaseError, "Database pool exhausted")
            }
            DbError::Internal(e) => {
                tracing::error!("Internal database error: {}", e);
                AppError::new(ErrorCode::DatabaseError, "Database operation failed")
            }
        }
    }
}

/// Converts validation errors to app errors.
impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::new(ErrorCode::ValidationError, err.to_string())
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for AppError {}
