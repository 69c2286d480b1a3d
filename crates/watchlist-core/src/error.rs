//! Unified application error types for Watchlist.
//!
//! All crates map their internal errors into [`AppError`] for consistent
//! propagation through the `?` operator. The recoverable rejections raised
//! by the login, guard, validation and lookup steps have their own typed
//! enums so callers can match on the exact reason.

use std::fmt;
use thiserror::Error;

/// Top-level error kind categorization used across the entire application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ErrorKind {
    /// The requested resource was not found.
    NotFound,
    /// Authentication failed or no session is established.
    Authentication,
    /// Input validation failed.
    Validation,
    /// A conflict occurred (duplicate entry, singleton already present, etc.).
    Conflict,
    /// An internal server error occurred.
    Internal,
    /// A database error occurred.
    Database,
    /// A configuration error occurred.
    Configuration,
    /// A serialization/deserialization error occurred.
    Serialization,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "NOT_FOUND"),
            Self::Authentication => write!(f, "AUTHENTICATION"),
            Self::Validation => write!(f, "VALIDATION"),
            Self::Conflict => write!(f, "CONFLICT"),
            Self::Internal => write!(f, "INTERNAL"),
            Self::Database => write!(f, "DATABASE"),
            Self::Configuration => write!(f, "CONFIGURATION"),
            Self::Serialization => write!(f, "SERIALIZATION"),
        }
    }
}

/// Rejections raised while establishing or checking a login session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum AuthError {
    /// The username or the password field was blank.
    #[error("username and password are required")]
    EmptyCredential,
    /// The username does not match or the password failed verification.
    #[error("invalid username or password")]
    InvalidCredential,
    /// The operation needs an authenticated session and none is bound.
    #[error("an authenticated session is required")]
    Unauthenticated,
}

/// Field constraint violations for movie entries and the display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ValidationError {
    /// Title is blank.
    #[error("title must not be empty")]
    TitleEmpty,
    /// Title exceeds 60 characters.
    #[error("title must be at most 60 characters")]
    TitleTooLong,
    /// Year is blank.
    #[error("year must not be empty")]
    YearEmpty,
    /// Year exceeds 4 characters (create).
    #[error("year must be at most 4 characters")]
    YearTooLong,
    /// Year is not exactly 4 characters (edit).
    #[error("year must be exactly 4 characters")]
    YearWrongLength,
    /// Display name is blank.
    #[error("name must not be empty")]
    NameEmpty,
    /// Display name exceeds 20 characters.
    #[error("name must be at most 20 characters")]
    NameTooLong,
}

/// Lookup misses that surface as a not-found response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum NotFoundError {
    /// No movie entry exists with the requested id.
    #[error("movie entry {0} not found")]
    EntryNotFound(i64),
}

/// The typed reason carried by a recoverable [`AppError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rejection {
    /// Session establishment or guard failure.
    Auth(AuthError),
    /// Payload failed field validation.
    Validation(ValidationError),
    /// Lookup by id missed.
    NotFound(NotFoundError),
}

/// The unified application error used throughout Watchlist.
///
/// All crate-specific errors are mapped into `AppError` using `From` impls
/// or explicit `.map_err()` calls. Recoverable rejections keep their typed
/// reason in [`AppError::rejection`].
#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct AppError {
    /// The category of error.
    pub kind: ErrorKind,
    /// A human-readable error message.
    pub message: String,
    /// Typed reason for recoverable rejections.
    pub rejection: Option<Rejection>,
    /// Optional underlying cause.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new application error.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            rejection: None,
            source: None,
        }
    }

    /// Create a new application error with an underlying cause.
    pub fn with_source(
        kind: ErrorKind,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            rejection: None,
            source: Some(Box::new(source)),
        }
    }

    /// Create a not-found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    /// Create a conflict error.
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Conflict, message)
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }

    /// Create a database error.
    pub fn database(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Database, message)
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Configuration, message)
    }

    /// Returns the typed rejection, if this error is a recoverable one.
    pub fn rejection(&self) -> Option<Rejection> {
        self.rejection
    }

    /// Returns the authentication rejection, if any.
    pub fn auth_error(&self) -> Option<AuthError> {
        match self.rejection {
            Some(Rejection::Auth(e)) => Some(e),
            _ => None,
        }
    }

    /// Returns the validation rejection, if any.
    pub fn validation_error(&self) -> Option<ValidationError> {
        match self.rejection {
            Some(Rejection::Validation(e)) => Some(e),
            _ => None,
        }
    }

    /// Returns `true` when the error is a lookup miss.
    pub fn is_not_found(&self) -> bool {
        self.kind == ErrorKind::NotFound
    }

    fn rejected(kind: ErrorKind, rejection: Rejection, message: String) -> Self {
        Self {
            kind,
            message,
            rejection: Some(rejection),
            source: None,
        }
    }
}

impl Clone for AppError {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            message: self.message.clone(),
            rejection: self.rejection,
            source: None,
        }
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        Self::rejected(
            ErrorKind::Authentication,
            Rejection::Auth(err),
            err.to_string(),
        )
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        Self::rejected(
            ErrorKind::Validation,
            Rejection::Validation(err),
            err.to_string(),
        )
    }
}

impl From<NotFoundError> for AppError {
    fn from(err: NotFoundError) -> Self {
        Self::rejected(
            ErrorKind::NotFound,
            Rejection::NotFound(err),
            err.to_string(),
        )
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        Self::with_source(ErrorKind::Database, format!("Database error: {err}"), err)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::with_source(
            ErrorKind::Serialization,
            format!("JSON serialization error: {err}"),
            err,
        )
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::with_source(ErrorKind::Internal, format!("I/O error: {err}"), err)
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::with_source(
            ErrorKind::Configuration,
            format!("Configuration error: {err}"),
            err,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_rejection_is_typed() {
        let err: AppError = ValidationError::TitleEmpty.into();
        assert_eq!(err.kind, ErrorKind::Validation);
        assert_eq!(err.validation_error(), Some(ValidationError::TitleEmpty));
        assert_eq!(err.auth_error(), None);
    }

    #[test]
    fn test_auth_rejection_is_typed() {
        let err: AppError = AuthError::Unauthenticated.into();
        assert_eq!(err.kind, ErrorKind::Authentication);
        assert_eq!(err.auth_error(), Some(AuthError::Unauthenticated));
    }

    #[test]
    fn test_not_found_keeps_id() {
        let err: AppError = NotFoundError::EntryNotFound(999).into();
        assert!(err.is_not_found());
        assert_eq!(
            err.rejection(),
            Some(Rejection::NotFound(NotFoundError::EntryNotFound(999)))
        );
        assert!(err.message.contains("999"));
    }

    #[test]
    fn test_clone_drops_source_keeps_rejection() {
        let err: AppError = AuthError::InvalidCredential.into();
        let cloned = err.clone();
        assert_eq!(cloned.auth_error(), Some(AuthError::InvalidCredential));
        assert!(cloned.source.is_none());
    }
}
