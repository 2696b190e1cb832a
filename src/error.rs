//! Unified error model for the access core.
//! `AuthError` is what the session store and credential resolvers return; `AppError`
//! is the coarse code/message shape a frontend maps onto its own protocol.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use thiserror::Error;

/// Failures surfaced by login/logout and role parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// No identity matches the supplied credentials.
    #[error("invalid credentials")]
    InvalidCredentials,
    /// The identity provider could not be reached. Transient; retry is caller policy.
    #[error("identity provider unavailable: {0}")]
    ProviderUnavailable(String),
    /// A login or logout is already running on this session.
    #[error("another login/logout is already in flight")]
    OperationInFlight,
    #[error("unknown role '{0}'")]
    UnknownRole(String),
}

impl AuthError {
    pub fn code_str(&self) -> &'static str {
        match self {
            AuthError::InvalidCredentials => "invalid_credentials",
            AuthError::ProviderUnavailable(_) => "provider_unavailable",
            AuthError::OperationInFlight => "operation_in_flight",
            AuthError::UnknownRole(_) => "unknown_role",
        }
    }

    /// Only provider outages are worth retrying as-is.
    pub fn is_transient(&self) -> bool {
        matches!(self, AuthError::ProviderUnavailable(_))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AppError {
    UserInput { code: String, message: String },
    Auth { code: String, message: String },
    Conflict { code: String, message: String },
    Unavailable { code: String, message: String },
    Internal { code: String, message: String },
}

impl AppError {
    pub fn code_str(&self) -> &str {
        match self {
            AppError::UserInput { code, .. }
            | AppError::Auth { code, .. }
            | AppError::Conflict { code, .. }
            | AppError::Unavailable { code, .. }
            | AppError::Internal { code, .. } => code.as_str(),
        }
    }

    pub fn message(&self) -> &str {
        match self {
            AppError::UserInput { message, .. }
            | AppError::Auth { message, .. }
            | AppError::Conflict { message, .. }
            | AppError::Unavailable { message, .. }
            | AppError::Internal { message, .. } => message.as_str(),
        }
    }

    pub fn user<S: Into<String>>(code: S, msg: S) -> Self { AppError::UserInput { code: code.into(), message: msg.into() } }
    pub fn auth<S: Into<String>>(code: S, msg: S) -> Self { AppError::Auth { code: code.into(), message: msg.into() } }
    pub fn conflict<S: Into<String>>(code: S, msg: S) -> Self { AppError::Conflict { code: code.into(), message: msg.into() } }
    pub fn unavailable<S: Into<String>>(code: S, msg: S) -> Self { AppError::Unavailable { code: code.into(), message: msg.into() } }
    pub fn internal<S: Into<String>>(code: S, msg: S) -> Self { AppError::Internal { code: code.into(), message: msg.into() } }

    /// Map to HTTP status code.
    pub fn http_status(&self) -> u16 {
        match self {
            AppError::UserInput { .. } => 400,
            AppError::Auth { .. } => 401,
            AppError::Conflict { .. } => 409,
            AppError::Unavailable { .. } => 503,
            AppError::Internal { .. } => 500,
        }
    }
}

impl Display for AppError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code_str(), self.message())
    }
}

impl std::error::Error for AppError {}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        let code = err.code_str().to_string();
        let message = err.to_string();
        match err {
            AuthError::InvalidCredentials => AppError::Auth { code, message },
            AuthError::ProviderUnavailable(_) => AppError::Unavailable { code, message },
            AuthError::OperationInFlight => AppError::Conflict { code, message },
            AuthError::UnknownRole(_) => AppError::UserInput { code, message },
        }
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        // Default mapping: anything not already typed is internal
        AppError::Internal { code: "internal_error".into(), message: err.to_string() }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
