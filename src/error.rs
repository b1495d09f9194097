//! Error types for the invite client
//!
//! Every failure in the session protocol surfaces as an [`AppError`]; none
//! are retried or recovered locally.

use reqwest::StatusCode;
use std::fmt;

/// Main error type for the invite client
#[derive(Debug)]
pub enum AppError {
    /// Transport-level failure on any HTTP call
    Network(reqwest::Error),
    /// An expected cookie was absent from a response
    MissingCookie(&'static str),
    /// The login response carried no session token, treated as invalid credentials
    BadCredentials,
    /// A call returned a non-success status
    Unexpected(StatusCode),
    /// Malformed operator input
    InvalidInput(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Network(e) => write!(f, "network error: {e}"),
            AppError::MissingCookie(name) => write!(f, "missing cookie: {name}"),
            AppError::BadCredentials => write!(f, "bad credentials"),
            AppError::Unexpected(status) => write!(f, "unexpected status: {status}"),
            AppError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Network(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(error: reqwest::Error) -> Self {
        AppError::Network(error)
    }
}
