//! Error types for the character API smoke tests.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Transport problems, configuration problems and check failures are kept apart so
//! the runner can report each with its own detail.

use crate::checks::Check;
use thiserror::Error;

/// Errors that can occur while talking to the characters API.
#[derive(Error, Debug)]
pub enum ApiError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// Could not connect to the remote host
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Network timeout
    #[error("Request timeout: {0}")]
    Timeout(String),

    /// I/O error while sending or reading
    #[error("I/O error: {0}")]
    Io(String),
}

/// Coarse grouping of check failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The request never produced a response
    Transport,
    /// A response arrived but its body had the wrong structure
    ShapeMismatch,
    /// The body was well formed but its content was wrong
    Assertion,
}

/// Errors raised by an individual check.
#[derive(Error, Debug)]
pub enum CheckError {
    /// The network call itself failed
    #[error("{0}")]
    Transport(#[from] ApiError),

    /// The endpoint answered with an unexpected status code
    #[error("Expected status code {expected}, but got {actual}")]
    UnexpectedStatus { expected: u16, actual: u16 },

    /// Failed to parse JSON response
    #[error("Response body is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// `data` is missing or is not an array
    #[error("Response is missing a valid data array")]
    MissingData,

    /// `data` is an empty array
    #[error("Response data array is empty")]
    EmptyData,

    /// At least one character lacks a usable name
    #[error("Not all characters have a name property")]
    MissingName,

    /// The filtered lookup did not contain the wanted character
    #[error("Character \"{0}\" not found")]
    RecordNotFound(String),

    /// The first page did not hold the default number of records
    #[error("Expected {expected} items per page, but got {actual}")]
    PageSize { expected: usize, actual: usize },
}

impl CheckError {
    /// Classify this failure.
    pub fn kind(&self) -> FailureKind {
        match self {
            CheckError::Transport(_) => FailureKind::Transport,
            CheckError::InvalidJson(_) | CheckError::MissingData => FailureKind::ShapeMismatch,
            CheckError::UnexpectedStatus { .. }
            | CheckError::EmptyData
            | CheckError::MissingName
            | CheckError::RecordNotFound(_)
            | CheckError::PageSize { .. } => FailureKind::Assertion,
        }
    }
}

/// The first failing check of a run, which halts the run.
#[derive(Error, Debug)]
#[error("Test {index} ({check}) failed: {error}")]
pub struct RunFailure {
    /// 1-based position of the check in the run
    pub index: usize,
    pub check: Check,
    #[source]
    pub error: CheckError,
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Failed to load .env file
    #[error("Failed to load .env file: {0}")]
    DotenvError(String),
}

/// Convenience type alias for Results with ApiError
pub type ApiResult<T> = Result<T, ApiError>;

/// Convenience type alias for Results with CheckError
pub type CheckResult<T> = Result<T, CheckError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
