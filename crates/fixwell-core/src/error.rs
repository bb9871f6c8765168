//! Error types for the fixwell admin console core.
//!
//! This module provides a unified error type with explicit variants for
//! input validation, identity-service rejections, and transport failures.

use std::fmt;
use thiserror::Error;

/// The unified error type for session-core operations.
///
/// Covers all failure modes in the core, with explicit variants so callers
/// can decide which failures are retryable at the current step.
#[derive(Debug, Error)]
pub enum Error {
    /// Input validation errors (malformed phone number, OTP, or URL).
    /// Raised before any network call is made.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),

    /// The identity service explicitly declined the request.
    #[error("request rejected: {0}")]
    RemoteRejected(#[from] RemoteRejectedError),

    /// Network or storage-level failures.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// A persisted session record failed to parse. Never surfaced to the
    /// user: the session store converts this to "no session" on load.
    #[error("corrupt session record: {0}")]
    CorruptSession(String),
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid mobile number.
    #[error("invalid mobile number '{value}': {reason}")]
    MobileNumber { value: String, reason: String },

    /// Invalid one-time passcode.
    #[error("invalid OTP '{value}': {reason}")]
    OtpCode { value: String, reason: String },

    /// Invalid admin API URL.
    #[error("invalid service URL '{value}': {reason}")]
    ServiceUrl { value: String, reason: String },

    /// Generic invalid input.
    #[error("{message}")]
    Other { message: String },
}

/// An explicit decline from the identity service.
///
/// Carries the HTTP status and the server's `message` field verbatim; the
/// message is the user-facing error text.
#[derive(Debug)]
pub struct RemoteRejectedError {
    status: u16,
    message: String,
}

impl RemoteRejectedError {
    /// Create a new rejection from a response status and server message.
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// The HTTP status the identity service responded with.
    pub fn status(&self) -> u16 {
        self.status
    }

    /// The server's message, passed through verbatim.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for RemoteRejectedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for RemoteRejectedError {}

/// Transport-level errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out")]
    Timeout,

    /// HTTP-level failure without a structured error body.
    #[error("HTTP error: {message}")]
    Http { message: String },

    /// Local persistence IO failure.
    #[error("IO error: {message}")]
    Io { message: String },
}
