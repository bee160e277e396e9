//! Error types for projectctl
//!
//! This module defines the error hierarchy for the entire crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use thiserror::Error;

/// Scope GitHub requires for reading Projects V2 data
pub const READ_PROJECT_SCOPE: &str = "read:project";

/// The main error type for projectctl
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Missing required config field: {field}")]
    MissingConfigField { field: String },

    #[error("Invalid config value for '{field}': {message}")]
    InvalidConfigValue { field: String, message: String },

    // ============================================================================
    // Fetch Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Request timeout after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("GraphQL error: {}", messages.join("; "))]
    GraphQl { messages: Vec<String> },

    #[error("Token is missing the required '{scope}' scope")]
    InsufficientScope { scope: String },

    #[error("Authentication failed ({status})")]
    AuthenticationFailed { status: u16 },

    #[error("Failed to decode response: {message}")]
    Decode { message: String },

    #[error("Fetch failed: {message}")]
    Fetch { message: String },

    // ============================================================================
    // Shape Errors
    // ============================================================================
    #[error("Unexpected node type: expected {expected}, found {found}")]
    UnexpectedShape { expected: String, found: String },

    // ============================================================================
    // Output Errors
    // ============================================================================
    #[error("Failed to render {format} output: {message}")]
    Serialization { format: String, message: String },

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingConfigField {
            field: field.into(),
        }
    }

    /// Create an invalid config value error
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfigValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Create a decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Create a generic fetch error
    pub fn fetch(message: impl Into<String>) -> Self {
        Self::Fetch {
            message: message.into(),
        }
    }

    /// Create an unexpected shape error
    pub fn unexpected_shape(expected: impl Into<String>, found: impl Into<String>) -> Self {
        Self::UnexpectedShape {
            expected: expected.into(),
            found: found.into(),
        }
    }

    /// Create a serialization error
    pub fn serialization(format: impl Into<String>, message: impl ToString) -> Self {
        Self::Serialization {
            format: format.into(),
            message: message.to_string(),
        }
    }

    /// Classify a failed response by status code and message.
    ///
    /// Scope failures win over authentication failures, which win over
    /// the plain status error.
    pub fn classify_status(status: u16, body: impl Into<String>) -> Self {
        let body = body.into();
        if mentions_missing_scope(&body) {
            return Self::InsufficientScope {
                scope: READ_PROJECT_SCOPE.to_string(),
            };
        }
        if matches!(status, 401 | 403) {
            return Self::AuthenticationFailed { status };
        }
        Self::http_status(status, body)
    }

    /// Classify GraphQL error messages returned alongside a 200 response
    pub fn classify_graphql(messages: Vec<String>) -> Self {
        if messages.iter().any(|m| mentions_missing_scope(m)) {
            return Self::InsufficientScope {
                scope: READ_PROJECT_SCOPE.to_string(),
            };
        }
        if messages.iter().any(|m| m.contains("403")) {
            return Self::AuthenticationFailed { status: 403 };
        }
        Self::GraphQl { messages }
    }

    /// Check if this error came from fetching a page
    pub fn is_fetch_error(&self) -> bool {
        matches!(
            self,
            Error::Http(_)
                | Error::HttpStatus { .. }
                | Error::Timeout { .. }
                | Error::GraphQl { .. }
                | Error::InsufficientScope { .. }
                | Error::AuthenticationFailed { .. }
                | Error::Decode { .. }
                | Error::Fetch { .. }
        )
    }

    /// Check if this error means the credential lacks access
    pub fn is_permission_error(&self) -> bool {
        matches!(
            self,
            Error::InsufficientScope { .. } | Error::AuthenticationFailed { .. }
        )
    }
}

fn mentions_missing_scope(message: &str) -> bool {
    message.contains(READ_PROJECT_SCOPE)
}

/// Result type alias for projectctl
pub type Result<T> = std::result::Result<T, Error>;
