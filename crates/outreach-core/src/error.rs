//! Error types for the Outreach application.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for the entire Outreach application.
///
/// This provides typed, structured error variants with automatic conversion
/// from common error types via the `From` trait. The same taxonomy covers
/// every failure source: document extraction fails hard, collectors record
/// per-section failures as [`crate::report::Section::Unavailable`] carrying
/// one of these values, and upstream HTTP failures are split into transport
/// (`UpstreamUnavailable`) and non-success status (`UpstreamRejected`) so a
/// rejected call can never be mistaken for content.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum OutreachError {
    /// Entity not found error with type information
    #[error("Not found: {entity_type} '{id}'")]
    NotFound {
        entity_type: String,
        id: String,
    },

    /// Unsupported document format (file extension not recognized)
    #[error("Unsupported file format: '{extension}'")]
    UnsupportedFormat { extension: String },

    /// Document text extraction failure, naming the offending format
    #[error("Failed to extract text from {format} file: {message}")]
    Extraction { format: String, message: String },

    /// Transport-level upstream failure (connect, timeout, body read)
    #[error("{service} unavailable: {message}")]
    UpstreamUnavailable { service: String, message: String },

    /// Upstream returned a non-success status
    #[error("{service} rejected the request ({status}): {body}")]
    UpstreamRejected {
        service: String,
        status: u16,
        body: String,
    },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization { format: String, message: String },

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Conversation protocol misuse (turn issued in the wrong state)
    #[error("Session error: {0}")]
    Session(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl OutreachError {
    /// Creates a NotFound error
    pub fn not_found(entity_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: entity_type.into(),
            id: id.into(),
        }
    }

    /// Creates an UnsupportedFormat error
    pub fn unsupported_format(extension: impl Into<String>) -> Self {
        Self::UnsupportedFormat {
            extension: extension.into(),
        }
    }

    /// Creates an Extraction error
    pub fn extraction(format: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Extraction {
            format: format.into(),
            message: message.into(),
        }
    }

    /// Creates an UpstreamUnavailable error
    pub fn upstream_unavailable(service: impl Into<String>, message: impl Into<String>) -> Self {
        Self::UpstreamUnavailable {
            service: service.into(),
            message: message.into(),
        }
    }

    /// Creates an UpstreamRejected error
    pub fn upstream_rejected(
        service: impl Into<String>,
        status: u16,
        body: impl Into<String>,
    ) -> Self {
        Self::UpstreamRejected {
            service: service.into(),
            status,
            body: body.into(),
        }
    }

    /// Creates an Io error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates a Session error
    pub fn session(message: impl Into<String>) -> Self {
        Self::Session(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Check if this is a NotFound error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is an UnsupportedFormat error
    pub fn is_unsupported_format(&self) -> bool {
        matches!(self, Self::UnsupportedFormat { .. })
    }

    /// Check if this is an upstream rejection (non-success status)
    pub fn is_upstream_rejected(&self) -> bool {
        matches!(self, Self::UpstreamRejected { .. })
    }

    /// Check if this error came from the upstream side at all, transport
    /// failures included.
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            Self::UpstreamRejected { .. } | Self::UpstreamUnavailable { .. }
        )
    }
}

impl From<std::io::Error> for OutreachError {
    fn from(err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            return Self::not_found("file", err.to_string());
        }
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for OutreachError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for OutreachError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// Conversion from anyhow::Error (transitional, should be removed eventually)
impl From<anyhow::Error> for OutreachError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err.to_string())
    }
}

/// A type alias for `Result<T, OutreachError>`.
pub type Result<T> = std::result::Result<T, OutreachError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = OutreachError::not_found("user", "octocat");
        assert_eq!(err.to_string(), "Not found: user 'octocat'");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_upstream_rejected_carries_status_and_body() {
        let err = OutreachError::upstream_rejected("Proxycurl", 403, "invalid key");
        assert!(err.is_upstream_rejected());
        assert!(err.is_upstream());
        let text = err.to_string();
        assert!(text.contains("403"));
        assert!(text.contains("invalid key"));
    }

    #[test]
    fn test_io_not_found_maps_to_not_found() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = OutreachError::from(io);
        assert!(err.is_not_found());
    }

    #[test]
    fn test_unsupported_format_display() {
        let err = OutreachError::unsupported_format(".rtf");
        assert!(err.is_unsupported_format());
        assert!(err.to_string().contains(".rtf"));
    }
}
