//! Errors raised while fetching the page under audit.
//!
//! None of these escape [`crate::readiness::Auditor::evaluate`]; they are turned
//! into a degraded report whose single result carries the error text.

use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuditError {
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Request to {url} timed out after {timeout:?}")]
    Timeout { url: String, timeout: Duration },

    #[error("{status} returned for url ({url})")]
    Status { url: String, status: u16 },

    #[error("Page at {url} exceeds {limit} bytes")]
    TooLarge { url: String, limit: usize },

    #[error("Request to {url} failed: {message}")]
    Request { url: String, message: String },

    #[error("Failed to create HTTP client: {0}")]
    Client(String),
}

pub type Result<T> = std::result::Result<T, AuditError>;

impl AuditError {
    pub fn invalid_url(url: &str, reason: impl ToString) -> Self {
        Self::InvalidUrl {
            url: url.to_string(),
            reason: reason.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_message_mentions_timeout() {
        let err = AuditError::Timeout {
            url: "https://example.com/".to_string(),
            timeout: Duration::from_secs(10),
        };
        let message = err.to_string();
        assert!(message.contains("timed out after 10s"));
        assert!(message.contains("https://example.com/"));
    }

    #[test]
    fn test_status_message() {
        let err = AuditError::Status {
            url: "https://example.com/".to_string(),
            status: 404,
        };
        assert_eq!(err.to_string(), "404 returned for url (https://example.com/)");
    }

    #[test]
    fn test_too_large_message() {
        let err = AuditError::TooLarge {
            url: "https://example.com/".to_string(),
            limit: 1024,
        };
        assert_eq!(err.to_string(), "Page at https://example.com/ exceeds 1024 bytes");
    }

    #[test]
    fn test_invalid_url_helper() {
        let err = AuditError::invalid_url("https://", "empty host");
        assert!(matches!(err, AuditError::InvalidUrl { .. }));
        assert!(err.to_string().contains("empty host"));
    }
}
