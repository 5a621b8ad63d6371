//! Request/response bodies of the HTTP API.
//!
//! The audit response is [`aeolens_core::ReadinessReport`] itself.

use serde::{Deserialize, Serialize};

/// Body of `POST /audit` and `POST /api/audit`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditRequest {
    pub url: String,
}

/// Greeting served at `GET /`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadyResponse {
    pub status: String,
}

impl Default for ReadyResponse {
    fn default() -> Self {
        Self {
            status: "AEO Auditor Ready! 🫡".to_string(),
        }
    }
}

/// Health check response for `GET /api/health`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
