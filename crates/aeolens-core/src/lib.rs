//! # aeolens-core
//!
//! Core library for scoring how ready a web page is for answer engines
//! (AEO, Answer Engine Optimization).
//!
//! This library provides:
//! - HTML parsing of the page under audit
//! - Ten fixed readiness criteria, ten points each
//! - Report types serialized in the format the audit frontend expects
//!
//! ## Features
//!
//! - `default`: Parsing and scoring of already fetched HTML (no HTTP stack)
//! - `fetch`: [`Auditor`] fetching the page, `robots.txt` and `sitemap.xml`
//!
//! ## Example
//!
//! ```
//! use aeolens_core::{ProbeOutcome, evaluate_page};
//!
//! let html = r#"
//!     <h1>Title</h1><h2>Section</h2>
//!     <meta name="viewport" content="width=device-width">
//! "#;
//!
//! let report = evaluate_page(
//!     html,
//!     "https://example.com/",
//!     ProbeOutcome::Found,
//!     ProbeOutcome::Missing { status: 404 },
//! );
//! assert_eq!(report.results.len(), 10);
//! assert_eq!(report.score % 10, 0);
//! ```

pub mod config;
pub mod error;
pub mod parser;
pub mod readiness;
pub mod types;
pub mod url_utils;

// Re-export commonly used types
pub use config::AuditConfig;
pub use error::AuditError;
pub use readiness::probe::ProbeOutcome;
pub use readiness::{PageContext, evaluate_page};
pub use types::{CriterionResult, Indicator, ReadinessReport, Status};
pub use url_utils::normalize_url;

#[cfg(feature = "fetch")]
pub use readiness::{Auditor, evaluate};
