//! Report types shared by the scorer, the CLI and the HTTP API

use serde::{Deserialize, Serialize};

/// Points awarded per passing criterion
pub const POINTS_PER_CRITERION: u8 = 10;

/// Title of the single result carried by a failed analysis
pub const ANALYSIS_FAILED: &str = "Analysis Failed";

/// Whether a criterion passed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    Pass,
    Fail,
}

/// Visual indicator attached to a result.
///
/// Serialized as the emoji the audit frontend renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Indicator {
    #[serde(rename = "✅")]
    Pass,

    #[serde(rename = "❌")]
    Fail,

    #[serde(rename = "⚠️")]
    Warning,
}

impl Indicator {
    pub fn emoji(self) -> &'static str {
        match self {
            Indicator::Pass => "✅",
            Indicator::Fail => "❌",
            Indicator::Warning => "⚠️",
        }
    }
}

/// Outcome of one criterion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriterionResult {
    pub title: String,

    pub status: Status,

    #[serde(rename = "icon")]
    pub indicator: Indicator,

    #[serde(rename = "desc")]
    pub description: String,
}

impl CriterionResult {
    pub fn pass(title: &str, description: &str) -> Self {
        Self {
            title: title.to_string(),
            status: Status::Pass,
            indicator: Indicator::Pass,
            description: description.to_string(),
        }
    }

    pub fn fail(title: &str, indicator: Indicator, description: &str) -> Self {
        Self {
            title: title.to_string(),
            status: Status::Fail,
            indicator,
            description: description.to_string(),
        }
    }

    pub fn passed(&self) -> bool {
        self.status == Status::Pass
    }
}

/// Readiness assessment for one URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadinessReport {
    /// Overall score (0-100, in steps of 10)
    pub score: u8,

    /// Normalized URL that was audited
    pub url: String,

    /// One entry per criterion, in evaluation order
    pub results: Vec<CriterionResult>,

    /// Set when the page itself could not be fetched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ReadinessReport {
    /// Build a report from evaluated criteria, scoring each pass.
    pub fn from_results(url: String, results: Vec<CriterionResult>) -> Self {
        let passed = results.iter().filter(|r| r.passed()).count();
        let score = (passed as u32 * POINTS_PER_CRITERION as u32).min(100) as u8;

        Self {
            score,
            url,
            results,
            error: None,
        }
    }

    /// Degraded report for an analysis that could not run.
    pub fn failed(url: String, message: impl Into<String>) -> Self {
        let message = message.into();

        Self {
            score: 0,
            url,
            results: vec![CriterionResult::fail(
                ANALYSIS_FAILED,
                Indicator::Fail,
                &message,
            )],
            error: Some(message),
        }
    }

    pub fn is_failed(&self) -> bool {
        self.error.is_some()
    }

    pub fn passed_count(&self) -> usize {
        self.results.iter().filter(|r| r.passed()).count()
    }
}
