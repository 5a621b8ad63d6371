//! Auxiliary requests for files served from the site root
//! (`/robots.txt`, `/sitemap.xml`).

use serde::{Deserialize, Serialize};

pub const ROBOTS_TXT_PATH: &str = "/robots.txt";
pub const SITEMAP_XML_PATH: &str = "/sitemap.xml";

/// Outcome of requesting a root file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "outcome")]
pub enum ProbeOutcome {
    /// Served with HTTP 200
    Found,

    /// Answered with any other status
    Missing { status: u16 },

    /// The request itself failed (timeout, connection error, bad URL)
    Failed { message: String },
}

impl ProbeOutcome {
    pub fn from_status(status: u16) -> Self {
        if status == 200 {
            ProbeOutcome::Found
        } else {
            ProbeOutcome::Missing { status }
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, ProbeOutcome::Found)
    }
}

/// Request `<origin><path>` and classify the response.
///
/// Never fails: transport errors become [`ProbeOutcome::Failed`].
#[cfg(feature = "fetch")]
pub async fn probe_root_file(
    client: &reqwest::Client,
    origin: &str,
    path: &str,
    timeout: std::time::Duration,
) -> ProbeOutcome {
    let Some(url) = crate::url_utils::root_file_url(origin, path) else {
        return ProbeOutcome::Failed {
            message: format!("Cannot build {} URL from origin {}", path, origin),
        };
    };

    match client.get(url.clone()).timeout(timeout).send().await {
        Ok(response) => {
            let outcome = ProbeOutcome::from_status(response.status().as_u16());
            tracing::debug!(url = %url, ?outcome, "probe answered");
            outcome
        }
        Err(e) => {
            tracing::debug!(url = %url, error = %e, "probe failed");
            let message = if e.is_timeout() {
                format!("Request timed out after {:?}", timeout)
            } else {
                format!("Request failed: {}", e)
            };
            ProbeOutcome::Failed { message }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_200_counts_as_found() {
        assert_eq!(ProbeOutcome::from_status(200), ProbeOutcome::Found);
        assert_eq!(
            ProbeOutcome::from_status(204),
            ProbeOutcome::Missing { status: 204 }
        );
        assert_eq!(
            ProbeOutcome::from_status(404),
            ProbeOutcome::Missing { status: 404 }
        );
        assert!(!ProbeOutcome::from_status(301).is_found());
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_value(ProbeOutcome::Missing { status: 404 }).unwrap();
        assert_eq!(json["outcome"], "missing");
        assert_eq!(json["status"], 404);

        let json = serde_json::to_value(ProbeOutcome::Found).unwrap();
        assert_eq!(json["outcome"], "found");
    }
}
