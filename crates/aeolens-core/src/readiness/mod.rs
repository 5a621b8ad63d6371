//! AEO readiness scoring
//!
//! Fetches a page plus `robots.txt` and `sitemap.xml` from its origin, runs the
//! ten [`criteria`] against them and sums the result into a
//! [`ReadinessReport`].

pub mod criteria;
pub mod probe;

use crate::parser::PageDocument;
use crate::types::{CriterionResult, ReadinessReport};
use probe::ProbeOutcome;

#[cfg(feature = "fetch")]
use crate::config::AuditConfig;
#[cfg(feature = "fetch")]
use crate::error::{AuditError, Result};
#[cfg(feature = "fetch")]
use crate::url_utils::{normalize_origin, normalize_url};
#[cfg(feature = "fetch")]
use url::Url;

/// Everything the criteria look at
pub struct PageContext<'a> {
    pub document: &'a PageDocument,
    pub robots_txt: ProbeOutcome,
    pub sitemap_xml: ProbeOutcome,
}

impl PageContext<'_> {
    /// Run every criterion in table order
    pub fn evaluate(&self) -> Vec<CriterionResult> {
        criteria::CRITERIA
            .iter()
            .map(|criterion| criterion.evaluate(self))
            .collect()
    }
}

/// Score an already fetched page.
///
/// `page_url` must be the normalized URL the HTML was requested from; links
/// are resolved against it and its origin decides which links are internal.
pub fn evaluate_page(
    html: &str,
    page_url: &str,
    robots_txt: ProbeOutcome,
    sitemap_xml: ProbeOutcome,
) -> ReadinessReport {
    let document = match PageDocument::parse(html, page_url) {
        Ok(document) => document,
        Err(e) => {
            tracing::warn!(url = page_url, error = %e, "analysis failed");
            return ReadinessReport::failed(page_url.to_string(), e.to_string());
        }
    };

    let context = PageContext {
        document: &document,
        robots_txt,
        sitemap_xml,
    };

    ReadinessReport::from_results(page_url.to_string(), context.evaluate())
}

/// Runs audits with a shared HTTP client.
///
/// Cheap to share behind an `Arc`; it holds no per-audit state.
#[cfg(feature = "fetch")]
#[derive(Debug, Clone)]
pub struct Auditor {
    client: reqwest::Client,
    config: AuditConfig,
}

#[cfg(feature = "fetch")]
impl Auditor {
    pub fn new(config: AuditConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| AuditError::Client(e.to_string()))?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &AuditConfig {
        &self.config
    }

    /// Audit a URL. Never fails: problems fetching the page itself yield a
    /// zero-score report carrying the error message.
    pub async fn evaluate(&self, url: &str) -> ReadinessReport {
        let url = normalize_url(url);
        tracing::debug!(url = %url, "starting audit");

        let html = match self.fetch_page(&url).await {
            Ok(html) => html,
            Err(e) => {
                tracing::warn!(url = %url, error = %e, "analysis failed");
                return ReadinessReport::failed(url, e.to_string());
            }
        };

        let origin = normalize_origin(&url);
        let timeout = self.config.probe_timeout;
        let robots_txt =
            probe::probe_root_file(&self.client, &origin, probe::ROBOTS_TXT_PATH, timeout).await;
        let sitemap_xml =
            probe::probe_root_file(&self.client, &origin, probe::SITEMAP_XML_PATH, timeout).await;

        // parse only after the last await; the document is not Send
        let report = evaluate_page(&html, &url, robots_txt, sitemap_xml);
        tracing::debug!(url = %report.url, score = report.score, "audit finished");
        report
    }

    /// Fetch the page under audit; any non-success status is an error.
    ///
    /// Reading stops with [`AuditError::TooLarge`] once the body passes
    /// `max_page_bytes`.
    pub async fn fetch_page(&self, url: &str) -> Result<String> {
        let parsed = Url::parse(url).map_err(|e| AuditError::invalid_url(url, e))?;
        let timeout = self.config.page_timeout;
        let limit = self.config.max_page_bytes;
        let too_large = || AuditError::TooLarge {
            url: url.to_string(),
            limit,
        };

        let mut response = self
            .client
            .get(parsed)
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| request_error(url, timeout, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AuditError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        if response
            .content_length()
            .is_some_and(|length| length > limit as u64)
        {
            return Err(too_large());
        }

        let mut body = Vec::new();
        while let Some(chunk) = response
            .chunk()
            .await
            .map_err(|e| request_error(url, timeout, e))?
        {
            if body.len() + chunk.len() > limit {
                return Err(too_large());
            }
            body.extend_from_slice(&chunk);
        }

        Ok(String::from_utf8_lossy(&body).into_owned())
    }
}

#[cfg(feature = "fetch")]
fn request_error(url: &str, timeout: std::time::Duration, error: reqwest::Error) -> AuditError {
    if error.is_timeout() {
        AuditError::Timeout {
            url: url.to_string(),
            timeout,
        }
    } else {
        AuditError::Request {
            url: url.to_string(),
            message: error.to_string(),
        }
    }
}

/// Audit a URL with the default configuration.
#[cfg(feature = "fetch")]
pub async fn evaluate(url: &str) -> ReadinessReport {
    match Auditor::new(AuditConfig::default()) {
        Ok(auditor) => auditor.evaluate(url).await,
        Err(e) => ReadinessReport::failed(normalize_url(url), e.to_string()),
    }
}
