//! Settings for the network side of an audit

use std::time::Duration;

/// Desktop browser identity sent with every request
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

pub const DEFAULT_PAGE_TIMEOUT: Duration = Duration::from_secs(10);
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// Largest page body read before the audit gives up
pub const DEFAULT_MAX_PAGE_BYTES: usize = 5 * 1024 * 1024;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditConfig {
    pub user_agent: String,

    /// Timeout for the page under audit
    pub page_timeout: Duration,

    /// Timeout for each of the robots.txt and sitemap.xml requests
    pub probe_timeout: Duration,

    /// Upper bound on the page body, in bytes
    pub max_page_bytes: usize,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            page_timeout: DEFAULT_PAGE_TIMEOUT,
            probe_timeout: DEFAULT_PROBE_TIMEOUT,
            max_page_bytes: DEFAULT_MAX_PAGE_BYTES,
        }
    }
}

impl AuditConfig {
    pub fn with_page_timeout(mut self, timeout: Duration) -> Self {
        self.page_timeout = timeout;
        self
    }

    pub fn with_probe_timeout(mut self, timeout: Duration) -> Self {
        self.probe_timeout = timeout;
        self
    }

    pub fn with_max_page_bytes(mut self, max_page_bytes: usize) -> Self {
        self.max_page_bytes = max_page_bytes;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}
