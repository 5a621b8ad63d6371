//! Command-line harness for aeolens-core
//!
//! Audits one URL and prints the report as text or JSON.

use std::fmt::Write as FmtWrite;
use std::time::Duration;

use aeolens_core::{AuditConfig, Auditor, ReadinessReport};
use clap::Parser;

pub const APP_NAME: &str = "aeolens";

const DIVIDER: &str = "─────────────────────────────────────────────────────────────";
const LABEL_WIDTH: usize = 16;
const TITLE_WIDTH: usize = 26;

/// Score a web page for answer engine readiness (AEO)
#[derive(Parser, Debug)]
#[command(name = APP_NAME)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// URL to audit; https:// is assumed when no scheme is given
    pub url: String,

    /// Print the report as JSON
    #[arg(short, long)]
    pub json: bool,

    /// Timeout for the audited page, in seconds
    #[arg(long, default_value_t = 10)]
    pub timeout: u64,

    /// Timeout for robots.txt and sitemap.xml, in seconds
    #[arg(long, default_value_t = 5)]
    pub probe_timeout: u64,

    /// Silence log output on stderr
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    pub fn audit_config(&self) -> AuditConfig {
        AuditConfig::default()
            .with_page_timeout(Duration::from_secs(self.timeout))
            .with_probe_timeout(Duration::from_secs(self.probe_timeout))
    }
}

/// Audit the URL named on the command line.
///
/// Only client construction fails here; fetch problems come back inside the
/// report.
pub async fn audit(cli: &Cli) -> anyhow::Result<ReadinessReport> {
    let auditor = Auditor::new(cli.audit_config())?;
    Ok(auditor.evaluate(&cli.url).await)
}

/// Render the report in the requested format
pub fn render(report: &ReadinessReport, json: bool) -> anyhow::Result<String> {
    if json {
        let mut output = serde_json::to_string_pretty(report)?;
        output.push('\n');
        Ok(output)
    } else {
        Ok(render_text(report))
    }
}

/// Human-readable report
pub fn render_text(report: &ReadinessReport) -> String {
    let mut output = String::new();

    push_section_header(&mut output, "🔎", &format!("AEO Readiness: {}", report.url));

    if let Some(error) = report.error.as_deref() {
        push_key_value(&mut output, "Score", &format!("{}/100", report.score));
        push_key_value(&mut output, "Error", error);
        return output;
    }

    push_key_value(&mut output, "Score", &format!("{}/100", report.score));
    push_key_value(
        &mut output,
        "Passed",
        &format!("{} of {}", report.passed_count(), report.results.len()),
    );
    let _ = writeln!(&mut output);

    push_section_header(&mut output, "📋", "Checklist");
    for result in &report.results {
        let _ = writeln!(
            &mut output,
            "{} {:<width$} {}",
            result.indicator.emoji(),
            result.title,
            result.description,
            width = TITLE_WIDTH
        );
    }

    output
}

fn push_section_header(buf: &mut String, icon: &str, title: &str) {
    let _ = writeln!(buf, "{DIVIDER}");
    let _ = writeln!(buf, "{icon} {title}");
    let _ = writeln!(buf, "{DIVIDER}");
}

fn push_key_value(buf: &mut String, label: &str, value: &str) {
    if value.is_empty() {
        return;
    }
    let _ = writeln!(buf, "• {:<width$} : {}", label, value, width = LABEL_WIDTH);
}
