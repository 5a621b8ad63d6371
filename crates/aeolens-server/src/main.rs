use std::time::Duration;

use aeolens_core::{AuditConfig, Auditor};
use aeolens_server::{AppState, run_server};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// HTTP API that scores web pages for answer engine readiness
#[derive(Parser, Debug)]
#[command(name = "aeolens-server")]
#[command(version, about, long_about = None)]
struct Args {
    /// Host to bind to
    #[arg(short = 'H', long, env = "AEOLENS_HOST", default_value = "0.0.0.0")]
    host: String,

    /// Port to bind to
    #[arg(short, long, env = "AEOLENS_PORT", default_value_t = 8000)]
    port: u16,

    /// Timeout for the audited page, in seconds
    #[arg(long, default_value_t = 10)]
    timeout: u64,

    /// Timeout for robots.txt and sitemap.xml, in seconds
    #[arg(long, default_value_t = 5)]
    probe_timeout: u64,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let args = Args::parse();
    let config = AuditConfig::default()
        .with_page_timeout(Duration::from_secs(args.timeout))
        .with_probe_timeout(Duration::from_secs(args.probe_timeout));
    let auditor = Auditor::new(config)?;

    let addr = format!("{}:{}", args.host, args.port);
    run_server(&addr, AppState::new(auditor)).await
}

/// AEOLENS_LOG_FORMAT=json switches to machine-parseable output.
fn init_tracing() {
    let log_format = std::env::var("AEOLENS_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "aeolens_server=info,aeolens_core=info,tower_http=info".into());

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer())
                .init();
        }
    }
}
