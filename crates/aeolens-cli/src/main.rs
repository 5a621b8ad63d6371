use std::process::ExitCode;

use aeolens_cli::{Cli, audit, render};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.quiet);

    tracing::info!(url = %cli.url, "auditing URL");
    let report = audit(&cli).await?;
    tracing::info!(url = %report.url, score = report.score, "audit finished");
    print!("{}", render(&report, cli.json)?);

    if report.is_failed() {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

/// Logs go to stderr so `--json` output stays parseable.
fn init_tracing(quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("off")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "aeolens=info,aeolens_core=info".into())
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
