//! kac-notes - CLI entry point.

use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use kac_notes::changelog::build_payload;
use kac_notes::config::{ReleaseArgs, resolve_input};
use kac_notes::output::write_payload;

/// Generate Keep a Changelog JSON from GitHub Release metadata.
///
/// Every field falls back to environment variables when the flag is absent
/// or empty, so the tool can run unconfigured inside a release workflow.
#[derive(Parser, Debug)]
#[command(name = "kac-notes")]
#[command(about = "Generate Keep a Changelog JSON from GitHub Release metadata")]
struct Cli {
    /// Release tag, e.g. "v1.2.3"
    #[arg(long)]
    tag: Option<String>,

    /// Release version, e.g. "1.2.3" (derived from the tag when missing)
    #[arg(long = "version")]
    release_version: Option<String>,

    /// Release date/time (RFC3339 preferred)
    #[arg(long)]
    date: Option<String>,

    /// Release notes body (markdown/text)
    #[arg(long)]
    body: Option<String>,

    /// Source repository as "owner/repo"
    #[arg(long)]
    source_repo: Option<String>,

    /// Pretty-print JSON (2-space indent). Default is compact
    #[arg(long)]
    pretty: bool,

    /// Log pipeline decisions to stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn release_args(&self) -> ReleaseArgs {
        ReleaseArgs {
            tag: self.tag.clone(),
            version: self.release_version.clone(),
            date: self.date.clone(),
            body: self.body.clone(),
            source_repo: self.source_repo.clone(),
        }
    }
}

/// Logs go to stderr; stdout carries only the JSON document.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let input = resolve_input(&cli.release_args());
    debug!(
        "Resolved release tag={:?} version={:?} date={:?} source_repo={:?} ({} body bytes)",
        input.tag,
        input.version,
        input.date,
        input.source_repo,
        input.body.len()
    );

    let payload = build_payload(&input);
    debug!(
        "Sections: {:?}",
        payload.keep_a_changelog.count_by_section()
    );

    let mut stdout = io::stdout().lock();
    write_payload(&mut stdout, &payload, cli.pretty).context("Failed to write changelog JSON")?;

    Ok(())
}
