mod agenda;
mod airdate;
mod cli;
mod error;
mod fetch;
mod normalize;
mod parser;
mod render;
mod tree;
mod types;

use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate};
use clap::Parser;
use std::fs;
use std::io::{self, Write};
use std::time::Duration;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::agenda::{build_release_map, reference_date};
use crate::cli::{Cli, Command, Format, ListArgs, RefreshArgs};
use crate::error::ScheduleError;
use crate::parser::parse_days;
use crate::render::{build_response, render_alfred, render_html, render_markdown};
use crate::tree::{HtmlTree, Markers};
use crate::types::DisplayRecord;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::ListShows(args) => list_shows(&cli.file, &args),
        Command::Refresh(args) => refresh(&cli.file, &args),
    }
}

fn list_shows(path: &std::path::Path, args: &ListArgs) -> Result<()> {
    let html = fs::read_to_string(path)
        .with_context(|| format!("failed to read snapshot {}", path.display()))?;
    let today = reference_date(args.date, args.tz);
    debug!(%today, "reference date");

    let records = extract_schedule(&html, &args.markers(), today)
        .with_context(|| format!("failed to extract schedule from {}", path.display()))?;
    info!(shows = records.len(), "upcoming shows");

    let output = match args.format {
        Format::Alfred => render_alfred(&records)?,
        Format::Md => render_markdown(&records),
        Format::Html => render_html(&records),
    };

    if let Some(ref out_path) = args.output {
        fs::write(out_path, output)
            .with_context(|| format!("failed to write {}", out_path.display()))?;
    } else {
        let mut stdout = io::stdout().lock();
        stdout.write_all(output.as_bytes())?;
        stdout.write_all(b"\n")?;
    }

    Ok(())
}

fn refresh(path: &std::path::Path, args: &RefreshArgs) -> Result<()> {
    fetch::refresh_snapshot(&args.url, path, Duration::from_secs(args.timeout_secs))
        .with_context(|| format!("failed to refresh {} from {}", path.display(), args.url))?;
    Ok(())
}

/// Parse, aggregate and order a listings snapshot
///
/// Year-less listing dates take the year of `today`.
fn extract_schedule(
    html: &str,
    markers: &Markers,
    today: NaiveDate,
) -> Result<Vec<DisplayRecord>, ScheduleError> {
    let tree = HtmlTree::parse(html, markers)?;
    let days = parse_days(&tree, today.year())?;
    debug!(days = days.len(), "parsed day blocks");
    let releases = build_release_map(&days, today);
    Ok(build_response(&releases))
}
