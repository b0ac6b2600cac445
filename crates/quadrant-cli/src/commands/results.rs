//! `quadrant results` - lists every stored result.

use std::io::Write;

use anyhow::Result;
use colored::Colorize;

use quadrant_application::{FetchOutcome, RecordSource, ResultService};
use quadrant_core::locale::Locale;
use quadrant_core::record::{DEFAULT_JITTER_SPREAD, ResultRecord};

use crate::chart;

#[derive(Debug, Clone, Copy)]
pub struct ResultsOptions {
    pub locale: Locale,
    pub chart: bool,
}

pub async fn run(results: &ResultService, options: ResultsOptions) -> Result<()> {
    let outcome = results.fetch_all().await;
    print(&outcome, results.is_remote_enabled(), options, &mut std::io::stdout())
}

pub fn print<W: Write>(
    outcome: &FetchOutcome,
    remote_enabled: bool,
    options: ResultsOptions,
    out: &mut W,
) -> Result<()> {
    let source = match (outcome.source, remote_enabled) {
        (RecordSource::Remote, _) => "remote store",
        (RecordSource::LocalCache, true) => "local cache (remote store unavailable or empty)",
        (RecordSource::LocalCache, false) => "local cache",
    };
    writeln!(
        out,
        "{}",
        format!("{} result(s) from {}", outcome.records.len(), source).bright_black()
    )?;

    let mut records: Vec<&ResultRecord> = outcome.records.iter().collect();
    records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    for record in &records {
        writeln!(out, "{}", format_record(record, options.locale))?;
        if let Some(slogan) = record.slogan.as_deref().filter(|s| !s.is_empty()) {
            writeln!(out, "    \"{}\"", slogan.italic())?;
        }
    }

    if options.chart && !records.is_empty() {
        let messages = options.locale.messages();
        writeln!(out)?;
        writeln!(out, "{}", messages.axis_y.bright_black())?;
        for line in chart::render(&outcome.records, DEFAULT_JITTER_SPREAD) {
            writeln!(out, "  {line}")?;
        }
        writeln!(out, "{}", messages.axis_x.bright_black())?;
    }
    Ok(())
}

fn format_record(record: &ResultRecord, locale: Locale) -> String {
    let local_marker = if record.id.is_local() { " (local)" } else { "" };
    format!(
        "{} {:<20} X {:>5.1}  Y {:>5.1}  {}  {}{}",
        record.emoji,
        record.nickname,
        record.x,
        record.y,
        record.quadrant().label(locale).bold(),
        record.created_at.format("%Y-%m-%d"),
        local_marker.bright_black(),
    )
}
