//! Plain-text report writer.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use crate::error::ChatlensError;
use crate::pipeline::Analysis;

const BAR_WIDTH: usize = 30;

/// Writes the text report to a file.
pub fn write_text(analysis: &Analysis, output_path: &Path, top_senders: usize) -> Result<(), ChatlensError> {
    fs::write(output_path, to_text(analysis, top_senders))?;
    Ok(())
}

/// Renders statistics and frequency tables as aligned plain text.
///
/// Tables get a proportional bar so the report reads like the charts it
/// stands in for.
pub fn to_text(analysis: &Analysis, top_senders: usize) -> String {
    let dist = &analysis.distributions;
    let mut out = String::new();

    section(&mut out, "Summary");
    let pairs = analysis.stats.to_pairs();
    let width = pairs.iter().map(|(k, _)| k.len()).max().unwrap_or(0);
    for (name, value) in &pairs {
        let _ = writeln!(out, "  {name:<width$}  {value}");
    }

    section(&mut out, "Messages by sender");
    table(
        &mut out,
        dist.senders.iter().take(top_senders).map(|(s, n)| (s.clone(), *n)),
    );

    section(&mut out, "Messages by weekday");
    table(&mut out, dist.weekdays.iter().map(|(d, n)| ((*d).to_string(), *n)));

    section(&mut out, "Messages by hour");
    table(&mut out, dist.hours.iter().map(|(h, n)| (format!("{h:02}h"), *n)));

    section(&mut out, "Top words");
    table(&mut out, dist.words.iter().map(|(w, n)| (w.clone(), *n)));

    if !dist.glyphs.is_empty() {
        section(&mut out, "Top emoji");
        table(&mut out, dist.glyphs.iter().map(|(g, n)| (g.to_string(), *n)));
    }

    section(&mut out, "Daily volume");
    table(
        &mut out,
        dist.daily.iter().map(|(d, n)| (d.format("%d/%m/%Y").to_string(), *n)),
    );
    let _ = writeln!(
        out,
        "  average per active day: {:.1} (baseline {})",
        dist.daily_mean, dist.daily_baseline
    );

    out
}

fn section(out: &mut String, title: &str) {
    if !out.is_empty() {
        out.push('\n');
    }
    let _ = writeln!(out, "{title}");
    let _ = writeln!(out, "{}", "-".repeat(title.chars().count()));
}

fn table(out: &mut String, rows: impl Iterator<Item = (String, usize)>) {
    let rows: Vec<(String, usize)> = rows.collect();
    if rows.is_empty() {
        out.push_str("  (none)\n");
        return;
    }

    let label_width = rows.iter().map(|(l, _)| l.chars().count()).max().unwrap_or(0);
    let max = rows.iter().map(|(_, n)| *n).max().unwrap_or(0).max(1);

    for (label, count) in &rows {
        let bar = "#".repeat(count * BAR_WIDTH / max);
        let pad = label_width - label.chars().count();
        let _ = writeln!(out, "  {label}{:pad$}  {count:>6}  {bar}", "");
    }
}
