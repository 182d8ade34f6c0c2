use chrono::{DateTime, NaiveDate, Utc};
use comfy_table::{ContentArrangement, Table, presets};

use crate::error::AppResult;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const DATE_FORMAT: &str = "%Y-%m-%d";
const MISSING: &str = "-";

pub fn print_line(line: &str) -> AppResult<()> {
    println!("{line}");
    Ok(())
}

pub fn print_table(header: &[&str], rows: Vec<Vec<String>>) -> AppResult<()> {
    println!("{}", build_table(header, rows));
    Ok(())
}

pub fn build_table(header: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::ASCII_MARKDOWN)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header.iter().copied());

    for row in rows {
        table.add_row(row);
    }

    table
}

/// Shortens `value` to at most `max` characters, marking the cut with `...`.
pub fn truncate(value: &str, max: usize) -> String {
    if value.chars().count() <= max {
        return value.to_string();
    }

    let keep = max.saturating_sub(3);
    let head = value.chars().take(keep).collect::<String>();
    format!("{head}...")
}

/// `2024-05-02T11:30:00Z` -> `2024-05-02 11:30:00` (UTC).
pub fn format_timestamp(value: Option<&DateTime<Utc>>) -> String {
    value
        .map(|at| at.format(TIMESTAMP_FORMAT).to_string())
        .unwrap_or_else(|| MISSING.to_string())
}

pub fn format_date(value: Option<NaiveDate>) -> String {
    value
        .map(|date| date.format(DATE_FORMAT).to_string())
        .unwrap_or_else(|| MISSING.to_string())
}

/// "Showing a-b of n" line, or `None` when every result is already on screen.
pub fn pagination_footer(offset: u32, shown: usize, total: u32, noun: &str) -> Option<String> {
    let shown = u32::try_from(shown).unwrap_or(u32::MAX);
    let last = offset.saturating_add(shown);
    if total <= last {
        return None;
    }

    Some(format!(
        "\nShowing {}-{last} of {total} {noun}",
        offset.saturating_add(1)
    ))
}
