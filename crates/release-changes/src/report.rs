// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Report rendering

use comfy_table::{ContentArrangement, Table, presets};
use release_changes_github::Change;

use crate::config::OutputFormat;

const HEADER: [&str; 3] = ["URL", "Message", "When"];

/// Render changes as a table with URL, Message and When columns
#[must_use]
pub fn render_table(changes: &[Change]) -> String {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_BORDERS_ONLY)
        .set_content_arrangement(ContentArrangement::Disabled)
        .set_header(HEADER);

    for change in changes {
        table.add_row([
            change.url.as_str(),
            change.message.as_str(),
            change.display_time.as_str(),
        ]);
    }

    table.to_string()
}

/// Render changes as a pretty-printed JSON array
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn render_json(changes: &[Change]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(changes)
}

/// Render changes in the requested format
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render(changes: &[Change], format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Table => Ok(render_table(changes)),
        OutputFormat::Json => render_json(changes),
    }
}
