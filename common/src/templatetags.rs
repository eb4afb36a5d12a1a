/*
 * SPDX-FileCopyrightText: 2025 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::query_log::{QueryLog, QueryRecord};

const QUERIES_TITLE: &str = "Database queries";
const TIME_TITLE: &str = "Time";

fn escape_html(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());

    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }

    escaped
}

/// Debug footer listing `records` in a hidden table behind a toggle link.
/// Returns an empty string when nothing was captured.
pub fn render_sql_queries(records: &[QueryRecord]) -> String {
    if records.is_empty() {
        return String::new();
    }

    let rows = records
        .iter()
        .enumerate()
        .map(|(index, query)| {
            format!(
                r#"<tr class="row{}"><td>{}</td><td>{}</td></tr>"#,
                index % 2 + 1,
                query.time(),
                // lets long column lists wrap
                escape_html(&query.sql.replace("\",\"", "\", \"")),
            )
        })
        .collect::<Vec<String>>()
        .join("\n");

    format!(
        r##"<p class="debug"><a onclick="document.getElementById('sql-queries').style.visibility='visible'" href="#sql" name="sql">{title}</a></p>
<table class="debug" id="sql-queries" style="visibility:hidden">
<thead>
<tr><th>{time}</th><th>{title}</th></tr>
</thead>
<tbody>
{rows}
</tbody>
</table>"##,
        title = QUERIES_TITLE,
        time = TIME_TITLE,
        rows = rows,
    )
}

/// Renders the query log of the current request.
pub fn sql_queries() -> String {
    match QueryLog::current() {
        Some(log) => render_sql_queries(&log.records()),
        None => String::new(),
    }
}
