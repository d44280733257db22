use std::env;
use std::fs;
use std::io;
use std::path::Path;

use crate::ratings::RatingRecord;

/// Output path used when the caller does not supply one.
pub const DEFAULT_OUTPUT_FILE: &str = "tennis_with_ratings.html";

const REPORT_TITLE: &str = "TennisRecord Player Links With Ratings";

/// Shape of the generated document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportStyle {
    /// Flat `<ul>` of "name (ratings)" entries.
    List,
    /// Table with click-to-sort column headers.
    Table,
}

impl ReportStyle {
    /// Pick the style from the `REPORT_STYLE` env var. Anything other
    /// than "list" means the sortable table.
    pub fn from_env() -> Self {
        match env::var("REPORT_STYLE") {
            Ok(v) if v.eq_ignore_ascii_case("list") => ReportStyle::List,
            _ => ReportStyle::Table,
        }
    }
}

/// Render the full report document for the given records, in row order.
pub fn render_report(records: &[RatingRecord], style: ReportStyle) -> String {
    match style {
        ReportStyle::List => render_list(records),
        ReportStyle::Table => render_table(records),
    }
}

/// Write the finished document in one shot. Nothing touches the disk
/// until the whole report has been rendered.
pub fn write_report<P: AsRef<Path>>(path: P, html: &str) -> io::Result<()> {
    fs::write(path, html)
}

fn render_list(records: &[RatingRecord]) -> String {
    let items: String = records
        .iter()
        .map(|rec| {
            format!(
                "    <li>\n      <a href=\"{url}\" target=\"_blank\">{name}</a>\n      \
                 (Current Rating {current} as of {current_date}  |  \
                 Dynamic {dynamic} as of {dynamic_date})\n    </li>\n",
                url = html_escape(&rec.profile_url),
                name = html_escape(&rec.name),
                current = html_escape(&rec.ratings.current_rating),
                current_date = html_escape(&rec.ratings.current_date),
                dynamic = html_escape(&rec.ratings.dynamic_rating),
                dynamic_date = html_escape(&rec.ratings.dynamic_date),
            )
        })
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8" />
  <title>{title}</title>
</head>
<body>
  <h1>{title}</h1>
  <ul>
{items}  </ul>
</body>
</html>
"#,
        title = REPORT_TITLE,
        items = items,
    )
}

fn render_table(records: &[RatingRecord]) -> String {
    let rows: String = records
        .iter()
        .map(|rec| {
            format!(
                r#"            <tr>
                <td><a href="{url}" target="_blank">{name}</a></td>
                <td>{current}</td>
                <td>{current_date}</td>
                <td>{dynamic}</td>
                <td>{dynamic_date}</td>
            </tr>
"#,
                url = html_escape(&rec.profile_url),
                name = html_escape(&rec.name),
                current = html_escape(&rec.ratings.current_rating),
                current_date = html_escape(&rec.ratings.current_date),
                dynamic = html_escape(&rec.ratings.dynamic_rating),
                dynamic_date = html_escape(&rec.ratings.dynamic_date),
            )
        })
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>{title}</title>
    <style>{css}</style>
</head>
<body>
    <h1>{title}</h1>
    <table id="ratings-table">
        <thead>
            <tr>
                <th>Name</th>
                <th>Current Rating</th>
                <th>Date</th>
                <th>Dynamic Rating</th>
                <th>Date</th>
            </tr>
        </thead>
        <tbody>
{rows}        </tbody>
    </table>
    <script>{js}</script>
</body>
</html>
"#,
        title = REPORT_TITLE,
        css = inline_css(),
        js = inline_javascript(),
        rows = rows,
    )
}

fn inline_css() -> &'static str {
    r#"
body {
    font-family: system-ui, -apple-system, 'Segoe UI', sans-serif;
    color: #111827;
    margin: 2rem auto;
    max-width: 900px;
    padding: 0 1rem;
}

table {
    width: 100%;
    border-collapse: collapse;
}

th {
    padding: 0.6rem;
    text-align: left;
    border-bottom: 2px solid #e5e7eb;
    cursor: pointer;
    user-select: none;
}

th:hover {
    background: #f3f4f6;
}

td {
    padding: 0.6rem;
    border-bottom: 1px solid #e5e7eb;
}

tbody tr:hover {
    background: #f9fafb;
}
"#
}

/// Click a header cell to sort by that column; clicking again flips the
/// direction. Comparison is locale-aware and numeric-aware, so "10.5"
/// sorts after "9.0".
fn inline_javascript() -> &'static str {
    r#"
(function() {
    let sortColumn = -1;
    let sortDirection = 'asc';

    function sortTable(column) {
        const tbody = document.querySelector('#ratings-table tbody');
        const rows = Array.from(tbody.querySelectorAll('tr'));

        if (sortColumn === column) {
            sortDirection = sortDirection === 'asc' ? 'desc' : 'asc';
        } else {
            sortColumn = column;
            sortDirection = 'asc';
        }

        rows.sort((a, b) => {
            const aVal = a.cells[column].textContent.trim();
            const bVal = b.cells[column].textContent.trim();
            const cmp = aVal.localeCompare(bVal, undefined, { numeric: true });
            return sortDirection === 'asc' ? cmp : -cmp;
        });

        rows.forEach(row => tbody.appendChild(row));
    }

    document.addEventListener('DOMContentLoaded', function() {
        document.querySelectorAll('#ratings-table th').forEach((th, idx) => {
            th.addEventListener('click', () => sortTable(idx));
        });
    });
})();
"#
}

/// Escape HTML special characters.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
