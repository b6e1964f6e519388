//! HTML rendering for the dashboard page.
//!
//! The page is a single document: a title, a caption and one table whose
//! header comes from [`TableRow::COLUMNS`] and whose body holds one `<tr>`
//! per row, in the order the rows were given. Rendering is a pure function
//! of its inputs, so the same rows always produce the same bytes.

use crate::error::CoreError;

/// A record that can be displayed as one row of an HTML table.
pub trait TableRow {
    /// Header labels, left to right.
    const COLUMNS: &'static [&'static str];

    /// Display values for this row, one per entry in [`Self::COLUMNS`].
    fn cells(&self) -> Vec<String>;
}

/// Static text surrounding the table.
#[derive(Debug, Clone)]
pub struct TablePage<'a> {
    pub title: &'a str,
    pub caption: &'a str,
}

const STYLE: &str = "body{font-family:sans-serif;margin:2rem}\
table{border-collapse:collapse}\
th,td{border:1px solid #ccc;padding:.4rem .8rem;text-align:left}\
th{background:#f4f4f4}";

/// Render a full HTML document containing `rows` as a table.
///
/// An empty slice renders the header and an empty `<tbody>`. Returns
/// [`CoreError::ColumnMismatch`] if any row yields a cell count different
/// from the header.
pub fn render_table<R: TableRow>(
    page: &TablePage<'_>,
    rows: &[R],
) -> Result<String, CoreError> {
    let title = escape_html(page.title);

    let mut html = String::with_capacity(512 + rows.len() * 64);
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str(&format!("<title>{title}</title>\n"));
    html.push_str(&format!("<style>{STYLE}</style>\n"));
    html.push_str("</head>\n<body>\n");
    html.push_str(&format!("<h1>{title}</h1>\n"));
    html.push_str(&format!(
        "<p class=\"caption\">{}</p>\n",
        escape_html(page.caption)
    ));

    html.push_str("<table>\n<thead>\n<tr>");
    for column in R::COLUMNS {
        html.push_str(&format!("<th>{}</th>", escape_html(column)));
    }
    html.push_str("</tr>\n</thead>\n<tbody>\n");

    for (index, row) in rows.iter().enumerate() {
        let cells = row.cells();
        if cells.len() != R::COLUMNS.len() {
            return Err(CoreError::ColumnMismatch {
                row: index,
                expected: R::COLUMNS.len(),
                actual: cells.len(),
            });
        }

        html.push_str("<tr>");
        for cell in &cells {
            html.push_str(&format!("<td>{}</td>", escape_html(cell)));
        }
        html.push_str("</tr>\n");
    }

    html.push_str("</tbody>\n</table>\n</body>\n</html>\n");
    Ok(html)
}

/// Escape the five characters that are significant in HTML text and
/// attribute values.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}
