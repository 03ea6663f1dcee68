//! Plain-text matrix tables.
//!
//! Functions for turning enumerated matrices into aligned text tables
//! suitable for snapshot testing and terminal output.

use crate::matrix::{ButtonMatrixRow, TextFieldMatrixRow, BUTTON_MATRIX_HEADERS};
use crate::style::{BorderSpec, Paint};

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Render a header row, a dash rule, and the given rows as an aligned table.
///
/// Columns are left-aligned, padded to their widest cell and separated by
/// two spaces. Each line is right-trimmed and lines are joined with `'\n'`.
/// The final line does not have a trailing newline.
pub fn table_to_string(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            let len = cell.chars().count();
            match widths.get_mut(i) {
                Some(width) => *width = (*width).max(len),
                None => widths.push(len),
            }
        }
    }

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(format_line(headers.iter().copied(), &widths));
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    lines.push(rule.join("  "));
    for row in rows {
        lines.push(format_line(row.iter().map(String::as_str), &widths));
    }

    lines.join("\n")
}

/// Render the button matrix: variant columns followed by resolved tokens.
pub fn button_matrix_to_string(rows: &[ButtonMatrixRow]) -> String {
    let mut headers = BUTTON_MATRIX_HEADERS.to_vec();
    headers.extend(["Background", "Foreground", "Border"]);

    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|row| {
            let mut cells: Vec<String> = row.cells().iter().map(|c| c.to_string()).collect();
            cells.push(paint_name(row.style.background));
            cells.push(paint_name(row.style.foreground));
            cells.push(border_name(row.style.border));
            cells
        })
        .collect();

    table_to_string(&headers, &cells)
}

/// Render the text field matrix: state, floating label and resolved tokens.
pub fn text_field_matrix_to_string(rows: &[TextFieldMatrixRow]) -> String {
    let headers = ["State", "Floating Label", "Border", "Label", "Background"];

    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|row| {
            let style = &row.style.descriptor;
            vec![
                row.flags.state.to_string(),
                if row.flags.floating_label { "Yes" } else { "No" }.to_string(),
                style
                    .border
                    .color()
                    .map_or_else(|| "none".to_string(), |t| t.name().to_string()),
                paint_name(style.foreground),
                paint_name(style.background),
            ]
        })
        .collect();

    table_to_string(&headers, &cells)
}

fn format_line<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect();
    padded.join("  ").trim_end().to_owned()
}

fn paint_name(paint: Paint) -> String {
    match paint {
        Paint::Transparent => "transparent".to_string(),
        Paint::Token(token) => token.name().to_string(),
    }
}

fn border_name(border: BorderSpec) -> String {
    match border {
        BorderSpec::None => "none".to_string(),
        BorderSpec::Line { width, color, .. } => format!("{width}px {}", color.name()),
    }
}

// ===========================================================================
// Tests
// ===========================================================================
