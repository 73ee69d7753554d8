//! ASCII box rendering for operator-facing output.
//!
//! Every box line is exactly 72 columns: a `|` gutter, two spaces, a
//! left-aligned 68-column field, and a closing `|`. Callers keep field text
//! within the budget; anything longer is truncated at the source.

/// Interior text width of a box line after the `|  ` gutter.
const FIELD_WIDTH: usize = 68;

/// Light horizontal rule: `+----+`.
pub fn rule() -> String {
    format!("+{}+", "-".repeat(FIELD_WIDTH + 2))
}

/// Heavy horizontal rule: `+====+`, used for the overview banner.
pub fn heavy_rule() -> String {
    format!("+{}+", "=".repeat(FIELD_WIDTH + 2))
}

/// One box line with `text` left-aligned in the field.
pub fn line(text: &str) -> String {
    format!("|  {text:<width$}|", width = FIELD_WIDTH)
}

/// An empty box line.
pub fn blank() -> String {
    line("")
}

/// Truncate to at most `max_chars` characters.
///
/// The cap is in characters, not bytes, so multibyte text cannot be split
/// mid-codepoint.
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    text.chars().take(max_chars).collect()
}
