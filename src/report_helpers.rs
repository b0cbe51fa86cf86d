use serde::Serialize;
use unicode_width::UnicodeWidthStr;

/// Terminal display width of a label.
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Compute the max display width for labels, with a minimum of `min`.
pub fn max_label_width<'a>(labels: impl Iterator<Item = &'a str>, min: usize) -> usize {
    labels.map(display_width).max().unwrap_or(min).max(min)
}

/// Left-align `s` in a column of `width` display cells.
pub fn pad_right(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(display_width(s));
    format!("{s}{}", " ".repeat(pad))
}

/// Print a horizontal separator of box-drawing chars.
pub fn separator(width: usize) -> String {
    "\u{2500}".repeat(width)
}

/// Serialize to pretty JSON and print to stdout.
pub fn print_json_stdout(value: &impl Serialize) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
#[path = "report_helpers_test.rs"]
mod tests;
