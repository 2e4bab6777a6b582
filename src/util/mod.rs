//! Small formatting helpers shared by the TUI, the CLI printers and logging.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// What: Format a catalog price for display.
///
/// Inputs:
/// - `price`: Price as delivered by the catalog
///
/// Output:
/// - `Some("$1299.00")`-style text, or `None` when the price is absent or zero.
#[must_use]
pub fn format_price(price: Option<f64>) -> Option<String> {
    price.filter(|p| *p > 0.0).map(|p| format!("${p:.2}"))
}

/// What: Truncate `s` to at most `max_width` terminal columns.
///
/// Inputs:
/// - `s`: Text to fit
/// - `max_width`: Available columns
///
/// Output:
/// - `s` unchanged when it fits; otherwise a prefix followed by `…`.
///
/// Details:
/// - Widths are measured with `unicode-width`, so wide glyphs count as two columns.
#[must_use]
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

/// Local timestamp used by the log formatter (`YYYY-MM-DD-T HH:MM:SS`).
#[must_use]
pub fn log_timestamp() -> String {
    chrono::Local::now().format("%Y-%m-%d-T %H:%M:%S").to_string()
}
