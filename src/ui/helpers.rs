//! Shared rendering utilities.
//!
//! Low-level text helpers used across the grid components: mapping pixel
//! widths to character cells and fitting text into a fixed number of cells.
//! All measurements count `char`s, not bytes.

use crate::ui::theme::Theme;

/// Fewest character cells any column is given.
pub const MIN_CHAR_WIDTH: usize = 3;

/// Marker appended to text cut to fit its cell.
const ELLIPSIS: char = '…';

/// Converts a pixel width to character cells.
///
/// # Example
///
/// ```rust
/// use gridview::ui::helpers::char_width;
///
/// assert_eq!(char_width(150.0, 8.0), 19);
/// assert_eq!(char_width(10.0, 8.0), 3);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn char_width(px: f64, px_per_char: f64) -> usize {
    if !px.is_finite() || !px_per_char.is_finite() || px_per_char <= 0.0 {
        return MIN_CHAR_WIDTH;
    }
    ((px / px_per_char).round().max(0.0) as usize).max(MIN_CHAR_WIDTH)
}

/// Pads or truncates `text` to exactly `width` characters.
///
/// Text longer than the cell is cut and ends with an ellipsis. Line breaks are
/// flattened to spaces so a cell never spans rows.
///
/// # Example
///
/// ```rust
/// use gridview::ui::helpers::fit;
///
/// assert_eq!(fit("Name", 6), "Name  ");
/// assert_eq!(fit("Department", 6), "Depar…");
/// ```
#[must_use]
pub fn fit(text: &str, width: usize) -> String {
    let flat: String = text
        .chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect();
    let len = flat.chars().count();
    if len <= width {
        return format!("{flat}{}", " ".repeat(width - len));
    }
    if width == 0 {
        return String::new();
    }
    let mut cut: String = flat.chars().take(width - 1).collect();
    cut.push(ELLIPSIS);
    cut
}

/// A full-width separator line in the border color.
#[must_use]
pub fn horizontal_rule(width: usize, theme: &Theme) -> String {
    format!(
        "{}{}{}",
        Theme::fg(&theme.colors.border),
        "─".repeat(width),
        Theme::reset()
    )
}

/// Wraps `text` in a foreground color.
#[must_use]
pub fn colored(text: &str, hex: &str) -> String {
    format!("{}{text}{}", Theme::fg(hex), Theme::reset())
}

/// Removes ANSI SGR escape sequences, leaving the visible text.
///
/// ```rust
/// use gridview::ui::helpers::{colored, strip_ansi};
///
/// assert_eq!(strip_ansi(&colored("ok", "#00ff00")), "ok");
/// ```
#[must_use]
pub fn strip_ansi(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_escape = false;
    for c in text.chars() {
        match (in_escape, c) {
            (false, '\u{1b}') => in_escape = true,
            (true, 'm') => in_escape = false,
            (false, _) => out.push(c),
            (true, _) => {}
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_counts_chars_not_bytes() {
        assert_eq!(fit("Ünïcödé", 8), "Ünïcödé ");
        assert_eq!(fit("Ünïcödé", 4).chars().count(), 4);
    }

    #[test]
    fn fit_flattens_newlines() {
        assert_eq!(fit("a\nb", 3), "a b");
    }

    #[test]
    fn char_width_guards_bad_input() {
        assert_eq!(char_width(f64::NAN, 8.0), MIN_CHAR_WIDTH);
        assert_eq!(char_width(400.0, 0.0), MIN_CHAR_WIDTH);
        assert_eq!(char_width(400.0, 8.0), 50);
    }
}
