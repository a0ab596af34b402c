//! Empty state component renderer.

use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders the single placeholder row shown when there is no data.
///
/// The message is centered across the full row width, which spans every
/// rendered column including the selection column.
#[must_use]
pub fn render_empty_state(empty: &EmptyState, total_width: usize, theme: &Theme) -> String {
    let msg_len = empty.message.chars().count();
    let padding = total_width.saturating_sub(msg_len) / 2;

    format!(
        "{}{}{}{}{}{}",
        Theme::dim(),
        Theme::fg(&theme.colors.empty_state_fg),
        " ".repeat(padding),
        empty.message,
        " ".repeat(total_width.saturating_sub(padding + msg_len)),
        Theme::reset()
    )
}
