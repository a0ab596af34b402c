//! Column menu component.

use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderMenu;

/// Renders an open "..." menu as a small box titled with the column label.
#[must_use]
pub fn render_header_menu(label: &str, menu: &HeaderMenu, theme: &Theme) -> Vec<String> {
    let inner = menu
        .items
        .iter()
        .map(|item| item.label().chars().count())
        .chain(std::iter::once(label.chars().count() + 2))
        .max()
        .unwrap_or(0)
        + 2;

    let style = format!(
        "{}{}",
        Theme::fg(&theme.colors.menu_fg),
        Theme::bg(&theme.colors.menu_bg)
    );
    let title_fill = inner.saturating_sub(label.chars().count() + 3);

    let mut lines = Vec::with_capacity(menu.items.len() + 2);
    lines.push(format!(
        "{style}╭─ {label} {}╮{}",
        "─".repeat(title_fill),
        Theme::reset()
    ));
    for item in &menu.items {
        let text = item.label();
        let fill = inner.saturating_sub(text.chars().count() + 1);
        lines.push(format!("{style}│ {text}{}│{}", " ".repeat(fill), Theme::reset()));
    }
    lines.push(format!("{style}╰{}╯{}", "─".repeat(inner), Theme::reset()));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::helpers::strip_ansi;
    use crate::ui::viewmodel::MenuItem;

    #[test]
    fn menu_box_lines_share_one_width() {
        let menu = HeaderMenu {
            field_key: "status".into(),
            items: vec![MenuItem::Rename, MenuItem::Hide],
        };
        let lines: Vec<String> = render_header_menu("Status", &menu, &Theme::default())
            .iter()
            .map(|l| strip_ansi(l))
            .collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("╭─ Status "));
        assert_eq!(lines[2], "│ Hide column │");
        let widths: Vec<usize> = lines.iter().map(|l| l.chars().count()).collect();
        assert!(widths.iter().all(|w| *w == widths[0]), "{lines:?}");
    }
}
