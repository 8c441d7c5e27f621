//! Shortcut listing widget.
//!
//! Renders a registry snapshot grouped by category, in the enumeration
//! order the registry reports: categories in creation order, entries in
//! their sorted order. Pure view — it draws the snapshot it was given and
//! registers nothing.

use keymux_core::ShortcutSnapshot;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::theme;

/// Column the descriptions start in, relative to the combo column.
const COMBO_COLUMN_WIDTH: usize = 14;

pub struct ShortcutPanel<'a> {
    snapshot: &'a ShortcutSnapshot,
}

impl<'a> ShortcutPanel<'a> {
    pub fn new(snapshot: &'a ShortcutSnapshot) -> Self {
        Self { snapshot }
    }

    /// Rows the panel wants, including the surrounding border. Used by the
    /// host layout to size the panel before rendering.
    pub fn desired_height(&self) -> u16 {
        if self.snapshot.is_empty() {
            return 3; // placeholder line plus borders
        }
        let categories = self.snapshot.categories().count();
        // One title row per category, a blank row between categories,
        // one row per entry, two border rows.
        let rows = self.snapshot.len() + categories * 2 + 1;
        rows.min(u16::MAX as usize) as u16
    }

    fn entry_lines(&self) -> Vec<Line<'static>> {
        let mut lines = Vec::new();
        for (idx, category) in self.snapshot.categories().enumerate() {
            if idx > 0 {
                lines.push(Line::default());
            }
            lines.push(Line::from(Span::styled(
                category.to_string(),
                theme::category_title(),
            )));
            for entry in self.snapshot.category(category) {
                let combo = entry.combo.to_string();
                let padding = COMBO_COLUMN_WIDTH.saturating_sub(combo.width()) + 1;
                let label_style = if entry.enabled {
                    theme::text_primary()
                } else {
                    theme::text_dim()
                };
                let mut spans = vec![
                    Span::raw("  "),
                    Span::styled(combo, theme::combo()),
                    Span::raw(" ".repeat(padding)),
                    Span::styled(entry.label().to_string(), label_style),
                ];
                if !entry.enabled {
                    spans.push(Span::styled(" (disabled)", theme::text_dim()));
                }
                lines.push(Line::from(spans));
            }
        }
        if lines.is_empty() {
            lines.push(Line::from(Span::styled(
                "no shortcuts registered",
                theme::text_dim(),
            )));
        }
        lines
    }
}

impl Widget for ShortcutPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme::border_inactive())
            .title(" Shortcuts ");
        Paragraph::new(self.entry_lines()).block(block).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use keymux_core::{RegistryConfig, Shortcut, ShortcutRegistry};
    use std::time::Duration;

    fn demo_snapshot() -> std::sync::Arc<ShortcutSnapshot> {
        let registry = ShortcutRegistry::with_config(
            RegistryConfig::new().with_notify_debounce(Duration::from_secs(60)),
        );
        registry.register(
            Shortcut::new("navigation", "next", "Ctrl+J", || Ok(()))
                .with_description("Next pane"),
        );
        registry.register(Shortcut::new("editing", "undo", "Ctrl+Z", || Ok(())).disabled());
        registry.snapshot()
    }

    #[test]
    fn test_lines_group_by_category() {
        let snapshot = demo_snapshot();
        let panel = ShortcutPanel::new(&snapshot);
        let text: Vec<String> = panel
            .entry_lines()
            .iter()
            .map(|line| {
                line.spans
                    .iter()
                    .map(|span| span.content.as_ref())
                    .collect::<String>()
            })
            .collect();

        assert_eq!(text[0], "navigation");
        assert!(text[1].contains("Ctrl+J"));
        assert!(text[1].contains("Next pane"));
        assert_eq!(text[2], ""); // blank separator between categories
        assert_eq!(text[3], "editing");
        assert!(text[4].contains("undo")); // no description: name stands in
        assert!(text[4].contains("(disabled)"));
    }

    #[test]
    fn test_empty_snapshot_placeholder() {
        let snapshot = ShortcutSnapshot::default();
        let panel = ShortcutPanel::new(&snapshot);
        let lines = panel.entry_lines();
        assert_eq!(lines.len(), 1);
    }

    #[test]
    fn test_desired_height_accounts_for_borders() {
        let snapshot = demo_snapshot();
        let panel = ShortcutPanel::new(&snapshot);
        // 2 entries + 2 titles + 1 separator + 2 borders.
        assert_eq!(panel.desired_height(), 7);
    }
}
