//! Frame layout for the demo: input line, activity log, shortcut panel,
//! footer.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::{DemoApp, Focus};
use crate::panel::ShortcutPanel;
use crate::theme;

pub fn render(f: &mut Frame, app: &DemoApp) {
    let panel = ShortcutPanel::new(&app.snapshot);
    let panel_height = if app.shared.panel_visible() {
        // Leave room for input, a few activity rows and the footer.
        panel
            .desired_height()
            .min(f.area().height.saturating_sub(10))
    } else {
        0
    };

    let chunks = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(4),
        Constraint::Length(panel_height),
        Constraint::Length(1),
    ])
    .split(f.area());

    render_input(f, app, chunks[0]);
    render_activity(f, app, chunks[1]);
    if panel_height > 0 {
        f.render_widget(panel, chunks[2]);
    }
    render_footer(f, app, chunks[3]);
}

fn render_input(f: &mut Frame, app: &DemoApp, area: Rect) {
    let focused = app.focus == Focus::Input;
    let border = if focused {
        theme::border_active()
    } else {
        theme::border_inactive()
    };
    let title = if focused {
        " Input (editable target — shortcuts stand down) "
    } else {
        " Input (Tab to focus) "
    };
    let text = app.shared.input.lock().clone();
    let widget = Paragraph::new(text.as_str())
        .style(theme::text_primary())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border)
                .title(title),
        );
    f.render_widget(widget, area);
    if focused {
        // Cursor sits after the typed text, inside the border.
        let x = area.x + 1 + text.width() as u16;
        f.set_cursor_position((x.min(area.right().saturating_sub(2)), area.y + 1));
    }
}

fn render_activity(f: &mut Frame, app: &DemoApp, area: Rect) {
    let rows = area.height.saturating_sub(2) as usize;
    let activity = app.shared.activity.lock();
    let start = activity.len().saturating_sub(rows);
    let lines: Vec<Line> = activity
        .iter()
        .skip(start)
        .map(|entry| {
            Line::from(vec![
                Span::styled(entry.at.format("%H:%M:%S ").to_string(), theme::text_dim()),
                Span::styled(entry.text.clone(), theme::text_primary()),
            ])
        })
        .collect();
    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme::border_inactive())
            .title(" Activity "),
    );
    f.render_widget(widget, area);
}

fn render_footer(f: &mut Frame, app: &DemoApp, area: Rect) {
    let mut spans = vec![Span::styled(
        " Tab focus input · Ctrl+H panel · Ctrl+Q quit ",
        theme::text_muted(),
    )];
    let conflicts = app.snapshot.find_conflicts();
    if !conflicts.is_empty() {
        let combos: Vec<String> = conflicts.iter().map(|c| c.combo.clone()).collect();
        spans.push(Span::styled(
            format!("· {} colliding: {} ", conflicts.len(), combos.join(", ")),
            theme::conflict(),
        ));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
