// Centralized styling for the demo UI.

use ratatui::style::{Color, Modifier, Style};

/// Primary text - off-white for readability
pub const TEXT_PRIMARY: Color = Color::Rgb(220, 220, 220);

/// Secondary/muted text
pub const TEXT_MUTED: Color = Color::Rgb(128, 128, 128);

/// Dimmed text for hints and disabled entries
pub const TEXT_DIM: Color = Color::Rgb(90, 90, 90);

/// Accent - muted blue, used for combo strings and the focused border
pub const ACCENT: Color = Color::Rgb(86, 156, 214);

/// Warning - muted amber, used for conflict notices
pub const WARNING: Color = Color::Rgb(206, 145, 120);

pub fn text_primary() -> Style {
    Style::default().fg(TEXT_PRIMARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(TEXT_MUTED)
}

pub fn text_dim() -> Style {
    Style::default().fg(TEXT_DIM)
}

pub fn category_title() -> Style {
    Style::default()
        .fg(TEXT_PRIMARY)
        .add_modifier(Modifier::BOLD)
}

pub fn combo() -> Style {
    Style::default().fg(ACCENT)
}

pub fn conflict() -> Style {
    Style::default().fg(WARNING)
}

pub fn border_active() -> Style {
    Style::default().fg(ACCENT)
}

pub fn border_inactive() -> Style {
    Style::default().fg(TEXT_DIM)
}
