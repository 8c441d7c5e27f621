//! Terminal front-end for the keymux shortcut engine: crossterm event
//! adapter, ratatui shortcut panel, and the interactive demo app.

pub mod app;
pub mod keys;
pub mod logging;
pub mod panel;
pub mod render;
pub mod runtime;
pub mod terminal;
pub mod theme;
