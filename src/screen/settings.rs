//! Placeholder settings screen.

use super::NavRequest;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

/// Interpret one key press.
pub(super) fn handle_key(key: KeyEvent) -> Option<NavRequest> {
    match key.code {
        KeyCode::Esc | KeyCode::Backspace => Some(NavRequest::Back),
        _ => None,
    }
}

/// Draw the placeholder into `area`.
pub(super) fn render(frame: &mut Frame, area: Rect) {
    frame.render_widget(
        Paragraph::new("Settings functionality will go here!"),
        area,
    );
}
