use crate::ui::{App, Overlay};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

/// Handle key events when an overlay is active
pub(super) fn handle_overlay_input(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => app.close_overlay(),
        KeyCode::Char('?') if matches!(app.overlay, Overlay::Help { .. }) => app.toggle_help(),
        KeyCode::Down | KeyCode::Char('j') => app.overlay_scroll_down(),
        KeyCode::Up | KeyCode::Char('k') => app.overlay_scroll_up(),
        KeyCode::PageDown => {
            for _ in 0..10 {
                app.overlay_scroll_down();
            }
        }
        KeyCode::PageUp => {
            for _ in 0..10 {
                app.overlay_scroll_up();
            }
        }
        _ => {}
    }
    Ok(())
}
