use crate::ui::App;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

/// Handle key events while drafting a theory
pub(super) fn handle_theory_input(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Esc => app.cancel_theory_draft(),
        KeyCode::Enter => app.theory_advance(),
        KeyCode::Backspace => app.theory_pop(),
        KeyCode::Char(c) => app.theory_push(c),
        _ => {}
    }
    Ok(())
}
