use crate::app::background::spawn_question;
use crate::app::RuntimeContext;
use crate::ui::App;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Handle key events while typing to the detective
pub(super) fn handle_chat_input(app: &mut App, key: KeyEvent, ctx: &RuntimeContext) -> Result<()> {
    match key.code {
        KeyCode::Esc => app.exit_chat(),
        KeyCode::Enter
            if key
                .modifiers
                .intersects(KeyModifiers::ALT | KeyModifiers::SHIFT) =>
        {
            app.chat_newline()
        }
        KeyCode::Enter => {
            if app.active_is_typing() {
                app.show_toast("Detective Thorne is still thinking");
            } else if let Some(pending) = app.submit_chat() {
                spawn_question(ctx, pending);
            }
        }
        KeyCode::Backspace => app.chat_pop(),
        KeyCode::PageUp => app.chat_scroll_up(),
        KeyCode::PageDown => app.chat_scroll_down(),
        KeyCode::Char(c) => app.chat_push(c),
        _ => {}
    }
    Ok(())
}
