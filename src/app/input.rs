//! Input handling for the casefile TUI

use crate::app::RuntimeContext;
use crate::ui::{App, InputMode, Overlay};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

mod chat;
mod normal;
mod overlay;
mod theory;


use chat::handle_chat_input;
use normal::handle_normal_mode;
use overlay::handle_overlay_input;
use theory::handle_theory_input;

// ═══════════════════════════════════════════════════════════════════════════
//  MAIN INPUT DISPATCHER
// ═══════════════════════════════════════════════════════════════════════════

/// Main key event handler - dispatches to mode-specific handlers
pub fn handle_key_event(app: &mut App, key: KeyEvent, ctx: &RuntimeContext) -> Result<()> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return Ok(());
    }

    match app.input_mode {
        InputMode::Chat => return handle_chat_input(app, key, ctx),
        InputMode::TheoryTitle | InputMode::TheoryContent => {
            return handle_theory_input(app, key)
        }
        InputMode::Normal => {}
    }

    if app.overlay != Overlay::None {
        return handle_overlay_input(app, key);
    }

    handle_normal_mode(app, key, ctx)
}
