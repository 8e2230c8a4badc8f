use crate::app::background::spawn_question;
use crate::app::RuntimeContext;
use crate::assistant::QuickPrompt;
use crate::ui::{App, PendingQuestion, Screen, WorkspaceTab};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

/// Handle key events in normal mode (no overlay, not typing)
pub(super) fn handle_normal_mode(app: &mut App, key: KeyEvent, ctx: &RuntimeContext) -> Result<()> {
    match app.screen() {
        Screen::Dashboard => handle_dashboard(app, key),
        Screen::Workspace => handle_workspace(app, key, ctx),
    }
    Ok(())
}

fn handle_dashboard(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Down | KeyCode::Char('j') => app.dashboard_down(),
        KeyCode::Up | KeyCode::Char('k') => app.dashboard_up(),
        KeyCode::Enter => app.open_selected_case(),
        KeyCode::Char('n') => app.new_case(),
        KeyCode::Char('?') => app.toggle_help(),
        _ => {}
    }
}

fn handle_workspace(app: &mut App, key: KeyEvent, ctx: &RuntimeContext) {
    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Esc | KeyCode::Char('b') => app.back_to_dashboard(),
        KeyCode::Char('?') => app.toggle_help(),

        // Sections and records
        KeyCode::Tab => app.next_tab(),
        KeyCode::BackTab => app.prev_tab(),
        KeyCode::Char(c @ '1'..='5') => {
            let index = c as usize - '1' as usize;
            app.select_tab(WorkspaceTab::ALL[index]);
        }
        KeyCode::Down | KeyCode::Char('j') => app.record_down(),
        KeyCode::Up | KeyCode::Char('k') => app.record_up(),
        KeyCode::Enter => app.show_record_detail(),

        // Case edits
        KeyCode::Char('s') => app.cycle_status(),
        KeyCode::Char('g') => app.toggle_selected_gap(),
        KeyCode::Char('a') => app.start_theory_draft(),

        // Detective
        KeyCode::Char('i') | KeyCode::Char('/') => app.start_chat(),
        KeyCode::PageUp => app.chat_scroll_up(),
        KeyCode::PageDown => app.chat_scroll_down(),
        KeyCode::Char('T') => {
            let pending = quick(app, QuickPrompt::Timeline);
            send(ctx, pending);
        }
        KeyCode::Char('!') => {
            let pending = suspect_prompt(app, 0);
            send(ctx, pending);
        }
        KeyCode::Char('@') => {
            let pending = suspect_prompt(app, 1);
            send(ctx, pending);
        }
        KeyCode::Char('c') => {
            if app.active_is_typing() {
                app.show_toast("Detective Thorne is still thinking");
            } else {
                let pending = app.challenge_selected_theory();
                send(ctx, pending);
            }
        }
        _ => {}
    }
}

fn quick(app: &mut App, prompt: QuickPrompt) -> Option<PendingQuestion> {
    if app.active_is_typing() {
        app.show_toast("Detective Thorne is still thinking");
        return None;
    }
    app.submit_quick_prompt(&prompt)
}

fn suspect_prompt(app: &mut App, position: usize) -> Option<PendingQuestion> {
    let suspect_id = app
        .active_case()
        .and_then(|case| case.suspects.get(position))
        .map(|s| s.id.clone());
    match suspect_id {
        Some(id) => quick(app, QuickPrompt::Suspect(id)),
        None => {
            app.show_toast("No suspect in that position");
            None
        }
    }
}

fn send(ctx: &RuntimeContext, pending: Option<PendingQuestion>) {
    if let Some(pending) = pending {
        spawn_question(ctx, pending);
    }
}
