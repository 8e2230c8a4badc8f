//! TUI runtime for casefile

use crate::app::messages::BackgroundMessage;
use crate::app::{background, input, RuntimeContext};
use crate::assistant::DetectiveAi;
use crate::ui;
use crate::ui::App;
use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use std::io;
use std::sync::mpsc;
use std::time::Duration;

/// Run the TUI until the investigator quits
pub async fn run_tui(mut app: App, ai: DetectiveAi) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    if !ai.is_online() {
        app.show_toast("No Gemini API key found. Run casefile --setup");
    }

    let (tx, rx) = mpsc::channel::<BackgroundMessage>();
    let ctx = RuntimeContext { tx: &tx, ai: &ai };

    tracing::info!(cases = app.book.len(), online = ai.is_online(), "starting TUI");
    let result = run_loop(&mut terminal, &mut app, &rx, &ctx);

    // Restore the terminal even when the loop failed
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        tracing::error!("TUI loop exited with error: {}", e);
    }
    result
}

fn run_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    rx: &mpsc::Receiver<BackgroundMessage>,
    ctx: &RuntimeContext,
) -> Result<()> {
    loop {
        app.clear_expired_toast();
        app.tick_loading();

        // Replies from the detective (non-blocking)
        background::drain_messages(app, rx);

        terminal.draw(|f| ui::render(f, app))?;

        // Fast poll keeps the typing indicator moving
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                input::handle_key_event(app, key, ctx)?;
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
