mod assistant;
mod dashboard;
mod footer;
mod header;
mod overlays;
mod toast;
mod workspace;

use crate::ui::theme::Theme;
use crate::ui::{App, Overlay, Screen};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Block,
    Frame,
};

use dashboard::render_dashboard;
use footer::render_footer;
use header::render_header;
use overlays::{render_help, render_record_detail};
use toast::render_toast;
use workspace::render_workspace;

/// Main render function
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    frame.render_widget(Block::default().style(Style::default().bg(Theme::BG)), area);

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Footer
        ])
        .split(area);

    render_header(frame, layout[0], app);
    match app.screen() {
        Screen::Dashboard => render_dashboard(frame, layout[1], app),
        Screen::Workspace => render_workspace(frame, layout[1], app),
    }
    render_footer(frame, layout[2], app);

    match &app.overlay {
        Overlay::Help { scroll } => render_help(frame, *scroll),
        Overlay::RecordDetail { scroll } => render_record_detail(frame, app, *scroll),
        Overlay::None => {}
    }

    if let Some(toast) = &app.toast {
        render_toast(frame, toast);
    }
}
