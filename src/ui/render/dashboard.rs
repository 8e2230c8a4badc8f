use crate::ui::helpers::wrap_text;
use crate::ui::theme::Theme;
use crate::ui::App;
use crate::util::truncate;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

pub(super) fn render_dashboard(frame: &mut Frame, area: Rect, app: &App) {
    let padded = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(10),
            Constraint::Length(2),
        ])
        .split(area);

    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Case list
            Constraint::Length(2),      // Gap
            Constraint::Percentage(45), // Briefing
        ])
        .split(padded[1]);

    render_case_list(frame, panels[0], app);
    render_briefing(frame, panels[2], app);
}

fn render_case_list(frame: &mut Frame, area: Rect, app: &App) {
    let counts = app.book.status_counts();
    let inner_width = area.width.saturating_sub(4) as usize;

    let mut lines = vec![
        Line::from(vec![
            Span::styled(format!("{} open", counts.open), Theme::status(crate::case::CaseStatus::Open)),
            Span::styled(format!("  {}  ", Theme::DOT_SEPARATOR), Theme::text_dim()),
            Span::styled(
                format!("{} active", counts.active),
                Theme::status(crate::case::CaseStatus::Active),
            ),
            Span::styled(format!("  {}  ", Theme::DOT_SEPARATOR), Theme::text_dim()),
            Span::styled(format!("{} cold", counts.cold), Theme::text_muted()),
            Span::styled(format!("  {}  ", Theme::DOT_SEPARATOR), Theme::text_dim()),
            Span::styled(format!("{} solved", counts.solved), Theme::text()),
        ]),
        Line::from(""),
    ];

    for (i, case) in app.book.cases().iter().enumerate() {
        let is_selected = i == app.dashboard_selected;
        let marker = if is_selected {
            format!("{} ", Theme::ARROW_RIGHT)
        } else {
            "  ".to_string()
        };
        let title_style = if is_selected {
            Theme::selected()
        } else {
            Theme::text()
        };
        let counts = case.counts();

        lines.push(Line::from(vec![
            Span::styled(marker, Style::default().fg(Theme::GOLD)),
            Span::styled(truncate(&case.title, inner_width.saturating_sub(12)), title_style),
            Span::styled("  ", Style::default()),
            Span::styled(case.status.label(), Theme::status(case.status)),
        ]));
        lines.push(Line::from(vec![
            Span::styled("  ", Style::default()),
            Span::styled(
                format!(
                    "{} suspects {} {} clues {} {} theories",
                    counts.suspects,
                    Theme::DOT_SEPARATOR,
                    counts.clues,
                    Theme::DOT_SEPARATOR,
                    counts.theories
                ),
                Theme::text_dim(),
            ),
        ]));
        lines.push(Line::from(""));
    }

    let block = Block::default()
        .title(Span::styled(" CASES ", Theme::title()))
        .borders(Borders::ALL)
        .border_style(Theme::border_active())
        .padding(Padding::horizontal(1));

    // Keep the selected case visible: each case takes three lines after the two header lines
    let visible = area.height.saturating_sub(2) as usize;
    let cursor_line = 2 + app.dashboard_selected * 3 + 2;
    let scroll = cursor_line.saturating_sub(visible) as u16;

    frame.render_widget(Paragraph::new(lines).block(block).scroll((scroll, 0)), area);
}

fn render_briefing(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(Span::styled(" BRIEFING ", Theme::title()))
        .borders(Borders::ALL)
        .border_style(Theme::border())
        .padding(Padding::horizontal(1));

    let Some(case) = app.book.cases().get(app.dashboard_selected) else {
        let empty = Paragraph::new(Line::from(Span::styled(
            "No cases on file. Press n to open one.",
            Theme::text_muted(),
        )))
        .block(block);
        frame.render_widget(empty, area);
        return;
    };

    let width = area.width.saturating_sub(4) as usize;
    let label = Style::default()
        .fg(Theme::GREY_400)
        .add_modifier(Modifier::BOLD);

    let mut lines = vec![Line::from(Span::styled(case.title.clone(), Theme::selected()))];
    lines.push(Line::from(""));
    if !case.victim.is_empty() {
        lines.push(Line::from(vec![
            Span::styled("Victim    ", label),
            Span::styled(case.victim.clone(), Theme::text()),
        ]));
    }
    if !case.location.is_empty() {
        lines.push(Line::from(vec![
            Span::styled("Location  ", label),
            Span::styled(case.location.clone(), Theme::text()),
        ]));
    }
    lines.push(Line::from(""));
    for line in wrap_text(&case.description, width) {
        lines.push(Line::from(Span::styled(line, Theme::text_muted())));
    }
    lines.push(Line::from(""));

    let gaps = case.gap_count();
    if gaps > 0 {
        lines.push(Line::from(Span::styled(
            format!("{} unaccounted stretch{} on the timeline", gaps, if gaps == 1 { "" } else { "es" }),
            Style::default().fg(Theme::YELLOW),
        )));
    }
    lines.push(Line::from(Span::styled(
        format!(
            "{} statements on record",
            case.counts().statements
        ),
        Theme::text_dim(),
    )));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
