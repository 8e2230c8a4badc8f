use super::assistant::render_assistant;
use crate::case::InvestigationCase;
use crate::ui::helpers::wrap_text;
use crate::ui::theme::{confidence_dots, Theme};
use crate::ui::{App, WorkspaceTab};
use crate::util::{one_line, truncate};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

pub(super) fn render_workspace(frame: &mut Frame, area: Rect, app: &App) {
    let Some(case) = app.active_case() else {
        return;
    };

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
            Constraint::Percentage(58), // Case file
            Constraint::Length(2),      // Gap
            Constraint::Percentage(42), // Assistant
        ])
        .split(padded[1]);

    render_case_file(frame, panels[0], app, case);
    render_assistant(frame, panels[2], app, case);
}

fn render_case_file(frame: &mut Frame, area: Rect, app: &App, case: &InvestigationCase) {
    let block = Block::default()
        .title(Span::styled(" CASE FILE ", Theme::title()))
        .borders(Borders::ALL)
        .border_style(Theme::border_active())
        .padding(Padding::horizontal(1));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),      // Tabs
            Constraint::Percentage(55), // List
            Constraint::Length(1),      // Rule
            Constraint::Min(3),         // Detail
        ])
        .split(inner);

    render_tabs(frame, rows[0], app, case);
    render_records(frame, rows[1], app, case);
    frame.render_widget(
        Paragraph::new(Span::styled(
            Theme::SEPARATOR_THIN.repeat(rows[2].width as usize),
            Theme::border(),
        )),
        rows[2],
    );
    render_record_summary(frame, rows[3], app, case);
}

fn render_tabs(frame: &mut Frame, area: Rect, app: &App, case: &InvestigationCase) {
    let counts = case.counts();
    let mut spans = Vec::new();
    for (i, tab) in WorkspaceTab::ALL.iter().enumerate() {
        let count = match tab {
            WorkspaceTab::Suspects => counts.suspects,
            WorkspaceTab::Clues => counts.clues,
            WorkspaceTab::Timeline => counts.timeline,
            WorkspaceTab::Statements => counts.statements,
            WorkspaceTab::Theories => counts.theories,
        };
        let style = if *tab == app.tab {
            Style::default()
                .fg(Theme::GOLD)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Theme::text_dim()
        };
        spans.push(Span::styled(format!("{} ", i + 1), Theme::text_dim()));
        spans.push(Span::styled(format!("{} ({})", tab.label(), count), style));
        spans.push(Span::styled("   ", Style::default()));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// One-line entries for the current tab
pub(super) fn record_rows(app: &App, case: &InvestigationCase, width: usize) -> Vec<Line<'static>> {
    let row = |i: usize, head: String, tail: Vec<Span<'static>>| {
        let selected = i == app.record_selected;
        let mut spans = vec![
            Span::styled(
                if selected {
                    format!("{} ", Theme::ARROW_RIGHT)
                } else {
                    "  ".to_string()
                },
                Style::default().fg(Theme::GOLD),
            ),
            Span::styled(
                head,
                if selected {
                    Theme::selected()
                } else {
                    Theme::text()
                },
            ),
        ];
        spans.extend(tail);
        Line::from(spans)
    };

    match app.tab {
        WorkspaceTab::Suspects => case
            .suspects
            .iter()
            .enumerate()
            .map(|(i, s)| {
                row(
                    i,
                    truncate(&s.name, width / 2),
                    vec![Span::styled(format!("  {}", s.role), Theme::text_dim())],
                )
            })
            .collect(),
        WorkspaceTab::Clues => case
            .clues
            .iter()
            .enumerate()
            .map(|(i, c)| {
                row(
                    i,
                    truncate(&c.title, width.saturating_sub(10)),
                    vec![Span::styled(
                        format!("  {}", confidence_dots(c.confidence)),
                        Theme::confidence(c.confidence),
                    )],
                )
            })
            .collect(),
        WorkspaceTab::Timeline => case
            .timeline
            .iter()
            .enumerate()
            .map(|(i, t)| {
                let mut tail = vec![Span::styled(
                    format!("  {}", truncate(&t.description, width.saturating_sub(24))),
                    Theme::text_muted(),
                )];
                if t.is_gap {
                    tail.push(Span::styled(
                        format!("  {}", Theme::GAP_MARK),
                        Style::default().fg(Theme::YELLOW),
                    ));
                }
                row(i, t.time.clone(), tail)
            })
            .collect(),
        WorkspaceTab::Statements => case
            .statements
            .iter()
            .enumerate()
            .map(|(i, s)| {
                row(
                    i,
                    s.speaker_name.clone(),
                    vec![Span::styled(
                        format!(
                            "  \"{}\"",
                            truncate(&one_line(&s.content), width.saturating_sub(s.speaker_name.len() + 8))
                        ),
                        Theme::text_muted(),
                    )],
                )
            })
            .collect(),
        WorkspaceTab::Theories => case
            .theories
            .iter()
            .enumerate()
            .map(|(i, t)| row(i, truncate(&t.title, width.saturating_sub(4)), Vec::new()))
            .collect(),
    }
}

fn render_records(frame: &mut Frame, area: Rect, app: &App, case: &InvestigationCase) {
    let rows = record_rows(app, case, area.width as usize);
    if rows.is_empty() {
        let hint = match app.tab {
            WorkspaceTab::Theories => "No theories yet. Press a to draft one.",
            _ => "Nothing on file.",
        };
        frame.render_widget(
            Paragraph::new(Span::styled(hint, Theme::text_dim())),
            area,
        );
        return;
    }
    let visible = area.height as usize;
    let scroll = (app.record_selected + 1).saturating_sub(visible) as u16;
    frame.render_widget(Paragraph::new(rows).scroll((scroll, 0)), area);
}

/// Labelled fields for the selected record
pub(super) fn record_fields(app: &App, case: &InvestigationCase) -> Vec<(&'static str, String)> {
    let i = app.record_selected;
    match app.tab {
        WorkspaceTab::Suspects => case
            .suspects
            .get(i)
            .map(|s| {
                vec![
                    ("Name", s.name.clone()),
                    ("Role", s.role.clone()),
                    ("Profile", s.description.clone()),
                    ("Alibi", s.alibi.clone()),
                    ("Motive", s.motive.clone()),
                ]
            })
            .unwrap_or_default(),
        WorkspaceTab::Clues => case
            .clues
            .get(i)
            .map(|c| {
                vec![
                    ("Clue", c.title.clone()),
                    ("Detail", c.description.clone()),
                    ("Source", c.source.clone()),
                    ("Confidence", c.confidence.label().to_string()),
                ]
            })
            .unwrap_or_default(),
        WorkspaceTab::Timeline => case
            .timeline
            .get(i)
            .map(|t| {
                let mut fields = vec![("Time", t.time.clone()), ("Event", t.description.clone())];
                if t.is_gap {
                    fields.push(("Note", "Unaccounted-for time".to_string()));
                }
                fields
            })
            .unwrap_or_default(),
        WorkspaceTab::Statements => case
            .statements
            .get(i)
            .map(|s| {
                vec![
                    ("Speaker", s.speaker_name.clone()),
                    ("Taken", s.timestamp.clone()),
                    ("Statement", format!("\"{}\"", s.content)),
                ]
            })
            .unwrap_or_default(),
        WorkspaceTab::Theories => case
            .theories
            .get(i)
            .map(|t| vec![("Theory", t.title.clone()), ("Reasoning", t.content.clone())])
            .unwrap_or_default(),
    }
}

pub(super) fn field_lines(fields: &[(&'static str, String)], width: usize) -> Vec<Line<'static>> {
    let label_style = Style::default()
        .fg(Theme::GREY_400)
        .add_modifier(Modifier::BOLD);
    let mut lines = Vec::new();
    for (label, value) in fields {
        if value.is_empty() {
            continue;
        }
        lines.push(Line::from(Span::styled(label.to_string(), label_style)));
        for line in wrap_text(value, width.saturating_sub(2)) {
            lines.push(Line::from(Span::styled(format!("  {}", line), Theme::text())));
        }
    }
    lines
}

fn render_record_summary(frame: &mut Frame, area: Rect, app: &App, case: &InvestigationCase) {
    let fields = record_fields(app, case);
    let lines = field_lines(&fields, area.width as usize);
    frame.render_widget(Paragraph::new(lines), area);
}
