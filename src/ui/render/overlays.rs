use super::workspace::{field_lines, record_fields};
use crate::ui::helpers::centered_rect;
use crate::ui::theme::Theme;
use crate::ui::App;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Padding, Paragraph},
    Frame,
};

fn section_start(title: &str) -> Vec<Line<'static>> {
    vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("  ╭─ ".to_string(), Style::default().fg(Theme::GREY_600)),
            Span::styled(
                title.to_string(),
                Style::default()
                    .fg(Theme::WHITE)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                " ─────────────────────────╮".to_string(),
                Style::default().fg(Theme::GREY_600),
            ),
        ]),
    ]
}

fn key_row(key: &str, desc: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled("  │  ".to_string(), Style::default().fg(Theme::GREY_600)),
        Span::styled(
            format!(" {:^7} ", key),
            Style::default().fg(Theme::GREY_900).bg(Theme::GREY_300),
        ),
        Span::styled(format!("  {}", desc), Style::default().fg(Theme::GREY_200)),
    ])
}

fn section_end() -> Line<'static> {
    Line::from(vec![Span::styled(
        "  ╰─────────────────────────────────────╯".to_string(),
        Style::default().fg(Theme::GREY_600),
    )])
}

fn section(title: &str, rows: &[(&str, &str)]) -> Vec<Line<'static>> {
    let mut lines = section_start(title);
    lines.extend(rows.iter().map(|(key, desc)| key_row(key, desc)));
    lines.push(section_end());
    lines
}

fn help_lines() -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    lines.extend(section(
        "Case board",
        &[
            ("↑↓ j k", "Move between cases"),
            ("↵", "Open the case file"),
            ("n", "Open a new case"),
            ("q", "Quit"),
        ],
    ));
    lines.extend(section(
        "Case file",
        &[
            ("Tab 1-5", "Switch section"),
            ("↑↓ j k", "Move between records"),
            ("↵", "Read the full record"),
            ("s", "Advance the case status"),
            ("g", "Mark timeline gap"),
            ("a", "Draft a theory"),
            ("b Esc", "Back to the board"),
        ],
    ));
    lines.extend(section(
        "Detective Thorne",
        &[
            ("i /", "Ask a question"),
            ("↵", "Send"),
            ("Alt+↵", "New line"),
            ("T", "Analyze the timeline"),
            ("! @", "Analyze first or second suspect"),
            ("c", "Challenge selected theory"),
            ("PgUp/Dn", "Scroll the conversation"),
        ],
    ));
    lines.push(Line::from(""));
    lines
}

pub(super) fn render_help(frame: &mut Frame, scroll: usize) {
    let area = centered_rect(55, 80, frame.area());
    frame.render_widget(Clear, area);

    let help = Paragraph::new(help_lines())
        .block(
            Block::default()
                .title(" HELP ")
                .title_style(Theme::title())
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Theme::GREY_400))
                .style(Style::default().bg(Theme::GREY_900)),
        )
        .scroll((scroll as u16, 0));

    frame.render_widget(help, area);
}

pub(super) fn render_record_detail(frame: &mut Frame, app: &App, scroll: usize) {
    let Some(case) = app.active_case() else {
        return;
    };
    let area = centered_rect(70, 75, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", app.tab.label().to_uppercase()),
            Theme::title(),
        ))
        .borders(Borders::ALL)
        .border_style(Theme::border_active())
        .padding(Padding::new(2, 2, 1, 1))
        .style(Style::default().bg(Theme::GREY_900));
    let width = block.inner(area).width as usize;

    let mut lines = Vec::new();
    for field in record_fields(app, case) {
        lines.extend(field_lines(std::slice::from_ref(&field), width));
        lines.push(Line::from(""));
    }

    frame.render_widget(
        Paragraph::new(lines).block(block).scroll((scroll as u16, 0)),
        area,
    );
}
