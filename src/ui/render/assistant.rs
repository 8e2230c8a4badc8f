use crate::assistant::{persona, quick_prompts, QuickPrompt, Role, Transcript};
use crate::case::InvestigationCase;
use crate::ui::helpers::wrap_text;
use crate::ui::theme::Theme;
use crate::ui::{App, InputMode};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};

pub(super) fn render_assistant(frame: &mut Frame, area: Rect, app: &App, case: &InvestigationCase) {
    let border = if app.input_mode == InputMode::Chat {
        Theme::border_active()
    } else {
        Theme::border()
    };
    let block = Block::default()
        .title(Span::styled(format!(" {} ", persona::ASSISTANT_NAME), Theme::title()))
        .borders(Borders::ALL)
        .border_style(border)
        .padding(Padding::horizontal(1));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let input_height = match app.input_mode {
        InputMode::Chat => (app.chat_input.lines().count().max(1) as u16 + 2).min(6),
        InputMode::TheoryTitle | InputMode::TheoryContent => 4,
        InputMode::Normal => 3,
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),            // Status
            Constraint::Length(2),            // Quick prompts
            Constraint::Min(3),               // Transcript
            Constraint::Length(input_height), // Input
        ])
        .split(inner);

    render_status(frame, rows[0], app);
    render_quick_prompts(frame, rows[1], case);

    let fallback = Transcript::new();
    let transcript = app.transcript_for(&case.id).unwrap_or(&fallback);
    render_transcript(frame, rows[2], app, transcript);
    render_input(frame, rows[3], app);
}

fn render_status(frame: &mut Frame, area: Rect, app: &App) {
    let line = if app.ai_online {
        Line::from(vec![
            Span::styled("● ", Style::default().fg(Theme::GREEN)),
            Span::styled("on the case", Theme::text_muted()),
            Span::styled(format!("  {}  ", Theme::DOT_SEPARATOR), Theme::text_dim()),
            Span::styled(app.model.clone(), Theme::text_dim()),
        ])
    } else {
        Line::from(vec![
            Span::styled("○ ", Style::default().fg(Theme::RED)),
            Span::styled("offline", Theme::text_muted()),
            Span::styled("  run casefile --setup", Theme::text_dim()),
        ])
    };
    frame.render_widget(Paragraph::new(line), area);
}

/// Key that fires a shortcut, if it has one outside the theories tab
fn shortcut_key(index: usize, prompt: &QuickPrompt) -> Option<char> {
    match (index, prompt) {
        (_, QuickPrompt::Timeline) => Some('T'),
        (1, QuickPrompt::Suspect(_)) => Some('!'),
        (2, QuickPrompt::Suspect(_)) => Some('@'),
        _ => None,
    }
}

fn render_quick_prompts(frame: &mut Frame, area: Rect, case: &InvestigationCase) {
    let mut spans = Vec::new();
    for (i, prompt) in quick_prompts(case).iter().enumerate() {
        if let Some(key) = shortcut_key(i, prompt) {
            spans.push(Span::styled(key.to_string(), Theme::key()));
            spans.push(Span::styled(" ", Style::default()));
        }
        spans.push(Span::styled(
            format!("[{}]", prompt.label(case)),
            Style::default().fg(Theme::GOLD_DIM),
        ));
        spans.push(Span::styled("  ", Style::default()));
    }
    frame.render_widget(
        Paragraph::new(Line::from(spans)).wrap(Wrap { trim: true }),
        area,
    );
}

fn render_transcript(frame: &mut Frame, area: Rect, app: &App, transcript: &Transcript) {
    let width = area.width as usize;
    let mut lines: Vec<Line<'static>> = Vec::new();

    for message in transcript.messages() {
        let (label_style, body_style) = match message.role {
            Role::Assistant => (Theme::title(), Theme::assistant_text()),
            Role::User => (
                Style::default()
                    .fg(Theme::GREY_300)
                    .add_modifier(Modifier::BOLD),
                Theme::user_text(),
            ),
        };
        lines.push(Line::from(vec![
            Span::styled(message.role.label().to_string(), label_style),
            Span::styled(
                format!("  {}", message.timestamp.format("%H:%M")),
                Theme::text_dim(),
            ),
        ]));
        for line in wrap_text(&message.content, width) {
            lines.push(Line::from(Span::styled(line, body_style)));
        }
        lines.push(Line::from(""));
    }

    if transcript.is_typing() {
        let dots = Theme::TYPING_DOTS[(app.loading_frame / 4) % Theme::TYPING_DOTS.len()];
        lines.push(Line::from(vec![
            Span::styled(persona::TYPING_LABEL, Theme::text_muted()),
            Span::styled(format!(" {}", dots), Style::default().fg(Theme::GOLD)),
        ]));
    }

    // Pinned to the bottom unless the investigator has scrolled back
    let visible = area.height as usize;
    let bottom = lines.len().saturating_sub(visible);
    app.chat_scroll_max.set(bottom);
    let scroll = bottom.saturating_sub(app.chat_scroll) as u16;

    frame.render_widget(Paragraph::new(lines).scroll((scroll, 0)), area);
}

fn render_input(frame: &mut Frame, area: Rect, app: &App) {
    let cursor = Span::styled("▌", Style::default().fg(Theme::GOLD));
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Theme::border());

    let lines = match app.input_mode {
        InputMode::Chat => {
            let mut lines: Vec<Line> = app
                .chat_input
                .split('\n')
                .map(|l| Line::from(Span::styled(l.to_string(), Theme::text())))
                .collect();
            if let Some(last) = lines.last_mut() {
                last.spans.push(cursor);
            }
            if let Some(first) = lines.first_mut() {
                first.spans.insert(0, Span::styled("> ", Theme::key()));
            }
            lines
        }
        InputMode::TheoryTitle => vec![
            Line::from(Span::styled("New theory - title", Theme::text_dim())),
            Line::from(vec![
                Span::styled(app.theory_title.clone(), Theme::text()),
                cursor,
            ]),
        ],
        InputMode::TheoryContent => vec![
            Line::from(Span::styled(
                format!("New theory - {}", app.theory_title),
                Theme::text_dim(),
            )),
            Line::from(vec![
                Span::styled(app.theory_content.clone(), Theme::text()),
                cursor,
            ]),
        ],
        InputMode::Normal => vec![Line::from(vec![
            Span::styled("i", Theme::key()),
            Span::styled(" ask the detective", Theme::text_dim()),
        ])],
    };

    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shortcut_keys() {
        assert_eq!(shortcut_key(0, &QuickPrompt::Timeline), Some('T'));
        assert_eq!(shortcut_key(1, &QuickPrompt::Suspect("s".into())), Some('!'));
        assert_eq!(shortcut_key(2, &QuickPrompt::Suspect("s".into())), Some('@'));
        assert_eq!(shortcut_key(3, &QuickPrompt::Theory("t".into())), None);
    }
}
