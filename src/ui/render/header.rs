use crate::ui::theme::Theme;
use crate::ui::App;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub(super) fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        format!("   {}", Theme::LOGO),
        Style::default()
            .fg(Theme::GOLD)
            .add_modifier(Modifier::BOLD),
    )];

    match app.active_case() {
        Some(case) => {
            spans.push(Span::styled("    ", Style::default()));
            spans.push(Span::styled(case.title.clone(), Theme::selected()));
            spans.push(Span::styled(
                format!(" {} ", Theme::DOT_SEPARATOR),
                Theme::text_dim(),
            ));
            spans.push(Span::styled(case.status.label(), Theme::status(case.status)));
        }
        None => {
            spans.push(Span::styled("    ", Style::default()));
            spans.push(Span::styled(
                Theme::TAGLINE,
                Style::default()
                    .fg(Theme::GREY_400)
                    .add_modifier(Modifier::ITALIC),
            ));
        }
    }

    let lines = vec![Line::from(""), Line::from(spans)];

    let header = Paragraph::new(lines).style(Style::default().bg(Theme::BG));
    frame.render_widget(header, area);
}
