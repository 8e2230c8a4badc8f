use crate::ui::theme::Theme;
use crate::ui::{App, InputMode, Overlay, Screen, WorkspaceTab};
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Key hints for what the investigator can do right now
fn hints(app: &App) -> Vec<(&'static str, &'static str)> {
    if !matches!(app.overlay, Overlay::None) {
        return vec![("↑↓", "scroll"), ("Esc", "close")];
    }
    match app.input_mode {
        InputMode::Chat => {
            return vec![("↵", "send"), ("Alt+↵", "newline"), ("Esc", "done")];
        }
        InputMode::TheoryTitle => return vec![("↵", "next"), ("Esc", "discard")],
        InputMode::TheoryContent => return vec![("↵", "file theory"), ("Esc", "discard")],
        InputMode::Normal => {}
    }
    match app.screen() {
        Screen::Dashboard => vec![
            ("↑↓", "select"),
            ("↵", "open"),
            ("n", "new case"),
            ("?", "help"),
            ("q", "quit"),
        ],
        Screen::Workspace => {
            let mut keys = vec![("Tab", "section"), ("i", "ask"), ("T", "timeline")];
            if app.tab == WorkspaceTab::Timeline {
                keys.push(("g", "gap"));
            }
            if app.tab == WorkspaceTab::Theories {
                keys.push(("c", "challenge"));
            }
            keys.extend([("a", "theory"), ("s", "status"), ("b", "back"), ("?", "help")]);
            keys
        }
    }
}

pub(super) fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled("  ", Style::default())];

    let status = match app.screen() {
        Screen::Dashboard => format!("{} cases", app.book.len()),
        Screen::Workspace => app
            .active_case()
            .map(|c| c.id.clone())
            .unwrap_or_default(),
    };
    spans.push(Span::styled(status, Style::default().fg(Theme::GREY_400)));

    if app.active_is_typing() {
        let frame_char = Theme::SPINNER_BRAILLE[app.loading_frame % Theme::SPINNER_BRAILLE.len()];
        spans.push(Span::styled(
            format!("  {} consulting", frame_char),
            Style::default().fg(Theme::GOLD),
        ));
    }

    let hints = hints(app);
    let status_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let hints_len: usize = hints
        .iter()
        .map(|(key, label)| key.chars().count() + label.chars().count() + 4)
        .sum();
    let spacer_len = (area.width as usize).saturating_sub(status_len + hints_len + 2);
    if spacer_len > 0 {
        spans.push(Span::styled(" ".repeat(spacer_len), Style::default()));
    }

    for (key, label) in hints {
        spans.push(Span::styled(
            format!(" {} ", key),
            Style::default().fg(Theme::GREY_900).bg(Theme::GREY_500),
        ));
        spans.push(Span::styled(
            format!(" {} ", label),
            Style::default().fg(Theme::GREY_400),
        ));
    }

    let footer = Paragraph::new(vec![Line::from(""), Line::from(spans)])
        .style(Style::default().bg(Theme::BG));
    frame.render_widget(footer, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::case::CaseBook;

    #[test]
    fn test_hints_follow_mode() {
        let mut app = App::new(CaseBook::with_mock_cases(), false, "m");
        assert!(hints(&app).contains(&("n", "new case")));

        app.open_selected_case();
        assert!(hints(&app).contains(&("i", "ask")));
        assert!(!hints(&app).contains(&("g", "gap")));

        app.select_tab(WorkspaceTab::Timeline);
        assert!(hints(&app).contains(&("g", "gap")));

        app.start_chat();
        assert_eq!(hints(&app)[0], ("↵", "send"));
    }
}
