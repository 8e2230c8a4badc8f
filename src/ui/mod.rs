//! casefile UI - dashboard, workspace and the detective's margin
//!
//! Layout (workspace):
//! ╔══════════════════════════════════════════════════════════════╗
//! ║  C A S E F I L E    Death at Harrowgate Manor · Active       ║
//! ╠═══════════════════════════════════╦══════════════════════════╣
//! ║  Suspects  Clues  Timeline  ...   ║  Elias Thorne            ║
//! ║  ▸ Beatrice Harrowgate  Widow     ║  [Analyze Timeline] ...  ║
//! ║    Julian Crane         Partner   ║  Well now, what have...  ║
//! ║  ─────────────────────────────    ║                          ║
//! ║  Alibi: ...                       ║  > ask for an analysis   ║
//! ╠═══════════════════════════════════╩══════════════════════════╣
//! ║  tab section  i ask  T timeline  a theory  s status  b back  ║
//! ╚══════════════════════════════════════════════════════════════╝

pub mod helpers;
pub mod render;
pub mod theme;

pub use render::render;

use crate::assistant::{QuickPrompt, Transcript};
use crate::case::{CaseBook, InvestigationCase};
use std::cell::Cell;
use std::collections::HashMap;
use std::time::Instant;

/// Which top-level view is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Dashboard,
    Workspace,
}

/// Case file section shown in the workspace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WorkspaceTab {
    #[default]
    Suspects,
    Clues,
    Timeline,
    Statements,
    Theories,
}

impl WorkspaceTab {
    pub const ALL: [WorkspaceTab; 5] = [
        WorkspaceTab::Suspects,
        WorkspaceTab::Clues,
        WorkspaceTab::Timeline,
        WorkspaceTab::Statements,
        WorkspaceTab::Theories,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            WorkspaceTab::Suspects => "Suspects",
            WorkspaceTab::Clues => "Clues",
            WorkspaceTab::Timeline => "Timeline",
            WorkspaceTab::Statements => "Statements",
            WorkspaceTab::Theories => "Theories",
        }
    }

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|t| t == self).unwrap_or(0)
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Input mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    /// Typing a question for the detective
    Chat,
    /// Drafting a theory: title first, then content
    TheoryTitle,
    TheoryContent,
}

/// Overlay state
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Overlay {
    #[default]
    None,
    Help {
        scroll: usize,
    },
    /// Full text of the selected record
    RecordDetail {
        scroll: usize,
    },
}

/// Toast notification kind - affects duration and styling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastKind {
    #[default]
    Info,
    Success,
    Error,
}

impl ToastKind {
    /// Duration in seconds before toast expires
    pub fn duration_secs(&self) -> u64 {
        match self {
            ToastKind::Info => 3,
            ToastKind::Success => 3,
            ToastKind::Error => 8,
        }
    }
}

pub struct Toast {
    pub message: String,
    pub created_at: Instant,
    pub kind: ToastKind,
}

impl Toast {
    pub fn new(message: &str) -> Self {
        let kind = if message.starts_with('+') {
            ToastKind::Success
        } else if message.contains("failed")
            || message.contains("error")
            || message.contains("Error")
            || message.contains("cannot")
            || message.starts_with("No ")
        {
            ToastKind::Error
        } else {
            ToastKind::Info
        };
        Self::with_kind(message, kind)
    }

    /// Toast whose kind is fixed by the caller, for messages that embed
    /// user-supplied text such as case titles
    pub fn with_kind(message: &str, kind: ToastKind) -> Self {
        Self {
            message: message.to_string(),
            created_at: Instant::now(),
            kind,
        }
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed().as_secs() >= self.kind.duration_secs()
    }
}

/// A question ready to go to the detective
#[derive(Debug, Clone)]
pub struct PendingQuestion {
    pub case: InvestigationCase,
    pub question: String,
}

pub struct App {
    pub book: CaseBook,
    /// Cursor on the dashboard list
    pub dashboard_selected: usize,
    pub tab: WorkspaceTab,
    /// Cursor within the current workspace tab
    pub record_selected: usize,
    pub input_mode: InputMode,
    pub chat_input: String,
    pub theory_title: String,
    pub theory_content: String,
    /// Lines scrolled up from the bottom of the transcript
    pub chat_scroll: usize,
    /// Furthest the last drawn transcript could scroll back
    pub chat_scroll_max: Cell<usize>,
    pub overlay: Overlay,
    pub toast: Option<Toast>,
    pub should_quit: bool,
    pub loading_frame: usize,
    /// Whether an API key was found at startup
    pub ai_online: bool,
    pub model: String,
    transcripts: HashMap<String, Transcript>,
}

impl App {
    pub fn new(book: CaseBook, ai_online: bool, model: impl Into<String>) -> Self {
        Self {
            book,
            dashboard_selected: 0,
            tab: WorkspaceTab::default(),
            record_selected: 0,
            input_mode: InputMode::Normal,
            chat_input: String::new(),
            theory_title: String::new(),
            theory_content: String::new(),
            chat_scroll: 0,
            chat_scroll_max: Cell::new(0),
            overlay: Overlay::None,
            toast: None,
            should_quit: false,
            loading_frame: 0,
            ai_online,
            model: model.into(),
            transcripts: HashMap::new(),
        }
    }

    pub fn screen(&self) -> Screen {
        if self.book.active().is_some() {
            Screen::Workspace
        } else {
            Screen::Dashboard
        }
    }

    pub fn active_case(&self) -> Option<&InvestigationCase> {
        self.book.active()
    }

    /// Advance spinner animation
    pub fn tick_loading(&mut self) {
        self.loading_frame = self.loading_frame.wrapping_add(1);
    }

    // ═══════════════════════════════════════════════════════════════════════
    //  DASHBOARD
    // ═══════════════════════════════════════════════════════════════════════

    pub fn dashboard_down(&mut self) {
        if self.dashboard_selected + 1 < self.book.len() {
            self.dashboard_selected += 1;
        }
    }

    pub fn dashboard_up(&mut self) {
        self.dashboard_selected = self.dashboard_selected.saturating_sub(1);
    }

    pub fn open_selected_case(&mut self) {
        let Some(id) = self
            .book
            .cases()
            .get(self.dashboard_selected)
            .map(|c| c.id.clone())
        else {
            return;
        };
        match self.book.select(&id).map(|_| ()) {
            Ok(()) => self.enter_workspace(),
            Err(e) => self.show_toast(&e.to_string()),
        }
    }

    pub fn new_case(&mut self) {
        match self.book.new_case() {
            Ok(_) => {
                self.dashboard_selected = self.book.len().saturating_sub(1);
                self.enter_workspace();
                self.show_toast("+ New case opened");
            }
            Err(e) => self.show_toast(&format!("New case failed: {}", e)),
        }
    }

    pub fn back_to_dashboard(&mut self) {
        if let Some(id) = self.book.active_id() {
            if let Some(pos) = self.book.cases().iter().position(|c| c.id == id) {
                self.dashboard_selected = pos;
            }
        }
        self.book.back();
        self.input_mode = InputMode::Normal;
        self.overlay = Overlay::None;
    }

    fn enter_workspace(&mut self) {
        self.tab = WorkspaceTab::default();
        self.record_selected = 0;
        self.chat_scroll = 0;
        self.input_mode = InputMode::Normal;
    }

    // ═══════════════════════════════════════════════════════════════════════
    //  WORKSPACE
    // ═══════════════════════════════════════════════════════════════════════

    pub fn select_tab(&mut self, tab: WorkspaceTab) {
        if self.tab != tab {
            self.tab = tab;
            self.record_selected = 0;
        }
    }

    pub fn next_tab(&mut self) {
        self.select_tab(self.tab.next());
    }

    pub fn prev_tab(&mut self) {
        self.select_tab(self.tab.prev());
    }

    pub fn record_count(&self) -> usize {
        let Some(case) = self.active_case() else {
            return 0;
        };
        match self.tab {
            WorkspaceTab::Suspects => case.suspects.len(),
            WorkspaceTab::Clues => case.clues.len(),
            WorkspaceTab::Timeline => case.timeline.len(),
            WorkspaceTab::Statements => case.statements.len(),
            WorkspaceTab::Theories => case.theories.len(),
        }
    }

    pub fn record_down(&mut self) {
        if self.record_selected + 1 < self.record_count() {
            self.record_selected += 1;
        }
    }

    pub fn record_up(&mut self) {
        self.record_selected = self.record_selected.saturating_sub(1);
    }

    pub fn cycle_status(&mut self) {
        match self.book.cycle_status() {
            Ok(status) => self.show_toast(&format!("+ Case marked {}", status)),
            Err(e) => self.show_toast(&e.to_string()),
        }
    }

    pub fn toggle_selected_gap(&mut self) {
        if self.tab != WorkspaceTab::Timeline {
            self.show_toast("Gaps can only be marked on the timeline");
            return;
        }
        match self.book.toggle_gap(self.record_selected) {
            Ok(true) => self.show_toast("+ Marked as unaccounted time"),
            Ok(false) => self.show_toast("+ Gap cleared"),
            Err(e) => self.show_toast(&e.to_string()),
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    //  THEORY DRAFT
    // ═══════════════════════════════════════════════════════════════════════

    pub fn start_theory_draft(&mut self) {
        self.theory_title.clear();
        self.theory_content.clear();
        self.input_mode = InputMode::TheoryTitle;
    }

    pub fn cancel_theory_draft(&mut self) {
        self.theory_title.clear();
        self.theory_content.clear();
        self.input_mode = InputMode::Normal;
    }

    pub fn theory_push(&mut self, c: char) {
        match self.input_mode {
            InputMode::TheoryTitle => self.theory_title.push(c),
            InputMode::TheoryContent => self.theory_content.push(c),
            _ => {}
        }
    }

    pub fn theory_pop(&mut self) {
        match self.input_mode {
            InputMode::TheoryTitle => {
                self.theory_title.pop();
            }
            InputMode::TheoryContent => {
                self.theory_content.pop();
            }
            _ => {}
        }
    }

    /// Enter on the title moves to the content; Enter on the content files it
    pub fn theory_advance(&mut self) {
        match self.input_mode {
            InputMode::TheoryTitle => {
                if self.theory_title.trim().is_empty() {
                    self.show_toast("Theory title cannot be empty");
                } else {
                    self.input_mode = InputMode::TheoryContent;
                }
            }
            InputMode::TheoryContent => {
                let title = std::mem::take(&mut self.theory_title);
                let content = std::mem::take(&mut self.theory_content);
                self.input_mode = InputMode::Normal;
                match self.book.add_theory(&title, &content) {
                    Ok(_) => {
                        self.select_tab(WorkspaceTab::Theories);
                        self.record_selected = self.record_count().saturating_sub(1);
                        self.show_toast("+ Theory filed");
                    }
                    Err(e) => self.show_toast(&e.to_string()),
                }
            }
            _ => {}
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    //  ASSISTANT
    // ═══════════════════════════════════════════════════════════════════════

    /// Transcript for a case; cases nobody has talked about yet get the welcome line
    pub fn transcript(&mut self, case_id: &str) -> &mut Transcript {
        self.transcripts.entry(case_id.to_string()).or_default()
    }

    pub fn transcript_for(&self, case_id: &str) -> Option<&Transcript> {
        self.transcripts.get(case_id)
    }

    pub fn active_is_typing(&self) -> bool {
        self.book
            .active_id()
            .and_then(|id| self.transcripts.get(id))
            .is_some_and(|t| t.is_typing())
    }

    pub fn start_chat(&mut self) {
        self.input_mode = InputMode::Chat;
    }

    pub fn exit_chat(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn chat_push(&mut self, c: char) {
        self.chat_input.push(c);
    }

    pub fn chat_pop(&mut self) {
        self.chat_input.pop();
    }

    pub fn chat_newline(&mut self) {
        self.chat_input.push('\n');
    }

    pub fn chat_scroll_up(&mut self) {
        self.chat_scroll = self
            .chat_scroll
            .saturating_add(3)
            .min(self.chat_scroll_max.get());
    }

    pub fn chat_scroll_down(&mut self) {
        self.chat_scroll = self.chat_scroll.saturating_sub(3);
    }

    /// Send what's in the chat box. The input is only cleared when the turn
    /// actually starts.
    pub fn submit_chat(&mut self) -> Option<PendingQuestion> {
        let text = self.chat_input.clone();
        let pending = self.ask(&text)?;
        self.chat_input.clear();
        Some(pending)
    }

    /// Ask one of the shortcut questions
    pub fn submit_quick_prompt(&mut self, prompt: &QuickPrompt) -> Option<PendingQuestion> {
        let case = self.active_case()?.clone();
        match prompt.question(&case) {
            Ok(question) => self.ask(&question),
            Err(fallback) => {
                self.transcript(&case.id).say(fallback);
                None
            }
        }
    }

    /// Challenge the theory under the cursor
    pub fn challenge_selected_theory(&mut self) -> Option<PendingQuestion> {
        if self.tab != WorkspaceTab::Theories {
            self.show_toast("Select a theory to challenge first");
            return None;
        }
        let theory_id = self
            .active_case()?
            .theories
            .get(self.record_selected)?
            .id
            .clone();
        self.submit_quick_prompt(&QuickPrompt::Theory(theory_id))
    }

    fn ask(&mut self, text: &str) -> Option<PendingQuestion> {
        let case = self.active_case()?.clone();
        let question = self.transcript(&case.id).begin_turn(text)?;
        self.chat_scroll = 0;
        Some(PendingQuestion { case, question })
    }

    pub fn receive_reply(&mut self, case_id: &str, content: String) {
        self.transcript(case_id).finish_turn(content);
        if self.book.active_id() == Some(case_id) {
            self.chat_scroll = 0;
        }
    }

    pub fn receive_failure(&mut self, case_id: &str) {
        self.transcript(case_id).fail_turn();
    }

    // ═══════════════════════════════════════════════════════════════════════
    //  OVERLAYS & TOASTS
    // ═══════════════════════════════════════════════════════════════════════

    pub fn toggle_help(&mut self) {
        self.overlay = match self.overlay {
            Overlay::Help { .. } => Overlay::None,
            _ => Overlay::Help { scroll: 0 },
        };
    }

    pub fn show_record_detail(&mut self) {
        if self.record_count() > 0 {
            self.overlay = Overlay::RecordDetail { scroll: 0 };
        }
    }

    pub fn close_overlay(&mut self) {
        self.overlay = Overlay::None;
    }

    pub fn overlay_scroll_down(&mut self) {
        match &mut self.overlay {
            Overlay::Help { scroll } | Overlay::RecordDetail { scroll } => *scroll += 1,
            Overlay::None => {}
        }
    }

    pub fn overlay_scroll_up(&mut self) {
        match &mut self.overlay {
            Overlay::Help { scroll } | Overlay::RecordDetail { scroll } => {
                *scroll = scroll.saturating_sub(1)
            }
            Overlay::None => {}
        }
    }

    pub fn clear_expired_toast(&mut self) {
        if self.toast.as_ref().is_some_and(|t| t.is_expired()) {
            self.toast = None;
        }
    }

    pub fn show_toast(&mut self, message: &str) {
        self.toast = Some(Toast::new(message));
    }

    pub fn show_toast_kind(&mut self, message: &str, kind: ToastKind) {
        self.toast = Some(Toast::with_kind(message, kind));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assistant::persona;
    use crate::assistant::Role;

    fn app() -> App {
        App::new(CaseBook::with_mock_cases(), true, "test-model")
    }

    fn open_first(app: &mut App) -> String {
        app.open_selected_case();
        app.book.active_id().unwrap().to_string()
    }

    #[test]
    fn test_screen_follows_active_case() {
        let mut app = app();
        assert_eq!(app.screen(), Screen::Dashboard);
        open_first(&mut app);
        assert_eq!(app.screen(), Screen::Workspace);
        app.back_to_dashboard();
        assert_eq!(app.screen(), Screen::Dashboard);
    }

    #[test]
    fn test_dashboard_cursor_is_clamped() {
        let mut app = app();
        app.dashboard_up();
        assert_eq!(app.dashboard_selected, 0);
        for _ in 0..10 {
            app.dashboard_down();
        }
        assert_eq!(app.dashboard_selected, app.book.len() - 1);
    }

    #[test]
    fn test_back_keeps_dashboard_cursor_on_case() {
        let mut app = app();
        app.dashboard_down();
        open_first(&mut app);
        app.dashboard_selected = 0;
        app.back_to_dashboard();
        assert_eq!(app.dashboard_selected, 1);
    }

    #[test]
    fn test_tab_cycle_resets_cursor() {
        let mut app = app();
        open_first(&mut app);
        app.record_down();
        assert_eq!(app.record_selected, 1);
        app.next_tab();
        assert_eq!(app.tab, WorkspaceTab::Clues);
        assert_eq!(app.record_selected, 0);
        app.prev_tab();
        app.prev_tab();
        assert_eq!(app.tab, WorkspaceTab::Theories);
    }

    #[test]
    fn test_submit_chat_starts_turn_and_clears_input() {
        let mut app = app();
        let id = open_first(&mut app);
        app.chat_input = "Who polished the key?".to_string();

        let pending = app.submit_chat().unwrap();
        assert_eq!(pending.case.id, id);
        assert_eq!(pending.question, "Who polished the key?");
        assert!(app.chat_input.is_empty());
        assert!(app.active_is_typing());

        app.chat_input = "And another thing".to_string();
        assert!(app.submit_chat().is_none());
        assert_eq!(app.chat_input, "And another thing");
    }

    #[test]
    fn test_reply_lands_in_its_own_case() {
        let mut app = app();
        let id = open_first(&mut app);
        app.chat_input = "hello".to_string();
        app.submit_chat().unwrap();

        app.back_to_dashboard();
        app.receive_reply(&id, "A reply".to_string());

        let transcript = app.transcript_for(&id).unwrap();
        assert!(!transcript.is_typing());
        let last = transcript.messages().last().unwrap();
        assert_eq!(last.role, Role::Assistant);
        assert_eq!(last.content, "A reply");
    }

    #[test]
    fn test_quick_prompt_for_missing_theory_replies_locally() {
        let mut app = app();
        let id = open_first(&mut app);
        let pending = app.submit_quick_prompt(&QuickPrompt::Theory("gone".into()));
        assert!(pending.is_none());
        let transcript = app.transcript_for(&id).unwrap();
        assert_eq!(
            transcript.messages().last().unwrap().content,
            persona::UNKNOWN_THEORY
        );
        assert!(!transcript.is_typing());
    }

    #[test]
    fn test_timeline_quick_prompt() {
        let mut app = app();
        open_first(&mut app);
        let pending = app.submit_quick_prompt(&QuickPrompt::Timeline).unwrap();
        assert_eq!(pending.question, crate::assistant::prompts::TIMELINE_QUESTION);
    }

    #[test]
    fn test_theory_draft_flow() {
        let mut app = app();
        let id = open_first(&mut app);
        let before = app.book.get(&id).unwrap().theories.len();

        app.start_theory_draft();
        app.theory_advance();
        assert_eq!(app.input_mode, InputMode::TheoryTitle);

        for c in "The butler".chars() {
            app.theory_push(c);
        }
        app.theory_advance();
        assert_eq!(app.input_mode, InputMode::TheoryContent);
        for c in "Thirty years of grudges".chars() {
            app.theory_push(c);
        }
        app.theory_advance();

        assert_eq!(app.input_mode, InputMode::Normal);
        assert_eq!(app.tab, WorkspaceTab::Theories);
        let case = app.book.get(&id).unwrap();
        assert_eq!(case.theories.len(), before + 1);
        assert_eq!(case.theories[app.record_selected].title, "The butler");
    }

    #[test]
    fn test_gap_toggle_only_on_timeline() {
        let mut app = app();
        let id = open_first(&mut app);
        let gaps = app.book.get(&id).unwrap().gap_count();

        app.toggle_selected_gap();
        assert_eq!(app.book.get(&id).unwrap().gap_count(), gaps);

        app.select_tab(WorkspaceTab::Timeline);
        app.toggle_selected_gap();
        assert_eq!(app.book.get(&id).unwrap().gap_count(), gaps + 1);
    }

    #[test]
    fn test_toast_kinds() {
        assert_eq!(Toast::new("+ Theory filed").kind, ToastKind::Success);
        assert_eq!(Toast::new("New case failed: x").kind, ToastKind::Error);
        assert_eq!(Toast::new("Gaps can only be marked on the timeline").kind, ToastKind::Info);
    }
}
