//! # TUI Application Core
//!
//! Form state: persona selection, text area, and the last submission result.

use crate::features::query::{SubmitOutcome, EMPTY_INPUT_WARNING};
use crate::tui::event::KeyAction;

/// Input mode for text entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Editing,
}

/// What the answer panel shows
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Output {
    #[default]
    Empty,
    /// Waiting on the model
    Pending,
    Answer(String),
    Warning(String),
    Error(String),
}

/// A form submission waiting to be sent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub text: String,
    pub persona_label: String,
}

/// Main application state
pub struct App {
    /// Persona labels in selector order
    pub personas: Vec<String>,
    /// Index into `personas`
    pub selected_persona: usize,
    /// Model name for the title bar
    pub model: String,
    /// Current input mode
    pub input_mode: InputMode,
    /// Text area contents, kept across submissions
    pub input_buffer: String,
    /// Answer panel state
    pub output: Output,
    /// Answer panel scroll offset (lines)
    pub output_scroll: u16,
    /// Help panel visibility
    pub show_help: bool,
    /// Whether the app should quit
    pub should_quit: bool,
}

impl App {
    pub fn new(personas: Vec<String>, model: impl Into<String>) -> Self {
        App {
            personas,
            selected_persona: 0,
            model: model.into(),
            input_mode: InputMode::Normal,
            input_buffer: String::new(),
            output: Output::Empty,
            output_scroll: 0,
            show_help: true,
            should_quit: false,
        }
    }

    /// Currently selected persona label
    pub fn selected_label(&self) -> &str {
        self.personas
            .get(self.selected_persona)
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn is_pending(&self) -> bool {
        self.output == Output::Pending
    }

    pub fn next_persona(&mut self) {
        if !self.personas.is_empty() {
            self.selected_persona = (self.selected_persona + 1) % self.personas.len();
        }
    }

    pub fn prev_persona(&mut self) {
        if !self.personas.is_empty() {
            self.selected_persona =
                (self.selected_persona + self.personas.len() - 1) % self.personas.len();
        }
    }

    /// Apply a key action. Returns a submission when the form was sent.
    pub fn handle_action(&mut self, action: KeyAction) -> Option<Submission> {
        match action {
            KeyAction::None => {}
            KeyAction::Quit => self.should_quit = true,
            KeyAction::PrevPersona => self.prev_persona(),
            KeyAction::NextPersona => self.next_persona(),
            KeyAction::StartEditing => self.input_mode = InputMode::Editing,
            KeyAction::StopEditing => self.input_mode = InputMode::Normal,
            KeyAction::Submit => return self.begin_submit(),
            KeyAction::Char(c) => self.input_buffer.push(c),
            KeyAction::Newline => self.input_buffer.push('\n'),
            KeyAction::Backspace => {
                self.input_buffer.pop();
            }
            KeyAction::ToggleHelp => self.show_help = !self.show_help,
            KeyAction::ScrollUp => self.output_scroll = self.output_scroll.saturating_sub(1),
            KeyAction::ScrollDown => self.output_scroll = self.output_scroll.saturating_add(1),
        }
        None
    }

    /// Apply a key action while a request is in flight.
    ///
    /// Only quitting is honored; returns true when the app should stop.
    pub fn handle_pending_action(&mut self, action: KeyAction) -> bool {
        if action == KeyAction::Quit {
            self.should_quit = true;
        }
        self.should_quit
    }

    /// Mark the form as sent and hand back what to send
    pub fn begin_submit(&mut self) -> Option<Submission> {
        if self.is_pending() {
            return None;
        }
        self.output = Output::Pending;
        self.output_scroll = 0;
        Some(Submission {
            text: self.input_buffer.clone(),
            persona_label: self.selected_label().to_string(),
        })
    }

    /// Show the result of a submission
    pub fn finish_submit(&mut self, outcome: SubmitOutcome) {
        self.output = match outcome {
            SubmitOutcome::Answered(answer) => Output::Answer(answer),
            SubmitOutcome::EmptyInput => Output::Warning(EMPTY_INPUT_WARNING.to_string()),
            SubmitOutcome::Failed(error) => Output::Error(error),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::PersonaManager;

    fn app() -> App {
        let labels = PersonaManager::new()
            .labels()
            .into_iter()
            .map(String::from)
            .collect();
        App::new(labels, "gpt-4o-mini")
    }

    #[test]
    fn test_initial_state() {
        let app = app();
        assert_eq!(app.selected_label(), "コンプライアンス（保険業）");
        assert_eq!(app.input_mode, InputMode::Normal);
        assert_eq!(app.output, Output::Empty);
        assert!(app.show_help);
    }

    #[test]
    fn test_persona_cycling_wraps() {
        let mut app = app();
        app.prev_persona();
        assert_eq!(app.selected_label(), "CX/サービスデザイン");
        app.next_persona();
        app.next_persona();
        assert_eq!(app.selected_label(), "データサイエンス");
    }

    #[test]
    fn test_no_personas() {
        let mut app = App::new(Vec::new(), "m");
        app.next_persona();
        app.prev_persona();
        assert_eq!(app.selected_label(), "");
    }

    #[test]
    fn test_typing_into_text_area() {
        let mut app = app();
        app.handle_action(KeyAction::StartEditing);
        for c in "需要予測".chars() {
            app.handle_action(KeyAction::Char(c));
        }
        app.handle_action(KeyAction::Newline);
        app.handle_action(KeyAction::Char('x'));
        app.handle_action(KeyAction::Backspace);
        assert_eq!(app.input_buffer, "需要予測\n");

        app.handle_action(KeyAction::StopEditing);
        assert_eq!(app.input_mode, InputMode::Normal);
    }

    #[test]
    fn test_submit_carries_text_and_persona() {
        let mut app = app();
        app.next_persona();
        app.input_buffer = "新商品の需要予測をしたい".to_string();

        let submission = app.handle_action(KeyAction::Submit).unwrap();
        assert_eq!(submission.text, "新商品の需要予測をしたい");
        assert_eq!(submission.persona_label, "データサイエンス");
        assert!(app.is_pending());
    }

    #[test]
    fn test_no_double_submit_while_pending() {
        let mut app = app();
        assert!(app.begin_submit().is_some());
        assert!(app.begin_submit().is_none());
    }

    #[test]
    fn test_finish_submit_states() {
        let mut app = app();
        app.input_buffer = "keep me".to_string();

        app.begin_submit();
        app.finish_submit(SubmitOutcome::Answered("回答です".to_string()));
        assert_eq!(app.output, Output::Answer("回答です".to_string()));
        // Input survives submission
        assert_eq!(app.input_buffer, "keep me");

        app.begin_submit();
        app.finish_submit(SubmitOutcome::EmptyInput);
        assert_eq!(app.output, Output::Warning("テキストを入力してください。".to_string()));

        app.begin_submit();
        app.finish_submit(SubmitOutcome::Failed("エラーが発生しました: boom".to_string()));
        assert_eq!(app.output, Output::Error("エラーが発生しました: boom".to_string()));
        assert!(!app.is_pending());
    }

    #[test]
    fn test_scroll_and_help_toggle() {
        let mut app = app();
        app.handle_action(KeyAction::ScrollUp);
        assert_eq!(app.output_scroll, 0);
        app.handle_action(KeyAction::ScrollDown);
        app.handle_action(KeyAction::ScrollDown);
        assert_eq!(app.output_scroll, 2);

        app.handle_action(KeyAction::ToggleHelp);
        assert!(!app.show_help);
    }

    #[test]
    fn test_quit() {
        let mut app = app();
        assert!(app.handle_action(KeyAction::Quit).is_none());
        assert!(app.should_quit);
    }

    #[test]
    fn test_quit_while_pending() {
        let mut app = app();
        app.input_buffer = "q".to_string();
        app.begin_submit();

        assert!(!app.handle_pending_action(KeyAction::Char('x')));
        assert!(!app.handle_pending_action(KeyAction::Submit));
        assert_eq!(app.input_buffer, "q");

        assert!(app.handle_pending_action(KeyAction::Quit));
        assert!(app.should_quit);
    }
}
