//! # TUI UI Components
//!
//! Ratatui-based rendering of the single-page form.

mod form;
mod help;

pub use form::{render_input, render_output, render_personas};
pub use help::render_help;

use crate::tui::app::{InputMode, Output};
use crate::tui::App;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

/// Window title
pub const TITLE: &str = "🤖 Expert LLM Helper";
/// Shown while a request is in flight
pub const PENDING_MESSAGE: &str = "LLMに問い合わせ中…";

/// Main render function - lays out the form top to bottom
pub fn render(frame: &mut Frame, app: &App) {
    let mut constraints = vec![Constraint::Length(1)]; // Title
    if app.show_help {
        constraints.push(Constraint::Length(help::HELP_HEIGHT));
    }
    constraints.extend([
        Constraint::Length(3), // Persona selector
        Constraint::Length(8), // Text area
        Constraint::Min(3),    // Answer
        Constraint::Length(1), // Status bar
    ]);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(frame.area());

    let mut idx = 0;
    render_title(frame, app, chunks[idx]);
    idx += 1;

    if app.show_help {
        render_help(frame, chunks[idx]);
        idx += 1;
    }

    render_personas(frame, app, chunks[idx]);
    render_input(frame, app, chunks[idx + 1]);
    render_output(frame, app, chunks[idx + 2]);
    render_status_bar(frame, app, chunks[idx + 3]);
}

fn render_title(frame: &mut Frame, app: &App, area: Rect) {
    let line = Line::from(vec![
        Span::styled(TITLE, Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
        Span::styled(format!("  ({})", app.model), Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Render the status bar
fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let mode_status = match app.input_mode {
        InputMode::Normal => Span::styled(" NORMAL ", Style::default().fg(Color::White)),
        InputMode::Editing => {
            Span::styled(" [EDITING] ", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        }
    };

    let message = if app.is_pending() {
        Span::styled(format!(" {PENDING_MESSAGE} "), Style::default().fg(Color::Yellow))
    } else if let Output::Error(_) = app.output {
        Span::styled(" Error ", Style::default().fg(Color::Red))
    } else {
        Span::raw("")
    };

    let help_hint = match app.input_mode {
        InputMode::Normal => " ←/→:Persona i:Edit Enter:Send ?:Help q:Quit ",
        InputMode::Editing => " Esc:Done Ctrl+S:Send Tab:Persona ",
    };

    let status_line = Line::from(vec![
        mode_status,
        Span::raw(" | "),
        message,
        Span::raw(" "),
        Span::styled(help_hint, Style::default().fg(Color::Gray)),
    ]);

    let paragraph = Paragraph::new(status_line).style(Style::default().bg(Color::DarkGray));

    frame.render_widget(paragraph, area);
}

/// Helper to create a block with title
pub fn titled_block(title: &str) -> Block {
    Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", title))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::PersonaManager;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn app() -> App {
        let labels = PersonaManager::new()
            .labels()
            .into_iter()
            .map(String::from)
            .collect();
        App::new(labels, "gpt-4o-mini")
    }

    fn rendered_text(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_renders_every_state() {
        let mut app = app();
        rendered_text(&app);

        app.show_help = false;
        app.input_mode = InputMode::Editing;
        app.input_buffer = "新商品の需要予測をしたい\n二行目".to_string();
        app.output = Output::Pending;
        rendered_text(&app);

        app.output = Output::Answer("ok ".repeat(500));
        app.output_scroll = 3;
        rendered_text(&app);

        app.output = Output::Error("エラーが発生しました: timeout".to_string());
        rendered_text(&app);
    }

    #[test]
    fn test_answer_text_is_drawn() {
        let mut app = app();
        app.show_help = false;
        app.output = Output::Answer("forecast".to_string());
        assert!(rendered_text(&app).contains("forecast"));
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let app = app();
        let mut terminal = Terminal::new(TestBackend::new(10, 5)).unwrap();
        terminal.draw(|frame| render(frame, &app)).unwrap();
    }
}
