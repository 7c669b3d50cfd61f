//! # Form UI
//!
//! Persona selector, text area, and answer panel.

use crate::tui::app::{InputMode, Output};
use crate::tui::ui::{titled_block, PENDING_MESSAGE};
use crate::tui::App;
use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Tabs, Wrap};

const PERSONA_TITLE: &str = "専門家の種類を選択してください：";
const INPUT_TITLE: &str = "入力テキスト";
const ANSWER_TITLE: &str = "📝 回答";
const PLACEHOLDER: &str =
    "例）新商品の広告表現の留意点／分析の進め方／顧客体験の改善アイデア など";

/// Horizontal single-select over persona labels
pub fn render_personas(frame: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = app
        .personas
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let marker = if i == app.selected_persona { "◉" } else { "○" };
            Line::from(format!("{marker} {label}"))
        })
        .collect();

    let tabs = Tabs::new(titles)
        .block(titled_block(PERSONA_TITLE))
        .select(app.selected_persona)
        .style(Style::default().fg(Color::White))
        .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));

    frame.render_widget(tabs, area);
}

/// Multi-line text area
pub fn render_input(frame: &mut Frame, app: &App, area: Rect) {
    let editing = app.input_mode == InputMode::Editing;

    let text = if app.input_buffer.is_empty() && !editing {
        Text::from(Span::styled(PLACEHOLDER, Style::default().fg(Color::DarkGray)))
    } else if editing {
        Text::raw(format!("{}▏", app.input_buffer))
    } else {
        Text::raw(app.input_buffer.as_str())
    };

    // Keep the caret visible once the text outgrows the box
    let lines = text.lines.len() as u16;
    let visible = area.height.saturating_sub(2);
    let scroll = if editing { lines.saturating_sub(visible) } else { 0 };

    let border_style = if editing {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let paragraph = Paragraph::new(text)
        .block(titled_block(INPUT_TITLE).border_style(border_style))
        .scroll((scroll, 0));

    frame.render_widget(paragraph, area);
}

/// Answer, warning, or inline error
pub fn render_output(frame: &mut Frame, app: &App, area: Rect) {
    let text = match &app.output {
        Output::Empty => Text::from(Span::styled(
            "専門家を選び、相談内容を入力して送信してください。",
            Style::default().fg(Color::DarkGray),
        )),
        Output::Pending => Text::from(Span::styled(
            PENDING_MESSAGE,
            Style::default().fg(Color::Yellow),
        )),
        Output::Answer(answer) => Text::raw(answer.as_str()),
        Output::Warning(warning) => Text::from(Span::styled(
            format!("⚠ {warning}"),
            Style::default().fg(Color::Yellow),
        )),
        Output::Error(error) => Text::from(Span::styled(
            error.as_str(),
            Style::default().fg(Color::Red),
        )),
    };

    let paragraph = Paragraph::new(text)
        .block(titled_block(ANSWER_TITLE))
        .wrap(Wrap { trim: false })
        .scroll((app.output_scroll, 0));

    frame.render_widget(paragraph, area);
}
