//! # Help UI
//!
//! App overview, usage steps and keybindings.

use crate::tui::ui::titled_block;
use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Wrap};

/// Rows taken by the help panel including borders
pub const HELP_HEIGHT: u16 = 10;

/// Render the help panel
pub fn render_help(frame: &mut Frame, area: Rect) {
    let heading = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
    let key = Style::default().fg(Color::Cyan);

    let lines = vec![
        Line::from(Span::styled("できること", heading)),
        Line::from("  テキスト入力と専門家の種類の選択に基づき、LLMが専門家視点で回答します。"),
        Line::from(Span::styled("使い方", heading)),
        Line::from(vec![
            Span::raw("  1. "),
            Span::styled("←/→", key),
            Span::raw(" で専門家の種類を選択  2. "),
            Span::styled("i", key),
            Span::raw(" で相談内容を入力（"),
            Span::styled("Esc", key),
            Span::raw(" で入力終了）"),
        ]),
        Line::from(vec![
            Span::raw("  3. "),
            Span::styled("Enter", key),
            Span::raw("（入力中は "),
            Span::styled("Ctrl+S", key),
            Span::raw("）で送信 → 回答が表示されます  "),
            Span::styled("↑/↓", key),
            Span::raw(" 回答をスクロール  "),
            Span::styled("?", key),
            Span::raw(" ヘルプ表示切替"),
        ]),
        Line::from(Span::styled("注意", heading)),
        Line::from(
            "  本出力は支援情報です。重要事項は一次情報で必ず確認し、関係部署レビューを受けてください。",
        ),
    ];

    let paragraph = Paragraph::new(lines)
        .block(titled_block("ℹ️ アプリ概要・操作方法"))
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}
