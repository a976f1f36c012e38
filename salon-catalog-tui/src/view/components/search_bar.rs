//! 顶部搜索栏组件

use ratatui::{
    layout::{Position, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::i18n::t;
use crate::model::App;
use crate::view::theme::{colors, Styles};

/// 渲染搜索栏
pub fn render(app: &App, query: &str, frame: &mut Frame, area: Rect) {
    let texts = t();
    let focused = app.focus.is_search();

    let block = Block::default()
        .title(format!(" {} ", texts.search.title))
        .title_style(Styles::title())
        .title_bottom(Line::styled(format!(" {} ", texts.search.subtitle), Styles::muted()))
        .borders(Borders::ALL)
        .border_style(Styles::border(focused));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let line = if query.is_empty() {
        Line::from(vec![
            Span::raw(" "),
            Span::styled(texts.search.placeholder, Styles::muted()),
        ])
    } else {
        Line::from(vec![
            Span::raw(" "),
            Span::styled(query, ratatui::style::Style::default().fg(colors().fg)),
        ])
    };
    frame.render_widget(Paragraph::new(line), inner);

    // 只有焦点在搜索栏且没有弹窗时显示光标
    if focused && !app.has_overlay() {
        let offset = u16::try_from(query.width()).unwrap_or(u16::MAX);
        let x = inner
            .x
            .saturating_add(1)
            .saturating_add(offset)
            .min(inner.right().saturating_sub(1));
        frame.set_cursor_position(Position::new(x, inner.y));
    }
}
