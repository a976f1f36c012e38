//! 底部状态栏组件

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::i18n::t;
use crate::model::{App, FocusPanel};
use crate::view::theme::{colors, Styles};

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let hints = get_hints(app);
    let c = colors();

    let mut spans = Vec::new();

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(c.muted)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    // 如果有状态消息，显示在提示之后
    if let Some(ref msg) = app.status_message {
        spans.push(Span::styled(" │ ", Style::default().fg(c.muted)));
        spans.push(Span::styled(msg.clone(), Style::default().fg(c.warning)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(c.bg));
    frame.render_widget(paragraph, area);
}

/// 根据当前状态生成快捷键提示
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let texts = t();
    let keys = &texts.hints.keys;
    let actions = &texts.hints.actions;

    if app.has_overlay() {
        return vec![(keys.esc, actions.close)];
    }

    let mut hints = vec![(keys.tab, actions.switch_panel)];

    match app.focus {
        FocusPanel::Search => {
            hints.push((keys.esc, actions.clear));
            hints.push((keys.enter, actions.select));
        }
        FocusPanel::Treatments | FocusPanel::Products => {
            hints.push((keys.arrows_ud, actions.select));
            let primary = if app.focus == FocusPanel::Treatments {
                actions.book
            } else {
                actions.buy
            };
            hints.push((keys.enter, primary));
            hints.push((keys.details, actions.details));
            hints.push((keys.slash, actions.search));
            hints.push(("q", texts.common.quit));
        }
    }

    // 搜索栏中 ? 是普通输入
    let help_key = if app.focus.is_search() { "Alt+h" } else { "?" };
    hints.push((help_key, texts.help.title));

    hints
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlay_hints_only_close() {
        let (mut app, _) = App::for_tests();
        app.modal.show_help();
        assert_eq!(get_hints(&app).len(), 1);
    }

    #[test]
    fn test_list_hints_include_details() {
        let (mut app, _) = App::for_tests();
        app.focus = FocusPanel::Products;
        let hints = get_hints(&app);
        assert!(hints.iter().any(|(key, _)| *key == t().hints.keys.details));
    }
}
