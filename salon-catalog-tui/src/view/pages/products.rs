//! 商品列表

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{List, ListItem, ListState},
    Frame,
};
use salon_catalog_core::ProductCard;

use super::{name_and_price, render_empty};
use crate::i18n::t;
use crate::model::{App, FocusPanel};
use crate::view::theme::{colors, Styles};

/// 渲染商品列表
pub fn render(app: &App, cards: &[ProductCard], frame: &mut Frame, area: Rect) {
    if cards.is_empty() {
        render_empty(frame, area, t().products.no_results);
        return;
    }

    let texts = t();
    let c = colors();
    let focused = app.focus == FocusPanel::Products;
    let width = usize::from(area.width);

    let items: Vec<ListItem> = cards
        .iter()
        .enumerate()
        .map(|(i, card)| {
            let is_selected = focused && i == app.products.selected;
            let base = if is_selected {
                Styles::selected()
            } else {
                Style::default().fg(c.fg)
            };
            let dim = if is_selected { base } else { Styles::muted() };

            let (name, padding) = name_and_price(&card.name, &card.price, width);
            let title = Line::from(vec![
                Span::raw("  "),
                Span::styled(name, base),
                Span::styled(padding, base),
                Span::styled(card.price.clone(), if is_selected { base } else { Styles::price() }),
            ]);

            let (action_text, action_style) = if card.action.is_enabled() {
                (texts.products.buy_action, if is_selected { base } else { Style::default().fg(c.success) })
            } else {
                (texts.products.buy_unavailable, dim)
            };
            let details = Line::from(vec![
                Span::raw("    "),
                Span::styled(
                    format!("{}: {} {}", texts.products.stock, card.stock, texts.common.units),
                    dim,
                ),
                Span::styled("  ·  ", dim),
                Span::styled(action_text, action_style),
            ]);

            ListItem::new(vec![title, details, Line::from("")])
        })
        .collect();

    let list = List::new(items).highlight_style(Style::default());

    let mut state = ListState::default();
    state.select(Some(app.products.selected));

    frame.render_stateful_widget(list, area, &mut state);
}
