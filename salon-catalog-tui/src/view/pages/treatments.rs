//! 治疗项目列表

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{List, ListItem, ListState},
    Frame,
};
use salon_catalog_core::TreatmentCard;

use super::{name_and_price, render_empty};
use crate::i18n::t;
use crate::model::{App, FocusPanel};
use crate::view::theme::{colors, Styles};

/// 渲染治疗项目列表
pub fn render(app: &App, cards: &[TreatmentCard], frame: &mut Frame, area: Rect) {
    if cards.is_empty() {
        render_empty(frame, area, t().treatments.no_results);
        return;
    }

    let texts = t();
    let c = colors();
    let focused = app.focus == FocusPanel::Treatments;
    let width = usize::from(area.width);

    let items: Vec<ListItem> = cards
        .iter()
        .enumerate()
        .map(|(i, card)| {
            let is_selected = focused && i == app.treatments.selected;
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

            let mut details = Line::from(vec![
                Span::raw("    "),
                Span::styled(
                    format!(
                        "{}: {} {}",
                        texts.treatments.duration, card.duration_minutes, texts.common.minutes
                    ),
                    dim,
                ),
                Span::styled("  ·  ", dim),
                Span::styled(
                    format!("{}: {}", texts.treatments.payment, card.payment_methods.join(", ")),
                    dim,
                ),
            ]);
            if card.has_image {
                details.push_span(Span::styled(format!("  {}", texts.treatments.has_image), dim));
            }

            ListItem::new(vec![title, details, Line::from("")])
        })
        .collect();

    let list = List::new(items).highlight_style(Style::default());

    let mut state = ListState::default();
    state.select(Some(app.treatments.selected));

    frame.render_stateful_widget(list, area, &mut state);
}
