//! 弹窗组件

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use salon_catalog_core::{CatalogView, PrimaryAction, ProductModal, SuppliesView, TreatmentModal};

use crate::i18n::t;
use crate::model::{App, Modal};
use crate::view::theme::{colors, Styles};

/// 渲染所有打开的弹窗，由下到上
pub fn render(app: &App, view: &CatalogView, frame: &mut Frame) {
    if let Some(modal) = &view.treatment_modal {
        render_treatment_detail(frame, modal);
    }

    if let Some(modal) = &view.product_modal {
        render_product_detail(frame, modal);
    }

    match &app.modal.active {
        Some(Modal::Error { title, message }) => render_error(frame, title, message),
        Some(Modal::Help) => render_help(frame),
        None => {}
    }
}

/// 计算居中弹窗区域
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// 弹窗外框，返回内部区域
fn render_frame(frame: &mut Frame, area: Rect, title: &str, border: Style) -> Rect {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(border)
        .style(Style::default().bg(colors().bg));

    let inner = block.inner(area);
    frame.render_widget(block, area);
    Rect::new(
        inner.x.saturating_add(1),
        inner.y,
        inner.width.saturating_sub(2),
        inner.height,
    )
}

/// 底部操作提示行
fn action_line(action: &PrimaryAction, label: &str, unavailable: &str) -> Line<'static> {
    let texts = t();
    let mut spans = Vec::new();
    if action.is_enabled() {
        spans.push(Span::styled(texts.hints.keys.enter, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(label.to_string(), Styles::hint_desc()));
        spans.push(Span::styled("  │  ", Styles::muted()));
    } else if !unavailable.is_empty() {
        spans.push(Span::styled(unavailable.to_string(), Styles::muted()));
        spans.push(Span::styled("  │  ", Styles::muted()));
    }
    spans.push(Span::styled(texts.hints.keys.esc, Styles::hint_key()));
    spans.push(Span::raw(" "));
    spans.push(Span::styled(texts.common.close, Styles::hint_desc()));
    Line::from(spans)
}

/// 渲染治疗项目详情弹窗
fn render_treatment_detail(frame: &mut Frame, modal: &TreatmentModal) {
    let texts = t();
    let detail = &texts.modal.treatment_detail;

    let mut lines = vec![
        Line::styled(detail.supplies_label, Styles::title()),
        Line::from(""),
    ];
    match &modal.supplies {
        SuppliesView::Listed(supplies) => {
            lines.extend(
                supplies
                    .iter()
                    .map(|s| Line::styled(format!("  • {s}"), Style::default().fg(colors().fg))),
            );
        }
        SuppliesView::NoneListed => {
            lines.push(Line::styled(format!("  {}", detail.no_supplies), Styles::muted()));
        }
    }
    lines.push(Line::from(""));
    lines.push(action_line(&modal.action, texts.treatments.book_action, ""));

    let height = u16::try_from(lines.len()).unwrap_or(u16::MAX).saturating_add(2);
    let area = centered_rect(56, height, frame.area());
    let title = format!("{}: {}", detail.title_prefix, modal.name);
    let inner = render_frame(frame, area, &title, Styles::border(true));

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

/// 渲染商品详情弹窗
fn render_product_detail(frame: &mut Frame, modal: &ProductModal) {
    let texts = t();
    let detail = &texts.modal.product_detail;

    let lines = vec![
        Line::from(vec![
            Span::styled(detail.stock_label, Styles::title()),
            Span::raw(" "),
            Span::styled(
                format!("{} {}", modal.stock, texts.common.units),
                Style::default().fg(colors().success).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        action_line(
            &modal.action,
            texts.products.buy_action,
            texts.products.buy_unavailable,
        ),
    ];

    let area = centered_rect(52, 5, frame.area());
    let title = format!("{}: {}", detail.title_prefix, modal.name);
    let inner = render_frame(frame, area, &title, Styles::border(true));

    frame.render_widget(Paragraph::new(lines), inner);
}

/// 渲染错误弹窗
fn render_error(frame: &mut Frame, title: &str, message: &str) {
    let texts = t();
    let area = centered_rect(56, 8, frame.area());
    let title = if title.is_empty() { texts.common.error } else { title };
    let inner = render_frame(frame, area, title, Style::default().fg(colors().error));

    let lines = vec![
        Line::from(""),
        Line::styled(message.to_string(), Style::default().fg(colors().fg)),
        Line::from(""),
        Line::styled(texts.modal.close_hint, Styles::muted()),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, inner);
}

/// 渲染帮助弹窗
fn render_help(frame: &mut Frame) {
    let texts = t();
    let help = &texts.help;
    let a = &help.actions;

    let section = |title: &'static str| {
        Line::styled(
            title,
            Style::default().fg(colors().accent).add_modifier(Modifier::BOLD),
        )
    };
    let row = |key: &'static str, desc: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {key:<12}"), Styles::hint_key()),
            Span::styled(desc, Style::default().fg(colors().fg)),
        ])
    };

    let lines = vec![
        section(help.global_shortcuts),
        Line::from(""),
        row("Tab/S-Tab", a.switch_panel),
        row("Ctrl+U", a.clear_search),
        row("Alt+t", a.toggle_theme),
        row("Alt+l", a.toggle_language),
        row("Alt+h / ?", help.title),
        row("Ctrl+C", a.quit),
        Line::from(""),
        section(help.list_shortcuts),
        Line::from(""),
        row("↑↓ / jk", a.move_up_down),
        row("Enter", a.primary_action),
        row("d / Space", a.details),
        row("Esc", a.close_details),
        row("/", a.focus_search),
        row("q", a.quit),
        Line::from(""),
        Line::styled(help.close_hint, Styles::muted()),
    ];

    let height = u16::try_from(lines.len()).unwrap_or(u16::MAX).saturating_add(2);
    let area = centered_rect(52, height, frame.area());
    let inner = render_frame(frame, area, help.title, Styles::border(true));
    frame.render_widget(Paragraph::new(lines), inner);
}
