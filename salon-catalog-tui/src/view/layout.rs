//! 主布局渲染

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::i18n::t;
use crate::model::{App, FocusPanel};

use super::components;
use super::pages;
use super::theme::{colors, Styles};

/// 渲染主布局
pub fn render(app: &App, frame: &mut Frame) {
    let view = app.view();
    let size = frame.area();

    // 标题栏 + 搜索栏 + 主内容区 + 状态栏
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 标题栏
            Constraint::Length(3), // 搜索栏
            Constraint::Min(1),    // 主内容区
            Constraint::Length(1), // 状态栏
        ])
        .split(size);

    frame.render_widget(
        Block::default().style(Style::default().bg(colors().bg)),
        size,
    );

    render_title_bar(frame, main_layout[0]);

    components::search_bar::render(app, &view.query, frame, main_layout[1]);

    // 左右分栏：治疗项目 | 商品
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(58), Constraint::Percentage(42)])
        .split(main_layout[2]);

    let texts = t();
    let treatments_area = render_panel(
        frame,
        columns[0],
        texts.treatments.title,
        view.treatments.len(),
        app.focus == FocusPanel::Treatments,
    );
    pages::treatments::render(app, &view.treatments, frame, treatments_area);

    let products_area = render_panel(
        frame,
        columns[1],
        texts.products.title,
        view.products.len(),
        app.focus == FocusPanel::Products,
    );
    pages::products::render(app, &view.products, frame, products_area);

    components::statusbar::render(app, frame, main_layout[3]);

    // 弹窗（在最上层）
    components::modal::render(app, &view, frame);
}

/// 渲染标题栏
fn render_title_bar(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(format!(
        " {} v{}",
        t().common.app_name,
        env!("CARGO_PKG_VERSION")
    ))
    .style(Styles::statusbar());
    frame.render_widget(title, area);
}

/// 渲染列表面板边框，返回内部区域
fn render_panel(frame: &mut Frame, area: Rect, title: &str, count: usize, focused: bool) -> Rect {
    let block = Block::default()
        .title(format!(" {title} ({count}) "))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(focused));

    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}
