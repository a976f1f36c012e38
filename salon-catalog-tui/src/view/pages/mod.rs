//! 列表面板

pub mod products;
pub mod treatments;

use ratatui::{
    layout::Rect,
    text::Line,
    widgets::Paragraph,
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::theme::Styles;

/// 名称与价格之间用空格填充，让价格右对齐
///
/// 名称过长时按显示宽度截断并加省略号。
fn name_and_price(name: &str, price: &str, width: usize) -> (String, String) {
    let price_width = price.width();
    let available = width.saturating_sub(price_width + 3); // 左缩进 2 + 至少 1 个空格
    let mut shown = String::new();
    let mut used = 0;
    if name.width() <= available {
        shown.push_str(name);
        used = name.width();
    } else {
        for ch in name.chars() {
            let w = ch.width().unwrap_or(0);
            if used + w + 1 > available {
                break;
            }
            shown.push(ch);
            used += w;
        }
        shown.push('…');
        used += 1;
    }
    let padding = " ".repeat(available.saturating_sub(used) + 1);
    (shown, padding)
}

/// 渲染空状态
fn render_empty(frame: &mut Frame, area: Rect, message: &str) {
    let content = vec![
        Line::from(""),
        Line::styled(format!("  {message}"), Styles::muted()),
    ];
    frame.render_widget(Paragraph::new(content), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_is_right_aligned() {
        let (name, padding) = name_and_price("Limpieza", "$ 12.500", 30);
        assert_eq!(name, "Limpieza");
        assert_eq!(2 + name.width() + padding.len() + "$ 12.500".width(), 30);
    }

    #[test]
    fn test_long_name_is_truncated() {
        let (name, padding) = name_and_price("Tratamiento Facial Profundo Completo", "$ 1", 20);
        assert!(name.ends_with('…'));
        assert_eq!(2 + name.width() + padding.len() + 3, 20);
    }
}
