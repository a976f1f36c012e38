//! 主题和样式定义

use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU8, Ordering};

// 0 = Dark, 1 = Light
static CURRENT_THEME: AtomicU8 = AtomicU8::new(0);

/// 主题枚举
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// 切换到另一个主题
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    fn index(self) -> u8 {
        match self {
            Theme::Dark => 0,
            Theme::Light => 1,
        }
    }
}

/// 设置当前主题
pub fn set_theme(theme: Theme) {
    CURRENT_THEME.store(theme.index(), Ordering::SeqCst);
}

/// 获取当前主题
pub fn current_theme() -> Theme {
    match CURRENT_THEME.load(Ordering::SeqCst) {
        0 => Theme::Dark,
        _ => Theme::Light,
    }
}

/// 获取当前主题的颜色方案
pub fn colors() -> ThemeColors {
    match current_theme() {
        Theme::Dark => ThemeColors::dark(),
        Theme::Light => ThemeColors::light(),
    }
}

/// 主题颜色
#[derive(Debug, Clone)]
pub struct ThemeColors {
    pub bg: Color,
    pub fg: Color,
    pub border: Color,
    pub border_focused: Color,
    pub accent: Color,
    pub price: Color,
    pub selected_bg: Color,
    pub selected_fg: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub muted: Color,
}

impl ThemeColors {
    /// 深色主题
    pub fn dark() -> Self {
        Self {
            bg: Color::Rgb(28, 24, 30),
            fg: Color::Rgb(226, 218, 228),
            border: Color::Rgb(70, 60, 74),
            border_focused: Color::Rgb(214, 112, 160),
            accent: Color::Rgb(214, 112, 160),
            price: Color::Rgb(236, 190, 120),
            selected_bg: Color::Rgb(92, 48, 78),
            selected_fg: Color::White,
            success: Color::Rgb(120, 200, 160),
            warning: Color::Rgb(230, 170, 100),
            error: Color::Rgb(244, 120, 120),
            muted: Color::Rgb(140, 130, 142),
        }
    }

    /// 浅色主题
    pub fn light() -> Self {
        Self {
            bg: Color::Rgb(252, 248, 250),
            fg: Color::Rgb(48, 40, 50),
            border: Color::Rgb(210, 196, 206),
            border_focused: Color::Rgb(176, 64, 120),
            accent: Color::Rgb(176, 64, 120),
            price: Color::Rgb(150, 96, 20),
            selected_bg: Color::Rgb(246, 214, 230),
            selected_fg: Color::Black,
            success: Color::Rgb(34, 134, 84),
            warning: Color::Rgb(176, 110, 0),
            error: Color::Rgb(200, 50, 60),
            muted: Color::Rgb(130, 120, 130),
        }
    }
}

/// 常用样式
pub struct Styles;

impl Styles {
    /// 边框样式，焦点面板高亮
    pub fn border(focused: bool) -> Style {
        let c = colors();
        Style::default().fg(if focused { c.border_focused } else { c.border })
    }

    /// 选中项样式
    pub fn selected() -> Style {
        let c = colors();
        Style::default()
            .bg(c.selected_bg)
            .fg(c.selected_fg)
            .add_modifier(Modifier::BOLD)
    }

    /// 标题样式
    pub fn title() -> Style {
        Style::default().fg(colors().fg).add_modifier(Modifier::BOLD)
    }

    /// 价格样式
    pub fn price() -> Style {
        Style::default().fg(colors().price).add_modifier(Modifier::BOLD)
    }

    /// 次要文字样式
    pub fn muted() -> Style {
        Style::default().fg(colors().muted)
    }

    /// 状态栏样式
    pub fn statusbar() -> Style {
        let c = colors();
        Style::default().bg(c.accent).fg(c.selected_fg)
    }

    /// 快捷键提示样式
    pub fn hint_key() -> Style {
        Style::default()
            .fg(colors().warning)
            .add_modifier(Modifier::BOLD)
    }

    /// 快捷键说明样式
    pub fn hint_desc() -> Style {
        Style::default().fg(colors().muted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Theme::Light).ok().as_deref(), Some("\"light\""));
        let theme: Theme = serde_json::from_str("\"dark\"").unwrap_or(Theme::Light);
        assert_eq!(theme, Theme::Dark);
    }
}
