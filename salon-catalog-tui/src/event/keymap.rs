//! 快捷键配置
//!
//! 列表快捷键只在焦点位于列表时生效，焦点在搜索栏时字符一律当作输入。

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// 快捷键绑定
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub modifiers: KeyModifiers,
    pub code: KeyCode,
}

impl KeyBinding {
    pub const fn new(modifiers: KeyModifiers, code: KeyCode) -> Self {
        Self { modifiers, code }
    }

    pub const fn key(code: KeyCode) -> Self {
        Self::new(KeyModifiers::NONE, code)
    }

    pub const fn alt(code: KeyCode) -> Self {
        Self::new(KeyModifiers::ALT, code)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(KeyModifiers::CONTROL, code)
    }

    /// 检查按键事件是否匹配此快捷键绑定
    pub fn matches(&self, key: &KeyEvent) -> bool {
        key.modifiers == self.modifiers && key.code == self.code
    }
}

/// 默认快捷键配置
pub struct DefaultKeymap;

impl DefaultKeymap {
    // 全局
    pub const QUIT: KeyBinding = KeyBinding::key(KeyCode::Char('q'));
    pub const FORCE_QUIT: KeyBinding = KeyBinding::ctrl(KeyCode::Char('c'));
    pub const HELP: KeyBinding = KeyBinding::alt(KeyCode::Char('h'));
    pub const TOGGLE_THEME: KeyBinding = KeyBinding::alt(KeyCode::Char('t'));
    pub const TOGGLE_LANGUAGE: KeyBinding = KeyBinding::alt(KeyCode::Char('l'));

    // 面板切换
    pub const FOCUS_NEXT: KeyBinding = KeyBinding::key(KeyCode::Tab);
    pub const FOCUS_PREV: KeyBinding = KeyBinding::new(KeyModifiers::SHIFT, KeyCode::BackTab);
    pub const FOCUS_SEARCH: KeyBinding = KeyBinding::key(KeyCode::Char('/'));

    // 搜索
    pub const CLEAR_SEARCH: KeyBinding = KeyBinding::ctrl(KeyCode::Char('u'));

    // 卡片操作
    pub const PRIMARY_ACTION: KeyBinding = KeyBinding::key(KeyCode::Enter);
    pub const DETAILS: KeyBinding = KeyBinding::key(KeyCode::Char('d'));
    pub const DETAILS_ALT: KeyBinding = KeyBinding::key(KeyCode::Char(' '));
    pub const CLOSE: KeyBinding = KeyBinding::key(KeyCode::Esc);
}
