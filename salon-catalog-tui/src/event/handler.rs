//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, ContentMessage, ModalMessage, SearchMessage};
use crate::model::App;

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app), // 键盘事件
        _ => AppMessage::Noop, // Resize 等事件下一轮自动重绘
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 只处理 Press 事件，忽略 Release 和 Repeat
    // 避免 Windows 终端上按键重复问题的发生
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    // 全局快捷键（无论焦点在哪里）
    if DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    // 帮助可以盖在详情弹窗之上，但不替换错误弹窗
    if DefaultKeymap::HELP.matches(&key) && !app.modal.is_open() {
        return AppMessage::ShowHelp;
    }

    // 如果有弹窗打开，优先处理弹窗输入
    if app.has_overlay() {
        return handle_overlay_keys(key, app);
    }

    if DefaultKeymap::TOGGLE_THEME.matches(&key) {
        return AppMessage::ToggleTheme;
    }
    if DefaultKeymap::TOGGLE_LANGUAGE.matches(&key) {
        return AppMessage::ToggleLanguage;
    }
    if DefaultKeymap::FOCUS_NEXT.matches(&key) {
        return AppMessage::FocusNext;
    }
    // 部分终端的 BackTab 不带 SHIFT
    if DefaultKeymap::FOCUS_PREV.matches(&key) || key.code == KeyCode::BackTab {
        return AppMessage::FocusPrev;
    }
    if DefaultKeymap::CLEAR_SEARCH.matches(&key) {
        return AppMessage::Search(SearchMessage::Clear);
    }

    // 根据焦点位置处理按键
    if app.focus.is_search() {
        handle_search_keys(key)
    } else {
        handle_list_keys(key)
    }
}

/// 处理搜索栏的按键
fn handle_search_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Backspace => AppMessage::Search(SearchMessage::Backspace),

        // Esc: 清空搜索词
        KeyCode::Esc => AppMessage::Search(SearchMessage::Clear),

        // Enter / ↓: 进入结果列表
        KeyCode::Enter | KeyCode::Down => AppMessage::FocusNext,

        // 字符输入（允许 Shift 输入大写字母）
        KeyCode::Char(ch)
            if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT =>
        {
            AppMessage::Search(SearchMessage::Input(ch))
        }

        _ => AppMessage::Noop,
    }
}

/// 处理列表面板的按键
fn handle_list_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }
    if DefaultKeymap::FOCUS_SEARCH.matches(&key) {
        return AppMessage::FocusSearch;
    }
    if DefaultKeymap::PRIMARY_ACTION.matches(&key) {
        return AppMessage::Content(ContentMessage::PrimaryAction);
    }
    if DefaultKeymap::DETAILS.matches(&key) || DefaultKeymap::DETAILS_ALT.matches(&key) {
        return AppMessage::Content(ContentMessage::ShowDetails);
    }

    match key.code {
        // ↑ 或 k: 上一项
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Content(ContentMessage::SelectPrevious),
        // ↓ 或 j: 下一项
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Content(ContentMessage::SelectNext),
        // Home / g: 跳到第一项
        KeyCode::Home | KeyCode::Char('g') => AppMessage::Content(ContentMessage::SelectFirst),
        // End / G: 跳到最后一项
        KeyCode::End | KeyCode::Char('G') => AppMessage::Content(ContentMessage::SelectLast),
        // ?: 帮助
        KeyCode::Char('?') => AppMessage::ShowHelp,
        // Esc: 清除状态栏消息
        KeyCode::Esc => AppMessage::ClearStatus,
        _ => AppMessage::Noop,
    }
}

/// 处理弹窗中的按键
fn handle_overlay_keys(key: KeyEvent, app: &App) -> AppMessage {
    // 帮助和错误弹窗只响应关闭按键
    if app.modal.is_open() {
        return match key.code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char('q') => {
                AppMessage::Modal(ModalMessage::Close)
            }
            _ => AppMessage::Noop,
        };
    }

    // 详情弹窗：Enter 执行主操作，Esc 关闭
    if DefaultKeymap::CLOSE.matches(&key) || DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Modal(ModalMessage::Close);
    }
    if DefaultKeymap::PRIMARY_ACTION.matches(&key) {
        return AppMessage::Modal(ModalMessage::PrimaryAction);
    }
    AppMessage::Noop
}
