//! 应用主消息枚举

use super::{ContentMessage, ModalMessage, SearchMessage};

/// 应用主消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 焦点移到下一个面板（Tab）
    FocusNext,

    /// 焦点移到上一个面板（Shift+Tab）
    FocusPrev,

    /// 直接聚焦搜索栏（/）
    FocusSearch,

    /// 搜索栏相关消息
    Search(SearchMessage),

    /// 列表面板相关消息
    Content(ContentMessage),

    /// 弹窗相关消息
    Modal(ModalMessage),

    /// 显示帮助
    ShowHelp,

    /// 切换深浅主题
    ToggleTheme,

    /// 切换界面语言
    ToggleLanguage,

    /// 清除状态消息
    ClearStatus,

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
