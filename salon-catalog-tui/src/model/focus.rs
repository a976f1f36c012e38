//! 焦点状态定义

use salon_catalog_core::CatalogKind;

/// 焦点面板枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusPanel {
    /// 顶部搜索栏
    #[default]
    Search,
    /// 治疗项目列表
    Treatments,
    /// 商品列表
    Products,
}

impl FocusPanel {
    /// 切换到下一个面板（Tab）
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            FocusPanel::Search => FocusPanel::Treatments,
            FocusPanel::Treatments => FocusPanel::Products,
            FocusPanel::Products => FocusPanel::Search,
        }
    }

    /// 切换到上一个面板（Shift+Tab）
    #[must_use]
    pub fn prev(self) -> Self {
        match self {
            FocusPanel::Search => FocusPanel::Products,
            FocusPanel::Treatments => FocusPanel::Search,
            FocusPanel::Products => FocusPanel::Treatments,
        }
    }

    /// 是否是搜索栏
    pub fn is_search(self) -> bool {
        matches!(self, FocusPanel::Search)
    }

    /// 当前焦点所在列表对应的记录类型
    pub fn kind(self) -> Option<CatalogKind> {
        match self {
            FocusPanel::Search => None,
            FocusPanel::Treatments => Some(CatalogKind::Treatment),
            FocusPanel::Products => Some(CatalogKind::Product),
        }
    }
}
