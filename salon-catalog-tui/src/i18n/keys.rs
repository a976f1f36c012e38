//! 翻译键定义
//!
//! 定义所有翻译文本的结构体，提供编译期类型检查。
//!
//! ## 分类标准
//!
//! 1. **按 UI 组件位置分类**：文本归属于它出现的 UI 组件
//! 2. **弹窗内容归 `modal.*`**：所有弹窗（Modal）的内容都放在 modal 下
//! 3. **面板内容归对应面板**：如 `treatments.*`, `products.*`
//! 4. **跨组件复用归 `common.*`**：多处使用的通用词汇
//! 5. **键盘提示归 `hints.*`**：按键名称和操作提示

/// 所有翻译文本的根结构
pub struct Translations {
    /// 通用文本（跨多处复用）
    pub common: CommonTexts,
    /// 键盘提示（按键名称 + 动作词）
    pub hints: HintTexts,
    /// 搜索栏文本
    pub search: SearchTexts,
    /// 治疗项目面板文本
    pub treatments: TreatmentsTexts,
    /// 商品面板文本
    pub products: ProductsTexts,
    /// 弹窗文本（所有弹窗的内容）
    pub modal: ModalTexts,
    /// 状态栏文本
    pub status_bar: StatusBarTexts,
    /// 帮助页面文本
    pub help: HelpTexts,
}

// ============================================================================
// 通用文本
// ============================================================================

/// 通用文本（跨多处复用的词汇）
pub struct CommonTexts {
    pub app_name: &'static str,
    pub close: &'static str,
    pub quit: &'static str,
    pub minutes: &'static str,
    pub units: &'static str,
    pub error: &'static str,
}

// ============================================================================
// 键盘提示
// ============================================================================

/// 键盘提示文本
pub struct HintTexts {
    /// 按键名称
    pub keys: KeyNames,
    /// 动作描述
    pub actions: ActionTexts,
}

/// 按键名称
pub struct KeyNames {
    pub enter: &'static str,
    pub esc: &'static str,
    pub tab: &'static str,
    pub arrows_ud: &'static str, // "↑↓"
    pub details: &'static str,   // "d"
    pub slash: &'static str,     // "/"
}

/// 动作描述（用于组合提示）
pub struct ActionTexts {
    pub switch_panel: &'static str,
    pub select: &'static str,
    pub book: &'static str,
    pub buy: &'static str,
    pub details: &'static str,
    pub search: &'static str,
    pub clear: &'static str,
    pub close: &'static str,
}

// ============================================================================
// 面板文本
// ============================================================================

/// 搜索栏文本
pub struct SearchTexts {
    pub title: &'static str,
    pub placeholder: &'static str,
    pub subtitle: &'static str,
}

/// 治疗项目面板文本
pub struct TreatmentsTexts {
    pub title: &'static str,
    pub no_results: &'static str,
    pub duration: &'static str,
    pub payment: &'static str,
    pub has_image: &'static str,
    pub book_action: &'static str,
}

/// 商品面板文本
pub struct ProductsTexts {
    pub title: &'static str,
    pub no_results: &'static str,
    pub stock: &'static str,
    pub buy_action: &'static str,
    pub buy_unavailable: &'static str,
}

// ============================================================================
// 弹窗文本
// ============================================================================

/// 弹窗文本
pub struct ModalTexts {
    pub treatment_detail: TreatmentDetailTexts,
    pub product_detail: ProductDetailTexts,
    pub open_link_failed: &'static str,
    pub close_hint: &'static str,
}

/// 治疗项目详情弹窗
pub struct TreatmentDetailTexts {
    pub title_prefix: &'static str,
    pub supplies_label: &'static str,
    pub no_supplies: &'static str,
}

/// 商品详情弹窗
pub struct ProductDetailTexts {
    pub title_prefix: &'static str,
    pub stock_label: &'static str,
}

// ============================================================================
// 其他组件
// ============================================================================

/// 状态栏文本
pub struct StatusBarTexts {
    pub opening: &'static str,
    pub purchase_disabled: &'static str,
    pub nothing_selected: &'static str,
    pub theme_changed: &'static str,
    pub language_changed: &'static str,
}

/// 帮助页面文本
pub struct HelpTexts {
    pub title: &'static str,
    pub global_shortcuts: &'static str,
    pub list_shortcuts: &'static str,
    pub close_hint: &'static str,
    /// 快捷键动作描述
    pub actions: HelpActionTexts,
}

/// 帮助页面快捷键动作描述
pub struct HelpActionTexts {
    pub switch_panel: &'static str,
    pub focus_search: &'static str,
    pub clear_search: &'static str,
    pub move_up_down: &'static str,
    pub primary_action: &'static str,
    pub details: &'static str,
    pub close_details: &'static str,
    pub toggle_theme: &'static str,
    pub toggle_language: &'static str,
    pub quit: &'static str,
}
