//!
//! src/view/mod.rs
//! View 层：UI 渲染
//!
//! 只读取 Model，不修改任何状态。
//! 目录内容统一通过 `app.view()` 得到的 CatalogView 投影来画，
//! 价格格式、预约链接等都已在投影中算好。
//!
//!
//! 有模块结构：
//!     src/view/mod.rs
//!         mod layout;         // 主布局：标题栏 / 搜索栏 / 两个列表 / 状态栏
//!         mod components;     // 搜索栏、状态栏、弹窗
//!         mod pages;          // 治疗项目列表、商品列表
//!         pub mod theme;      // 主题和样式
//!
//!
//!     ┌──────────────────────────── 标题栏 ─────────────────────────────┐
//!     │ ┌ Search ──────────────────────────────────────────────────────┐ │
//!     │ └──────────────────────────────────────────────────────────────┘ │
//!     │ ┌ Treatments ─────────────────────┐ ┌ Products ───────────────┐ │
//!     │ │                                 │ │                         │ │
//!     │ └─────────────────────────────────┘ └─────────────────────────┘ │
//!     └──────────────────────────── 状态栏 ─────────────────────────────┘
//!
//!     弹窗画在最上层，顺序：治疗项目详情 → 商品详情 → 帮助/错误。
//!

mod components;
mod layout;
mod pages;
pub mod theme;

pub use layout::render;
