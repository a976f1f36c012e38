//！┌─────────────────────────────────────────────────────────────────────────────┐
//！│                              主循环 (app.rs)                               │
//！│                                                                            │
//！│  ┌────────────────────────────── UI 层 ───────────────────────────────┐   │
//！│  │                                                                     │   │
//！│  │   ┌─────────┐          ┌───────────┐          ┌──────────┐         │   │
//！│  │   │  Event  │ ───────▶ │  Message  │ ───────▶ │  Update  │         │   │
//！│  │   │   层    │   翻译    │    层     │   消费    │    层    │         │   │
//！│  │   └─────────┘          │           │          └────┬─────┘         │   │
//！│  │        ▲               │ AppMessage│               │ 修改          │   │
//！│  │        │               │ ModalMsg  │               ▼               │   │
//！│  │   ┌─────────┐          │ ContentMsg│          ┌──────────┐         │   │
//！│  │   │  View   │          │ SearchMsg │   ┌───── │  Model   │         │   │
//！│  │   │   层    │          └───────────┘   │      │    层    │         │   │
//！│  │   └────┬────┘ ◀──────── 读取 ──────────┘      └────┬─────┘         │   │
//！│  │        │                                           │               │   │
//！│  └────────│───────────────────────────────────────────│───────────────┘   │
//！│           │                                           │ 调用              │
//！│           ▼                                           ▼                   │
//！│      ┌─────────┐                                ┌──────────┐              │
//！│      │  终端   │                                │ Backend  │              │
//！│      │ (Util)  │                                │    层    │              │
//！│      └─────────┘                                └────┬─────┘              │
//！│                                                      │                    │
//！│                                                      ▼                    │
//！│                                           ┌───────────────────┐           │
//！│                                           │  salon-catalog-   │           │
//！│                                           │      core         │           │
//！│                                           └───────────────────┘           │
//！└─────────────────────────────────────────────────────────────────────────────┘


//!
//! src/model/mod.rs
//! Model 层：应用状态定义
//!
//! Model 层是应用状态的 “唯一真相来源”。
//! 所有状态变更都通过 Update 层来触发。
//!
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // 主应用状态
//!         mod focus;          // 焦点状态（Search / Treatments / Products）
//!
//!         pub mod state;      // 列表光标与弹窗状态
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、主应用状态（App）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/model/app.rs 中定义：
//!
//!         pub struct App {
//!             pub should_quit: bool,              // 退出标志
//!             pub focus: FocusPanel,              // 当前焦点
//!             pub status_message: Option<String>, // 状态栏消息（可选）
//!
//!             pub catalog: Catalog,               // 目录（只读）
//!             pub state: CatalogState,            // 搜索词 + 两个详情槽
//!             pub options: ViewOptions,           // 价格格式、预约模板
//!
//!             pub treatments: ListCursor,         // 治疗项目列表光标
//!             pub products: ListCursor,           // 商品列表光标
//!             pub modal: ModalState,              // 帮助 / 错误弹窗
//!             ...
//!         }
//!
//!     CatalogState 来自 salon-catalog-core，其转换方法消耗旧值返回新值：
//!         app.state = std::mem::take(&mut app.state).with_query(q);
//!
//!     View 层不直接读取记录，而是通过 app.view() 拿到 CatalogView 投影。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、焦点管理（FocusPanel）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     Search → Treatments → Products → Search（Tab 前进，Shift+Tab 后退）
//!
//!     焦点在搜索栏时，可打印字符都写入搜索词；
//!     焦点在列表时，字符被解释为快捷键（j/k/d/q ...）。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 三、弹窗层级
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     从上到下：
//!         ModalState（帮助、错误）
//!         商品详情（state.active_product）
//!         治疗项目详情（state.active_treatment）
//!
//!     Esc 每次只关闭最上面的一层。
//!

mod app;
mod focus;
pub mod state;

pub use app::App;
pub use focus::FocusPanel;
pub use state::{ListCursor, Modal, ModalState};
