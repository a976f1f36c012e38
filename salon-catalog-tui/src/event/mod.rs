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
//! src/event/mod.rs
//! Event 层：事件处理
//!
//! 负责将键盘等输入事件转换为 Message。
//!
//!
//! 有模块结构：
//!     src/event/mod.rs
//!         mod handler;        // 事件处理器
//!         mod keymap;         // 快捷键映射
//!
//!         pub use handler::{handle_event, poll_event};
//!
//!
//!     其中有：
//!         · poll_event      事件轮询，受 src/app.rs 调用，最长阻塞 timeout
//!
//!         · handle_event    事件分发
//!
//!             Event::Key(KeyEvent)            // 键盘事件
//!             Event::Resize(width, height)    // 下一轮自动重绘
//!
//!             当接收到键盘事件时，转入 handle_key_event()
//!             判断顺序：
//!                 - Ctrl+C 总是退出
//!                 - 有弹窗（帮助/错误/详情）时，调用 handle_overlay_keys 处理
//!                 - 全局快捷键（Tab、Alt+t、Alt+l、Ctrl+U ...），就地处理
//!                 - 焦点位于搜索栏，调用 handle_search_keys 处理
//!                 - 焦点位于列表，调用 handle_list_keys 处理
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 搜索栏与快捷键的冲突
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     焦点在搜索栏时，可打印字符（包括 q、j、k、d）全部写入搜索词；
//!     焦点在列表时，这些字符才被解释为快捷键。
//!     Enter 或 ↓ 从搜索栏跳到治疗项目列表，/ 从列表跳回搜索栏。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 弹窗键盘处理
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!         帮助 / 错误弹窗：    Enter、Esc、q → ModalMessage::Close
//!         详情弹窗：           Enter → ModalMessage::PrimaryAction
//!                             Esc、q → ModalMessage::Close
//!
//!
//!     handler.rs 创建 AppMessage 并返回；在 src/app.rs 中：
//!         update::update(app, msg);
//!     交给 Update 层处理。
//!

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
