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
//! src/util/mod.rs
//! Util 层：基础设施和工具函数
//!
//! 与业务逻辑无关的基础设施代码：
//!     mod logging;        // 文件日志（tracing-subscriber）
//!     mod terminal;       // 终端初始化和恢复
//!
//!
//!     · Raw Mode（原始模式）
//!         - 关闭行缓冲：无需按 Enter，每个按键立即生效
//!         - 关闭字符回显
//!         - 捕获 Ctrl+C、箭头键等特殊键
//!
//!     · Alternate Screen（备用屏幕）
//!         - TUI 在备用屏幕运行，退出后恢复主屏幕内容
//!
//!     无论程序是正常退出、返回错误还是 panic，都必须恢复终端，
//!     否则终端会保持在原始模式。正常路径由 main.rs 调用 restore_terminal，
//!     panic 路径由 init_terminal 安装的 hook 处理。
//!
//!     日志不能写到 stdout/stderr（会弄乱界面），因此写入文件，
//!     默认位置 `<config_dir>/salon-catalog/salon-catalog.log`。
//!
//!     —— 去往 src/app.rs 主循环吧
//!

mod logging;
mod terminal;

pub use logging::init_logging;
pub use terminal::{init_terminal, restore_terminal, Term};
