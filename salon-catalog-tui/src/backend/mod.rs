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
//!
//! src/backend/mod.rs
//! Backend 层：与外部世界打交道的服务
//!
//! 目录数据的解析与过滤都在 salon-catalog-core 中完成，
//! 这里只放 UI 需要但 core 不关心的副作用：配置文件读写、打开外部链接。
//!
//!
//! 有模块结构：
//!     src/backend/mod.rs
//!         mod config_service;             // 配置服务（JSON 文件）
//!         mod link_opener;                // 外部链接打开器（系统浏览器）
//!

mod config_service;
mod link_opener;

pub use config_service::{AppConfig, ConfigService, LocalConfigService, app_config_dir};
#[cfg(test)]
pub use config_service::InMemoryConfigService;
pub use link_opener::{LinkOpener, SystemLinkOpener};
#[cfg(test)]
pub use link_opener::RecordingLinkOpener;
