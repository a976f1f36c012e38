//! Salon Catalog TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 配置与外部链接 (`backend/`)
//!
//!
//! main.rs
//! 程序入口
//!
//! 其执行：
//! fn `main()` {
//!
//!     Cli::parse()            // 命令行参数
//!     init_logging()          // 文件日志
//!     ConfigService::load()   // 配置文件，不存在时使用默认值
//!     Catalog::load()         // 目录数据，失败时直接退出（此时终端尚未进入原始模式）
//!     init_terminal()
//!     app::run()              // 运行 app.rs 主循环
//!     restore_terminal()      // 无论成功与否，都恢复终端
//!
//! }

mod app;
mod backend;
mod cli;
mod event;
pub mod i18n;
mod message;
mod model;
mod update;
mod util;
mod view;

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use salon_catalog_core::Catalog;

use backend::{ConfigService, LocalConfigService, SystemLinkOpener, app_config_dir};
use cli::Cli;
use i18n::Language;
use util::{init_logging, init_terminal, restore_terminal};

fn main() -> Result<(), anyhow::Error> {
    let cli = Cli::parse();

    // 1. 日志
    let log_path = cli
        .log_file
        .clone()
        .or_else(|| app_config_dir().map(|dir| dir.join("salon-catalog.log")));
    if let Some(path) = &log_path {
        // 日志不可用时继续运行
        if let Err(e) = init_logging(path) {
            eprintln!("warning: logging disabled: {e:#}");
        }
    }
    tracing::info!("Starting salon-catalog {}", env!("CARGO_PKG_VERSION"));

    // 2. 配置
    let config_service: Box<dyn ConfigService> = match &cli.config {
        Some(path) => Box::new(LocalConfigService::new(path)),
        None => Box::new(LocalConfigService::at_default_location()?),
    };
    let mut config = config_service.load()?;

    if let Some(code) = &cli.lang {
        if Language::from_code(code).is_none() {
            bail!("Unsupported language {code:?}, expected one of: en-US, es-AR");
        }
        config.language = code.clone();
    }
    let language = Language::from_code(&config.language).unwrap_or_else(|| {
        tracing::warn!("Unknown language {:?} in config, using en-US", config.language);
        Language::default()
    });
    i18n::set_language(language);
    view::theme::set_theme(config.theme);

    // 3. 目录
    let catalog_path: PathBuf = cli
        .catalog
        .clone()
        .or_else(|| config.resolved_catalog_path())
        .context("No catalog file given and no config directory available")?;
    let catalog = Catalog::load(&catalog_path).map_err(|e| {
        if e.is_expected() {
            tracing::warn!("Rejected catalog {}: {e}", catalog_path.display());
        } else {
            tracing::error!("Failed to load catalog {}: {e}", catalog_path.display());
        }
        anyhow::Error::new(e).context(format!("Cannot load catalog {}", catalog_path.display()))
    })?;

    // 4. 初始化终端
    let mut terminal = init_terminal()?;

    // 5. 创建应用实例
    let mut app = model::App::new(catalog, config, config_service, Box::new(SystemLinkOpener));

    // 6. 运行主循环
    let result = app::run(&mut terminal, &mut app);

    // 7. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    if let Err(e) = &result {
        tracing::error!("Exited with error: {e:#}");
    }
    result
}
