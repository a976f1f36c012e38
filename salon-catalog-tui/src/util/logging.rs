//! 日志初始化
//!
//! TUI 占用了终端，日志只能写入文件。
//! `log` 门面的记录（来自 salon-catalog-core）也经由 tracing-subscriber 输出。

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 日志级别环境变量，语法同 `RUST_LOG`
pub const LOG_ENV: &str = "SALON_CATALOG_LOG";

/// 初始化日志，追加写入 `path`
pub fn init_logging(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(true),
        )
        .with(filter)
        .try_init()
        .context("Logging was already initialized")?;

    Ok(())
}
