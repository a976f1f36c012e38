//! 命令行参数

use std::path::PathBuf;

use clap::Parser;

/// 命令行参数，优先级高于配置文件
#[derive(Debug, Clone, Parser)]
#[command(name = "salon-catalog")]
#[command(version, about = "Browse beauty treatments and retail products in the terminal")]
pub struct Cli {
    /// 目录数据文件（JSON）
    #[arg(long, value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// 配置文件，默认 `<config_dir>/salon-catalog/config.json`
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// 界面语言（en-US / es-AR），会写回配置
    #[arg(long, value_name = "CODE")]
    pub lang: Option<String>,

    /// 日志文件
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,
}
