//! 配置服务

use std::path::PathBuf;

use anyhow::{Context, Result};
use salon_catalog_core::PriceFormat;
use serde::{Deserialize, Serialize};

use crate::view::theme::Theme;

/// 配置目录下的应用子目录名
pub const APP_DIR_NAME: &str = "salon-catalog";

/// 应用配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    /// 目录数据文件，未设置时使用 `<config_dir>/salon-catalog/data.json`
    pub catalog_path: Option<PathBuf>,
    pub theme: Theme,
    /// BCP 47 语言代码
    pub language: String,
    /// 价格显示格式
    pub price: PriceFormat,
    /// 预约链接中的地点，空串表示不填
    pub booking_location: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            theme: Theme::Dark,
            language: "en-US".to_string(),
            price: PriceFormat::default(),
            booking_location: String::new(),
        }
    }
}

impl AppConfig {
    /// 目录数据文件路径
    pub fn resolved_catalog_path(&self) -> Option<PathBuf> {
        self.catalog_path
            .clone()
            .or_else(|| app_config_dir().map(|dir| dir.join("data.json")))
    }
}

/// `<config_dir>/salon-catalog`
pub fn app_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME))
}

/// 配置服务 trait
pub trait ConfigService {
    /// 加载配置
    fn load(&self) -> Result<AppConfig>;

    /// 保存配置
    fn save(&self, config: &AppConfig) -> Result<()>;
}

/// 本地 JSON 文件配置服务
pub struct LocalConfigService {
    path: PathBuf,
}

impl LocalConfigService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// 使用默认位置 `<config_dir>/salon-catalog/config.json`
    pub fn at_default_location() -> Result<Self> {
        let dir = app_config_dir().context("Could not determine the user config directory")?;
        Ok(Self::new(dir.join("config.json")))
    }
}

impl ConfigService for LocalConfigService {
    fn load(&self) -> Result<AppConfig> {
        if !self.path.exists() {
            tracing::info!("No config file at {}, using defaults", self.path.display());
            return Ok(AppConfig::default());
        }
        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("Invalid config file {}", self.path.display()))?;
        Ok(config)
    }

    fn save(&self, config: &AppConfig) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let content = serde_json::to_string_pretty(config)?;
        std::fs::write(&self.path, content)
            .with_context(|| format!("Failed to write {}", self.path.display()))?;
        tracing::debug!("Config saved to {}", self.path.display());
        Ok(())
    }
}

/// 不落盘的配置服务（测试用）
#[cfg(test)]
#[derive(Default)]
pub struct InMemoryConfigService {
    saved: std::cell::RefCell<Option<AppConfig>>,
}

#[cfg(test)]
impl InMemoryConfigService {
    pub fn saved(&self) -> Option<AppConfig> {
        self.saved.borrow().clone()
    }
}

#[cfg(test)]
impl ConfigService for InMemoryConfigService {
    fn load(&self) -> Result<AppConfig> {
        Ok(self.saved().unwrap_or_default())
    }

    fn save(&self, config: &AppConfig) -> Result<()> {
        *self.saved.borrow_mut() = Some(config.clone());
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let service = LocalConfigService::new(tmp.path().join("config.json"));
        assert_eq!(service.load().unwrap(), AppConfig::default());
    }

    #[test]
    fn test_save_then_load() {
        let tmp = tempfile::tempdir().unwrap();
        let service = LocalConfigService::new(tmp.path().join("nested").join("config.json"));
        let config = AppConfig {
            catalog_path: Some(PathBuf::from("/srv/data.json")),
            theme: Theme::Light,
            language: "es-AR".to_string(),
            booking_location: "Av. Corrientes 1234".to_string(),
            ..AppConfig::default()
        };
        service.save(&config).unwrap();
        assert_eq!(service.load().unwrap(), config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.json");
        std::fs::write(&path, r#"{ "language": "es-AR", "price": { "fractionDigits": 2 } }"#).unwrap();
        let config = LocalConfigService::new(&path).load().unwrap();
        assert_eq!(config.language, "es-AR");
        assert_eq!(config.theme, Theme::Dark);
        assert_eq!(config.price.fraction_digits, 2);
        assert_eq!(config.price.symbol, "$");
    }

    #[test]
    fn test_invalid_file_is_error() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.json");
        std::fs::write(&path, "not json").unwrap();
        assert!(LocalConfigService::new(&path).load().is_err());
    }

    #[test]
    fn test_explicit_catalog_path_wins() {
        let config = AppConfig {
            catalog_path: Some(PathBuf::from("/tmp/x.json")),
            ..AppConfig::default()
        };
        assert_eq!(config.resolved_catalog_path(), Some(PathBuf::from("/tmp/x.json")));
    }
}
