//! 外部链接打开器
//!
//! 预约链接与购买链接都交给系统默认浏览器处理。

use anyhow::{Context, Result};

/// 链接打开器 trait
pub trait LinkOpener {
    /// 在外部打开链接，不阻塞界面
    fn open(&self, url: &str) -> Result<()>;
}

/// 使用系统默认程序打开链接
#[derive(Debug, Default)]
pub struct SystemLinkOpener;

impl LinkOpener for SystemLinkOpener {
    fn open(&self, url: &str) -> Result<()> {
        tracing::info!("Opening external link: {url}");
        open::that_detached(url).with_context(|| format!("Failed to open {url}"))
    }
}

/// 只记录链接、不真正打开（测试用）
#[cfg(test)]
#[derive(Debug, Default, Clone)]
pub struct RecordingLinkOpener {
    pub opened: std::rc::Rc<std::cell::RefCell<Vec<String>>>,
    pub fail: bool,
}

#[cfg(test)]
impl LinkOpener for RecordingLinkOpener {
    fn open(&self, url: &str) -> Result<()> {
        if self.fail {
            anyhow::bail!("no browser available");
        }
        self.opened.borrow_mut().push(url.to_string());
        Ok(())
    }
}
