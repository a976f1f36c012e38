//! 弹窗/对话框状态
//!
//! 只管理与目录无关的弹窗（帮助、错误）。
//! 治疗项目与商品的详情弹窗由 `CatalogState` 的两个选择槽驱动。

/// 弹窗类型
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    /// 帮助弹窗
    Help,
    /// 错误提示弹窗
    Error { title: String, message: String },
}

/// 弹窗状态
#[derive(Debug, Default)]
pub struct ModalState {
    /// 当前活动的弹窗
    pub active: Option<Modal>,
}

impl ModalState {
    /// 创建新的弹窗状态
    pub fn new() -> Self {
        Self::default()
    }

    /// 显示弹窗
    pub fn show(&mut self, modal: Modal) {
        self.active = Some(modal);
    }

    /// 关闭弹窗
    pub fn close(&mut self) {
        self.active = None;
    }

    /// 是否有活动弹窗
    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    /// 显示错误弹窗
    pub fn show_error(&mut self, title: &str, message: &str) {
        self.show(Modal::Error {
            title: title.to_string(),
            message: message.to_string(),
        });
    }

    /// 显示帮助弹窗
    pub fn show_help(&mut self) {
        self.show(Modal::Help);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_and_close() {
        let mut modal = ModalState::new();
        assert!(!modal.is_open());

        modal.show_help();
        assert_eq!(modal.active, Some(Modal::Help));

        modal.show_error("Error", "boom");
        assert!(matches!(modal.active, Some(Modal::Error { ref message, .. }) if message == "boom"));

        modal.close();
        assert!(!modal.is_open());
    }
}
