//! 弹窗消息类型

/// 弹窗相关消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalMessage {
    /// 关闭最上层的弹窗
    Close,

    /// 在详情弹窗中执行卡片的主操作
    PrimaryAction,
}
