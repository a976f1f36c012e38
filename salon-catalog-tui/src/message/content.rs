//! 列表面板消息
//!
//! 作用于当前获得焦点的列表（治疗项目或商品）

/// 列表面板消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentMessage {
    // ========== 列表导航 ==========
    /// 选择上一项
    SelectPrevious,
    /// 选择下一项
    SelectNext,
    /// 跳转到第一项
    SelectFirst,
    /// 跳转到最后一项
    SelectLast,

    // ========== 卡片操作 ==========
    /// 主操作：预约治疗项目 / 购买商品
    PrimaryAction,
    /// 打开详情弹窗
    ShowDetails,
}
