//! 界面状态模块
//!
//! 定义列表光标与弹窗的状态数据结构

mod list;
mod modal;

pub use list::ListCursor;
pub use modal::{Modal, ModalState};
