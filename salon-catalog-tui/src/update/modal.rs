//! 弹窗更新逻辑
//!
//! 弹窗从上到下依次是：帮助/错误、商品详情、治疗项目详情。
//! 消息只作用于最上面的一层。

use salon_catalog_core::CatalogKind;

use super::content::run_primary_action;
use crate::message::ModalMessage;
use crate::model::App;

/// 处理弹窗消息
pub fn update(app: &mut App, msg: ModalMessage) {
    match msg {
        ModalMessage::Close => close_topmost(app),
        ModalMessage::PrimaryAction => {
            if app.modal.is_open() {
                return;
            }
            let view = app.view();
            let target = match (view.product_modal, view.treatment_modal) {
                (Some(product), _) => Some((product.name, product.action)),
                (None, Some(treatment)) => Some((treatment.name, treatment.action)),
                (None, None) => None,
            };
            if target.is_some() {
                run_primary_action(app, target);
            }
        }
    }
}

/// 关闭最上层的弹窗
fn close_topmost(app: &mut App) {
    if app.modal.is_open() {
        app.modal.close();
    } else if app.state.is_active(CatalogKind::Product) {
        app.state = std::mem::take(&mut app.state).dismiss(CatalogKind::Product);
    } else if app.state.is_active(CatalogKind::Treatment) {
        app.state = std::mem::take(&mut app.state).dismiss(CatalogKind::Treatment);
    }
}
