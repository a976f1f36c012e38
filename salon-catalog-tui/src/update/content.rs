//! 列表面板更新逻辑
//!
//! 消息作用于当前焦点所在的列表；焦点在搜索栏时忽略。

use salon_catalog_core::view::{product_card, treatment_card};
use salon_catalog_core::{CatalogKind, PrimaryAction};

use crate::i18n::t;
use crate::message::ContentMessage;
use crate::model::App;

/// 处理列表面板消息
pub fn update(app: &mut App, msg: ContentMessage) {
    let Some(kind) = app.focus.kind() else {
        return;
    };

    match msg {
        // ========== 列表导航 ==========
        ContentMessage::SelectPrevious => app.cursor_mut(kind).select_previous(),
        ContentMessage::SelectNext => {
            let len = app.visible_len(kind);
            app.cursor_mut(kind).select_next(len);
        }
        ContentMessage::SelectFirst => app.cursor_mut(kind).select_first(),
        ContentMessage::SelectLast => {
            let len = app.visible_len(kind);
            app.cursor_mut(kind).select_last(len);
        }

        // ========== 卡片操作 ==========
        ContentMessage::PrimaryAction => match kind {
            CatalogKind::Treatment => {
                let target = app
                    .highlighted_treatment()
                    .map(|r| (r.name.clone(), treatment_card(r, &app.options).action));
                run_primary_action(app, target);
            }
            CatalogKind::Product => {
                let target = app
                    .highlighted_product()
                    .map(|r| (r.name.clone(), product_card(r, &app.options).action));
                run_primary_action(app, target);
            }
        },
        ContentMessage::ShowDetails => show_details(app, kind),
    }
}

/// 打开光标所指记录的详情
fn show_details(app: &mut App, kind: CatalogKind) {
    match kind {
        CatalogKind::Treatment => {
            if let Some(record) = app.highlighted_treatment().cloned() {
                tracing::debug!("Showing treatment {}", record.id);
                app.state = std::mem::take(&mut app.state).select_treatment(record);
                return;
            }
        }
        CatalogKind::Product => {
            if let Some(record) = app.highlighted_product().cloned() {
                tracing::debug!("Showing product {}", record.id);
                app.state = std::mem::take(&mut app.state).select_product(record);
                return;
            }
        }
    }
    app.set_status(t().status_bar.nothing_selected);
}

/// 执行卡片主操作：有链接就交给外部打开，否则提示不可用
///
/// 卡片与详情弹窗共用，`target` 为 (记录名, 主操作)。
pub(super) fn run_primary_action(app: &mut App, target: Option<(String, PrimaryAction)>) {
    let Some((name, action)) = target else {
        app.set_status(t().status_bar.nothing_selected);
        return;
    };

    match action {
        PrimaryAction::OpenLink(link) => match app.opener.open(&link) {
            Ok(()) => app.set_status(format!("{}: {name}", t().status_bar.opening)),
            Err(e) => {
                tracing::error!("Failed to open link for {name}: {e:#}");
                app.modal
                    .show_error(t().modal.open_link_failed, &format!("{e:#}"));
            }
        },
        PrimaryAction::Disabled => {
            tracing::debug!("Primary action disabled for {name}");
            app.set_status(t().status_bar.purchase_disabled);
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::model::{FocusPanel, Modal};

    #[test]
    fn test_ignored_while_search_focused() {
        let (mut app, opener) = App::for_tests();
        update(&mut app, ContentMessage::SelectNext);
        update(&mut app, ContentMessage::PrimaryAction);
        assert_eq!(app.treatments.selected, 0);
        assert!(opener.opened.borrow().is_empty());
    }

    #[test]
    fn test_cursor_moves_in_focused_list_only() {
        let (mut app, _) = App::for_tests();
        app.focus = FocusPanel::Products;
        update(&mut app, ContentMessage::SelectNext);
        update(&mut app, ContentMessage::SelectNext);
        assert_eq!(app.products.selected, 1);
        assert_eq!(app.treatments.selected, 0);

        update(&mut app, ContentMessage::SelectFirst);
        assert_eq!(app.products.selected, 0);
        update(&mut app, ContentMessage::SelectLast);
        assert_eq!(app.products.selected, 1);
        update(&mut app, ContentMessage::SelectPrevious);
        assert_eq!(app.products.selected, 0);
    }

    #[test]
    fn test_booking_opens_calendar_link() {
        let (mut app, opener) = App::for_tests();
        app.focus = FocusPanel::Treatments;
        update(&mut app, ContentMessage::PrimaryAction);

        let opened = opener.opened.borrow();
        assert_eq!(opened.len(), 1);
        assert!(opened[0].starts_with("https://calendar.google.com/calendar/r/eventedit?text="));
        assert!(opened[0].contains("Limpieza%20Facial"));
        assert!(app.status_message.is_some());
        assert!(!app.modal.is_open());
    }

    #[test]
    fn test_purchase_opens_product_link() {
        let (mut app, opener) = App::for_tests();
        app.focus = FocusPanel::Products;
        update(&mut app, ContentMessage::PrimaryAction);
        assert_eq!(
            opener.opened.borrow().as_slice(),
            ["https://articulo.mercadolibre.com.ar/MLA-1".to_string()]
        );
    }

    #[test]
    fn test_purchase_without_link_is_disabled() {
        let (mut app, opener) = App::for_tests();
        app.focus = FocusPanel::Products;
        update(&mut app, ContentMessage::SelectNext);
        update(&mut app, ContentMessage::PrimaryAction);
        assert!(opener.opened.borrow().is_empty());
        assert!(app.status_message.is_some());
        assert!(!app.modal.is_open());
    }

    #[test]
    fn test_open_failure_shows_error_modal() {
        let (mut app, mut opener) = App::for_tests();
        opener.fail = true;
        app.opener = Box::new(opener);
        app.focus = FocusPanel::Treatments;
        update(&mut app, ContentMessage::PrimaryAction);
        assert!(matches!(app.modal.active, Some(Modal::Error { .. })));
    }

    #[test]
    fn test_show_details_fills_matching_slot() {
        let (mut app, _) = App::for_tests();
        app.focus = FocusPanel::Products;
        update(&mut app, ContentMessage::ShowDetails);
        assert_eq!(app.state.active_product.as_ref().unwrap().name, "Sérum Facial");
        assert!(app.state.active_treatment.is_none());

        let modal = app.view().product_modal.unwrap();
        assert_eq!(modal.stock, 12);
    }

    #[test]
    fn test_show_details_with_empty_list() {
        let (mut app, _) = App::for_tests();
        app.state = std::mem::take(&mut app.state).with_query("no such thing");
        app.focus = FocusPanel::Treatments;
        update(&mut app, ContentMessage::ShowDetails);
        assert!(!app.state.has_details_open());
        assert!(app.status_message.is_some());
    }
}
