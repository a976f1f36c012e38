//！┌─────────────────────────────────────────────────────────────────────────────┐
//！│                              主循环 (app.rs)                               │
//！│                                                                            │
//！│  ┌────────────────────────────── UI 层 ───────────────────────────────┐   │
//！│  │                                                                     │   │
//！│  │   ┌─────────┐          ┌───────────┐          ┌──────────┐         │   │
//！│  │   │  Event  │ ───────▶ │  Message  │ ───────▶ │  Update  │         │   │
//！│  │   │   层    │   翻译    │    层     │   消费    │    层    │         │   │
//！│  │   └─────────┘          │           │          └────┬─────┘         │   │
//！│  │        ▲               │ AppMessage│               │ 修改          │   │
//！│  │        │               │ ModalMsg  │               ▼               │   │
//！│  │   ┌─────────┐          │ ContentMsg│          ┌──────────┐         │   │
//！│  │   │  View   │          │ SearchMsg │   ┌───── │  Model   │         │   │
//！│  │   │   层    │          └───────────┘   │      │    层    │         │   │
//！│  │   └────┬────┘ ◀──────── 读取 ──────────┘      └────┬─────┘         │   │
//！│  │        │                                           │               │   │
//！│  └────────│───────────────────────────────────────────│───────────────┘   │
//！│           │                                           │ 调用              │
//！│           ▼                                           ▼                   │
//！│      ┌─────────┐                                ┌──────────┐              │
//！│      │  终端   │                                │ Backend  │              │
//！│      │ (Util)  │                                │    层    │              │
//！│      └─────────┘                                └────┬─────┘              │
//！│                                                      │                    │
//！│                                                      ▼                    │
//！│                                           ┌───────────────────┐           │
//！│                                           │  salon-catalog-   │           │
//！│                                           │      core         │           │
//！│                                           └───────────────────┘           │
//！└─────────────────────────────────────────────────────────────────────────────┘

//!
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Model 状态。
//! 是唯一可以修改 Model 的地方。
//!
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod search;             // 搜索栏子消息处理
//!         mod content;            // 列表面板子消息处理
//!         mod modal;              // 弹窗子消息处理
//!
//!         pub fn update(app: &mut App, msg: AppMessage) {...}
//!
//!
//!     使用 match 进行穷举，其中每个 Message 变体都对应一个状态变更。
//!     子消息委托给子模块处理。
//!
//!     CatalogState 的转换是 “消耗旧值、返回新值” 的形式：
//!         app.state = std::mem::take(&mut app.state).select_product(record);
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 主操作（content.rs / modal.rs）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     治疗项目的主操作是 “预约”：打开 Google Calendar 新建事件链接；
//!     商品的主操作是 “购买”：打开外部购买链接，没有链接时按钮禁用。
//!
//!     链接交给 Backend 层的 LinkOpener 打开，失败时弹出错误弹窗。
//!
//!
//! Update 完成后，控制权返回主循环（app.rs）。
//! 下一轮循环时，View 层会读取更新后的 Model 来重新渲染。
//!

mod content;
mod modal;
mod search;

use crate::i18n::{self, t, Language};
use crate::message::AppMessage;
use crate::model::{App, FocusPanel};
use crate::view::theme;

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::FocusNext => {
            if !app.has_overlay() {
                app.focus = app.focus.next();
            }
        }

        AppMessage::FocusPrev => {
            if !app.has_overlay() {
                app.focus = app.focus.prev();
            }
        }

        AppMessage::FocusSearch => {
            if !app.has_overlay() {
                app.focus = FocusPanel::Search;
            }
        }

        AppMessage::Search(search_msg) => {
            search::update(app, search_msg);
        }

        AppMessage::Content(content_msg) => {
            content::update(app, content_msg);
        }

        AppMessage::Modal(modal_msg) => {
            modal::update(app, modal_msg);
        }

        AppMessage::ShowHelp => {
            app.modal.show_help();
        }

        AppMessage::ToggleTheme => {
            app.config.theme = app.config.theme.toggled();
            theme::set_theme(app.config.theme);
            app.persist_config();
            app.set_status(t().status_bar.theme_changed);
        }

        AppMessage::ToggleLanguage => {
            let language = Language::from_code(&app.config.language)
                .unwrap_or_default()
                .next();
            i18n::set_language(language);
            app.config.language = language.code().to_string();
            app.refresh_options();
            app.persist_config();
            tracing::info!("Language switched to {}", language.code());
            app.set_status(format!(
                "{}: {}",
                t().status_bar.language_changed,
                language.display_name()
            ));
        }

        AppMessage::ClearStatus => {
            app.clear_status();
        }

        AppMessage::Noop => {}
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::message::{ContentMessage, ModalMessage, SearchMessage};

    #[test]
    fn test_quit() {
        let (mut app, _) = App::for_tests();
        update(&mut app, AppMessage::Quit);
        assert!(app.should_quit);
    }

    #[test]
    fn test_focus_cycle_blocked_by_overlay() {
        let (mut app, _) = App::for_tests();
        update(&mut app, AppMessage::FocusNext);
        assert_eq!(app.focus, FocusPanel::Treatments);

        update(&mut app, AppMessage::ShowHelp);
        update(&mut app, AppMessage::FocusNext);
        assert_eq!(app.focus, FocusPanel::Treatments);

        update(&mut app, AppMessage::Modal(ModalMessage::Close));
        update(&mut app, AppMessage::FocusPrev);
        assert_eq!(app.focus, FocusPanel::Search);
    }

    #[test]
    fn test_language_toggle_updates_booking_and_config() {
        let (mut app, _) = App::for_tests();
        update(&mut app, AppMessage::ToggleLanguage);
        assert_eq!(app.config.language, "es-AR");
        assert_eq!(app.options.booking.title_prefix, "Turno Estética");

        update(&mut app, AppMessage::ToggleLanguage);
        assert_eq!(app.config.language, "en-US");
        assert_eq!(app.options.booking.title_prefix, "Appointment");
    }

    #[test]
    fn test_theme_toggle_updates_config() {
        let (mut app, _) = App::for_tests();
        let before = app.config.theme;
        update(&mut app, AppMessage::ToggleTheme);
        assert_eq!(app.config.theme, before.toggled());
        assert!(app.status_message.is_some());

        update(&mut app, AppMessage::ClearStatus);
        assert!(app.status_message.is_none());
    }

    #[test]
    fn test_browsing_session() {
        let (mut app, opener) = App::for_tests();
        for ch in "crema".chars() {
            update(&mut app, AppMessage::Search(SearchMessage::Input(ch)));
        }
        update(&mut app, AppMessage::FocusNext);
        update(&mut app, AppMessage::FocusNext);
        assert_eq!(app.focus, FocusPanel::Products);

        update(&mut app, AppMessage::Content(ContentMessage::ShowDetails));
        let view = app.view();
        assert!(view.treatments.is_empty());
        assert_eq!(view.products.len(), 1);
        assert_eq!(view.product_modal.as_ref().unwrap().name, "Crema Corporal");

        update(&mut app, AppMessage::Modal(ModalMessage::PrimaryAction));
        assert!(opener.opened.borrow().is_empty());

        update(&mut app, AppMessage::Modal(ModalMessage::Close));
        assert!(app.view().product_modal.is_none());
    }
}
