//! 搜索栏更新逻辑
//!
//! 同一个搜索词同时过滤治疗项目与商品两个列表。

use crate::message::SearchMessage;
use crate::model::App;

/// 处理搜索栏消息
pub fn update(app: &mut App, msg: SearchMessage) {
    let mut query = app.state.query.clone();
    match msg {
        SearchMessage::Input(ch) => query.push(ch),
        SearchMessage::Backspace => {
            query.pop();
        }
        SearchMessage::Clear => query.clear(),
    }

    if query == app.state.query {
        return;
    }

    app.state = std::mem::take(&mut app.state).with_query(query);
    app.clamp_cursors();
    tracing::debug!("Search query changed to {:?}", app.state.query);
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use salon_catalog_core::CatalogKind;

    fn type_text(app: &mut App, text: &str) {
        for ch in text.chars() {
            update(app, SearchMessage::Input(ch));
        }
    }

    #[test]
    fn test_query_filters_both_lists() {
        let (mut app, _) = App::for_tests();
        type_text(&mut app, "FACIAL");

        let view = app.view();
        assert_eq!(view.query, "FACIAL");
        assert_eq!(view.treatments.len(), 1);
        assert_eq!(view.treatments[0].name, "Limpieza Facial");
        assert_eq!(view.products.len(), 1);
        assert_eq!(view.products[0].name, "Sérum Facial");
    }

    #[test]
    fn test_backspace_and_clear_restore_lists() {
        let (mut app, _) = App::for_tests();
        type_text(&mut app, "zzz");
        assert_eq!(app.visible_len(CatalogKind::Treatment), 0);

        update(&mut app, SearchMessage::Backspace);
        assert_eq!(app.state.query, "zz");

        update(&mut app, SearchMessage::Clear);
        assert_eq!(app.state.query, "");
        assert_eq!(app.visible_len(CatalogKind::Treatment), 2);
        assert_eq!(app.visible_len(CatalogKind::Product), 2);
    }

    #[test]
    fn test_backspace_on_empty_query_is_noop() {
        let (mut app, _) = App::for_tests();
        update(&mut app, SearchMessage::Backspace);
        assert_eq!(app.state.query, "");
    }

    #[test]
    fn test_cursor_clamped_when_list_shrinks() {
        let (mut app, _) = App::for_tests();
        app.treatments.select_last(2);
        assert_eq!(app.treatments.selected, 1);

        type_text(&mut app, "limpieza");
        assert_eq!(app.treatments.selected, 0);
        assert_eq!(app.highlighted_treatment().unwrap().name, "Limpieza Facial");
    }

    #[test]
    fn test_query_keeps_open_details() {
        let (mut app, _) = App::for_tests();
        let record = app.catalog.treatments[1].clone();
        app.state = std::mem::take(&mut app.state).select_treatment(record);

        type_text(&mut app, "facial");
        assert_eq!(
            app.state.active_treatment.as_ref().map(|t| t.name.as_str()),
            Some("Masaje Relajante")
        );
    }
}
