//! 英文翻译 (en-US)

use super::keys::{
    ActionTexts, CommonTexts, HelpActionTexts, HelpTexts, HintTexts, KeyNames, ModalTexts,
    ProductDetailTexts, ProductsTexts, SearchTexts, StatusBarTexts, Translations,
    TreatmentDetailTexts, TreatmentsTexts,
};

pub const TRANSLATIONS: Translations = Translations {
    // ========================================================================
    // 通用文本
    // ========================================================================
    common: CommonTexts {
        app_name: "Treatments & Products Catalog",
        close: "Close",
        quit: "Quit",
        minutes: "min",
        units: "units",
        error: "Error",
    },

    // ========================================================================
    // 键盘提示
    // ========================================================================
    hints: HintTexts {
        keys: KeyNames {
            enter: "Enter",
            esc: "Esc",
            tab: "Tab",
            arrows_ud: "↑↓",
            details: "d",
            slash: "/",
        },
        actions: ActionTexts {
            switch_panel: "Switch panel",
            select: "Select",
            book: "Book",
            buy: "Buy",
            details: "Details",
            search: "Search",
            clear: "Clear",
            close: "Close",
        },
    },

    // ========================================================================
    // 面板文本
    // ========================================================================
    search: SearchTexts {
        title: "Search",
        placeholder: "Search...",
        subtitle: "Find treatments or products by name.",
    },

    treatments: TreatmentsTexts {
        title: "Treatments",
        no_results: "No treatments match your search.",
        duration: "Duration",
        payment: "Payment",
        has_image: "[img]",
        book_action: "Book in Google Calendar",
    },

    products: ProductsTexts {
        title: "Products",
        no_results: "No products match your search.",
        stock: "Stock",
        buy_action: "Buy",
        buy_unavailable: "Not available online",
    },

    // ========================================================================
    // 弹窗文本
    // ========================================================================
    modal: ModalTexts {
        treatment_detail: TreatmentDetailTexts {
            title_prefix: "Book",
            supplies_label: "Required supplies:",
            no_supplies: "No specific supplies listed.",
        },
        product_detail: ProductDetailTexts {
            title_prefix: "Product",
            stock_label: "Available stock:",
        },
        open_link_failed: "Could not open the link",
        close_hint: "Press Esc or Enter to close",
    },

    // ========================================================================
    // 其他组件
    // ========================================================================
    status_bar: StatusBarTexts {
        opening: "Opening",
        purchase_disabled: "This product has no purchase link",
        nothing_selected: "Nothing selected",
        theme_changed: "Theme changed",
        language_changed: "Language",
    },

    help: HelpTexts {
        title: "Help",
        global_shortcuts: "Global shortcuts",
        list_shortcuts: "List shortcuts",
        close_hint: "Press Esc to close the help",
        actions: HelpActionTexts {
            switch_panel: "Switch panel",
            focus_search: "Focus search",
            clear_search: "Clear search",
            move_up_down: "Move Up/Down",
            primary_action: "Book / Buy",
            details: "Show details",
            close_details: "Close details",
            toggle_theme: "Toggle theme",
            toggle_language: "Toggle language",
            quit: "Quit",
        },
    },
};
