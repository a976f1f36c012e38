//! 西班牙语（阿根廷）翻译 (es-AR)

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
        app_name: "Catálogo de Tratamientos y Productos",
        close: "Cerrar",
        quit: "Salir",
        minutes: "min",
        units: "unidades",
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
            switch_panel: "Cambiar panel",
            select: "Elegir",
            book: "Reservar",
            buy: "Comprar",
            details: "Ver stock",
            search: "Buscar",
            clear: "Limpiar",
            close: "Cerrar",
        },
    },

    // ========================================================================
    // 面板文本
    // ========================================================================
    search: SearchTexts {
        title: "Buscar",
        placeholder: "Buscar...",
        subtitle: "Buscá tratamientos o productos por nombre.",
    },

    treatments: TreatmentsTexts {
        title: "Tratamientos",
        no_results: "Ningún tratamiento coincide con la búsqueda.",
        duration: "Duración",
        payment: "Pago",
        has_image: "[img]",
        book_action: "Reservar en Google Calendar",
    },

    products: ProductsTexts {
        title: "Productos",
        no_results: "Ningún producto coincide con la búsqueda.",
        stock: "Stock",
        buy_action: "Comprar",
        buy_unavailable: "No disponible online",
    },

    // ========================================================================
    // 弹窗文本
    // ========================================================================
    modal: ModalTexts {
        treatment_detail: TreatmentDetailTexts {
            title_prefix: "Reservar",
            supplies_label: "Insumos necesarios:",
            no_supplies: "No hay insumos específicos listados.",
        },
        product_detail: ProductDetailTexts {
            title_prefix: "Producto",
            stock_label: "Stock disponible:",
        },
        open_link_failed: "No se pudo abrir el enlace",
        close_hint: "Esc o Enter para cerrar",
    },

    // ========================================================================
    // 其他组件
    // ========================================================================
    status_bar: StatusBarTexts {
        opening: "Abriendo",
        purchase_disabled: "Este producto no tiene enlace de compra",
        nothing_selected: "Nada seleccionado",
        theme_changed: "Tema cambiado",
        language_changed: "Idioma",
    },

    help: HelpTexts {
        title: "Ayuda",
        global_shortcuts: "Atajos globales",
        list_shortcuts: "Atajos de lista",
        close_hint: "Esc para cerrar la ayuda",
        actions: HelpActionTexts {
            switch_panel: "Cambiar panel",
            focus_search: "Ir al buscador",
            clear_search: "Limpiar búsqueda",
            move_up_down: "Subir/Bajar",
            primary_action: "Reservar / Comprar",
            details: "Ver stock / insumos",
            close_details: "Cerrar detalle",
            toggle_theme: "Cambiar tema",
            toggle_language: "Cambiar idioma",
            quit: "Salir",
        },
    },
};
