#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]
//! Integration tests: load a catalog file from disk and drive a browsing session
//! through search, details and dismissal.

use salon_catalog_core::{
    project, BookingTemplate, Catalog, CatalogError, CatalogKind, CatalogState, PrimaryAction,
    SuppliesView, ViewOptions,
};

// ===== Helpers =====

const DATA: &str = r#"{
    "tratamientos": [
        {
            "id": 1,
            "nombre": "Limpieza Facial Profunda",
            "precio": 12500,
            "duracionMinutos": 60,
            "formasDePago": ["Efectivo", "Transferencia", "Tarjeta"],
            "insumos": ["Gel limpiador", "Máscara de arcilla"],
            "imagen": "/img/limpieza.jpg"
        },
        {
            "id": 2,
            "nombre": "Depilación Láser",
            "precio": 20000,
            "duracionMinutos": 40,
            "formasDePago": ["Tarjeta"],
            "insumos": []
        },
        {
            "id": 3,
            "nombre": "Masaje Descontracturante",
            "precio": 15000,
            "duracionMinutos": 50,
            "formasDePago": ["Efectivo"]
        }
    ],
    "productos": [
        {
            "id": 1,
            "nombre": "Protector Solar FPS 50",
            "precio": 9500,
            "stock": 8,
            "urlML": "https://articulo.mercadolibre.com.ar/MLA-123"
        },
        {
            "id": 2,
            "nombre": "Sérum Facial",
            "precio": 15000,
            "stock": 0
        }
    ]
}"#;

fn write_catalog(content: &str) -> (tempfile::TempDir, std::path::PathBuf) {
    let tmp = tempfile::tempdir().expect("failed to create temp dir");
    let path = tmp.path().join("data.json");
    std::fs::write(&path, content).expect("failed to write catalog");
    (tmp, path)
}

fn spanish_options() -> ViewOptions {
    ViewOptions {
        booking: BookingTemplate::spanish().with_location("Tu Ubicación Estética"),
        ..ViewOptions::default()
    }
}

// ===== Tests =====

#[test]
fn test_load_from_disk() {
    let (_tmp, path) = write_catalog(DATA);
    let catalog = Catalog::load(&path).unwrap();
    assert_eq!(catalog.len(CatalogKind::Treatment), 3);
    assert_eq!(catalog.len(CatalogKind::Product), 2);
}

#[test]
fn test_missing_file_is_io_error() {
    let tmp = tempfile::tempdir().unwrap();
    let err = Catalog::load(tmp.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, CatalogError::Io(_)));
    assert!(!err.is_expected());
}

#[test]
fn test_invalid_json_is_parse_error() {
    let (_tmp, path) = write_catalog("{ \"tratamientos\": [ ");
    let err = Catalog::load(&path).unwrap_err();
    assert!(matches!(err, CatalogError::Parse(_)));
    assert!(err.is_expected());
}

#[test]
fn test_shared_query_filters_both_lists() {
    let (_tmp, path) = write_catalog(DATA);
    let catalog = Catalog::load(&path).unwrap();
    let options = spanish_options();

    let view = project(&catalog, &CatalogState::new().with_query("FACIAL"), &options);
    let treatments: Vec<_> = view.treatments.iter().map(|c| c.name.as_str()).collect();
    let products: Vec<_> = view.products.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(treatments, vec!["Limpieza Facial Profunda"]);
    assert_eq!(products, vec!["Sérum Facial"]);

    let view = project(&catalog, &CatalogState::new().with_query("láser"), &options);
    assert_eq!(view.treatments.len(), 1);
    assert!(view.products.is_empty());

    let view = project(&catalog, &CatalogState::new(), &options);
    assert_eq!(view.treatments.len(), 3);
    assert_eq!(view.products.len(), 2);
}

#[test]
fn test_browsing_session() {
    let (_tmp, path) = write_catalog(DATA);
    let catalog = Catalog::load(&path).unwrap();
    let options = spanish_options();

    // open the laser treatment details: no supplies listed
    let state = CatalogState::new().with_query("depil");
    let laser = state.visible_treatments(&catalog)[0].clone();
    let state = state.select_treatment(laser);
    let view = project(&catalog, &state, &options);
    let modal = view.treatment_modal.clone().unwrap();
    assert_eq!(modal.name, "Depilación Láser");
    assert_eq!(modal.supplies, SuppliesView::NoneListed);

    // the booking link carries the Spanish title and the location
    let link = view.treatments[0].action.link().unwrap();
    assert!(link.contains("Turno%20Est%C3%A9tica%3A%20Depilaci%C3%B3n%20L%C3%A1ser"));
    assert!(link.contains("location=Tu%20Ubicaci%C3%B3n%20Est%C3%A9tica"));

    // clearing the search keeps the detail open
    let state = state.with_query("");
    let view = project(&catalog, &state, &options);
    assert!(view.treatment_modal.is_some());
    assert_eq!(view.treatments.len(), 3);

    // out-of-stock product: purchase disabled, stock 0 in its detail
    let serum = catalog.products[1].clone();
    let state = state.select_product(serum);
    let view = project(&catalog, &state, &options);
    assert_eq!(view.products[1].action, PrimaryAction::Disabled);
    assert_eq!(view.product_modal.as_ref().map(|m| m.stock), Some(0));

    // dismiss both, twice: second dismissal changes nothing
    let state = state
        .dismiss(CatalogKind::Product)
        .dismiss(CatalogKind::Treatment);
    assert_eq!(state.clone().dismiss(CatalogKind::Product), state);
    let view = project(&catalog, &state, &options);
    assert!(view.treatment_modal.is_none());
    assert!(view.product_modal.is_none());
}
