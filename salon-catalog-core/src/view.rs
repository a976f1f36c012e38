//! Pure projection of catalog + state into what the screen shows.
//!
//! [`project`] depends only on its arguments, so two equal inputs always give
//! two equal [`CatalogView`]s. Front ends draw the view; they never read the
//! records directly.

use crate::format::PriceFormat;
use crate::links::{calendar_link, purchase_link, BookingTemplate};
use crate::loader::Catalog;
use crate::state::CatalogState;
use crate::types::{ProductRecord, TreatmentRecord};

/// Settings that shape the projection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewOptions {
    pub price: PriceFormat,
    pub booking: BookingTemplate,
}

/// What a card's primary button does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrimaryAction {
    /// Open this URI in the system browser.
    OpenLink(String),
    /// Button is shown but inert.
    Disabled,
}

impl PrimaryAction {
    pub fn is_enabled(&self) -> bool {
        matches!(self, Self::OpenLink(_))
    }

    pub fn link(&self) -> Option<&str> {
        match self {
            Self::OpenLink(uri) => Some(uri),
            Self::Disabled => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreatmentCard {
    pub id: String,
    pub name: String,
    /// Already formatted.
    pub price: String,
    pub duration_minutes: u32,
    pub payment_methods: Vec<String>,
    pub has_image: bool,
    /// Calendar booking link.
    pub action: PrimaryAction,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCard {
    pub id: String,
    pub name: String,
    pub price: String,
    pub stock: u32,
    /// Purchase link, disabled when the product has none.
    pub action: PrimaryAction,
}

/// Supplies section of the treatment detail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuppliesView {
    Listed(Vec<String>),
    /// Rendered as an explicit placeholder, never as an empty list.
    NoneListed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreatmentModal {
    pub name: String,
    pub supplies: SuppliesView,
    /// Same booking link as the card.
    pub action: PrimaryAction,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductModal {
    pub name: String,
    pub stock: u32,
    pub action: PrimaryAction,
}

/// Snapshot of everything visible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogView {
    pub query: String,
    pub treatments: Vec<TreatmentCard>,
    pub products: Vec<ProductCard>,
    pub treatment_modal: Option<TreatmentModal>,
    pub product_modal: Option<ProductModal>,
}

/// Build the view for the current state.
pub fn project(catalog: &Catalog, state: &CatalogState, options: &ViewOptions) -> CatalogView {
    CatalogView {
        query: state.query.clone(),
        treatments: state
            .visible_treatments(catalog)
            .into_iter()
            .map(|t| treatment_card(t, options))
            .collect(),
        products: state
            .visible_products(catalog)
            .into_iter()
            .map(|p| product_card(p, options))
            .collect(),
        treatment_modal: state
            .active_treatment
            .as_ref()
            .map(|t| treatment_modal(t, options)),
        product_modal: state.active_product.as_ref().map(product_modal),
    }
}

pub fn treatment_card(t: &TreatmentRecord, options: &ViewOptions) -> TreatmentCard {
    TreatmentCard {
        id: t.id.clone(),
        name: t.name.clone(),
        price: options.price.format(t.price),
        duration_minutes: t.duration_minutes,
        payment_methods: t.payment_methods.clone(),
        has_image: t.image.is_some(),
        action: booking_action(t, options),
    }
}

pub fn product_card(p: &ProductRecord, options: &ViewOptions) -> ProductCard {
    ProductCard {
        id: p.id.clone(),
        name: p.name.clone(),
        price: options.price.format(p.price),
        stock: p.stock,
        action: purchase_action(p),
    }
}

fn booking_action(t: &TreatmentRecord, options: &ViewOptions) -> PrimaryAction {
    PrimaryAction::OpenLink(calendar_link(t, &options.booking))
}

fn purchase_action(p: &ProductRecord) -> PrimaryAction {
    purchase_link(p).map_or(PrimaryAction::Disabled, |link| {
        PrimaryAction::OpenLink(link.to_owned())
    })
}

pub fn treatment_modal(t: &TreatmentRecord, options: &ViewOptions) -> TreatmentModal {
    TreatmentModal {
        name: t.name.clone(),
        supplies: if t.supplies.is_empty() {
            SuppliesView::NoneListed
        } else {
            SuppliesView::Listed(t.supplies.clone())
        },
        action: booking_action(t, options),
    }
}

pub fn product_modal(p: &ProductRecord) -> ProductModal {
    ProductModal {
        name: p.name.clone(),
        stock: p.stock,
        action: purchase_action(p),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::CatalogKind;

    fn catalog() -> Catalog {
        Catalog::from_json_str(
            r#"{
                "tratamientos": [
                    { "id": 1, "nombre": "Facial Cleanse", "precio": 12500, "duracionMinutos": 60,
                      "formasDePago": ["Efectivo", "Tarjeta"], "insumos": ["Gel"], "imagen": "/img/a.jpg" },
                    { "id": 2, "nombre": "facial Peel", "precio": 9000, "duracionMinutos": 45,
                      "formasDePago": ["Efectivo"], "insumos": [] },
                    { "id": 3, "nombre": "Manicure", "precio": 4000, "duracionMinutos": 30 }
                ],
                "productos": [
                    { "id": 1, "nombre": "Facial Cream", "precio": 7000, "stock": 5,
                      "urlML": "https://shop.example.com/cream" },
                    { "id": 2, "nombre": "Sérum", "precio": 15000, "stock": 0 }
                ]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_cards_follow_filter() {
        let catalog = catalog();
        let state = CatalogState::new().with_query("facial");
        let view = project(&catalog, &state, &ViewOptions::default());

        let names: Vec<_> = view.treatments.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Facial Cleanse", "facial Peel"]);
        assert_eq!(view.products.len(), 1);
        assert_eq!(view.query, "facial");
    }

    #[test]
    fn test_treatment_card_fields() {
        let catalog = catalog();
        let view = project(&catalog, &CatalogState::new(), &ViewOptions::default());
        let card = &view.treatments[0];
        assert_eq!(card.price, "$ 12.500");
        assert_eq!(card.duration_minutes, 60);
        assert_eq!(card.payment_methods, vec!["Efectivo", "Tarjeta"]);
        assert!(card.has_image);
        assert!(card
            .action
            .link()
            .is_some_and(|l| l.contains("Appointment%3A%20Facial%20Cleanse")));
        assert!(!view.treatments[2].has_image);
    }

    #[test]
    fn test_out_of_stock_product_without_link() {
        let catalog = catalog();
        let serum = catalog.products[1].clone();
        let state = CatalogState::new().select_product(serum);
        let view = project(&catalog, &state, &ViewOptions::default());

        let card = view.products.iter().find(|c| c.id == "2").unwrap();
        assert_eq!(card.action, PrimaryAction::Disabled);
        assert!(!card.action.is_enabled());
        assert_eq!(card.stock, 0);

        let modal = view.product_modal.unwrap();
        assert_eq!(modal.name, "Sérum");
        assert_eq!(modal.stock, 0);
        assert_eq!(modal.action, PrimaryAction::Disabled);
    }

    #[test]
    fn test_product_with_link_is_enabled() {
        let catalog = catalog();
        let view = project(&catalog, &CatalogState::new(), &ViewOptions::default());
        assert_eq!(
            view.products[0].action,
            PrimaryAction::OpenLink("https://shop.example.com/cream".to_string())
        );
    }

    #[test]
    fn test_purchase_link_is_not_normalized() {
        let stored = "https://Shop.Example.com?q=crema facial";
        let catalog = Catalog::from_json_str(&format!(
            r#"{{ "productos": [
                {{ "id": 1, "nombre": "Crema", "precio": 10, "stock": 1, "urlML": "{stored}" }},
                {{ "id": 2, "nombre": "Jabón", "precio": 10, "stock": 1, "urlML": "/tienda/jabon" }}
            ] }}"#
        ))
        .unwrap();
        let state = CatalogState::new().select_product(catalog.products[0].clone());
        let view = project(&catalog, &state, &ViewOptions::default());

        assert_eq!(view.products[0].action.link(), Some(stored));
        assert_eq!(view.products[1].action.link(), Some("/tienda/jabon"));
        assert_eq!(view.product_modal.unwrap().action.link(), Some(stored));
    }

    #[test]
    fn test_modal_action_matches_card() {
        let catalog = catalog();
        let state = CatalogState::new()
            .select_treatment(catalog.treatments[0].clone())
            .select_product(catalog.products[0].clone());
        let view = project(&catalog, &state, &ViewOptions::default());

        assert_eq!(view.treatment_modal.unwrap().action, view.treatments[0].action);
        assert_eq!(view.product_modal.unwrap().action, view.products[0].action);
    }

    #[test]
    fn test_empty_supplies_placeholder() {
        let catalog = catalog();
        let peel = catalog.treatments[1].clone();
        let view = project(
            &catalog,
            &CatalogState::new().select_treatment(peel),
            &ViewOptions::default(),
        );
        assert_eq!(
            view.treatment_modal.unwrap().supplies,
            SuppliesView::NoneListed
        );
    }

    #[test]
    fn test_listed_supplies() {
        let catalog = catalog();
        let cleanse = catalog.treatments[0].clone();
        let modal = project(
            &catalog,
            &CatalogState::new().select_treatment(cleanse),
            &ViewOptions::default(),
        )
        .treatment_modal
        .unwrap();
        assert_eq!(modal.supplies, SuppliesView::Listed(vec!["Gel".to_string()]));
    }

    #[test]
    fn test_modals_follow_slots() {
        let catalog = catalog();
        let state = CatalogState::new()
            .select_treatment(catalog.treatments[0].clone())
            .select_product(catalog.products[0].clone());
        let view = project(&catalog, &state, &ViewOptions::default());
        assert!(view.treatment_modal.is_some());
        assert!(view.product_modal.is_some());

        let view = project(
            &catalog,
            &state.dismiss(CatalogKind::Treatment),
            &ViewOptions::default(),
        );
        assert!(view.treatment_modal.is_none());
        assert!(view.product_modal.is_some());
    }

    #[test]
    fn test_projection_is_deterministic() {
        let catalog = catalog();
        let state = CatalogState::new()
            .with_query("a")
            .select_treatment(catalog.treatments[2].clone());
        let options = ViewOptions::default();
        assert_eq!(
            project(&catalog, &state, &options),
            project(&catalog, &state.clone(), &options)
        );
    }
}
