//! Search and selection state.
//!
//! [`CatalogState`] is a plain value. Every transition consumes the current
//! snapshot and returns the next one, so the state machine can be driven and
//! asserted on without a renderer.

use crate::filter::filter;
use crate::loader::Catalog;
use crate::types::{CatalogKind, ProductRecord, TreatmentRecord};

/// The whole interactive state of a catalog session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogState {
    /// Current search text, applied to both collections.
    pub query: String,
    /// Treatment whose detail view is open.
    pub active_treatment: Option<TreatmentRecord>,
    /// Product whose detail view is open.
    pub active_product: Option<ProductRecord>,
}

impl CatalogState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the search text.
    #[must_use]
    pub fn with_query(self, query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..self
        }
    }

    /// Open the detail view of a treatment, replacing any open one.
    #[must_use]
    pub fn select_treatment(self, record: TreatmentRecord) -> Self {
        Self {
            active_treatment: Some(record),
            ..self
        }
    }

    /// Open the detail view of a product, replacing any open one.
    #[must_use]
    pub fn select_product(self, record: ProductRecord) -> Self {
        Self {
            active_product: Some(record),
            ..self
        }
    }

    /// Close the detail view of `kind`. No-op when nothing is open.
    #[must_use]
    pub fn dismiss(self, kind: CatalogKind) -> Self {
        match kind {
            CatalogKind::Treatment => Self {
                active_treatment: None,
                ..self
            },
            CatalogKind::Product => Self {
                active_product: None,
                ..self
            },
        }
    }

    /// Whether the detail view of `kind` is open.
    pub fn is_active(&self, kind: CatalogKind) -> bool {
        match kind {
            CatalogKind::Treatment => self.active_treatment.is_some(),
            CatalogKind::Product => self.active_product.is_some(),
        }
    }

    /// Whether any detail view is open.
    pub fn has_details_open(&self) -> bool {
        self.active_treatment.is_some() || self.active_product.is_some()
    }

    /// Treatments matching the current query.
    pub fn visible_treatments<'a>(&self, catalog: &'a Catalog) -> Vec<&'a TreatmentRecord> {
        filter(&catalog.treatments, &self.query)
    }

    /// Products matching the current query.
    pub fn visible_products<'a>(&self, catalog: &'a Catalog) -> Vec<&'a ProductRecord> {
        filter(&catalog.products, &self.query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn treatment(id: &str, name: &str) -> TreatmentRecord {
        TreatmentRecord {
            id: id.to_string(),
            name: name.to_string(),
            price: 1000.0,
            duration_minutes: 30,
            payment_methods: vec![],
            supplies: vec![],
            image: None,
        }
    }

    fn product(id: &str, name: &str) -> ProductRecord {
        ProductRecord {
            id: id.to_string(),
            name: name.to_string(),
            price: 500.0,
            stock: 2,
            external_purchase_link: None,
        }
    }

    #[test]
    fn test_new_state_is_empty() {
        let state = CatalogState::new();
        assert!(state.query.is_empty());
        assert!(!state.has_details_open());
    }

    #[test]
    fn test_select_replaces_previous() {
        let state = CatalogState::new()
            .select_treatment(treatment("1", "A"))
            .select_treatment(treatment("2", "B"));
        assert_eq!(state.active_treatment.map(|t| t.id), Some("2".to_string()));
    }

    #[test]
    fn test_slots_are_independent() {
        let state = CatalogState::new()
            .select_treatment(treatment("1", "A"))
            .select_product(product("1", "P"));
        assert!(state.is_active(CatalogKind::Treatment));
        assert!(state.is_active(CatalogKind::Product));

        let state = state.dismiss(CatalogKind::Product);
        assert!(state.is_active(CatalogKind::Treatment));
        assert!(!state.is_active(CatalogKind::Product));
    }

    #[test]
    fn test_dismiss_on_empty_slot_is_noop() {
        let before = CatalogState::new().with_query("x");
        let after = before.clone().dismiss(CatalogKind::Treatment);
        assert_eq!(before, after);
        let after = after.dismiss(CatalogKind::Product);
        assert_eq!(before, after);
    }

    #[test]
    fn test_query_does_not_touch_selection() {
        let state = CatalogState::new()
            .select_product(product("9", "Crema"))
            .with_query("zzz");
        assert_eq!(state.query, "zzz");
        assert!(state.is_active(CatalogKind::Product));
    }

    #[test]
    fn test_query_applies_to_both_collections() {
        let catalog = Catalog {
            treatments: vec![treatment("1", "Masaje Relax"), treatment("2", "Manicure")],
            products: vec![product("1", "Aceite de masaje"), product("2", "Lima")],
        };
        let state = CatalogState::new().with_query("MASAJE");
        let t: Vec<_> = state.visible_treatments(&catalog).iter().map(|t| t.id.as_str()).collect();
        let p: Vec<_> = state.visible_products(&catalog).iter().map(|p| p.id.as_str()).collect();
        assert_eq!(t, vec!["1"]);
        assert_eq!(p, vec!["1"]);
    }
}
