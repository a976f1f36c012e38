//! Catalog record types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The two kinds of sellable items in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogKind {
    /// A bookable salon service.
    Treatment,
    /// A physical product for sale.
    Product,
}

impl fmt::Display for CatalogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Treatment => write!(f, "treatment"),
            Self::Product => write!(f, "product"),
        }
    }
}

/// Anything the filter engine can match against.
pub trait Named {
    /// Display name used for matching.
    fn name(&self) -> &str;
}

/// A bookable treatment.
#[derive(Debug, Clone, PartialEq)]
pub struct TreatmentRecord {
    /// Unique within the treatments collection.
    pub id: String,
    pub name: String,
    /// Non-negative amount, currency-agnostic.
    pub price: f64,
    /// Always positive.
    pub duration_minutes: u32,
    pub payment_methods: Vec<String>,
    /// May be empty.
    pub supplies: Vec<String>,
    /// Image reference, kept verbatim.
    pub image: Option<String>,
}

/// A product with a stored stock count.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRecord {
    /// Unique within the products collection.
    pub id: String,
    pub name: String,
    pub price: f64,
    pub stock: u32,
    /// Kept exactly as stored. `None` disables the purchase action.
    pub external_purchase_link: Option<String>,
}

impl Named for TreatmentRecord {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for ProductRecord {
    fn name(&self) -> &str {
        &self.name
    }
}
