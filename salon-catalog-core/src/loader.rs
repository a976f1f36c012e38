//! Catalog source: reads the two record collections from a JSON document.
//!
//! Both the Spanish field names of the published data file (`tratamientos`,
//! `nombre`, `urlML`, ...) and English camelCase names are accepted. Optional
//! fields are lenient: anything malformed is dropped with a warning instead of
//! failing the whole load.

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use crate::error::{CatalogError, CatalogResult};
use crate::types::{CatalogKind, ProductRecord, TreatmentRecord};

/// The immutable, pre-loaded catalog.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    pub treatments: Vec<TreatmentRecord>,
    pub products: Vec<ProductRecord>,
}

impl Catalog {
    /// Build a catalog from already validated records.
    pub fn new(treatments: Vec<TreatmentRecord>, products: Vec<ProductRecord>) -> CatalogResult<Self> {
        let catalog = Self {
            treatments,
            products,
        };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Read and parse a catalog file.
    pub fn load(path: impl AsRef<Path>) -> CatalogResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| CatalogError::Io(format!("{}: {e}", path.display())))?;
        let catalog = Self::from_json_str(&content)?;
        log::info!(
            "Loaded catalog from {}: {} treatments, {} products",
            path.display(),
            catalog.treatments.len(),
            catalog.products.len()
        );
        Ok(catalog)
    }

    /// Parse a catalog from a JSON document.
    pub fn from_json_str(json: &str) -> CatalogResult<Self> {
        let raw: RawCatalog = serde_json::from_str(json)?;
        let treatments = raw.treatments.into_iter().map(RawTreatment::into_record).collect();
        let products = raw.products.into_iter().map(RawProduct::into_record).collect();
        Self::new(treatments, products)
    }

    /// Number of records of one kind.
    pub fn len(&self, kind: CatalogKind) -> usize {
        match kind {
            CatalogKind::Treatment => self.treatments.len(),
            CatalogKind::Product => self.products.len(),
        }
    }

    /// Whether both collections are empty.
    pub fn is_empty(&self) -> bool {
        self.treatments.is_empty() && self.products.is_empty()
    }

    fn validate(&self) -> CatalogResult<()> {
        let mut seen = HashSet::new();
        for t in &self.treatments {
            check_common(CatalogKind::Treatment, &t.id, &t.name, t.price)?;
            if t.duration_minutes == 0 {
                return Err(CatalogError::Validation(format!(
                    "treatment {}: duration must be positive",
                    t.id
                )));
            }
            if !seen.insert(t.id.as_str()) {
                return Err(duplicate(CatalogKind::Treatment, &t.id));
            }
        }

        // ids only need to be unique within their own collection
        seen.clear();
        for p in &self.products {
            check_common(CatalogKind::Product, &p.id, &p.name, p.price)?;
            if !seen.insert(p.id.as_str()) {
                return Err(duplicate(CatalogKind::Product, &p.id));
            }
        }
        Ok(())
    }
}

fn check_common(kind: CatalogKind, id: &str, name: &str, price: f64) -> CatalogResult<()> {
    if name.trim().is_empty() {
        return Err(CatalogError::Validation(format!("{kind} {id}: name is empty")));
    }
    if !price.is_finite() || price < 0.0 {
        return Err(CatalogError::Validation(format!(
            "{kind} {id}: price must be a non-negative number, got {price}"
        )));
    }
    Ok(())
}

fn duplicate(kind: CatalogKind, id: &str) -> CatalogError {
    CatalogError::Validation(format!("duplicate {kind} id: {id}"))
}

// ===== Wire format =====

#[derive(Deserialize)]
struct RawCatalog {
    #[serde(default, alias = "tratamientos")]
    treatments: Vec<RawTreatment>,
    #[serde(default, alias = "productos")]
    products: Vec<RawProduct>,
}

/// Ids appear both as strings and as numbers in the wild.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(serde_json::Number),
}

impl RawId {
    fn into_string(self) -> String {
        match self {
            Self::Text(s) => s,
            Self::Number(n) => n.to_string(),
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawTreatment {
    id: RawId,
    #[serde(alias = "nombre")]
    name: String,
    #[serde(alias = "precio")]
    price: f64,
    #[serde(alias = "duracionMinutos")]
    duration_minutes: u32,
    #[serde(default, alias = "formasDePago")]
    payment_methods: Value,
    #[serde(default, alias = "insumos")]
    supplies: Value,
    #[serde(default, alias = "imagen")]
    image: Value,
}

impl RawTreatment {
    fn into_record(self) -> TreatmentRecord {
        let id = self.id.into_string();
        TreatmentRecord {
            payment_methods: string_list(&id, "paymentMethods", self.payment_methods),
            supplies: string_list(&id, "supplies", self.supplies),
            image: optional_text(&id, "image", self.image),
            id,
            name: self.name,
            price: self.price,
            duration_minutes: self.duration_minutes,
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawProduct {
    id: RawId,
    #[serde(alias = "nombre")]
    name: String,
    #[serde(alias = "precio")]
    price: f64,
    stock: u32,
    #[serde(default, alias = "urlML")]
    external_purchase_link: Value,
}

impl RawProduct {
    fn into_record(self) -> ProductRecord {
        let id = self.id.into_string();
        // opened as-is, relative links included
        let external_purchase_link =
            optional_text(&id, "externalPurchaseLink", self.external_purchase_link);
        ProductRecord {
            id,
            name: self.name,
            price: self.price,
            stock: self.stock,
            external_purchase_link,
        }
    }
}

/// Non-empty string, or `None`.
fn optional_text(id: &str, field: &str, value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) if s.trim().is_empty() => None,
        Value::String(s) => Some(s),
        other => {
            log::warn!("Record {id}: ignoring non-string {field}: {other}");
            None
        }
    }
}

/// Array of strings; non-string elements are dropped.
fn string_list(id: &str, field: &str, value: Value) -> Vec<String> {
    match value {
        Value::Null => Vec::new(),
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s),
                other => {
                    log::warn!("Record {id}: dropping non-string {field} entry: {other}");
                    None
                }
            })
            .collect(),
        other => {
            log::warn!("Record {id}: ignoring malformed {field}: {other}");
            Vec::new()
        }
    }
}
