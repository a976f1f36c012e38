//! Salon Catalog Core Library
//!
//! Platform-independent model of the treatment and product catalog:
//! - Catalog source: loading and validating the two record collections
//! - Filter engine: case-insensitive name search shared by both collections
//! - Selection state: one optional detail slot per record kind
//! - View projection: cards and detail modals as plain data
//!
//! Nothing here touches a terminal or a browser. Front ends draw the
//! [`CatalogView`] and hand the links it carries to whatever opens URLs.

pub mod error;
pub mod filter;
pub mod format;
pub mod links;
pub mod loader;
pub mod state;
pub mod types;
pub mod view;

// Re-export common types
pub use error::{CatalogError, CatalogResult};
pub use filter::filter;
pub use format::PriceFormat;
pub use links::{calendar_link, purchase_link, BookingTemplate};
pub use loader::Catalog;
pub use state::CatalogState;
pub use types::{CatalogKind, Named, ProductRecord, TreatmentRecord};
pub use view::{
    project, CatalogView, PrimaryAction, ProductCard, ProductModal, SuppliesView, TreatmentCard,
    TreatmentModal, ViewOptions,
};
