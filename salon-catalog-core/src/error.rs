//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

/// Catalog layer error type
///
/// Only loading can fail. Filtering, selection and projection are total.
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CatalogError {
    /// The catalog file could not be read
    #[error("I/O error: {0}")]
    Io(String),

    /// The catalog file is not valid JSON or misses a required field
    #[error("Parse error: {0}")]
    Parse(String),

    /// A record violates a catalog invariant
    #[error("Validation error: {0}")]
    Validation(String),
}

impl CatalogError {
    /// Whether the failure is caused by the data handed in (as opposed to the environment).
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::Parse(_) | Self::Validation(_) => true,
            Self::Io(_) => false,
        }
    }
}

impl From<std::io::Error> for CatalogError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e.to_string())
    }
}

/// Catalog layer Result type alias
pub type CatalogResult<T> = std::result::Result<T, CatalogError>;
