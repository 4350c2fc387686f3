//! The module contains the error the engine can throw.
//!
//! The errors are:
//!
//! - [`ProductNotFound`] thrown when an id does not match any stored product.
//! - [`InsufficientStock`] thrown when a withdrawal exceeds the available quantity.
//! - [`InvalidAmount`] thrown when an amount is rejected before touching stock.
//! - [`StorageRead`]/[`StorageWrite`] thrown when the backing file fails.
//!
//!  [`ProductNotFound`]: EngineError::ProductNotFound
//!  [`InsufficientStock`]: EngineError::InsufficientStock
//!  [`InvalidAmount`]: EngineError::InvalidAmount
//!  [`StorageRead`]: EngineError::StorageRead
//!  [`StorageWrite`]: EngineError::StorageWrite
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug, PartialEq)]
pub enum EngineError {
    #[error("product {0} not found")]
    ProductNotFound(i64),
    #[error("requested {requested} exceeds the available stock of {available}")]
    InsufficientStock { requested: i64, available: i64 },
    #[error("invalid amount: {0}")]
    InvalidAmount(String),
    #[error("unknown storage backend: {0}")]
    UnknownBackend(String),
    #[error("storage read failed: {0}")]
    StorageRead(String),
    #[error("storage write failed: {0}")]
    StorageWrite(String),
}

impl EngineError {
    /// Amount by which a withdrawal exceeded the available stock, when it did.
    pub fn excess(&self) -> Option<i64> {
        match self {
            Self::InsufficientStock {
                requested,
                available,
            } => Some(requested - available),
            _ => None,
        }
    }
}
