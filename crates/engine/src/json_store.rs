//! The module contains the JSON-backed product store.
//!
//! The file holds an array of product objects with the same keys as the CSV
//! header, rewritten in full on every mutation.

use std::fs;
use std::path::PathBuf;

use crate::store::{ProductStore, replace_file};
use crate::{EngineError, Product, ResultEngine};

#[derive(Clone, Debug)]
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn write_all(&self, products: &[Product]) -> ResultEngine<()> {
        let bytes = serde_json::to_vec_pretty(products)
            .map_err(|err| EngineError::StorageWrite(err.to_string()))?;

        replace_file(&self.path, &bytes)
    }
}

impl ProductStore for JsonStore {
    fn all(&self) -> ResultEngine<Vec<Product>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let bytes =
            fs::read(&self.path).map_err(|err| EngineError::StorageRead(err.to_string()))?;
        serde_json::from_slice(&bytes).map_err(|err| EngineError::StorageRead(err.to_string()))
    }

    fn add(&self, product: &Product) -> ResultEngine<()> {
        let mut products = self.all()?;
        products.push(product.clone());
        tracing::debug!(id = product.id, path = %self.path.display(), "adding product");
        self.write_all(&products)
    }

    fn update(&self, product: &Product) -> ResultEngine<()> {
        let mut products = self.all()?;
        let position = products
            .iter()
            .position(|stored| stored.id == product.id)
            .ok_or(EngineError::ProductNotFound(product.id))?;

        products[position] = product.clone();
        tracing::debug!(id = product.id, path = %self.path.display(), "updating product");
        self.write_all(&products)
    }
}
