//! The module contains the CSV-backed product store.
//!
//! The file carries a header row (`id,name,description,price,quantity`) and
//! is rewritten in full on every mutation.

use std::path::PathBuf;

use crate::store::{ProductStore, replace_file};
use crate::{EngineError, Product, ResultEngine};

#[derive(Clone, Debug)]
pub struct CsvStore {
    path: PathBuf,
}

impl CsvStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn write_all(&self, products: &[Product]) -> ResultEngine<()> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        for product in products {
            writer
                .serialize(product)
                .map_err(|err| EngineError::StorageWrite(err.to_string()))?;
        }
        let bytes = writer
            .into_inner()
            .map_err(|err| EngineError::StorageWrite(err.to_string()))?;

        replace_file(&self.path, &bytes)
    }
}

impl ProductStore for CsvStore {
    fn all(&self) -> ResultEngine<Vec<Product>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let mut reader = csv::Reader::from_path(&self.path)
            .map_err(|err| EngineError::StorageRead(err.to_string()))?;
        let mut products = Vec::new();
        for record in reader.deserialize() {
            let product: Product =
                record.map_err(|err| EngineError::StorageRead(err.to_string()))?;
            products.push(product);
        }

        Ok(products)
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
