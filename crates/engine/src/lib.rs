pub use csv_store::CsvStore;
pub use error::EngineError;
pub use json_store::JsonStore;
pub use product::Product;
pub use store::{ProductStore, StorageBackend};

use std::path::PathBuf;

mod csv_store;
mod error;
mod json_store;
mod product;
mod store;

type ResultEngine<T> = Result<T, EngineError>;

/// The product collection behind a storage backend chosen at startup.
///
/// `Inventory` is a thin façade: the verbs delegate to the configured
/// [`ProductStore`] and every call works on a fresh snapshot of the
/// collection, never on a shared in-memory list.
pub struct Inventory {
    store: Box<dyn ProductStore>,
}

impl Inventory {
    /// Return a builder for `Inventory`. Help to build the struct.
    pub fn builder() -> InventoryBuilder {
        InventoryBuilder::default()
    }

    /// Return every stored product.
    pub fn all(&self) -> ResultEngine<Vec<Product>> {
        self.store.all()
    }

    /// Append a product to the collection.
    pub fn add(&self, product: &Product) -> ResultEngine<()> {
        self.store.add(product)
    }

    /// Persist a mutated product over its stored record.
    pub fn update(&self, product: &Product) -> ResultEngine<()> {
        self.store.update(product)
    }

    /// Return the first product with the given id.
    ///
    /// Ids derive from creation time and are not guaranteed unique, so under
    /// duplicates the first match wins.
    pub fn find(&self, id: i64) -> ResultEngine<Product> {
        self.store
            .all()?
            .into_iter()
            .find(|product| product.id == id)
            .ok_or(EngineError::ProductNotFound(id))
    }
}

#[derive(Default)]
pub struct InventoryBuilder {
    store: Option<Box<dyn ProductStore>>,
}

impl InventoryBuilder {
    pub fn csv(self, path: impl Into<PathBuf>) -> Self {
        Self {
            store: Some(Box::new(CsvStore::new(path))),
        }
    }

    pub fn json(self, path: impl Into<PathBuf>) -> Self {
        Self {
            store: Some(Box::new(JsonStore::new(path))),
        }
    }

    pub fn backend(self, backend: StorageBackend, path: impl Into<PathBuf>) -> Self {
        match backend {
            StorageBackend::Csv => self.csv(path),
            StorageBackend::Json => self.json(path),
        }
    }

    pub fn store(self, store: Box<dyn ProductStore>) -> Self {
        Self { store: Some(store) }
    }

    pub fn build(self) -> ResultEngine<Inventory> {
        let store = self
            .store
            .ok_or_else(|| EngineError::StorageRead(String::from("no store configured")))?;

        Ok(Inventory { store })
    }
}
