use parking_lot::RwLock;

use crate::{
    models::catalog::Catalog,
    storage::{Storage, StorageError},
};

/// Keeps the catalog in process memory. Nothing survives a restart.
#[derive(Default)]
pub struct MemoryStorage {
    catalog: RwLock<Catalog>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn load(&self) -> Result<Catalog, StorageError> {
        Ok(self.catalog.read().clone())
    }

    fn save(&self, catalog: &Catalog) -> Result<(), StorageError> {
        *self.catalog.write() = catalog.clone();
        Ok(())
    }

    fn create_project_dir(&self, _name: &str) -> Result<bool, StorageError> {
        Ok(false)
    }

    fn remove_project_dir(&self, _name: &str) -> Result<(), StorageError> {
        Ok(())
    }
}
