use std::path::PathBuf;

use thiserror::Error;

use crate::models::catalog::Catalog;

pub mod json;
pub mod memory;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Failed to load catalog from '{path}': {source}")]
    LoadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse JSON from '{path}': {source}")]
    ParseFailed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to save catalog to '{path}': {source}")]
    SaveFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize catalog to JSON: {source}")]
    SerializeFailed {
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to create directory '{path}': {source}")]
    CreateDirFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to remove directory '{path}': {source}")]
    RemoveDirFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("'{0}' is reserved by the catalog storage and cannot name a project")]
    ReservedName(String),
}

/// Where the catalog lives.
///
/// `save` replaces the whole catalog. Implementations must make the replace
/// atomic, so a concurrent `load` sees either the old or the new catalog.
pub trait Storage: Send + Sync {
    fn load(&self) -> Result<Catalog, StorageError>;
    fn save(&self, catalog: &Catalog) -> Result<(), StorageError>;

    /// Creates the directory owned by a project.
    ///
    /// Returns `true` only when this call created it. A directory left over
    /// from an earlier project of the same name (for instance after a delete
    /// whose cleanup failed) is reused as is and yields `false`, so callers
    /// must never roll it back.
    fn create_project_dir(&self, name: &str) -> Result<bool, StorageError>;

    /// Removes the directory owned by a project and everything in it.
    /// Succeeds if there is nothing to remove.
    fn remove_project_dir(&self, name: &str) -> Result<(), StorageError>;
}
