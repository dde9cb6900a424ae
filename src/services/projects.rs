use parking_lot::RwLock;
use thiserror::Error;

use crate::{
    clock::{Clock, SystemClock},
    models::project::{InvalidNameReason, Project, validate_name},
    storage::{Storage, StorageError},
};

#[derive(Debug, Error)]
pub enum ProjectError {
    #[error("Project '{0}' not found")]
    NotFound(String),

    #[error("Project with name '{0}' already exists")]
    AlreadyExists(String),

    #[error("Invalid project name '{name}': {reason}")]
    InvalidName {
        name: String,
        reason: InvalidNameReason,
    },

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Sole owner of the project catalog.
///
/// Mutations hold the write lock across the whole load, modify, save cycle.
/// Reads share the read lock. Every returned `Project` is a copy.
pub struct ProjectRepository {
    storage: Box<dyn Storage>,
    clock: Box<dyn Clock>,
    lock: RwLock<()>,
}

impl ProjectRepository {
    pub fn new(storage: impl Storage + 'static) -> Self {
        Self::with_clock(storage, SystemClock)
    }

    pub fn with_clock(storage: impl Storage + 'static, clock: impl Clock + 'static) -> Self {
        Self {
            storage: Box::new(storage),
            clock: Box::new(clock),
            lock: RwLock::new(()),
        }
    }

    /// Stores a new project and returns the stored copy.
    ///
    /// Timestamps supplied by the caller are ignored.
    pub fn save(&self, project: Project) -> Result<Project, ProjectError> {
        if let Err(reason) = validate_name(&project.name) {
            return Err(ProjectError::InvalidName {
                name: project.name,
                reason,
            });
        }

        let _guard = self.lock.write();

        let mut catalog = self.storage.load()?;
        if catalog.contains(&project.name) {
            return Err(ProjectError::AlreadyExists(project.name));
        }

        // The directory goes first: if it cannot be created the catalog is untouched
        let created_dir = self.storage.create_project_dir(&project.name)?;

        let project = project.stamped(self.clock.now());
        catalog.add_project(project.clone());

        if let Err(e) = self.storage.save(&catalog) {
            // Only undo what this call did; a pre-existing directory keeps its files
            if created_dir {
                let _ = self.storage.remove_project_dir(&project.name);
            }
            return Err(e.into());
        }

        Ok(project)
    }

    pub fn get(&self, name: &str) -> Result<Project, ProjectError> {
        let _guard = self.lock.read();

        self.storage
            .load()?
            .get_project(name)
            .cloned()
            .ok_or_else(|| ProjectError::NotFound(name.to_string()))
    }

    /// Every project, oldest first
    pub fn all(&self) -> Result<Vec<Project>, ProjectError> {
        let _guard = self.lock.read();

        Ok(self.storage.load()?.into_sorted_by_creation())
    }

    pub fn exists(&self, name: &str) -> Result<bool, ProjectError> {
        let _guard = self.lock.read();

        Ok(self.storage.load()?.contains(name))
    }

    /// Removes a project and returns it.
    ///
    /// The catalog is saved before the project directory is removed. If the
    /// directory removal fails the error is returned, but the project is gone.
    pub fn delete(&self, name: &str) -> Result<Project, ProjectError> {
        let _guard = self.lock.write();

        let mut catalog = self.storage.load()?;
        let project = catalog
            .remove_project(name)
            .ok_or_else(|| ProjectError::NotFound(name.to_string()))?;

        self.storage.save(&catalog)?;
        self.storage.remove_project_dir(name)?;

        Ok(project)
    }
}
