//! Builder for creating and configuring Planner instances.

use std::path::{Path, PathBuf};

use tokio::task;

use super::Planner;
use crate::{
    error::{PlannerError, Result},
    store::SqliteStore,
};

/// Builder for creating and configuring Planner instances.
#[derive(Debug, Clone)]
pub struct PlannerBuilder {
    store_path: Option<PathBuf>,
}

impl PlannerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self { store_path: None }
    }

    /// Sets a custom state store file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/migmate/migmate.db` or
    /// `~/.local/share/migmate/migmate.db`
    pub fn with_store_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.store_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Builds the configured planner instance.
    ///
    /// Opens the store once to create the file and its schema, so later
    /// operations only ever see an initialized store.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::FileSystem` if the store directory cannot be
    /// created, and `PlannerError::Storage` if store initialization fails.
    pub async fn build(self) -> Result<Planner> {
        let store_path = if let Some(path) = self.store_path {
            path
        } else {
            Self::default_store_path()?
        };

        if let Some(parent) = store_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| PlannerError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let store_path_clone = store_path.clone();
        task::spawn_blocking(move || {
            let _store = SqliteStore::open(&store_path_clone)?;
            Ok::<(), PlannerError>(())
        })
        .await
        .map_err(|e| PlannerError::Configuration {
            message: format!("Task join error: {e}"),
        })??;

        Ok(Planner::new(store_path))
    }

    /// Returns the default store path following XDG Base Directory
    /// specification.
    fn default_store_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("migmate")
            .place_data_file("migmate.db")
            .map_err(|e| PlannerError::XdgDirectory(e.to_string()))
    }
}

impl Default for PlannerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
