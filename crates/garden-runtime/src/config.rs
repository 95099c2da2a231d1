//! Board configuration shared by the hosts.
//!
//! The `[board]` table of a `garden.toml` chooses the starting mode, a seed
//! catalog, and optional catalog/layout files that replace the built-ins.
//! Each host adds its own tables around it and implements [`HostConfig`]
//! to get file discovery and loading.

use crate::builder::SessionBuilder;
use garden_core::catalog::{CatalogSpec, PlantCatalog};
use garden_core::error::GardenError;
use garden_core::grid::Layout;
use garden_core::mode::GameMode;
use garden_core::seed;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Errors raised while turning configuration into a session.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error(transparent)]
    Garden(#[from] GardenError),
}

/// Which built-in catalog to use when no catalog file is given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeedCatalog {
    #[default]
    Companion,
    Starter,
}

impl SeedCatalog {
    pub fn catalog(self) -> PlantCatalog {
        match self {
            SeedCatalog::Companion => seed::companion_catalog(),
            SeedCatalog::Starter => seed::starter_catalog(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    #[serde(default)]
    pub mode: GameMode,
    #[serde(default)]
    pub seed: SeedCatalog,
    /// TOML `CatalogSpec`; overrides `seed`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<PathBuf>,
    /// TOML `Layout`; defaults to the reference board.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<PathBuf>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::Environment,
            seed: SeedCatalog::Companion,
            catalog: None,
            layout: None,
        }
    }
}

impl BoardConfig {
    /// Make relative file paths relative to `base` (the config file's
    /// directory).
    pub fn resolve_paths(&mut self, base: &Path) {
        for path in [&mut self.catalog, &mut self.layout].into_iter().flatten() {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
    }

    pub fn load_catalog(&self) -> Result<PlantCatalog, ConfigError> {
        match &self.catalog {
            Some(path) => {
                let spec: CatalogSpec = read_toml(path)?;
                let catalog = PlantCatalog::from_spec(&spec)?;
                debug!("Loaded {} plants from {}", catalog.len(), path.display());
                Ok(catalog)
            }
            None => Ok(self.seed.catalog()),
        }
    }

    pub fn load_layout(&self) -> Result<Layout, ConfigError> {
        match &self.layout {
            Some(path) => read_toml(path),
            None => Ok(seed::reference_layout()),
        }
    }

    /// A builder carrying this board's catalog, layout and mode.
    pub fn session_builder(&self) -> Result<SessionBuilder, ConfigError> {
        Ok(SessionBuilder::new()
            .with_catalog(self.load_catalog()?)
            .with_layout(self.load_layout()?)
            .with_mode(self.mode))
    }
}

/// Project configuration file name.
pub const CONFIG_FILE: &str = "garden.toml";

/// A host's `garden.toml`: whatever tables the host needs plus `[board]`.
pub trait HostConfig: DeserializeOwned + Default {
    fn board_mut(&mut self) -> &mut BoardConfig;

    /// Load `path`. Relative board paths resolve against its directory.
    fn read_from(path: &Path) -> Result<Self, ConfigError> {
        let mut config: Self = read_toml(path)?;
        if let Some(dir) = path.parent() {
            config.board_mut().resolve_paths(dir);
        }
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load the nearest `garden.toml` at or above the current directory,
    /// or fall back to defaults when there is none.
    fn discover() -> Result<Self, ConfigError> {
        match find_config_file() {
            Some(path) => Self::read_from(&path),
            None => Ok(Self::default()),
        }
    }
}

/// Find `garden.toml` in the current or parent directories.
pub fn find_config_file() -> Option<PathBuf> {
    let dir = std::env::current_dir().ok()?;
    find_config_file_from(&dir)
}

/// Find `garden.toml` in `start` or the nearest parent that has one.
pub fn find_config_file_from(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(CONFIG_FILE))
        .find(|path| path.exists())
}

/// Read and parse a TOML file.
pub fn read_toml<T: DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
