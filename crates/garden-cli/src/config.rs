//! Configuration management for the garden CLI.

use anyhow::{Context, Result};
use garden::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub use garden::runtime::config::CONFIG_FILE;

/// Garden project configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub board: BoardConfig,
    #[serde(default)]
    pub led: LedConfig,
}

impl HostConfig for Config {
    fn board_mut(&mut self) -> &mut BoardConfig {
        &mut self.board
    }
}

impl Config {
    /// Load config from garden.toml in the current or parent directories.
    pub fn load() -> Result<Self> {
        Ok(Self::discover()?)
    }

    /// Load a specific file. Relative board paths resolve against its
    /// directory.
    pub fn load_from(path: &Path) -> Result<Self> {
        Ok(Self::read_from(path)?)
    }

    /// Save config to the specified path.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config: {}", path.display()))?;
        Ok(())
    }

    /// A session for the configured board.
    pub fn open_session(&self) -> Result<GardenSession> {
        let builder = self
            .board
            .session_builder()
            .context("Failed to load board")?;
        builder.build().context("Failed to build board")
    }
}
