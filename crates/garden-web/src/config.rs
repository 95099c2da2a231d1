//! `garden.toml` as read by the web server.
//!
//! Shares the `[board]` and `[led]` tables with the CLI and adds `[server]`.

use anyhow::Result;
use garden::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}
fn default_port() -> u16 {
    3000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WebConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub board: BoardConfig,
    #[serde(default)]
    pub led: LedConfig,
}

impl HostConfig for WebConfig {
    fn board_mut(&mut self) -> &mut BoardConfig {
        &mut self.board
    }
}

impl WebConfig {
    /// Load `path`, or garden.toml from the current or parent directories,
    /// or fall back to defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => Self::read_from(path)?,
            None => Self::discover()?,
        };
        Ok(config)
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
