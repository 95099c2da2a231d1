//! Initialize a garden project.

use anyhow::{bail, Context, Result};
use colored::Colorize;
use garden::prelude::*;
use std::path::{Path, PathBuf};

use crate::config::{Config, CONFIG_FILE};

const CATALOG_FILE: &str = "catalog.toml";
const LAYOUT_FILE: &str = "layout.toml";

pub fn run(force: bool, with_data: bool) -> Result<()> {
    let base_path = std::env::current_dir().context("Failed to read current directory")?;
    println!("{} Initializing garden in {}...", "→".blue(), base_path.display());

    for written in write_project(&base_path, force, with_data)? {
        println!("  {} Created {}", "✓".green(), written.display());
    }

    println!();
    println!("{} Garden initialized!", "✓".green().bold());
    println!();
    println!("Next steps:");
    println!("  {} garden catalog", "1.".blue());
    println!("  {} garden evaluate --place tomato@0,3", "2.".blue());
    println!("  {} garden check", "3.".blue());

    Ok(())
}

/// Write garden.toml (and optionally the board data) into `base`.
/// Returns the files written.
pub fn write_project(base: &Path, force: bool, with_data: bool) -> Result<Vec<PathBuf>> {
    let config_path = base.join(CONFIG_FILE);
    if config_path.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            config_path.display()
        );
    }

    let mut written = Vec::new();
    let mut config = Config::default();

    if with_data {
        let catalog_path = base.join(CATALOG_FILE);
        let catalog = toml::to_string_pretty(&seed::companion_catalog().to_spec())
            .context("Failed to serialize catalog")?;
        std::fs::write(&catalog_path, catalog)
            .with_context(|| format!("Failed to write {}", catalog_path.display()))?;
        written.push(catalog_path);

        let layout_path = base.join(LAYOUT_FILE);
        let layout = toml::to_string_pretty(&seed::reference_layout())
            .context("Failed to serialize layout")?;
        std::fs::write(&layout_path, layout)
            .with_context(|| format!("Failed to write {}", layout_path.display()))?;
        written.push(layout_path);

        config.board.catalog = Some(PathBuf::from(CATALOG_FILE));
        config.board.layout = Some(PathBuf::from(LAYOUT_FILE));
    }

    config.save(&config_path)?;
    written.push(config_path);
    Ok(written)
}
