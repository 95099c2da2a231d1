//! List the plant catalog.

use anyhow::{Context, Result};
use colored::Colorize;
use garden::prelude::*;

use crate::config::Config;

pub fn run(plant: Option<&str>) -> Result<()> {
    let config = Config::load()?;
    let catalog = config.board.load_catalog().context("Failed to load catalog")?;

    match plant {
        Some(key) => show_plant(&catalog, key),
        None => {
            list(&catalog);
            Ok(())
        }
    }
}

fn list(catalog: &PlantCatalog) {
    println!(
        "{} {} plants:",
        "→".blue(),
        catalog.len().to_string().cyan()
    );
    println!();
    for plant in catalog.plants() {
        println!(
            "  {:<10} {}",
            plant.key.white().bold(),
            plant.display_name.dimmed()
        );
        println!("    prefers:   {}", plant.preferred);
        println!("    tolerates: {}", plant.tolerated);
    }
}

fn show_plant(catalog: &PlantCatalog, key: &str) -> Result<()> {
    let id = catalog.require(key)?;
    let Some(plant) = catalog.get(id) else {
        return Ok(());
    };

    println!("{} {}", "→".blue(), plant.display_name.white().bold());
    println!("  prefers:   {}", plant.preferred);
    println!("  tolerates: {}", plant.tolerated);
    println!();

    let (likes, hates) = relationship_names(catalog, id);
    if likes.is_empty() && hates.is_empty() {
        println!("  {} No strong feelings about anyone", "•".yellow());
    }
    if !likes.is_empty() {
        println!("  {} {}", "likes:".green(), likes.join(", "));
    }
    if !hates.is_empty() {
        println!("  {} {}", "hates:".red(), hates.join(", "));
    }
    Ok(())
}

/// Display names of the plants `id` likes and hates, in catalog order.
fn relationship_names(catalog: &PlantCatalog, id: PlantId) -> (Vec<String>, Vec<String>) {
    let mut likes = Vec::new();
    let mut hates = Vec::new();
    for (other, relationship) in catalog.relationships_of(id) {
        let Some(def) = catalog.get(other) else {
            continue;
        };
        match relationship {
            Relationship::Likes => likes.push(def.display_name.clone()),
            Relationship::Hates => hates.push(def.display_name.clone()),
            Relationship::Neutral => {}
        }
    }
    (likes, hates)
}
