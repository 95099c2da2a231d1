//! Catalog diagnostics.

use anyhow::{bail, Result};
use colored::Colorize;
use garden::prelude::*;

use crate::config::Config;

pub fn run(strict: bool) -> Result<()> {
    let config = Config::load()?;
    let session = config.open_session()?;
    let catalog = session.catalog();

    println!("{}", "Garden Check".white().bold());
    println!("{}", "═".repeat(40).dimmed());
    println!();

    println!("{}", "Board".blue().bold());
    println!("  Plants:            {}", catalog.len().to_string().cyan());
    println!(
        "  Grid:              {}",
        format!("{}x{}", session.grid().rows(), session.grid().cols()).cyan()
    );
    println!("  Mode:              {}", session.mode_label().cyan());
    println!();

    let asymmetric = describe_asymmetry(catalog);
    println!("{}", "Relationships".blue().bold());
    if asymmetric.is_empty() {
        println!("  {} Every relationship is mutual", "✓".green());
    } else {
        for line in &asymmetric {
            println!("  {} {}", "•".yellow(), line);
        }
    }
    println!();

    println!("{}", "Tags".blue().bold());
    let tags = session.tags();
    println!(
        "  Registered:        {} / {}",
        tags.len().to_string().cyan(),
        tags.capacity()
    );
    for (uid, plant) in tags.entries() {
        let name = catalog
            .get(*plant)
            .map(|p| p.display_name.as_str())
            .unwrap_or("?");
        println!("  {}  {}", uid.to_string().dimmed(), name);
    }
    println!();
    println!("{}", "═".repeat(40).dimmed());

    if strict && !asymmetric.is_empty() {
        bail!("{} asymmetric relationship pair(s)", asymmetric.len());
    }
    Ok(())
}

/// One line per pair whose two directions disagree.
fn describe_asymmetry(catalog: &PlantCatalog) -> Vec<String> {
    catalog
        .asymmetric_pairs()
        .into_iter()
        .filter_map(|(a, b)| {
            let pa = catalog.get(a)?;
            let pb = catalog.get(b)?;
            Some(format!(
                "{} → {}: {}, {} → {}: {}",
                pa.display_name,
                pb.display_name,
                catalog.relationship(a, b),
                pb.display_name,
                pa.display_name,
                catalog.relationship(b, a)
            ))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_catalogs_are_mutual() {
        assert!(describe_asymmetry(&seed::companion_catalog()).is_empty());
        assert!(describe_asymmetry(&seed::starter_catalog()).is_empty());
    }

    #[test]
    fn test_one_sided_relationship_is_described() {
        let catalog = PlantCatalog::builder()
            .add_plant("potato", "Potato", EnvironmentMask::DRY, EnvironmentMask::DRY, Rgb::PURPLE)
            .unwrap()
            .add_plant("onion", "Onion", EnvironmentMask::DRY, EnvironmentMask::DRY, Rgb::WHITE)
            .unwrap()
            .relate("potato", "onion", Relationship::Hates)
            .unwrap()
            .build();
        assert_eq!(
            describe_asymmetry(&catalog),
            vec!["Potato → Onion: hates, Onion → Potato: neutral".to_string()]
        );
    }
}
