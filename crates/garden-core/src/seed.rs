//! Built-in catalogs and layouts.
//!
//! These are configuration data, not logic. The companion catalog and the
//! reference layout are what the board ships with; the starter catalog is
//! the smaller sun-loving set used for quick demos.

use crate::catalog::{PlantCatalog, PlantDefinition, PlantId};
use crate::environment::{EnvironmentMask as M, Light, Moisture};
use crate::error::Result;
use crate::grid::{CellEnvironment, Layout};
use crate::relationship::Relationship::{self, Hates, Likes, Neutral};
use crate::tags::{TagRegistry, TagUid};
use crate::types::Rgb;

fn plant(key: &str, name: &str, preferred: M, tolerated: M, color: Rgb) -> PlantDefinition {
    PlantDefinition {
        id: PlantId(0),
        key: key.to_string(),
        display_name: name.to_string(),
        preferred,
        tolerated,
        color,
    }
}

fn hex(s: &str) -> Rgb {
    Rgb::from_hex(s).unwrap_or(Rgb::PURPLE)
}

/// Seven partial-shade vegetables with a full relationship table.
pub fn companion_catalog() -> PlantCatalog {
    let ps = M::PARTIAL_SHADE;
    let plants = vec![
        plant("tomato", "Tomato", ps | M::WET, ps | M::WET | M::MOIST, hex("#e53935")),
        plant("carrot", "Carrot", ps | M::MOIST, ps | M::MOIST | M::DRY, hex("#fb8c00")),
        plant("potato", "Potato", ps | M::DRY, ps | M::DRY | M::MOIST, hex("#8d6e63")),
        plant("onion", "Onion", ps | M::DRY, ps | M::DRY | M::MOIST, hex("#e0e0e0")),
        plant("lettuce", "Lettuce", ps | M::WET, ps | M::WET | M::MOIST, hex("#7cb342")),
        plant("cucumber", "Cucumber", ps | M::WET, ps | M::WET | M::MOIST, hex("#66bb6a")),
        plant("pea", "Pea", ps | M::MOIST, ps | M::MOIST | M::WET, hex("#c5e1a5")),
    ];
    let relations: &[(&str, &str, Relationship)] = &[
        ("tomato", "carrot", Hates),
        ("tomato", "onion", Likes),
        ("tomato", "potato", Hates),
        ("tomato", "lettuce", Likes),
        ("tomato", "cucumber", Hates),
        ("tomato", "pea", Hates),
        ("carrot", "tomato", Hates),
        ("carrot", "onion", Likes),
        ("carrot", "potato", Hates),
        ("carrot", "lettuce", Likes),
        ("carrot", "cucumber", Likes),
        ("carrot", "pea", Likes),
        ("potato", "tomato", Hates),
        ("potato", "onion", Hates),
        ("potato", "carrot", Hates),
        ("potato", "lettuce", Likes),
        ("potato", "cucumber", Hates),
        ("potato", "pea", Likes),
        ("onion", "tomato", Likes),
        ("onion", "carrot", Likes),
        ("onion", "potato", Hates),
        ("onion", "lettuce", Likes),
        ("onion", "cucumber", Hates),
        ("onion", "pea", Hates),
        ("lettuce", "tomato", Likes),
        ("lettuce", "carrot", Likes),
        ("lettuce", "potato", Likes),
        ("lettuce", "onion", Likes),
        ("lettuce", "cucumber", Likes),
        ("lettuce", "pea", Likes),
        ("cucumber", "tomato", Hates),
        ("cucumber", "carrot", Likes),
        ("cucumber", "potato", Hates),
        ("cucumber", "onion", Hates),
        ("cucumber", "lettuce", Likes),
        ("cucumber", "pea", Likes),
        ("pea", "tomato", Hates),
        ("pea", "carrot", Likes),
        ("pea", "potato", Likes),
        ("pea", "onion", Hates),
        ("pea", "lettuce", Likes),
        ("pea", "cucumber", Likes),
    ];
    PlantCatalog::assemble(plants, relations)
}

/// Six sun-loving plants. Tomato prefers `SUNNY | MOIST`.
pub fn starter_catalog() -> PlantCatalog {
    let sm = M::SUNNY | M::MOIST;
    let plants = vec![
        plant("tomato", "Tomato", sm, sm | M::PARTIAL_SHADE, hex("#e53935")),
        plant("carrot", "Carrot", sm, sm | M::PARTIAL_SHADE | M::DRY, hex("#fb8c00")),
        plant("potato", "Potato", sm, sm | M::PARTIAL_SHADE, hex("#8d6e63")),
        plant(
            "lettuce",
            "Lettuce",
            M::PARTIAL_SHADE | M::MOIST,
            M::PARTIAL_SHADE | M::MOIST | M::WET | M::SUNNY,
            hex("#7cb342"),
        ),
        plant("basil", "Basil", sm, sm | M::PARTIAL_SHADE, hex("#43a047")),
        plant("corn", "Corn", sm, sm | M::DRY, hex("#fdd835")),
    ];
    let relations: &[(&str, &str, Relationship)] = &[
        ("tomato", "carrot", Likes),
        ("tomato", "basil", Likes),
        ("tomato", "potato", Hates),
        ("tomato", "corn", Hates),
        ("carrot", "tomato", Likes),
        ("carrot", "lettuce", Likes),
        ("carrot", "potato", Neutral),
        ("potato", "tomato", Hates),
        ("potato", "corn", Likes),
        ("potato", "basil", Neutral),
        ("lettuce", "carrot", Likes),
        ("lettuce", "basil", Likes),
        ("lettuce", "corn", Neutral),
        ("basil", "tomato", Likes),
        ("basil", "lettuce", Likes),
        ("basil", "potato", Neutral),
        ("corn", "potato", Likes),
        ("corn", "tomato", Hates),
        ("corn", "basil", Neutral),
    ];
    PlantCatalog::assemble(plants, relations)
}

/// The 6×6 board layout. Every planted cell is partially shaded; the rest
/// have no environment at all.
pub fn reference_layout() -> Layout {
    let e = CellEnvironment::EMPTY;
    let dry = CellEnvironment::new(Light::PartialShade, Moisture::Dry);
    let moist = CellEnvironment::new(Light::PartialShade, Moisture::Moist);
    let wet = CellEnvironment::new(Light::PartialShade, Moisture::Wet);

    let edge = vec![dry, e, e, wet, e, dry];
    let inner = vec![e, moist, e, e, moist, e];
    let middle = vec![dry, e, moist, e, e, dry];
    Layout {
        rows: vec![
            edge.clone(),
            inner.clone(),
            middle,
            inner.clone(),
            edge,
            inner,
        ],
    }
}

/// Every cell `SUNNY | MOIST`.
pub fn sunny_layout(rows: usize, cols: usize) -> Layout {
    Layout::uniform(rows, cols, CellEnvironment::new(Light::Sunny, Moisture::Moist))
}

/// Tags shipped with the physical board, resolved against `catalog`.
/// Tags for plants the catalog lacks are skipped.
pub fn board_tags(catalog: &PlantCatalog) -> Result<TagRegistry> {
    let known = [
        (TagUid([0x04, 0x53, 0x45, 0x3B]), "tomato"),
        (TagUid([0x04, 0x5B, 0x2B, 0x3B]), "cucumber"),
        (TagUid([0x04, 0xDA, 0x41, 0x3B]), "potato"),
        (TagUid([0x04, 0xFF, 0x33, 0x3B]), "carrot"),
    ];
    let mut registry = TagRegistry::new();
    for (uid, key) in known {
        if let Some(id) = catalog.lookup(key) {
            registry.register(uid, id)?;
        }
    }
    Ok(registry)
}
