//! Evaluation engine: turns grid + catalog + mode into per-plant verdicts.
//!
//! Evaluations are derived on demand and never cached. The engine borrows
//! the catalog and grid for the duration of one evaluation pass.

use crate::catalog::{PlantCatalog, PlantId};
use crate::grid::Grid;
use crate::mode::GameMode;
use crate::relationship::Relationship;
use crate::types::Position;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const NOT_ON_GRID: &str = "Plant not found on grid";
const COMBINED_UNHAPPY: &str = "Plant is unhappy with either environment or neighbors.";
const COMBINED_HAPPY: &str = "Plant is thriving with both environment and neighbors!";
const COMBINED_NEUTRAL: &str = "Plant is content but not thriving.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Happy,
    Unhappy,
    Neutral,
    Error,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Status::Happy => "happy",
            Status::Unhappy => "unhappy",
            Status::Neutral => "neutral",
            Status::Error => "error",
        };
        f.write_str(s)
    }
}

/// A status with the sentence explaining it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub status: Status,
    pub reason: String,
}

impl Verdict {
    pub fn new(status: Status, reason: impl Into<String>) -> Self {
        Self {
            status,
            reason: reason.into(),
        }
    }

    /// Stand-in for a sub-check the current mode skips.
    pub fn placeholder() -> Self {
        Self::new(Status::Neutral, "")
    }
}

/// Neighbor verdict plus the display names behind it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NeighborVerdict {
    pub status: Status,
    pub reason: String,
    /// Liked neighbors, row-major scan order.
    pub liked: Vec<String>,
    /// Hated neighbors, row-major scan order.
    pub hated: Vec<String>,
}

impl NeighborVerdict {
    pub fn placeholder() -> Self {
        Self {
            status: Status::Neutral,
            reason: String::new(),
            liked: Vec::new(),
            hated: Vec::new(),
        }
    }
}

/// Full result for one plant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    pub status: Status,
    pub reason: String,
    pub environment: Verdict,
    pub neighbors: NeighborVerdict,
    /// `None` when the plant is not on the grid.
    pub position: Option<Position>,
}

impl Evaluation {
    /// The evaluation of a plant that is not on the grid.
    pub fn not_on_grid() -> Self {
        Self {
            status: Status::Error,
            reason: NOT_ON_GRID.to_string(),
            environment: Verdict::placeholder(),
            neighbors: NeighborVerdict::placeholder(),
            position: None,
        }
    }
}

/// Merge the two sub-verdicts according to `mode`.
pub fn combine(mode: GameMode, environment: &Verdict, neighbors: &NeighborVerdict) -> Verdict {
    match mode {
        GameMode::Environment => environment.clone(),
        GameMode::Neighbors => Verdict::new(neighbors.status, neighbors.reason.clone()),
        GameMode::Combined => {
            if environment.status == Status::Unhappy || neighbors.status == Status::Unhappy {
                Verdict::new(Status::Unhappy, COMBINED_UNHAPPY)
            } else if environment.status == Status::Happy && neighbors.status == Status::Happy {
                Verdict::new(Status::Happy, COMBINED_HAPPY)
            } else {
                Verdict::new(Status::Neutral, COMBINED_NEUTRAL)
            }
        }
    }
}

pub struct EvaluationEngine<'a> {
    catalog: &'a PlantCatalog,
    grid: &'a Grid,
}

impl<'a> EvaluationEngine<'a> {
    pub fn new(catalog: &'a PlantCatalog, grid: &'a Grid) -> Self {
        Self { catalog, grid }
    }

    /// Judge the cell the plant sits in. `None` if the plant is unknown or
    /// not on the grid.
    ///
    /// Thriving is checked strictly before tolerance.
    pub fn evaluate_environment(&self, plant: PlantId) -> Option<Verdict> {
        let def = self.catalog.get(plant)?;
        let position = self.grid.position_of(plant)?;
        let cell = self.grid.cell(position.row, position.col)?;
        let name = &def.display_name;

        let verdict = if def.thrives_in(cell.environment) {
            Verdict::new(Status::Happy, format!("{} thrives in this environment!", name))
        } else if def.tolerates(cell.environment) {
            Verdict::new(Status::Neutral, format!("{} tolerates this environment.", name))
        } else {
            Verdict::new(Status::Unhappy, format!("{} doesn't like this environment.", name))
        };
        Some(verdict)
    }

    /// Judge the occupied cells around the plant. Any hated neighbor makes
    /// the plant unhappy regardless of liked ones. Neighbors missing from
    /// the catalog are skipped.
    pub fn evaluate_neighbors(&self, plant: PlantId) -> Option<NeighborVerdict> {
        let def = self.catalog.get(plant)?;
        let position = self.grid.position_of(plant)?;

        let mut liked = Vec::new();
        let mut hated = Vec::new();
        for (_, neighbor) in self.grid.occupied_neighbors(position) {
            let Some(other) = self.catalog.get(neighbor) else {
                continue;
            };
            match self.catalog.relationship(plant, neighbor) {
                Relationship::Likes => liked.push(other.display_name.clone()),
                Relationship::Hates => hated.push(other.display_name.clone()),
                Relationship::Neutral => {}
            }
        }

        let name = &def.display_name;
        let (status, reason) = if !hated.is_empty() {
            (
                Status::Unhappy,
                format!("{} doesn't like being next to {}.", name, hated.join(", ")),
            )
        } else if !liked.is_empty() {
            (
                Status::Happy,
                format!("{} likes being next to {}.", name, liked.join(", ")),
            )
        } else {
            (
                Status::Neutral,
                format!("{} has no strong feelings about its neighbors.", name),
            )
        };
        Some(NeighborVerdict {
            status,
            reason,
            liked,
            hated,
        })
    }

    /// Evaluate one plant under `mode`. Never fails: a plant that is not on
    /// the grid yields an `Error` evaluation.
    pub fn evaluate(&self, plant: PlantId, mode: GameMode) -> Evaluation {
        let Some(position) = self.grid.position_of(plant) else {
            return Evaluation::not_on_grid();
        };
        if self.catalog.get(plant).is_none() {
            return Evaluation::not_on_grid();
        }

        let environment = if mode.checks_environment() {
            self.evaluate_environment(plant)
                .unwrap_or_else(Verdict::placeholder)
        } else {
            Verdict::placeholder()
        };
        let neighbors = if mode.checks_neighbors() {
            self.evaluate_neighbors(plant)
                .unwrap_or_else(NeighborVerdict::placeholder)
        } else {
            NeighborVerdict::placeholder()
        };

        let Verdict { status, reason } = combine(mode, &environment, &neighbors);
        Evaluation {
            status,
            reason,
            environment,
            neighbors,
            position: Some(position),
        }
    }

    /// Evaluate every placed plant independently, in placement order.
    pub fn evaluate_all(&self, mode: GameMode) -> Vec<(PlantId, Evaluation)> {
        self.grid
            .placed()
            .into_iter()
            .map(|(plant, _)| (plant, self.evaluate(plant, mode)))
            .collect()
    }
}
