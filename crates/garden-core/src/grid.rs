//! The garden board: a bounded grid of cells with fixed environments.
//!
//! The grid keeps a reverse index from plant to position, so a plant is in
//! at most one cell and removal does not scan the board.

use crate::catalog::PlantId;
use crate::environment::{EnvironmentMask, Light, Moisture};
use crate::error::{GardenError, Result};
use crate::types::Position;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Environment of a single cell in a [`Layout`]. Either axis may be absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CellEnvironment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub light: Option<Light>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub moisture: Option<Moisture>,
}

impl CellEnvironment {
    pub const EMPTY: CellEnvironment = CellEnvironment {
        light: None,
        moisture: None,
    };

    pub fn new(light: Light, moisture: Moisture) -> Self {
        Self {
            light: Some(light),
            moisture: Some(moisture),
        }
    }

    pub fn mask(&self) -> EnvironmentMask {
        EnvironmentMask::cell(self.light, self.moisture)
    }

    pub fn from_mask(mask: EnvironmentMask) -> Self {
        Self {
            light: mask.light(),
            moisture: mask.moisture(),
        }
    }
}

/// Environments for every cell, row-major. Used to build a grid or to
/// replace the environments of an existing one.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Layout {
    pub rows: Vec<Vec<CellEnvironment>>,
}

impl Layout {
    /// A layout where every cell has the same environment.
    pub fn uniform(rows: usize, cols: usize, env: CellEnvironment) -> Self {
        Self {
            rows: vec![vec![env; cols]; rows],
        }
    }

    /// `(rows, cols)` taken from the first row. Meaningless for ragged
    /// layouts; see [`is_rectangular`](Self::is_rectangular).
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows.len(), self.rows.first().map_or(0, Vec::len))
    }

    pub fn is_rectangular(&self) -> bool {
        let (_, cols) = self.dimensions();
        self.rows.iter().all(|r| r.len() == cols)
    }

    fn row_widths(&self) -> Vec<usize> {
        self.rows.iter().map(Vec::len).collect()
    }
}

/// One square of the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cell {
    pub position: Position,
    pub environment: EnvironmentMask,
    pub occupant: Option<PlantId>,
}

/// What a successful placement displaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlacementOutcome {
    /// Where the plant was before, if it was already on the board elsewhere.
    pub moved_from: Option<Position>,
    /// A different plant that occupied the destination and is now off the board.
    pub evicted: Option<PlantId>,
}

#[derive(Debug, Clone, Copy)]
struct Placement {
    position: Position,
    seq: u64,
}

#[derive(Debug, Clone)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
    placements: HashMap<PlantId, Placement>,
    next_seq: u64,
}

impl Grid {
    /// A grid whose cells have no environment flags.
    pub fn new(rows: usize, cols: usize) -> Self {
        let cells = (0..rows)
            .flat_map(|row| (0..cols).map(move |col| (row, col)))
            .map(|(row, col)| Cell {
                position: Position::new(row, col),
                environment: EnvironmentMask::empty(),
                occupant: None,
            })
            .collect();
        Self {
            rows,
            cols,
            cells,
            placements: HashMap::new(),
            next_seq: 0,
        }
    }

    /// Build a grid sized after `layout`. Ragged layouts are rejected.
    pub fn from_layout(layout: &Layout) -> Result<Self> {
        let (rows, cols) = layout.dimensions();
        if !layout.is_rectangular() {
            return Err(GardenError::LayoutMismatch {
                expected_rows: rows,
                expected_cols: cols,
                found_rows: rows,
                found_cols: layout.row_widths(),
            });
        }
        let mut grid = Self::new(rows, cols);
        grid.apply_layout(layout);
        Ok(grid)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn contains(&self, position: Position) -> bool {
        position.row < self.rows && position.col < self.cols
    }

    fn index(&self, position: Position) -> Option<usize> {
        self.contains(position)
            .then(|| position.row * self.cols + position.col)
    }

    fn check(&self, position: Position) -> Result<usize> {
        self.index(position).ok_or(GardenError::InvalidPosition {
            row: position.row,
            col: position.col,
            rows: self.rows,
            cols: self.cols,
        })
    }

    /// Put `plant` at `position`.
    ///
    /// Any earlier placement of the same plant is cleared first. A different
    /// plant already in the destination is taken off the board. Out-of-bounds
    /// positions fail with `InvalidPosition` and change nothing.
    pub fn place_plant(&mut self, plant: PlantId, position: Position) -> Result<PlacementOutcome> {
        let target = self.check(position)?;

        if let Some(current) = self.placements.get(&plant) {
            if current.position == position {
                return Ok(PlacementOutcome::default());
            }
        }

        let mut outcome = PlacementOutcome::default();
        if let Some(previous) = self.placements.remove(&plant) {
            if let Some(i) = self.index(previous.position) {
                self.cells[i].occupant = None;
            }
            outcome.moved_from = Some(previous.position);
        }

        if let Some(occupant) = self.cells[target].occupant.take() {
            self.placements.remove(&occupant);
            outcome.evicted = Some(occupant);
        }

        self.cells[target].occupant = Some(plant);
        self.placements.insert(
            plant,
            Placement {
                position,
                seq: self.next_seq,
            },
        );
        self.next_seq += 1;
        Ok(outcome)
    }

    /// Take `plant` off the board. Returns false, changing nothing, if it
    /// was not placed.
    pub fn remove_plant(&mut self, plant: PlantId) -> bool {
        match self.placements.remove(&plant) {
            Some(placement) => {
                if let Some(i) = self.index(placement.position) {
                    self.cells[i].occupant = None;
                }
                true
            }
            None => false,
        }
    }

    pub fn plant_at(&self, row: usize, col: usize) -> Option<PlantId> {
        self.cell(row, col).and_then(|c| c.occupant)
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.index(Position::new(row, col)).map(|i| &self.cells[i])
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    pub fn position_of(&self, plant: PlantId) -> Option<Position> {
        self.placements.get(&plant).map(|p| p.position)
    }

    pub fn has_plant(&self, plant: PlantId) -> bool {
        self.placements.contains_key(&plant)
    }

    /// Placed plants, oldest placement first. Moving a plant counts as a
    /// new placement.
    pub fn placed(&self) -> Vec<(PlantId, Position)> {
        let mut placed: Vec<_> = self
            .placements
            .iter()
            .map(|(id, p)| (p.seq, *id, p.position))
            .collect();
        placed.sort_unstable_by_key(|(seq, _, _)| *seq);
        placed.into_iter().map(|(_, id, pos)| (id, pos)).collect()
    }

    pub fn placed_count(&self) -> usize {
        self.placements.len()
    }

    /// Remove every plant. Environments are kept.
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            cell.occupant = None;
        }
        self.placements.clear();
    }

    /// The up-to-eight surrounding positions, clipped to the board, in
    /// row-major order.
    pub fn neighbors(&self, position: Position) -> Vec<Position> {
        let mut out = Vec::with_capacity(8);
        let rows = position.row.saturating_sub(1)..=position.row + 1;
        for row in rows {
            for col in position.col.saturating_sub(1)..=position.col + 1 {
                let candidate = Position::new(row, col);
                if candidate.is_adjacent_to(&position) && self.contains(candidate) {
                    out.push(candidate);
                }
            }
        }
        out
    }

    /// Occupied neighbors of `position`, in the same order as
    /// [`neighbors`](Self::neighbors).
    pub fn occupied_neighbors(&self, position: Position) -> Vec<(Position, PlantId)> {
        self.neighbors(position)
            .into_iter()
            .filter_map(|p| self.plant_at(p.row, p.col).map(|id| (p, id)))
            .collect()
    }

    /// Replace every cell environment and clear all placements.
    ///
    /// The layout must match the grid exactly: same number of rows and every
    /// row exactly `cols` wide. On mismatch the grid is left untouched.
    pub fn load_layout(&mut self, layout: &Layout) -> Result<()> {
        let matches =
            layout.rows.len() == self.rows && layout.rows.iter().all(|r| r.len() == self.cols);
        if !matches {
            return Err(GardenError::LayoutMismatch {
                expected_rows: self.rows,
                expected_cols: self.cols,
                found_rows: layout.rows.len(),
                found_cols: layout.row_widths(),
            });
        }
        self.clear();
        self.apply_layout(layout);
        Ok(())
    }

    fn apply_layout(&mut self, layout: &Layout) {
        for (row, envs) in layout.rows.iter().enumerate() {
            for (col, env) in envs.iter().enumerate() {
                if let Some(i) = self.index(Position::new(row, col)) {
                    self.cells[i].environment = env.mask();
                }
            }
        }
    }

    /// The current cell environments as a layout.
    pub fn to_layout(&self) -> Layout {
        if self.cols == 0 {
            return Layout {
                rows: vec![Vec::new(); self.rows],
            };
        }
        Layout {
            rows: self
                .cells
                .chunks(self.cols)
                .take(self.rows)
                .map(|row| {
                    row.iter()
                        .map(|c| CellEnvironment::from_mask(c.environment))
                        .collect()
                })
                .collect(),
        }
    }
}
