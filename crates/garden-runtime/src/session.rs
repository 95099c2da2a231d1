//! Garden session: one board, one catalog, one mode.
//!
//! The session is the single owner of all mutable garden state. Hosts (CLI,
//! web worker) hold a `GardenSession` and call it by plant key. Every
//! mutation is logged and recorded as a [`SessionEvent`] that hosts drain
//! and forward.

use garden_core::catalog::{PlantCatalog, PlantDefinition, PlantId};
use garden_core::error::{GardenError, Result};
use garden_core::evaluation::{Evaluation, EvaluationEngine, Status};
use garden_core::grid::{Cell, Grid, Layout, PlacementOutcome};
use garden_core::mode::{GameMode, ModeController};
use garden_core::tags::{TagRegistry, TagUid};
use garden_core::types::Position;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, info};
use uuid::Uuid;

/// Unique identifier for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Something that changed on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionEvent {
    /// A plant was put on the board where it was not before.
    Placed { plant: String, position: Position },
    /// A plant already on the board moved.
    Moved {
        plant: String,
        from: Position,
        to: Position,
    },
    /// A plant was pushed off the board by another placement.
    Evicted {
        plant: String,
        position: Position,
        by: String,
    },
    /// A plant was taken off the board.
    Removed { plant: String, position: Position },
    /// The game mode changed.
    ModeChanged { mode: GameMode, label: String },
    /// Cell environments were replaced and the board cleared.
    LayoutLoaded {
        rows: usize,
        cols: usize,
        cleared: usize,
    },
}

/// Evaluation of one placed plant, labelled for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlantReport {
    pub plant: String,
    pub name: String,
    pub evaluation: Evaluation,
}

/// One cell as seen by a front-end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellView {
    pub row: usize,
    pub col: usize,
    /// Raw environment bits.
    pub mask: u8,
    /// e.g. `"Partially Shaded, Moist"`.
    pub environment: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plant: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
}

/// Full board state under the current mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub session_id: SessionId,
    pub mode: GameMode,
    pub mode_label: String,
    pub rows: usize,
    pub cols: usize,
    /// Row-major.
    pub cells: Vec<CellView>,
    /// Placement order.
    pub plants: Vec<PlantReport>,
}

pub struct GardenSession {
    id: SessionId,
    catalog: PlantCatalog,
    grid: Grid,
    mode: ModeController,
    tags: TagRegistry,
    events: Vec<SessionEvent>,
}

impl GardenSession {
    pub fn new(catalog: PlantCatalog, grid: Grid, mode: GameMode, tags: TagRegistry) -> Self {
        let id = SessionId::new();
        info!(
            "Session {} started: {} plants, {}x{} grid, mode {}",
            id,
            catalog.len(),
            grid.rows(),
            grid.cols(),
            mode
        );
        Self {
            id,
            catalog,
            grid,
            mode: ModeController::with_mode(mode),
            tags,
            events: Vec::new(),
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn catalog(&self) -> &PlantCatalog {
        &self.catalog
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn tags(&self) -> &TagRegistry {
        &self.tags
    }

    pub fn mode(&self) -> GameMode {
        self.mode.current()
    }

    pub fn mode_label(&self) -> &'static str {
        self.mode.label()
    }

    fn key_of(&self, plant: PlantId) -> String {
        self.catalog
            .get(plant)
            .map(|p| p.key.clone())
            .unwrap_or_else(|| plant.to_string())
    }

    /// Place the plant named `key` at `(row, col)`.
    ///
    /// Fails with `UnknownPlant` for keys not in the catalog and with
    /// `InvalidPosition` off the board; neither changes anything.
    pub fn place_plant(&mut self, key: &str, row: usize, col: usize) -> Result<PlacementOutcome> {
        let plant = self.catalog.require(key)?;
        let position = Position::new(row, col);
        let unchanged = self.grid.position_of(plant) == Some(position);
        let outcome = self.grid.place_plant(plant, position)?;
        if unchanged {
            return Ok(outcome);
        }

        if let Some(evicted) = outcome.evicted {
            let evicted = self.key_of(evicted);
            info!("{} evicted {} at {}", key, evicted, position);
            self.events.push(SessionEvent::Evicted {
                plant: evicted,
                position,
                by: key.to_string(),
            });
        }
        match outcome.moved_from {
            Some(from) => {
                debug!("Moved {} from {} to {}", key, from, position);
                self.events.push(SessionEvent::Moved {
                    plant: key.to_string(),
                    from,
                    to: position,
                });
            }
            None => {
                debug!("Placed {} at {}", key, position);
                self.events.push(SessionEvent::Placed {
                    plant: key.to_string(),
                    position,
                });
            }
        }
        Ok(outcome)
    }

    /// Take the plant named `key` off the board. False for unknown or
    /// unplaced plants.
    pub fn remove_plant(&mut self, key: &str) -> bool {
        let Some(plant) = self.catalog.lookup(key) else {
            return false;
        };
        let Some(position) = self.grid.position_of(plant) else {
            return false;
        };
        let removed = self.grid.remove_plant(plant);
        if removed {
            debug!("Removed {} from {}", key, position);
            self.events.push(SessionEvent::Removed {
                plant: key.to_string(),
                position,
            });
        }
        removed
    }

    pub fn plant_at(&self, row: usize, col: usize) -> Option<&PlantDefinition> {
        self.grid
            .plant_at(row, col)
            .and_then(|id| self.catalog.get(id))
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.grid.cell(row, col)
    }

    /// One cell with its occupant's current status.
    pub fn cell_view(&self, row: usize, col: usize) -> Option<CellView> {
        let cell = self.grid.cell(row, col)?;
        let def = cell.occupant.and_then(|id| self.catalog.get(id));
        Some(CellView {
            row,
            col,
            mask: cell.environment.bits(),
            environment: cell.environment.describe(),
            plant: def.map(|d| d.key.clone()),
            status: def.map(|d| self.evaluate(&d.key).status),
        })
    }

    /// Human description of a cell's environment, e.g. `"Sunny, Dry"`.
    pub fn describe_cell(&self, row: usize, col: usize) -> Option<String> {
        self.grid.cell(row, col).map(|c| c.environment.describe())
    }

    /// Evaluate one plant under the current mode. Unknown or unplaced keys
    /// yield the `Error` evaluation.
    pub fn evaluate(&self, key: &str) -> Evaluation {
        match self.catalog.lookup(key) {
            Some(plant) => EvaluationEngine::new(&self.catalog, &self.grid).evaluate(plant, self.mode()),
            None => Evaluation::not_on_grid(),
        }
    }

    /// Evaluate every placed plant, in placement order.
    pub fn evaluate_all(&self) -> Vec<PlantReport> {
        EvaluationEngine::new(&self.catalog, &self.grid)
            .evaluate_all(self.mode())
            .into_iter()
            .filter_map(|(plant, evaluation)| {
                let def = self.catalog.get(plant)?;
                Some(PlantReport {
                    plant: def.key.clone(),
                    name: def.display_name.clone(),
                    evaluation,
                })
            })
            .collect()
    }

    /// Advance the game mode. Subsequent evaluations use the new mode.
    pub fn cycle_mode(&mut self) -> GameMode {
        let mode = self.mode.cycle();
        info!("Mode changed to {}", mode);
        self.events.push(SessionEvent::ModeChanged {
            mode,
            label: mode.label().to_string(),
        });
        mode
    }

    /// Replace every cell environment. Clears the board on success; leaves
    /// everything untouched on `LayoutMismatch`.
    pub fn load_layout(&mut self, layout: &Layout) -> Result<()> {
        let cleared = self.grid.placed_count();
        self.grid.load_layout(layout)?;
        info!(
            "Loaded {}x{} layout, cleared {} plants",
            self.grid.rows(),
            self.grid.cols(),
            cleared
        );
        self.events.push(SessionEvent::LayoutLoaded {
            rows: self.grid.rows(),
            cols: self.grid.cols(),
            cleared,
        });
        Ok(())
    }

    /// Associate a tag UID with the plant named `key`.
    pub fn register_tag(&mut self, uid: TagUid, key: &str) -> Result<()> {
        let plant = self.catalog.require(key)?;
        self.tags.register(uid, plant)?;
        debug!("Registered tag {} for {}", uid, key);
        Ok(())
    }

    pub fn identify_tag(&self, uid: TagUid) -> Option<&PlantDefinition> {
        self.tags.identify(uid).and_then(|id| self.catalog.get(id))
    }

    /// Place whichever plant the tag is registered to.
    pub fn place_tag(&mut self, uid: TagUid, row: usize, col: usize) -> Result<PlacementOutcome> {
        let key = self
            .identify_tag(uid)
            .map(|p| p.key.clone())
            .ok_or_else(|| GardenError::UnknownTag(uid.to_string()))?;
        self.place_plant(&key, row, col)
    }

    /// Status of every placed plant under the current mode, keyed by cell.
    pub fn status_frame(&self) -> Vec<(Position, Status)> {
        EvaluationEngine::new(&self.catalog, &self.grid)
            .evaluate_all(self.mode())
            .into_iter()
            .filter_map(|(_, e)| e.position.map(|p| (p, e.status)))
            .collect()
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        let plants = self.evaluate_all();
        let cells = self
            .grid
            .cells()
            .map(|cell| {
                let def = cell.occupant.and_then(|id| self.catalog.get(id));
                let status = def.and_then(|d| {
                    plants
                        .iter()
                        .find(|r| r.plant == d.key)
                        .map(|r| r.evaluation.status)
                });
                CellView {
                    row: cell.position.row,
                    col: cell.position.col,
                    mask: cell.environment.bits(),
                    environment: cell.environment.describe(),
                    plant: def.map(|d| d.key.clone()),
                    status,
                }
            })
            .collect();
        BoardSnapshot {
            session_id: self.id,
            mode: self.mode(),
            mode_label: self.mode_label().to_string(),
            rows: self.grid.rows(),
            cols: self.grid.cols(),
            cells,
            plants,
        }
    }

    /// Take all events recorded since the last drain.
    pub fn drain_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.events)
    }
}
