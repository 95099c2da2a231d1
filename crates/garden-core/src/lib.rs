//! # Garden Core
//!
//! Core types and the evaluation engine for the interactive garden.
//!
//! A garden is a bounded grid of cells. Every cell has a fixed environment
//! (light and moisture) and holds at most one plant. Each plant is judged
//! by two independent rule sets:
//!
//! - **Environment**: does the cell match what the plant prefers, or at
//!   least something it tolerates? (bitmask containment / intersection)
//! - **Neighbors**: does the plant like or hate the plants in the eight
//!   surrounding cells? (directional relationship table)
//!
//! The active [`GameMode`](mode::GameMode) decides which rule set, or the
//! combination of both, produces the final verdict.
//!
//! ## Quick Start
//!
//! ```rust
//! use garden_core::prelude::*;
//!
//! let catalog = seed::starter_catalog();
//! let mut grid = Grid::from_layout(&seed::sunny_layout(3, 3)).unwrap();
//!
//! let tomato = catalog.lookup("tomato").unwrap();
//! grid.place_plant(tomato, Position::new(1, 1)).unwrap();
//!
//! let engine = EvaluationEngine::new(&catalog, &grid);
//! let evaluation = engine.evaluate(tomato, GameMode::Environment);
//! assert_eq!(evaluation.status, Status::Happy);
//! ```

pub mod catalog;
pub mod environment;
pub mod error;
pub mod evaluation;
pub mod grid;
pub mod mode;
pub mod prelude;
pub mod relationship;
pub mod seed;
pub mod tags;
pub mod types;
