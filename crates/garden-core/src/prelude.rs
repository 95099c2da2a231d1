//! Garden Core Prelude: convenient imports for common usage.
//!
//! ```rust
//! use garden_core::prelude::*;
//! ```

pub use crate::types::{Position, Rgb};

pub use crate::environment::{thrives, tolerates, EnvironmentMask, Light, Moisture};

pub use crate::relationship::{Relationship, RelationshipTable};

pub use crate::catalog::{
    CatalogSpec, PlantCatalog, PlantCatalogBuilder, PlantDefinition, PlantId, PlantSpec,
    RelationshipSpec,
};

pub use crate::grid::{Cell, CellEnvironment, Grid, Layout, PlacementOutcome};

pub use crate::evaluation::{Evaluation, EvaluationEngine, NeighborVerdict, Status, Verdict};

pub use crate::mode::{GameMode, ModeController};

pub use crate::tags::{TagRegistry, TagUid};

pub use crate::seed;

pub use crate::error::GardenError;
