//! Garden Runtime Prelude: convenient imports for common usage.
//!
//! ```rust
//! use garden_runtime::prelude::*;
//! ```

pub use crate::builder::SessionBuilder;
pub use crate::config::{BoardConfig, ConfigError, HostConfig, SeedCatalog};

pub use crate::session::{
    BoardSnapshot, CellView, GardenSession, PlantReport, SessionEvent, SessionId,
};

pub use garden_core::prelude::*;
