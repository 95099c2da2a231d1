//! # Garden
//!
//! An educational companion-planting simulator. Place plants on a grid of
//! cells with fixed light and moisture, then ask each plant whether it is
//! happy with its spot and its neighbors.
//!
//! ## Quick Start
//!
//! ```rust
//! use garden::prelude::*;
//!
//! // The shipped board: companion catalog on the 6x6 reference layout
//! let mut session = SessionBuilder::new().build().unwrap();
//!
//! session.place_plant("tomato", 0, 3).unwrap();
//! session.place_plant("carrot", 1, 2).unwrap();
//!
//! // Environment mode: the wet, partially shaded cell suits the tomato
//! assert_eq!(session.evaluate("tomato").status, Status::Happy);
//!
//! // Neighbors mode: tomatoes hate carrots
//! session.cycle_mode();
//! let evaluation = session.evaluate("tomato");
//! assert_eq!(evaluation.status, Status::Unhappy);
//! assert_eq!(evaluation.reason, "Tomato doesn't like being next to Carrot.");
//! ```
//!
//! ## Architecture
//!
//! - [`garden_core`] - environment masks, catalog, grid, evaluation engine, modes, tags
//! - [`garden_runtime`] - sessions, events, board snapshots
//! - `garden_led` - best-effort LED strip mirroring (`led` feature)
//!
//! ## Rules
//!
//! | Mode | Verdict |
//! |------|---------|
//! | Environment | happy if the cell has every preferred flag, neutral if it has any tolerated flag |
//! | Neighbors | unhappy next to any hated plant, happy next to any liked plant |
//! | Combined | unhappy if either is unhappy, happy only if both are happy |

pub use garden_core as core;
pub use garden_runtime as runtime;

#[cfg(feature = "led")]
pub use garden_led as led;

/// Prelude module for convenient imports.
///
/// The prelude leaves `Result` alone, so hosts keep the standard two-parameter
/// form next to the glob:
///
/// ```rust
/// use garden::prelude::*;
///
/// fn place_tomato(session: &mut GardenSession) -> Result<PlacementOutcome, GardenError> {
///     session.place_plant("tomato", 0, 3)
/// }
///
/// let mut session = SessionBuilder::new().build().unwrap();
/// let outcome = place_tomato(&mut session).unwrap();
/// assert_eq!(outcome.evicted, None);
/// ```
pub mod prelude {
    pub use garden_core::prelude::*;

    pub use garden_runtime::builder::SessionBuilder;
    pub use garden_runtime::config::{BoardConfig, ConfigError, HostConfig, SeedCatalog};
    pub use garden_runtime::session::{
        BoardSnapshot, CellView, GardenSession, PlantReport, SessionEvent, SessionId,
    };

    #[cfg(feature = "led")]
    pub use garden_led::{
        mirror, status_color, LedConfig, LedError, LedNotifier, LedResult, LedSegment,
        MockNotifier, SegmentMap,
    };

    #[cfg(feature = "led-http")]
    pub use garden_led::HttpLedNotifier;
}

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
