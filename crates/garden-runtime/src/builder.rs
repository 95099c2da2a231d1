//! Session builder.
//!
//! Defaults give the shipped board: the companion catalog on the 6×6
//! reference layout in Environment mode, with the board's tags registered.
//!
//! ```rust
//! use garden_runtime::builder::SessionBuilder;
//! use garden_core::prelude::*;
//!
//! let session = SessionBuilder::new()
//!     .with_catalog(seed::starter_catalog())
//!     .with_layout(seed::sunny_layout(4, 4))
//!     .with_mode(GameMode::Combined)
//!     .build()
//!     .unwrap();
//! assert_eq!(session.grid().rows(), 4);
//! ```

use crate::session::GardenSession;
use garden_core::catalog::PlantCatalog;
use garden_core::error::Result;
use garden_core::grid::{Grid, Layout};
use garden_core::mode::GameMode;
use garden_core::seed;
use garden_core::tags::TagRegistry;

#[derive(Default)]
pub struct SessionBuilder {
    catalog: Option<PlantCatalog>,
    layout: Option<Layout>,
    mode: GameMode,
    tags: Option<TagRegistry>,
}

impl SessionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_catalog(mut self, catalog: PlantCatalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = Some(layout);
        self
    }

    pub fn with_mode(mut self, mode: GameMode) -> Self {
        self.mode = mode;
        self
    }

    /// Replace the default tag set (the board's tags that resolve against
    /// the chosen catalog).
    pub fn with_tags(mut self, tags: TagRegistry) -> Self {
        self.tags = Some(tags);
        self
    }

    /// Fails when the layout is ragged or the board's tags overflow the
    /// registry.
    pub fn build(self) -> Result<GardenSession> {
        let catalog = self.catalog.unwrap_or_else(seed::companion_catalog);
        let layout = self.layout.unwrap_or_else(seed::reference_layout);
        let grid = Grid::from_layout(&layout)?;
        let tags = match self.tags {
            Some(tags) => tags,
            None => seed::board_tags(&catalog)?,
        };
        Ok(GardenSession::new(catalog, grid, self.mode, tags))
    }
}
