//! Environment model: light and moisture as a bitmask.
//!
//! Six flags split over two disjoint axes:
//!
//! | Axis | Flags |
//! |------|-------|
//! | light | `SUNNY` (1), `PARTIAL_SHADE` (2), `SHADE` (4) |
//! | moisture | `DRY` (8), `MOIST` (16), `WET` (32) |
//!
//! A *cell* mask carries at most one flag per axis. A plant's preferred or
//! tolerated mask may combine any flags.
//!
//! ```
//! use garden_core::environment::{thrives, tolerates, EnvironmentMask};
//!
//! let preferred = EnvironmentMask::SUNNY | EnvironmentMask::MOIST;
//! let cell = EnvironmentMask::SUNNY | EnvironmentMask::PARTIAL_SHADE | EnvironmentMask::MOIST;
//! assert!(thrives(preferred, cell));
//! assert!(tolerates(EnvironmentMask::MOIST, cell));
//! ```

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use std::fmt;

bitflags! {
    /// Environment flags over the light and moisture axes.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct EnvironmentMask: u8 {
        const SUNNY = 1 << 0;
        const PARTIAL_SHADE = 1 << 1;
        const SHADE = 1 << 2;
        const DRY = 1 << 3;
        const MOIST = 1 << 4;
        const WET = 1 << 5;

        /// Every light flag.
        const LIGHT = Self::SUNNY.bits() | Self::PARTIAL_SHADE.bits() | Self::SHADE.bits();
        /// Every moisture flag.
        const MOISTURE = Self::DRY.bits() | Self::MOIST.bits() | Self::WET.bits();
    }
}

impl Default for EnvironmentMask {
    fn default() -> Self {
        Self::empty()
    }
}

/// Light condition of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Light {
    Sunny,
    PartialShade,
    Shade,
}

impl Light {
    pub const ALL: [Light; 3] = [Light::Sunny, Light::PartialShade, Light::Shade];

    pub fn flag(self) -> EnvironmentMask {
        match self {
            Light::Sunny => EnvironmentMask::SUNNY,
            Light::PartialShade => EnvironmentMask::PARTIAL_SHADE,
            Light::Shade => EnvironmentMask::SHADE,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Light::Sunny => "Sunny",
            Light::PartialShade => "Partially Shaded",
            Light::Shade => "Shaded",
        }
    }
}

/// Moisture condition of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Moisture {
    Dry,
    Moist,
    Wet,
}

impl Moisture {
    pub const ALL: [Moisture; 3] = [Moisture::Dry, Moisture::Moist, Moisture::Wet];

    pub fn flag(self) -> EnvironmentMask {
        match self {
            Moisture::Dry => EnvironmentMask::DRY,
            Moisture::Moist => EnvironmentMask::MOIST,
            Moisture::Wet => EnvironmentMask::WET,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Moisture::Dry => "Dry",
            Moisture::Moist => "Moist",
            Moisture::Wet => "Wet",
        }
    }
}

impl EnvironmentMask {
    /// Build a well-formed cell mask from optional axis values.
    pub fn cell(light: Option<Light>, moisture: Option<Moisture>) -> Self {
        let mut mask = Self::empty();
        if let Some(light) = light {
            mask |= light.flag();
        }
        if let Some(moisture) = moisture {
            mask |= moisture.flag();
        }
        mask
    }

    /// The light condition, if exactly one light flag is set.
    pub fn light(self) -> Option<Light> {
        Light::ALL
            .into_iter()
            .find(|l| (self & Self::LIGHT) == l.flag())
    }

    /// The moisture condition, if exactly one moisture flag is set.
    pub fn moisture(self) -> Option<Moisture> {
        Moisture::ALL
            .into_iter()
            .find(|m| (self & Self::MOISTURE) == m.flag())
    }

    /// Human description such as `"Sunny, Moist"`. An axis without exactly
    /// one flag is described as `"Unknown"`.
    pub fn describe(self) -> String {
        let light = self.light().map(Light::label).unwrap_or("Unknown");
        let moisture = self.moisture().map(Moisture::label).unwrap_or("Unknown");
        format!("{}, {}", light, moisture)
    }
}

impl fmt::Display for EnvironmentMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "NONE");
        }
        bitflags::parser::to_writer(self, f)
    }
}

/// Every preferred flag is present in the cell (mask containment).
/// An empty preference is trivially met.
pub fn thrives(preferred: EnvironmentMask, cell: EnvironmentMask) -> bool {
    (preferred & cell) == preferred
}

/// At least one tolerated flag is present in the cell. An empty tolerance
/// never matches.
pub fn tolerates(tolerated: EnvironmentMask, cell: EnvironmentMask) -> bool {
    !(tolerated & cell).is_empty()
}
