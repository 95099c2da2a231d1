//! Physical plant tags.
//!
//! Each physical plant token carries a 4-byte tag UID. The registry maps
//! UIDs to catalog plants so a reader at a cell can place the right plant.

use crate::catalog::PlantId;
use crate::error::{GardenError, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_TAG_CAPACITY: usize = 20;

/// A 4-byte tag UID, written `04:53:45:3B`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TagUid(pub [u8; 4]);

impl fmt::Display for TagUid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = self.0;
        write!(f, "{:02X}:{:02X}:{:02X}:{:02X}", a, b, c, d)
    }
}

impl FromStr for TagUid {
    type Err = GardenError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || GardenError::InvalidTag(s.to_string());
        let mut bytes = [0u8; 4];
        let mut parts = s.trim().split(':');
        for byte in &mut bytes {
            let part = parts.next().ok_or_else(invalid)?;
            if part.len() != 2 || !part.bytes().all(|b| b.is_ascii_hexdigit()) {
                return Err(invalid());
            }
            *byte = u8::from_str_radix(part, 16).map_err(|_| invalid())?;
        }
        if parts.next().is_some() {
            return Err(invalid());
        }
        Ok(TagUid(bytes))
    }
}

impl Serialize for TagUid {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TagUid {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Fixed-capacity UID → plant mapping.
#[derive(Debug, Clone)]
pub struct TagRegistry {
    capacity: usize,
    entries: Vec<(TagUid, PlantId)>,
}

impl Default for TagRegistry {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_TAG_CAPACITY)
    }
}

impl TagRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Map `uid` to `plant`. A known UID is re-pointed in place; a new UID
    /// fails with `TagRegistryFull` once capacity is reached.
    pub fn register(&mut self, uid: TagUid, plant: PlantId) -> Result<()> {
        if let Some(entry) = self.entries.iter_mut().find(|(u, _)| *u == uid) {
            entry.1 = plant;
            return Ok(());
        }
        if self.entries.len() >= self.capacity {
            return Err(GardenError::TagRegistryFull(self.capacity));
        }
        self.entries.push((uid, plant));
        Ok(())
    }

    pub fn identify(&self, uid: TagUid) -> Option<PlantId> {
        self.entries
            .iter()
            .find(|(u, _)| *u == uid)
            .map(|(_, plant)| *plant)
    }

    pub fn entries(&self) -> &[(TagUid, PlantId)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
