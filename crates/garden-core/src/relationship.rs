//! Pairwise plant relationships.
//!
//! Relationships are directional: `tomato → carrot` and `carrot → tomato`
//! are separate entries and catalog authors are expected to set both.
//! Nothing here forces symmetry; [`RelationshipTable::asymmetric_pairs`]
//! only reports where the two directions disagree.

use crate::catalog::PlantId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How one plant feels about a neighbor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Relationship {
    #[default]
    Neutral,
    Likes,
    Hates,
}

impl fmt::Display for Relationship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Relationship::Neutral => write!(f, "neutral"),
            Relationship::Likes => write!(f, "likes"),
            Relationship::Hates => write!(f, "hates"),
        }
    }
}

/// Dense `n × n` relationship matrix indexed by [`PlantId`].
///
/// Row `a`, column `b` holds how `a` feels about `b`. Lookups outside the
/// matrix return [`Relationship::Neutral`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelationshipTable {
    size: usize,
    cells: Vec<Relationship>,
}

impl RelationshipTable {
    /// An all-neutral table for `size` plants.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Relationship::Neutral; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    fn index(&self, from: PlantId, to: PlantId) -> Option<usize> {
        let (a, b) = (from.index(), to.index());
        (a < self.size && b < self.size).then_some(a * self.size + b)
    }

    /// Set how `from` feels about `to`. Returns false (and changes nothing)
    /// if either id is outside the table.
    pub fn set(&mut self, from: PlantId, to: PlantId, relationship: Relationship) -> bool {
        match self.index(from, to) {
            Some(i) => {
                self.cells[i] = relationship;
                true
            }
            None => false,
        }
    }

    /// How `from` feels about `to`. Total: unknown ids are neutral.
    pub fn get(&self, from: PlantId, to: PlantId) -> Relationship {
        self.index(from, to)
            .map(|i| self.cells[i])
            .unwrap_or_default()
    }

    /// Non-neutral entries of one plant's row, in id order.
    pub fn row(&self, from: PlantId) -> impl Iterator<Item = (PlantId, Relationship)> + '_ {
        let start = from.index().min(self.size) * self.size;
        let end = if from.index() < self.size { start + self.size } else { start };
        self.cells[start..end]
            .iter()
            .enumerate()
            .filter(|(_, r)| **r != Relationship::Neutral)
            .map(|(i, r)| (PlantId::from_index(i), *r))
    }

    /// Unordered pairs `(a, b)` with `a < b` whose two directions differ.
    pub fn asymmetric_pairs(&self) -> Vec<(PlantId, PlantId)> {
        let mut pairs = Vec::new();
        for a in 0..self.size {
            for b in (a + 1)..self.size {
                let (pa, pb) = (PlantId::from_index(a), PlantId::from_index(b));
                if self.get(pa, pb) != self.get(pb, pa) {
                    pairs.push((pa, pb));
                }
            }
        }
        pairs
    }
}
