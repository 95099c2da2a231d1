//! Plant catalog: immutable plant definitions plus their relationship table.
//!
//! Catalogs are assembled once through [`PlantCatalogBuilder`] (or loaded
//! from a [`CatalogSpec`]) and never change afterwards. Plant keys are
//! interned into small [`PlantId`]s in insertion order.

use crate::environment::{self, EnvironmentMask};
use crate::error::{GardenError, Result};
use crate::relationship::{Relationship, RelationshipTable};
use crate::types::Rgb;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Interned plant identifier, valid only within the catalog that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlantId(pub u16);

impl PlantId {
    /// Largest number of plants one catalog can hold.
    pub const MAX_PLANTS: usize = u16::MAX as usize + 1;

    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// The id for `index`, or `None` past [`MAX_PLANTS`](Self::MAX_PLANTS).
    pub fn try_from_index(index: usize) -> Option<Self> {
        u16::try_from(index).ok().map(Self)
    }

    /// For indices already bounded by a catalog's size.
    pub(crate) fn from_index(index: usize) -> Self {
        debug_assert!(index < Self::MAX_PLANTS);
        Self(index as u16)
    }
}

impl fmt::Display for PlantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One plant species and its environmental needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlantDefinition {
    pub id: PlantId,
    /// Unique lookup key, e.g. `"tomato"`.
    pub key: String,
    pub display_name: String,
    pub preferred: EnvironmentMask,
    pub tolerated: EnvironmentMask,
    pub color: Rgb,
}

impl PlantDefinition {
    pub fn thrives_in(&self, cell: EnvironmentMask) -> bool {
        environment::thrives(self.preferred, cell)
    }

    pub fn tolerates(&self, cell: EnvironmentMask) -> bool {
        environment::tolerates(self.tolerated, cell)
    }
}

/// Registry of plant definitions and the relationships between them.
#[derive(Debug, Clone, Default)]
pub struct PlantCatalog {
    plants: Vec<PlantDefinition>,
    by_key: HashMap<String, PlantId>,
    relationships: RelationshipTable,
}

impl PlantCatalog {
    pub fn builder() -> PlantCatalogBuilder {
        PlantCatalogBuilder::default()
    }

    pub fn get(&self, id: PlantId) -> Option<&PlantDefinition> {
        self.plants.get(id.index())
    }

    /// Resolve a plant key to its id.
    pub fn lookup(&self, key: &str) -> Option<PlantId> {
        self.by_key.get(key).copied()
    }

    pub fn get_by_key(&self, key: &str) -> Option<&PlantDefinition> {
        self.lookup(key).and_then(|id| self.get(id))
    }

    /// Like [`lookup`](Self::lookup) but fails with `UnknownPlant`.
    pub fn require(&self, key: &str) -> Result<PlantId> {
        self.lookup(key)
            .ok_or_else(|| GardenError::UnknownPlant(key.to_string()))
    }

    /// How `a` feels about `b`. Neutral when no entry exists or either id is
    /// unknown to this catalog.
    pub fn relationship(&self, a: PlantId, b: PlantId) -> Relationship {
        self.relationships.get(a, b)
    }

    /// Every non-neutral relationship held by `plant`.
    pub fn relationships_of(&self, plant: PlantId) -> Vec<(PlantId, Relationship)> {
        self.relationships.row(plant).collect()
    }

    /// Plants in id order.
    pub fn plants(&self) -> impl Iterator<Item = &PlantDefinition> {
        self.plants.iter()
    }

    pub fn len(&self) -> usize {
        self.plants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plants.is_empty()
    }

    /// Pairs of plants whose relationship differs depending on direction.
    /// Reported for diagnostics; the table is left as authored.
    pub fn asymmetric_pairs(&self) -> Vec<(PlantId, PlantId)> {
        self.relationships.asymmetric_pairs()
    }

    /// Assemble a catalog from trusted static data. Ids are reassigned in
    /// order; relations naming unknown keys are dropped.
    pub(crate) fn assemble(
        mut plants: Vec<PlantDefinition>,
        relations: &[(&str, &str, Relationship)],
    ) -> Self {
        let mut by_key = HashMap::with_capacity(plants.len());
        for (i, plant) in plants.iter_mut().enumerate() {
            plant.id = PlantId::from_index(i);
            by_key.insert(plant.key.clone(), plant.id);
        }
        let mut relationships = RelationshipTable::new(plants.len());
        for (from, to, relationship) in relations {
            if let (Some(&a), Some(&b)) = (by_key.get(*from), by_key.get(*to)) {
                relationships.set(a, b, *relationship);
            }
        }
        Self {
            plants,
            by_key,
            relationships,
        }
    }

    /// Build a catalog from deserialized configuration.
    pub fn from_spec(spec: &CatalogSpec) -> Result<Self> {
        let mut builder = Self::builder();
        for plant in &spec.plants {
            let color = plant
                .color
                .as_deref()
                .and_then(Rgb::from_hex)
                .unwrap_or(Rgb::PURPLE);
            builder = builder.add_plant(
                &plant.id,
                &plant.name,
                plant.preferred,
                plant.tolerated,
                color,
            )?;
        }
        for rel in &spec.relationships {
            builder = if rel.mutual {
                builder.relate_mutual(&rel.from, &rel.to, rel.relationship)?
            } else {
                builder.relate(&rel.from, &rel.to, rel.relationship)?
            };
        }
        Ok(builder.build())
    }

    /// Export back to the serializable form. Neutral entries are omitted.
    pub fn to_spec(&self) -> CatalogSpec {
        let plants = self
            .plants
            .iter()
            .map(|p| PlantSpec {
                id: p.key.clone(),
                name: p.display_name.clone(),
                preferred: p.preferred,
                tolerated: p.tolerated,
                color: Some(p.color.to_hex()),
            })
            .collect();
        let mut relationships = Vec::new();
        for plant in &self.plants {
            for (other, relationship) in self.relationships.row(plant.id) {
                if let Some(other) = self.get(other) {
                    relationships.push(RelationshipSpec {
                        from: plant.key.clone(),
                        to: other.key.clone(),
                        relationship,
                        mutual: false,
                    });
                }
            }
        }
        CatalogSpec {
            plants,
            relationships,
        }
    }
}

struct PendingRelation {
    from: PlantId,
    to: PlantId,
    relationship: Relationship,
}

/// Incremental catalog construction.
///
/// Plants must be added before relationships that mention them.
#[derive(Default)]
pub struct PlantCatalogBuilder {
    plants: Vec<PlantDefinition>,
    by_key: HashMap<String, PlantId>,
    relations: Vec<PendingRelation>,
}

impl PlantCatalogBuilder {
    pub fn add_plant(
        mut self,
        key: &str,
        display_name: &str,
        preferred: EnvironmentMask,
        tolerated: EnvironmentMask,
        color: Rgb,
    ) -> Result<Self> {
        if self.by_key.contains_key(key) {
            return Err(GardenError::DuplicatePlant(key.to_string()));
        }
        let id = PlantId::try_from_index(self.plants.len())
            .ok_or(GardenError::CatalogFull(PlantId::MAX_PLANTS))?;
        self.by_key.insert(key.to_string(), id);
        self.plants.push(PlantDefinition {
            id,
            key: key.to_string(),
            display_name: display_name.to_string(),
            preferred,
            tolerated,
            color,
        });
        Ok(self)
    }

    fn resolve(&self, key: &str) -> Result<PlantId> {
        self.by_key
            .get(key)
            .copied()
            .ok_or_else(|| GardenError::UnknownPlant(key.to_string()))
    }

    /// Record how `from` feels about `to`. A later call for the same pair
    /// overwrites the earlier one.
    pub fn relate(mut self, from: &str, to: &str, relationship: Relationship) -> Result<Self> {
        let from = self.resolve(from)?;
        let to = self.resolve(to)?;
        self.relations.push(PendingRelation {
            from,
            to,
            relationship,
        });
        Ok(self)
    }

    /// Record the same relationship in both directions.
    pub fn relate_mutual(self, a: &str, b: &str, relationship: Relationship) -> Result<Self> {
        self.relate(a, b, relationship)?.relate(b, a, relationship)
    }

    pub fn build(self) -> PlantCatalog {
        let mut relationships = RelationshipTable::new(self.plants.len());
        for rel in self.relations {
            relationships.set(rel.from, rel.to, rel.relationship);
        }
        PlantCatalog {
            plants: self.plants,
            by_key: self.by_key,
            relationships,
        }
    }
}

/// Serializable catalog, as found in a `catalog.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogSpec {
    #[serde(default)]
    pub plants: Vec<PlantSpec>,
    #[serde(default)]
    pub relationships: Vec<RelationshipSpec>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlantSpec {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub preferred: EnvironmentMask,
    #[serde(default)]
    pub tolerated: EnvironmentMask,
    /// `#rrggbb`; falls back to purple when missing or malformed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationshipSpec {
    pub from: String,
    pub to: String,
    pub relationship: Relationship,
    /// Also apply `to → from`.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub mutual: bool,
}
