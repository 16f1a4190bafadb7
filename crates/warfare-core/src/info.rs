//! Query results.
//!
//! An [`EntityInfo`] names where a query found an entity: which list and at
//! which index. It borrows the index it came from, so the borrow checker keeps
//! it from outliving the tick in which the lists could change underneath it.

use std::fmt;

use regions::RegionCoord;
use serde::{Deserialize, Serialize};

use crate::entity::{Barricade, DroppedItem, LevelObject, Structure};

/// The list an entity lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityLocation {
    /// A world region.
    Region(RegionCoord),
    /// The planted list of a vehicle.
    Plant(u16),
}

impl Default for EntityLocation {
    fn default() -> Self {
        Self::Region(RegionCoord::default())
    }
}

impl fmt::Display for EntityLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Region(coord) => write!(f, "region {coord}"),
            Self::Plant(plant) => write!(f, "plant {plant}"),
        }
    }
}

/// Single-tick result of a lookup.
///
/// `has_value()` is true exactly when an entity was found. A miss carries
/// index `0` and the default location.
#[derive(Debug)]
pub struct EntityInfo<'a, E> {
    entity: Option<&'a E>,
    index: usize,
    location: EntityLocation,
}

impl<E> Clone for EntityInfo<'_, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for EntityInfo<'_, E> {}

impl<'a, E> EntityInfo<'a, E> {
    /// The empty result.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            entity: None,
            index: 0,
            location: EntityLocation::Region(RegionCoord::new(0, 0)),
        }
    }

    /// A hit at `index` of the list at `location`.
    #[must_use]
    pub const fn found(entity: &'a E, index: usize, location: EntityLocation) -> Self {
        Self {
            entity: Some(entity),
            index,
            location,
        }
    }

    /// Whether an entity was found.
    #[must_use]
    pub const fn has_value(&self) -> bool {
        self.entity.is_some()
    }

    /// The entity, if found.
    #[must_use]
    pub const fn entity(&self) -> Option<&'a E> {
        self.entity
    }

    /// Index within its list.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// List the entity lives in.
    #[must_use]
    pub const fn location(&self) -> EntityLocation {
        self.location
    }

    /// Region coordinate, or `None` for planted entities and misses.
    #[must_use]
    pub fn region(&self) -> Option<RegionCoord> {
        match (self.entity, self.location) {
            (Some(_), EntityLocation::Region(coord)) => Some(coord),
            _ => None,
        }
    }
}

impl<E> Default for EntityInfo<'_, E> {
    fn default() -> Self {
        Self::none()
    }
}

/// Barricade lookup result.
pub type BarricadeInfo<'a> = EntityInfo<'a, Barricade>;
/// Structure lookup result.
pub type StructureInfo<'a> = EntityInfo<'a, Structure>;
/// Dropped item lookup result.
pub type ItemInfo<'a> = EntityInfo<'a, DroppedItem>;
/// Level object lookup result.
pub type ObjectInfo<'a> = EntityInfo<'a, LevelObject>;
