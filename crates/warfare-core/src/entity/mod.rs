//! Entities stored in the region grid.
//!
//! This module provides the identifiers and traits shared by every entity kind:
//! - [`InstanceId`]: engine-assigned identity of one placed entity
//! - [`AssetId`]: which asset (item, barricade, object definition) it is
//! - [`PlayerId`] / [`GroupId`]: Steam64 owner and group of placeables
//! - [`SpatialEntity`]: anything a proximity query can measure
//! - [`Owned`]: placeables that carry an owner and group
//!
//! The concrete kinds live in [`kinds`].
//!
//! # Example
//!
//! ```
//! use glam::Vec3;
//! use warfare_core::entity::{
//!     AssetId, Barricade, GroupId, InstanceId, Owned, PlayerId, SpatialEntity,
//! };
//!
//! let position = Vec3::new(12.0, 3.0, -40.0);
//! let sandbags = Barricade::new(InstanceId::new(7), AssetId::new(365), position)
//!     .with_owner(PlayerId::new(76_561_198_000_000_001), GroupId::new(1));
//!
//! assert_eq!(sandbags.instance_id().as_u32(), 7);
//! assert_eq!(sandbags.group(), GroupId::new(1));
//! ```

pub mod kinds;

use std::fmt;

use glam::Vec3;
use serde::{Deserialize, Serialize};

pub use kinds::{Barricade, DroppedItem, LevelObject, Structure};

macro_rules! id_newtype {
    ($(#[$meta:meta])* $name:ident($inner:ty), $as_fn:ident) => {
        $(#[$meta])*
        #[derive(
            Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
        )]
        pub struct $name($inner);

        impl $name {
            /// Wraps a raw value.
            #[must_use]
            pub const fn new(value: $inner) -> Self {
                Self(value)
            }

            /// Returns the raw value.
            #[must_use]
            pub const fn $as_fn(self) -> $inner {
                self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<$inner> for $name {
            fn from(value: $inner) -> Self {
                Self::new(value)
            }
        }

        impl From<$name> for $inner {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

id_newtype!(
    /// Engine-assigned identity of one placed entity.
    ///
    /// Unique among live entities of the same kind; reused after removal.
    InstanceId(u32),
    as_u32
);

id_newtype!(
    /// Legacy numeric asset id.
    AssetId(u16),
    as_u16
);

id_newtype!(
    /// Steam64 id of a player.
    PlayerId(u64),
    as_u64
);

id_newtype!(
    /// Steam64 id of a group, or `0` for no group.
    GroupId(u64),
    as_u64
);

/// An entity with a world position that proximity queries can measure.
pub trait SpatialEntity {
    /// Engine-assigned identity.
    fn instance_id(&self) -> InstanceId;

    /// Asset the entity was spawned from.
    fn asset(&self) -> AssetId;

    /// World position.
    fn position(&self) -> Vec3;
}

/// A placeable with an owning player and group.
pub trait Owned {
    /// Player who placed it.
    fn owner(&self) -> PlayerId;

    /// Group it belongs to.
    fn group(&self) -> GroupId;
}
