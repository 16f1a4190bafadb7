//! Error type for queries and grid mutations.
//!
//! A missing entity is never an error; lookups report it as
//! [`EntityInfo::none`](crate::info::EntityInfo::none).

use thiserror::Error;

use crate::info::EntityLocation;
use crate::thread::GameThreadError;

/// Failure of a query or grid mutation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QueryError {
    /// Called off the game thread.
    #[error(transparent)]
    WrongThread(#[from] GameThreadError),

    /// Explicit region coordinates outside the grid.
    #[error("region ({x}, {y}) is outside the {world_size}x{world_size} grid")]
    RegionOutOfRange {
        /// Requested column.
        x: i32,
        /// Requested row.
        y: i32,
        /// Regions per side.
        world_size: u8,
    },

    /// Index past the end of a region or plant list.
    #[error("index {index} is out of range for {location} holding {len} entities")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Current list length.
        len: usize,
        /// List that was indexed.
        location: EntityLocation,
    },

    /// Vehicle plant that does not exist.
    #[error("vehicle plant {0} does not exist")]
    PlantOutOfRange(u16),

    /// No more vehicle plants can be registered.
    #[error("plant list is full")]
    TooManyPlants,

    /// World position that maps to no region.
    #[error("position ({x}, {z}) is outside the world grid")]
    OutsideWorld {
        /// World X.
        x: f32,
        /// World Z.
        z: f32,
    },
}
