//! # Warfare Core
//!
//! Proximity queries over the host engine's region-indexed entity lists.
//!
//! The engine keeps barricades, structures, dropped items and level objects in
//! one list per world region, and mutates those lists on its game thread. This
//! crate reads them through the [`RegionIndex`] capability and answers the
//! questions game logic asks every tick: where is entity N, what is the
//! nearest thing of a kind, and how many are within range.
//!
//! ## Architecture
//!
//! - **Grid**: [`regions`] maps world positions to cells and yields candidate
//!   cells in ring or radius order
//! - **Index**: [`RegionIndex`] exposes per-region lists; [`RegionGrid`] is the
//!   owned implementation
//! - **Queries**: [`query`] scans candidate regions with a squared-distance
//!   check and a caller predicate, returning [`EntityInfo`] handles
//! - **Confinement**: every query and mutation checks a [`GameThread`] first
//!
//! ## Usage
//!
//! ```
//! use glam::Vec3;
//! use warfare_core::entity::{AssetId, Barricade, InstanceId};
//! use warfare_core::query::{barricades, ProximityQuery};
//! use warfare_core::regions::GridConfig;
//! use warfare_core::{GameThread, RegionGrid};
//!
//! let game_thread = GameThread::bind_current();
//! let mut grid = RegionGrid::new(GridConfig::default());
//! let position = Vec3::new(100.0, 40.0, -20.0);
//! let sandbags = Barricade::new(InstanceId::new(1), AssetId::new(365), position);
//! grid.insert(&game_thread, sandbags)?;
//!
//! let query = ProximityQuery::new(Vec3::new(90.0, 40.0, -20.0)).within(25.0);
//! let hit = barricades::closest_barricade(&game_thread, &grid, &query)?;
//! assert!(hit.has_value());
//! # Ok::<(), warfare_core::QueryError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

// Re-export regions for grid setup
pub use regions;

pub mod contribution;
pub mod entity;
pub mod error;
pub mod index;
pub mod info;
pub mod query;
pub mod thread;

#[cfg(test)]
mod tests;

pub use contribution::ContributionTracker;
pub use error::QueryError;
pub use index::{RegionGrid, RegionIndex};
pub use info::{EntityInfo, EntityLocation};
pub use query::{ProximityQuery, QueryFlags};
pub use thread::{GameThread, GameThreadError};
