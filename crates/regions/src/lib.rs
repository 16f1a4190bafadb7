//! # Regions
//!
//! Fixed-size square grid of world regions, and the cell iterators that every
//! proximity query walks before it touches a region's entity list.
//!
//! The world is split into `world_size x world_size` regions on the X/Z plane.
//! Queries never look at the whole world directly; they pick candidate regions
//! first:
//!
//! - **Ring order**: [`SurroundingRegions`] spirals outward from a center cell,
//!   one Chebyshev ring at a time, clipped to the grid
//! - **Radius bound**: [`RadiusRegions`] covers every cell a world-space circle
//!   touches; entities in those cells still need an exact squared-distance
//!   check
//!
//! ## Quick Start
//!
//! ```
//! use glam::Vec3;
//! use regions::{GridConfig, RadiusRegions, RegionCoord, SurroundingRegions};
//!
//! let grid = GridConfig::new(8, 10.0);
//!
//! // The center cell comes first, then its eight neighbours.
//! let mut rings = SurroundingRegions::new(&grid, RegionCoord::new(3, 3)).with_max_distance(1);
//! assert_eq!(rings.next(), Some(RegionCoord::new(3, 3)));
//! assert_eq!(rings.count(), 8);
//!
//! // A 12 unit circle in the middle of region (3, 3) touches the 3x3 block around it.
//! let cells: Vec<_> = RadiusRegions::new(&grid, Vec3::new(35.0, 0.0, 35.0), 12.0).collect();
//! assert_eq!(cells.len(), 9);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod coord;
pub mod distance;
pub mod grid;
pub mod radius;
pub mod surrounding;

// Re-exports for convenience
pub use coord::RegionCoord;
pub use distance::{sqr_distance, sqr_distance_2d};
pub use grid::{GridConfig, GridConfigError, Regions};
pub use radius::RadiusRegions;
pub use surrounding::SurroundingRegions;
