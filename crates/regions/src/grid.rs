//! Grid configuration and the world-to-region mapping.
//!
//! The grid lies on the X/Z plane. World Y is height and never affects which
//! region a position falls into.

use std::iter::FusedIterator;

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::coord::RegionCoord;

/// Errors raised while loading a [`GridConfig`].
#[derive(Debug, Error)]
pub enum GridConfigError {
    /// The document is not valid JSON or has the wrong shape.
    #[error("failed to parse grid config: {0}")]
    Parse(#[from] serde_json::Error),
    /// `world_size` must be at least one region.
    #[error("world_size must be at least 1")]
    InvalidWorldSize,
    /// `region_size` must be finite and positive.
    #[error("region_size must be finite and positive, got {0}")]
    InvalidRegionSize(f32),
    /// `origin` contains NaN or infinity.
    #[error("origin must be finite")]
    InvalidOrigin,
}

/// Shape of the region grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Number of regions along each side.
    pub world_size: u8,
    /// World units covered by one region along each axis.
    pub region_size: f32,
    /// World X/Z position of the low corner of region `(0, 0)`.
    pub origin: Vec2,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            world_size: 64,
            region_size: 128.0,
            origin: Vec2::splat(-4096.0),
        }
    }
}

impl GridConfig {
    /// Create a grid whose region `(0, 0)` starts at the world origin.
    #[must_use]
    pub fn new(world_size: u8, region_size: f32) -> Self {
        Self {
            world_size,
            region_size,
            origin: Vec2::ZERO,
        }
    }

    /// Set the world position of the grid's low corner.
    #[must_use]
    pub fn with_origin(mut self, origin: Vec2) -> Self {
        self.origin = origin;
        self
    }

    /// Parse and validate a JSON grid description.
    ///
    /// Missing fields take their [`Default`] values.
    ///
    /// # Errors
    ///
    /// Returns [`GridConfigError`] when the JSON is malformed or describes an
    /// unusable grid.
    pub fn from_json(json: &str) -> Result<Self, GridConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        tracing::debug!(
            world_size = config.world_size,
            region_size = config.region_size,
            origin = ?config.origin,
            "loaded grid config"
        );
        Ok(config)
    }

    /// Check that the grid can map positions.
    ///
    /// # Errors
    ///
    /// Returns the first problem found.
    pub fn validate(&self) -> Result<(), GridConfigError> {
        if self.world_size == 0 {
            return Err(GridConfigError::InvalidWorldSize);
        }
        if !self.region_size.is_finite() || self.region_size <= 0.0 {
            return Err(GridConfigError::InvalidRegionSize(self.region_size));
        }
        if !self.origin.is_finite() {
            return Err(GridConfigError::InvalidOrigin);
        }
        Ok(())
    }

    /// Total number of regions.
    #[must_use]
    pub fn region_count(&self) -> usize {
        usize::from(self.world_size) * usize::from(self.world_size)
    }

    /// Whether `(x, y)` names a region of this grid.
    #[must_use]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        let size = i32::from(self.world_size);
        (0..size).contains(&x) && (0..size).contains(&y)
    }

    /// Region cell of a world position, without clamping to the grid.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn region_of(&self, point: Vec3) -> (i32, i32) {
        let x = ((point.x - self.origin.x) / self.region_size).floor() as i32;
        let y = ((point.z - self.origin.y) / self.region_size).floor() as i32;
        (x, y)
    }

    /// Region containing a world position, or `None` when it is off the grid
    /// or not finite.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn try_get_coordinate(&self, point: Vec3) -> Option<RegionCoord> {
        if !point.is_finite() {
            return None;
        }
        let (x, y) = self.region_of(point);
        if self.contains(x, y) {
            Some(RegionCoord::new(x as u8, y as u8))
        } else {
            None
        }
    }

    /// World X/Z position of the center of a region.
    #[must_use]
    pub fn region_center(&self, coord: RegionCoord) -> Vec2 {
        self.origin
            + (Vec2::new(f32::from(coord.x), f32::from(coord.y)) + Vec2::splat(0.5))
                * self.region_size
    }

    /// Iterate every region, row by row.
    #[must_use]
    pub fn regions(&self) -> Regions {
        Regions::new(self.world_size)
    }
}

/// Row-major iterator over every region of a grid.
#[derive(Debug, Clone)]
pub struct Regions {
    world_size: u8,
    next: usize,
}

impl Regions {
    /// Iterate a `world_size x world_size` grid.
    #[must_use]
    pub fn new(world_size: u8) -> Self {
        Self { world_size, next: 0 }
    }

    fn total(&self) -> usize {
        usize::from(self.world_size) * usize::from(self.world_size)
    }
}

impl Iterator for Regions {
    type Item = RegionCoord;

    #[allow(clippy::cast_possible_truncation)]
    fn next(&mut self) -> Option<RegionCoord> {
        if self.next >= self.total() {
            return None;
        }
        let size = usize::from(self.world_size);
        let coord = RegionCoord::new((self.next % size) as u8, (self.next / size) as u8);
        self.next += 1;
        Some(coord)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.total().saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Regions {}

impl FusedIterator for Regions {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_engine_layout() {
        let grid = GridConfig::default();
        assert_eq!(grid.world_size, 64);
        assert_eq!(grid.try_get_coordinate(Vec3::ZERO), Some(RegionCoord::new(32, 32)));
        assert_eq!(
            grid.try_get_coordinate(Vec3::new(-4096.0, 0.0, -4096.0)),
            Some(RegionCoord::new(0, 0))
        );
        assert_eq!(grid.try_get_coordinate(Vec3::new(4096.0, 0.0, 0.0)), None);
    }

    #[test]
    fn test_height_is_ignored() {
        let grid = GridConfig::new(8, 10.0);
        let low = grid.try_get_coordinate(Vec3::new(35.0, -500.0, 42.0));
        let high = grid.try_get_coordinate(Vec3::new(35.0, 500.0, 42.0));
        assert_eq!(low, Some(RegionCoord::new(3, 4)));
        assert_eq!(low, high);
    }

    #[test]
    fn test_region_of_is_unclamped() {
        let grid = GridConfig::new(8, 10.0);
        assert_eq!(grid.region_of(Vec3::new(-5.0, 0.0, 95.0)), (-1, 9));
        assert_eq!(grid.try_get_coordinate(Vec3::new(-5.0, 0.0, 95.0)), None);
    }

    #[test]
    fn test_non_finite_position_has_no_region() {
        let grid = GridConfig::new(8, 10.0);
        assert_eq!(grid.try_get_coordinate(Vec3::NAN), None);
        assert_eq!(grid.try_get_coordinate(Vec3::new(5.0, f32::NAN, 5.0)), None);
        assert_eq!(grid.try_get_coordinate(Vec3::new(f32::INFINITY, 0.0, 5.0)), None);
    }

    #[test]
    fn test_region_center() {
        let grid = GridConfig::new(8, 10.0).with_origin(Vec2::new(-40.0, -40.0));
        assert_eq!(grid.region_center(RegionCoord::new(0, 0)), Vec2::new(-35.0, -35.0));
        assert_eq!(grid.region_center(RegionCoord::new(7, 4)), Vec2::new(35.0, 5.0));
    }

    #[test]
    fn test_regions_row_major() {
        let grid = GridConfig::new(3, 1.0);
        let cells: Vec<_> = grid.regions().collect();
        assert_eq!(cells.len(), 9);
        assert_eq!(cells[0], RegionCoord::new(0, 0));
        assert_eq!(cells[1], RegionCoord::new(1, 0));
        assert_eq!(cells[3], RegionCoord::new(0, 1));
        assert_eq!(cells[8], RegionCoord::new(2, 2));
        assert_eq!(grid.regions().len(), grid.region_count());
    }

    #[test]
    fn test_from_json_fills_defaults() {
        let grid = GridConfig::from_json(r#"{ "world_size": 16 }"#).unwrap();
        assert_eq!(grid.world_size, 16);
        assert!((grid.region_size - 128.0).abs() < f32::EPSILON);
        assert_eq!(grid.origin, Vec2::splat(-4096.0));
    }

    #[test]
    fn test_from_json_full() {
        let json = r#"{ "world_size": 8, "region_size": 10.0, "origin": [0.0, 0.0] }"#;
        let grid = GridConfig::from_json(json).unwrap();
        assert_eq!(grid, GridConfig::new(8, 10.0));
    }

    #[test]
    fn test_from_json_rejects_bad_grids() {
        assert!(matches!(
            GridConfig::from_json(r#"{ "world_size": 0 }"#),
            Err(GridConfigError::InvalidWorldSize)
        ));
        assert!(matches!(
            GridConfig::from_json(r#"{ "region_size": -1.0 }"#),
            Err(GridConfigError::InvalidRegionSize(_))
        ));
        assert!(matches!(
            GridConfig::from_json("not json"),
            Err(GridConfigError::Parse(_))
        ));
    }
}
