//! Ring-ordered iteration around a center region.
//!
//! [`SurroundingRegions`] visits the center cell, then every cell at Chebyshev
//! distance 1, then distance 2, and so on. Each ring is walked clockwise from
//! its low-x, low-y corner:
//!
//! ```text
//!   ring 1 around C, numbered in emission order
//!
//!     1 2 3
//!     8 C 4
//!     7 6 5
//! ```
//!
//! Cells that fall off the grid are skipped. The remaining cells keep their
//! ring order, so every cell of ring `k` is emitted before any cell of ring
//! `k + 1`.

use std::iter::FusedIterator;

use crate::coord::RegionCoord;
use crate::grid::GridConfig;

/// Lazy, restartable spiral over the regions around a center.
///
/// The cursor is a handful of integers; creating one per query is free.
///
/// # Example
///
/// ```
/// use regions::{GridConfig, RegionCoord, SurroundingRegions};
///
/// let grid = GridConfig::new(8, 10.0);
///
/// // From a corner only a quarter of each ring is on the grid.
/// let cells: Vec<_> = SurroundingRegions::new(&grid, RegionCoord::new(0, 0))
///     .with_max_distance(1)
///     .collect();
/// let expected = [(0, 0), (1, 0), (1, 1), (0, 1)].map(RegionCoord::from);
/// assert_eq!(cells, expected);
/// ```
#[derive(Debug, Clone)]
pub struct SurroundingRegions {
    center_x: i32,
    center_y: i32,
    world_size: u8,
    max_distance: u8,
    /// Last ring that will be walked, or `None` when nothing is on the grid.
    last_ring: Option<u16>,
    ring: u16,
    offset: u32,
}

impl SurroundingRegions {
    /// Spiral over the whole grid starting at `center`.
    #[must_use]
    pub fn new(grid: &GridConfig, center: RegionCoord) -> Self {
        let mut iter = Self {
            center_x: i32::from(center.x),
            center_y: i32::from(center.y),
            world_size: grid.world_size,
            max_distance: u8::MAX,
            last_ring: None,
            ring: 0,
            offset: 0,
        };
        iter.last_ring = iter.compute_last_ring();
        iter
    }

    /// Stop after ring `max_distance`.
    #[must_use]
    pub fn with_max_distance(mut self, max_distance: u8) -> Self {
        self.max_distance = max_distance;
        self.last_ring = self.compute_last_ring();
        self
    }

    /// Center of the spiral.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn center(&self) -> RegionCoord {
        RegionCoord::new(self.center_x as u8, self.center_y as u8)
    }

    /// Maximum ring distance.
    #[must_use]
    pub fn max_distance(&self) -> u8 {
        self.max_distance
    }

    /// Ring the cursor is currently on.
    #[must_use]
    pub fn current_ring(&self) -> u16 {
        self.ring
    }

    /// Rewind to the center cell.
    pub fn reset(&mut self) {
        self.ring = 0;
        self.offset = 0;
    }

    fn compute_last_ring(&self) -> Option<u16> {
        if self.world_size == 0 {
            return None;
        }
        let edge = i32::from(self.world_size) - 1;
        let farthest = self
            .center_x
            .max(self.center_y)
            .max(edge - self.center_x)
            .max(edge - self.center_y);
        let last = farthest.min(i32::from(self.max_distance));
        u16::try_from(last).ok()
    }

    /// Cell at position `offset` along the perimeter of ring `k > 0`.
    #[allow(clippy::cast_possible_wrap)]
    fn perimeter_cell(&self, k: i32, offset: u32) -> (i32, i32) {
        let side = 2 * k;
        let i = offset as i32;
        let (cx, cy) = (self.center_x, self.center_y);
        if i < side {
            (cx - k + i, cy - k)
        } else if i < 2 * side {
            (cx + k, cy - k + (i - side))
        } else if i < 3 * side {
            (cx + k - (i - 2 * side), cy + k)
        } else {
            (cx - k, cy + k - (i - 3 * side))
        }
    }

    fn in_bounds(&self, x: i32, y: i32) -> bool {
        let size = i32::from(self.world_size);
        (0..size).contains(&x) && (0..size).contains(&y)
    }

    /// Square cells (clipped or not) already stepped over.
    fn consumed(&self) -> usize {
        let k = usize::from(self.ring);
        let offset = self.offset as usize;
        if k == 0 {
            offset
        } else {
            (2 * k - 1) * (2 * k - 1) + offset
        }
    }
}

impl Iterator for SurroundingRegions {
    type Item = RegionCoord;

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn next(&mut self) -> Option<RegionCoord> {
        let last_ring = self.last_ring?;
        while self.ring <= last_ring {
            let k = i32::from(self.ring);
            let (x, y) = if k == 0 {
                (self.center_x, self.center_y)
            } else {
                self.perimeter_cell(k, self.offset)
            };

            let ring_len = if k == 0 { 1 } else { 8 * u32::from(self.ring) };
            self.offset += 1;
            if self.offset >= ring_len {
                self.ring += 1;
                self.offset = 0;
            }

            if self.in_bounds(x, y) {
                return Some(RegionCoord::new(x as u8, y as u8));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.last_ring {
            Some(last) if self.ring <= last => {
                let side = 2 * usize::from(last) + 1;
                (0, Some(side * side - self.consumed()))
            }
            _ => (0, Some(0)),
        }
    }
}

impl FusedIterator for SurroundingRegions {}
