//! Candidate regions for a world-space circle.
//!
//! The circle is projected onto the X/Z plane. Its center region is found with
//! [`GridConfig::region_of`], the radius is rounded up to whole regions, and
//! the resulting square is clipped to the grid. Inside that square a cell is
//! skipped when its rectangle cannot touch the circle at all, which keeps the
//! far corners of large squares out of the scan.
//!
//! The result is still over-inclusive: a cell that touches the circle may hold
//! no entity inside it. Callers finish with an exact `distance² <= radius²`
//! check per entity.

use std::iter::FusedIterator;

use glam::{Vec2, Vec3};

use crate::coord::RegionCoord;
use crate::grid::GridConfig;

/// Lazy, restartable row-major walk over the regions a circle may touch.
///
/// # Example
///
/// ```
/// use glam::Vec3;
/// use regions::{GridConfig, RadiusRegions, RegionCoord};
///
/// let grid = GridConfig::new(8, 10.0);
///
/// // A small circle in the middle of region (3, 3) stays inside it.
/// let cells: Vec<_> = RadiusRegions::new(&grid, Vec3::new(35.0, 0.0, 35.0), 2.0).collect();
/// assert_eq!(cells, vec![RegionCoord::new(3, 3)]);
/// ```
#[derive(Debug, Clone)]
pub struct RadiusRegions {
    origin: Vec2,
    region_size: f32,
    center: Vec2,
    sqr_radius: f32,
    /// Clipped square, inclusive; `None` when it misses the grid.
    bounds: Option<(RegionCoord, RegionCoord)>,
    x: u16,
    y: u16,
    done: bool,
}

impl RadiusRegions {
    /// Regions that a circle of `radius` around `center` may touch.
    ///
    /// Negative and NaN radii are treated as zero.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn new(grid: &GridConfig, center: Vec3, radius: f32) -> Self {
        let radius = if radius.is_nan() { 0.0 } else { radius.max(0.0) };
        let cell_radius = (radius / grid.region_size)
            .ceil()
            .min(f32::from(u16::MAX)) as i32;

        let (cx, cy) = grid.region_of(center);
        let edge = i32::from(grid.world_size) - 1;
        let min_x = cx.saturating_sub(cell_radius).max(0);
        let min_y = cy.saturating_sub(cell_radius).max(0);
        let max_x = cx.saturating_add(cell_radius).min(edge);
        let max_y = cy.saturating_add(cell_radius).min(edge);

        let bounds = (min_x <= max_x && min_y <= max_y).then(|| {
            (
                RegionCoord::new(min_x as u8, min_y as u8),
                RegionCoord::new(max_x as u8, max_y as u8),
            )
        });

        let mut iter = Self {
            origin: grid.origin,
            region_size: grid.region_size,
            center: Vec2::new(center.x, center.z),
            sqr_radius: radius * radius,
            bounds,
            x: 0,
            y: 0,
            done: true,
        };
        iter.reset();
        iter
    }

    /// Inclusive corners of the clipped square, or `None` if it misses the grid.
    #[must_use]
    pub fn bounds(&self) -> Option<(RegionCoord, RegionCoord)> {
        self.bounds
    }

    /// Rewind to the first region.
    pub fn reset(&mut self) {
        match self.bounds {
            Some((min, _)) => {
                self.x = u16::from(min.x);
                self.y = u16::from(min.y);
                self.done = false;
            }
            None => self.done = true,
        }
    }

    /// Whether the rectangle of region `(x, y)` touches the circle.
    fn touches_circle(&self, x: u16, y: u16) -> bool {
        let min = self.origin + Vec2::new(f32::from(x), f32::from(y)) * self.region_size;
        let max = min + Vec2::splat(self.region_size);
        let closest = self.center.clamp(min, max);
        self.center.distance_squared(closest) <= self.sqr_radius
    }
}

impl Iterator for RadiusRegions {
    type Item = RegionCoord;

    #[allow(clippy::cast_possible_truncation)]
    fn next(&mut self) -> Option<RegionCoord> {
        let (min, max) = self.bounds?;
        while !self.done {
            let (x, y) = (self.x, self.y);

            self.x += 1;
            if self.x > u16::from(max.x) {
                self.x = u16::from(min.x);
                self.y += 1;
                if self.y > u16::from(max.y) {
                    self.done = true;
                }
            }

            if self.touches_circle(x, y) {
                return Some(RegionCoord::new(x as u8, y as u8));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.bounds {
            Some((min, max)) if !self.done => {
                let width = usize::from(max.x - min.x) + 1;
                let rows_after = usize::from(u16::from(max.y) - self.y);
                let in_row = usize::from(u16::from(max.x) + 1 - self.x);
                (0, Some(rows_after * width + in_row))
            }
            _ => (0, Some(0)),
        }
    }
}

impl FusedIterator for RadiusRegions {}
