//! Region coordinates.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of one cell of the region grid.
///
/// A `RegionCoord` is a plain value: it does not know the grid it belongs to
/// and performs no bounds checking. Coordinates coming from world positions
/// are validated by [`GridConfig::try_get_coordinate`](crate::GridConfig::try_get_coordinate).
///
/// # Example
///
/// ```
/// use regions::RegionCoord;
///
/// let a = RegionCoord::new(3, 3);
/// let b = RegionCoord::new(5, 2);
///
/// assert_eq!(a.chebyshev_distance(b), 2);
/// assert_eq!(a.to_string(), "(3, 3)");
/// ```
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct RegionCoord {
    /// Column, along world X.
    pub x: u8,
    /// Row, along world Z.
    pub y: u8,
}

impl RegionCoord {
    /// Creates a coordinate.
    #[must_use]
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// Ring index of `other` around `self`: `max(|dx|, |dy|)`.
    #[must_use]
    pub const fn chebyshev_distance(self, other: Self) -> u8 {
        let dx = self.x.abs_diff(other.x);
        let dy = self.y.abs_diff(other.y);
        if dx > dy {
            dx
        } else {
            dy
        }
    }

    /// Flat row-major index into a `world_size * world_size` array.
    #[must_use]
    pub const fn index(self, world_size: u8) -> usize {
        self.y as usize * world_size as usize + self.x as usize
    }
}

impl fmt::Display for RegionCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(u8, u8)> for RegionCoord {
    fn from((x, y): (u8, u8)) -> Self {
        Self::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_equality() {
        assert_eq!(RegionCoord::new(1, 2), RegionCoord::from((1, 2)));
        assert_ne!(RegionCoord::new(1, 2), RegionCoord::new(2, 1));
    }

    #[test]
    fn test_chebyshev_distance() {
        let center = RegionCoord::new(10, 10);
        assert_eq!(center.chebyshev_distance(center), 0);
        assert_eq!(center.chebyshev_distance(RegionCoord::new(11, 9)), 1);
        assert_eq!(center.chebyshev_distance(RegionCoord::new(7, 12)), 3);
        assert_eq!(RegionCoord::new(0, 0).chebyshev_distance(RegionCoord::new(255, 4)), 255);
    }

    #[test]
    fn test_row_major_index() {
        assert_eq!(RegionCoord::new(0, 0).index(8), 0);
        assert_eq!(RegionCoord::new(3, 0).index(8), 3);
        assert_eq!(RegionCoord::new(3, 4).index(8), 35);
    }

    #[test]
    fn test_serde_shape() {
        let json = serde_json::to_string(&RegionCoord::new(4, 9)).unwrap();
        assert_eq!(json, r#"{"x":4,"y":9}"#);
    }
}
