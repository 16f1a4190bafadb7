//! Proximity queries over a [`RegionIndex`].
//!
//! Every query has the same shape: pick candidate regions, then scan each
//! region's list in order, measuring squared distance and applying a
//! predicate.
//!
//! | query | candidate regions |
//! |-------|-------------------|
//! | [`find_by_instance_id`] | spiral from the hint region, else the whole grid |
//! | [`closest`], [`count`], [`collect_in_range`] with a range | [`RadiusRegions`] |
//! | the same without a range, [`count_where`] | the whole grid, row by row |
//!
//! Planted lists are scanned after the regions when
//! [`QueryFlags::INCLUDE_PLANTED`] is set.
//!
//! # Thread confinement
//!
//! Each query checks its [`GameThread`] before reading any list and fails
//! with [`QueryError::WrongThread`] otherwise.
//!
//! # Ties
//!
//! [`closest`] replaces its best candidate only on a strictly smaller squared
//! distance, so among equally distant entities the first one in scan order
//! wins. Scan order is deterministic for a fixed grid, but the host may
//! reorder a region's list between ticks.
//!
//! # Example
//!
//! ```
//! use glam::Vec3;
//! use regions::GridConfig;
//! use warfare_core::entity::{AssetId, Barricade, InstanceId};
//! use warfare_core::index::RegionGrid;
//! use warfare_core::query::{self, ProximityQuery};
//! use warfare_core::thread::GameThread;
//!
//! let game_thread = GameThread::bind_current();
//! let mut barricades = RegionGrid::new(GridConfig::new(8, 10.0));
//! for (id, x) in [(1, 12.0), (2, 31.0), (3, 55.0)] {
//!     let position = Vec3::new(x, 0.0, 30.0);
//!     let barricade = Barricade::new(InstanceId::new(id), AssetId::new(365), position);
//!     barricades.insert(&game_thread, barricade)?;
//! }
//!
//! let near = ProximityQuery::new(Vec3::new(30.0, 0.0, 30.0)).within(10.0);
//! let hit = query::closest(&game_thread, &barricades, &near, |_: &Barricade| true)?;
//! assert_eq!(hit.entity().map(|b| b.instance_id), Some(InstanceId::new(2)));
//! assert_eq!(query::count(&game_thread, &barricades, &near, None, |_: &Barricade| true)?, 1);
//! # Ok::<(), warfare_core::QueryError>(())
//! ```

pub mod barricades;
pub mod filter;
pub mod items;
pub mod objects;
pub mod structures;

use std::ops::ControlFlow;

use bitflags::bitflags;
use glam::Vec3;
use regions::{sqr_distance, RadiusRegions, RegionCoord, Regions, SurroundingRegions};
use serde::{Deserialize, Serialize};

use crate::entity::{InstanceId, SpatialEntity};
use crate::error::QueryError;
use crate::index::RegionIndex;
use crate::info::{EntityInfo, EntityLocation};
use crate::thread::GameThread;

bitflags! {
    /// Options shared by proximity queries.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct QueryFlags: u8 {
        /// Measure distance on the X/Z plane only.
        const HORIZONTAL_ONLY = 1;
        /// Also scan vehicle plant lists.
        const INCLUDE_PLANTED = 1 << 1;
    }
}

/// Where to look and how to measure.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProximityQuery {
    /// Query origin.
    pub position: Vec3,
    /// Maximum distance; `None` searches the whole grid.
    pub range: Option<f32>,
    /// Distance and scan options.
    pub flags: QueryFlags,
}

impl ProximityQuery {
    /// Unbounded query around `position`.
    #[must_use]
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            range: None,
            flags: QueryFlags::empty(),
        }
    }

    /// Only accept entities within `range`.
    #[must_use]
    pub fn within(mut self, range: f32) -> Self {
        self.range = Some(range);
        self
    }

    /// Ignore height when measuring.
    #[must_use]
    pub fn horizontal_only(mut self) -> Self {
        self.flags |= QueryFlags::HORIZONTAL_ONLY;
        self
    }

    /// Scan vehicle plant lists too.
    #[must_use]
    pub fn include_planted(mut self) -> Self {
        self.flags |= QueryFlags::INCLUDE_PLANTED;
        self
    }

    /// Replace all flags.
    #[must_use]
    pub fn with_flags(mut self, flags: QueryFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Squared distance from the query origin, honoring `HORIZONTAL_ONLY`.
    #[must_use]
    pub fn sqr_distance_to(&self, point: Vec3) -> f32 {
        sqr_distance(
            self.position,
            point,
            self.flags.contains(QueryFlags::HORIZONTAL_ONLY),
        )
    }

    /// Squared range, or `None` when unbounded.
    fn sqr_range(&self) -> Option<f32> {
        self.range.map(|r| {
            let r = r.max(0.0);
            r * r
        })
    }
}

/// Candidate regions for one query.
enum Candidates {
    All(Regions),
    Radius(RadiusRegions),
    Spiral(SurroundingRegions),
}

impl Candidates {
    fn for_query<E, I: RegionIndex<E> + ?Sized>(index: &I, query: &ProximityQuery) -> Self {
        match query.range {
            Some(range) => Self::Radius(RadiusRegions::new(index.grid(), query.position, range)),
            None => Self::All(index.grid().regions()),
        }
    }
}

impl Iterator for Candidates {
    type Item = RegionCoord;

    fn next(&mut self) -> Option<RegionCoord> {
        match self {
            Self::All(iter) => iter.next(),
            Self::Radius(iter) => iter.next(),
            Self::Spiral(iter) => iter.next(),
        }
    }
}

/// Visit every entity of the candidate regions, then the plant lists if asked.
fn scan<'a, E: 'a, I, F>(
    index: &'a I,
    candidates: Candidates,
    flags: QueryFlags,
    mut visit: F,
) -> ControlFlow<()>
where
    I: RegionIndex<E> + ?Sized,
    F: FnMut(&'a E, usize, EntityLocation) -> ControlFlow<()>,
{
    for coord in candidates {
        let location = EntityLocation::Region(coord);
        for (i, entity) in index.region(coord).iter().enumerate() {
            visit(entity, i, location)?;
        }
    }
    if flags.contains(QueryFlags::INCLUDE_PLANTED) {
        for plant in 0..index.plant_count() {
            let location = EntityLocation::Plant(plant);
            for (i, entity) in index.plant(plant).iter().enumerate() {
                visit(entity, i, location)?;
            }
        }
    }
    ControlFlow::Continue(())
}

/// Find an entity by its engine-assigned instance id.
///
/// With a `hint` position on the grid the search spirals out from the hint's
/// region, so an entity near its expected position is found after a few
/// regions; the spiral still reaches every region. Without a usable hint the
/// whole grid is scanned row by row.
///
/// # Errors
///
/// Fails off the game thread. A missing entity is `EntityInfo::none()`.
pub fn find_by_instance_id<'a, E, I>(
    thread: &GameThread,
    index: &'a I,
    instance_id: InstanceId,
    hint: Option<Vec3>,
    flags: QueryFlags,
) -> Result<EntityInfo<'a, E>, QueryError>
where
    E: SpatialEntity,
    I: RegionIndex<E> + ?Sized,
{
    thread.assert_current()?;

    let grid = index.grid();
    let candidates = match hint.and_then(|p| grid.try_get_coordinate(p)) {
        Some(center) => Candidates::Spiral(SurroundingRegions::new(grid, center)),
        None => {
            tracing::trace!(%instance_id, ?hint, "no usable region hint, scanning whole grid");
            Candidates::All(grid.regions())
        }
    };

    let mut found = EntityInfo::none();
    let _ = scan::<E, I, _>(index, candidates, flags, |entity, i, location| {
        if entity.instance_id() == instance_id {
            found = EntityInfo::found(entity, i, location);
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    });
    Ok(found)
}

/// Closest entity accepted by `predicate`.
///
/// # Errors
///
/// Fails off the game thread. No match is `EntityInfo::none()`.
pub fn closest<'a, E, I, F>(
    thread: &GameThread,
    index: &'a I,
    query: &ProximityQuery,
    mut predicate: F,
) -> Result<EntityInfo<'a, E>, QueryError>
where
    E: SpatialEntity,
    I: RegionIndex<E> + ?Sized,
    F: FnMut(&E) -> bool,
{
    thread.assert_current()?;

    let sqr_range = query.sqr_range();
    let mut best = EntityInfo::none();
    let mut best_sqr = f32::INFINITY;
    let _ = scan::<E, I, _>(
        index,
        Candidates::for_query::<E, I>(index, query),
        query.flags,
        |entity, i, location| {
            let d = query.sqr_distance_to(entity.position());
            let in_range = sqr_range.map_or(true, |r| d <= r);
            if in_range && d < best_sqr && predicate(entity) {
                best_sqr = d;
                best = EntityInfo::found(entity, i, location);
            }
            ControlFlow::Continue(())
        },
    );
    Ok(best)
}

/// Whether any entity accepted by `predicate` is in range.
///
/// # Errors
///
/// Fails off the game thread.
pub fn is_in_range<E, I, F>(
    thread: &GameThread,
    index: &I,
    query: &ProximityQuery,
    predicate: F,
) -> Result<bool, QueryError>
where
    E: SpatialEntity,
    I: RegionIndex<E> + ?Sized,
    F: FnMut(&E) -> bool,
{
    Ok(closest(thread, index, query, predicate)?.has_value())
}

/// Count entities in range accepted by `predicate`.
///
/// With `max`, returns as soon as the count reaches it; the predicate is not
/// called again after that. Distance is checked before the predicate, so the
/// predicate only sees entities in range.
///
/// # Errors
///
/// Fails off the game thread.
pub fn count<E, I, F>(
    thread: &GameThread,
    index: &I,
    query: &ProximityQuery,
    max: Option<usize>,
    mut predicate: F,
) -> Result<usize, QueryError>
where
    E: SpatialEntity,
    I: RegionIndex<E> + ?Sized,
    F: FnMut(&E) -> bool,
{
    thread.assert_current()?;

    if max == Some(0) {
        return Ok(0);
    }

    let sqr_range = query.sqr_range();
    let mut total = 0;
    let _ = scan::<E, I, _>(
        index,
        Candidates::for_query::<E, I>(index, query),
        query.flags,
        |entity, _, _| {
            let in_range =
                sqr_range.map_or(true, |r| query.sqr_distance_to(entity.position()) <= r);
            if in_range && predicate(entity) {
                total += 1;
                if max.is_some_and(|m| total >= m) {
                    return ControlFlow::Break(());
                }
            }
            ControlFlow::Continue(())
        },
    );
    Ok(total)
}

/// Count entities anywhere on the grid accepted by `predicate`.
///
/// Same early exit as [`count`].
///
/// # Errors
///
/// Fails off the game thread.
pub fn count_where<E, I, F>(
    thread: &GameThread,
    index: &I,
    flags: QueryFlags,
    max: Option<usize>,
    predicate: F,
) -> Result<usize, QueryError>
where
    E: SpatialEntity,
    I: RegionIndex<E> + ?Sized,
    F: FnMut(&E) -> bool,
{
    let query = ProximityQuery::new(Vec3::ZERO).with_flags(flags);
    count(thread, index, &query, max, predicate)
}

/// Every entity in range accepted by `predicate`, in scan order.
///
/// # Errors
///
/// Fails off the game thread.
pub fn collect_in_range<'a, E, I, F>(
    thread: &GameThread,
    index: &'a I,
    query: &ProximityQuery,
    mut predicate: F,
) -> Result<Vec<EntityInfo<'a, E>>, QueryError>
where
    E: SpatialEntity,
    I: RegionIndex<E> + ?Sized,
    F: FnMut(&E) -> bool,
{
    thread.assert_current()?;

    let sqr_range = query.sqr_range();
    let mut hits = Vec::new();
    let _ = scan::<E, I, _>(
        index,
        Candidates::for_query::<E, I>(index, query),
        query.flags,
        |entity, i, location| {
            let in_range =
                sqr_range.map_or(true, |r| query.sqr_distance_to(entity.position()) <= r);
            if in_range && predicate(entity) {
                hits.push(EntityInfo::found(entity, i, location));
            }
            ControlFlow::Continue(())
        },
    );
    Ok(hits)
}
