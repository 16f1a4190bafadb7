//! Level object lookups.
//!
//! Level objects are part of the map; they never move between regions, so
//! an instance-id lookup with the object's map position as hint is usually
//! resolved in the first region visited.

use glam::Vec3;

use super::{filter, ProximityQuery, QueryFlags};
use crate::entity::{AssetId, InstanceId, LevelObject};
use crate::error::QueryError;
use crate::index::RegionIndex;
use crate::info::ObjectInfo;
use crate::thread::GameThread;

/// Find a level object by instance id, searching outward from `expected_position`.
///
/// # Errors
///
/// Fails off the game thread.
pub fn find_object<'a, I>(
    thread: &GameThread,
    index: &'a I,
    instance_id: InstanceId,
    expected_position: Option<Vec3>,
) -> Result<ObjectInfo<'a>, QueryError>
where
    I: RegionIndex<LevelObject> + ?Sized,
{
    super::find_by_instance_id(thread, index, instance_id, expected_position, QueryFlags::empty())
}

/// Closest level object of any kind.
///
/// # Errors
///
/// Fails off the game thread.
pub fn closest_object<'a, I>(
    thread: &GameThread,
    index: &'a I,
    query: &ProximityQuery,
) -> Result<ObjectInfo<'a>, QueryError>
where
    I: RegionIndex<LevelObject> + ?Sized,
{
    super::closest(thread, index, query, filter::any)
}

/// Closest level object of `asset`.
///
/// # Errors
///
/// Fails off the game thread.
pub fn closest_object_of_asset<'a, I>(
    thread: &GameThread,
    index: &'a I,
    query: &ProximityQuery,
    asset: AssetId,
) -> Result<ObjectInfo<'a>, QueryError>
where
    I: RegionIndex<LevelObject> + ?Sized,
{
    super::closest(thread, index, query, filter::of_asset::<LevelObject>(asset))
}

/// Closest level object accepted by `predicate`.
///
/// # Errors
///
/// Fails off the game thread.
pub fn closest_object_where<'a, I, F>(
    thread: &GameThread,
    index: &'a I,
    query: &ProximityQuery,
    predicate: F,
) -> Result<ObjectInfo<'a>, QueryError>
where
    I: RegionIndex<LevelObject> + ?Sized,
    F: FnMut(&LevelObject) -> bool,
{
    super::closest(thread, index, query, predicate)
}

/// Whether a level object of `asset` is in range.
///
/// # Errors
///
/// Fails off the game thread.
pub fn is_object_in_range<I>(
    thread: &GameThread,
    index: &I,
    query: &ProximityQuery,
    asset: AssetId,
) -> Result<bool, QueryError>
where
    I: RegionIndex<LevelObject> + ?Sized,
{
    super::is_in_range(thread, index, query, filter::of_asset::<LevelObject>(asset))
}

/// Count level objects in range accepted by `predicate`, stopping at `max`.
///
/// # Errors
///
/// Fails off the game thread.
pub fn count_objects_in_range<I, F>(
    thread: &GameThread,
    index: &I,
    query: &ProximityQuery,
    max: Option<usize>,
    predicate: F,
) -> Result<usize, QueryError>
where
    I: RegionIndex<LevelObject> + ?Sized,
    F: FnMut(&LevelObject) -> bool,
{
    super::count(thread, index, query, max, predicate)
}
