//! Structure lookups.

use glam::Vec3;

use super::{filter, ProximityQuery, QueryFlags};
use crate::entity::{AssetId, InstanceId, Structure};
use crate::error::QueryError;
use crate::index::RegionIndex;
use crate::info::StructureInfo;
use crate::thread::GameThread;

/// Find a structure by instance id, searching outward from `expected_position`.
///
/// # Errors
///
/// Fails off the game thread.
pub fn find_structure<'a, I>(
    thread: &GameThread,
    index: &'a I,
    instance_id: InstanceId,
    expected_position: Option<Vec3>,
) -> Result<StructureInfo<'a>, QueryError>
where
    I: RegionIndex<Structure> + ?Sized,
{
    super::find_by_instance_id(thread, index, instance_id, expected_position, QueryFlags::empty())
}

/// Closest structure of any kind.
///
/// # Errors
///
/// Fails off the game thread.
pub fn closest_structure<'a, I>(
    thread: &GameThread,
    index: &'a I,
    query: &ProximityQuery,
) -> Result<StructureInfo<'a>, QueryError>
where
    I: RegionIndex<Structure> + ?Sized,
{
    super::closest(thread, index, query, filter::any)
}

/// Closest structure accepted by `predicate`.
///
/// # Errors
///
/// Fails off the game thread.
pub fn closest_structure_where<'a, I, F>(
    thread: &GameThread,
    index: &'a I,
    query: &ProximityQuery,
    predicate: F,
) -> Result<StructureInfo<'a>, QueryError>
where
    I: RegionIndex<Structure> + ?Sized,
    F: FnMut(&Structure) -> bool,
{
    super::closest(thread, index, query, predicate)
}

/// Closest structure spawned from `asset`.
///
/// # Errors
///
/// Fails off the game thread.
pub fn closest_structure_of_asset<'a, I>(
    thread: &GameThread,
    index: &'a I,
    query: &ProximityQuery,
    asset: AssetId,
) -> Result<StructureInfo<'a>, QueryError>
where
    I: RegionIndex<Structure> + ?Sized,
{
    super::closest(thread, index, query, filter::of_asset::<Structure>(asset))
}

/// Whether a structure accepted by `predicate` is in range.
///
/// # Errors
///
/// Fails off the game thread.
pub fn is_structure_in_range<I, F>(
    thread: &GameThread,
    index: &I,
    query: &ProximityQuery,
    predicate: F,
) -> Result<bool, QueryError>
where
    I: RegionIndex<Structure> + ?Sized,
    F: FnMut(&Structure) -> bool,
{
    super::is_in_range(thread, index, query, predicate)
}

/// Count structures in range accepted by `predicate`, stopping at `max`.
///
/// # Errors
///
/// Fails off the game thread.
pub fn count_structures_in_range<I, F>(
    thread: &GameThread,
    index: &I,
    query: &ProximityQuery,
    max: Option<usize>,
    predicate: F,
) -> Result<usize, QueryError>
where
    I: RegionIndex<Structure> + ?Sized,
    F: FnMut(&Structure) -> bool,
{
    super::count(thread, index, query, max, predicate)
}

/// Count structures anywhere, stopping at `max`.
///
/// # Errors
///
/// Fails off the game thread.
pub fn count_structures_where<I, F>(
    thread: &GameThread,
    index: &I,
    max: Option<usize>,
    predicate: F,
) -> Result<usize, QueryError>
where
    I: RegionIndex<Structure> + ?Sized,
    F: FnMut(&Structure) -> bool,
{
    super::count_where(thread, index, QueryFlags::empty(), max, predicate)
}
