//! Dropped item lookups and removal.

use glam::Vec3;

use super::{filter, ProximityQuery, QueryFlags};
use crate::entity::{AssetId, DroppedItem, InstanceId};
use crate::error::QueryError;
use crate::index::{RegionGrid, RegionIndex};
use crate::info::ItemInfo;
use crate::thread::GameThread;

/// Find a dropped item by instance id, searching outward from `expected_position`.
///
/// # Errors
///
/// Fails off the game thread.
pub fn find_item<'a, I>(
    thread: &GameThread,
    index: &'a I,
    instance_id: InstanceId,
    expected_position: Option<Vec3>,
) -> Result<ItemInfo<'a>, QueryError>
where
    I: RegionIndex<DroppedItem> + ?Sized,
{
    super::find_by_instance_id(thread, index, instance_id, expected_position, QueryFlags::empty())
}

/// Closest dropped item of any kind.
///
/// # Errors
///
/// Fails off the game thread.
pub fn closest_item<'a, I>(
    thread: &GameThread,
    index: &'a I,
    query: &ProximityQuery,
) -> Result<ItemInfo<'a>, QueryError>
where
    I: RegionIndex<DroppedItem> + ?Sized,
{
    super::closest(thread, index, query, filter::any)
}

/// Closest dropped item accepted by `predicate`.
///
/// # Errors
///
/// Fails off the game thread.
pub fn closest_item_where<'a, I, F>(
    thread: &GameThread,
    index: &'a I,
    query: &ProximityQuery,
    predicate: F,
) -> Result<ItemInfo<'a>, QueryError>
where
    I: RegionIndex<DroppedItem> + ?Sized,
    F: FnMut(&DroppedItem) -> bool,
{
    super::closest(thread, index, query, predicate)
}

/// Closest dropped item of `asset`.
///
/// # Errors
///
/// Fails off the game thread.
pub fn closest_item_of_asset<'a, I>(
    thread: &GameThread,
    index: &'a I,
    query: &ProximityQuery,
    asset: AssetId,
) -> Result<ItemInfo<'a>, QueryError>
where
    I: RegionIndex<DroppedItem> + ?Sized,
{
    super::closest(thread, index, query, filter::of_asset::<DroppedItem>(asset))
}

/// Whether a dropped item accepted by `predicate` is in range.
///
/// # Errors
///
/// Fails off the game thread.
pub fn is_item_in_range<I, F>(
    thread: &GameThread,
    index: &I,
    query: &ProximityQuery,
    predicate: F,
) -> Result<bool, QueryError>
where
    I: RegionIndex<DroppedItem> + ?Sized,
    F: FnMut(&DroppedItem) -> bool,
{
    super::is_in_range(thread, index, query, predicate)
}

/// Count dropped items in range accepted by `predicate`, stopping at `max`.
///
/// # Errors
///
/// Fails off the game thread.
pub fn count_items_in_range<I, F>(
    thread: &GameThread,
    index: &I,
    query: &ProximityQuery,
    max: Option<usize>,
    predicate: F,
) -> Result<usize, QueryError>
where
    I: RegionIndex<DroppedItem> + ?Sized,
    F: FnMut(&DroppedItem) -> bool,
{
    super::count(thread, index, query, max, predicate)
}

/// Every dropped item in range accepted by `predicate`.
///
/// # Errors
///
/// Fails off the game thread.
pub fn items_in_range<'a, I, F>(
    thread: &GameThread,
    index: &'a I,
    query: &ProximityQuery,
    predicate: F,
) -> Result<Vec<ItemInfo<'a>>, QueryError>
where
    I: RegionIndex<DroppedItem> + ?Sized,
    F: FnMut(&DroppedItem) -> bool,
{
    super::collect_in_range(thread, index, query, predicate)
}

/// Remove the dropped item at `index` of region `(x, y)` and return it.
///
/// # Errors
///
/// Fails off the game thread, with [`QueryError::RegionOutOfRange`] for
/// coordinates off the grid, and with [`QueryError::IndexOutOfRange`] past
/// the end of the region.
pub fn destroy_dropped_item(
    thread: &GameThread,
    items: &mut RegionGrid<DroppedItem>,
    x: i32,
    y: i32,
    index: usize,
) -> Result<DroppedItem, QueryError> {
    let item = items.remove(thread, x, y, index)?;
    tracing::debug!(
        instance_id = %item.instance_id,
        asset = %item.asset,
        x,
        y,
        "destroyed dropped item"
    );
    Ok(item)
}
