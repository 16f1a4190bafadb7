//! Barricade lookups.
//!
//! Barricades are the only kind with vehicle plant lists, so lookups by
//! instance id always search planted barricades as well. Proximity queries
//! include them only when the query sets `INCLUDE_PLANTED`.

use glam::Vec3;

use super::{filter, ProximityQuery, QueryFlags};
use crate::entity::{AssetId, Barricade, GroupId, InstanceId};
use crate::error::QueryError;
use crate::index::RegionIndex;
use crate::info::BarricadeInfo;
use crate::thread::GameThread;

/// Find a barricade by instance id, searching outward from `expected_position`.
///
/// # Errors
///
/// Fails off the game thread.
pub fn find_barricade<'a, I>(
    thread: &GameThread,
    index: &'a I,
    instance_id: InstanceId,
    expected_position: Option<Vec3>,
) -> Result<BarricadeInfo<'a>, QueryError>
where
    I: RegionIndex<Barricade> + ?Sized,
{
    super::find_by_instance_id(
        thread,
        index,
        instance_id,
        expected_position,
        QueryFlags::INCLUDE_PLANTED,
    )
}

/// Closest barricade of any kind.
///
/// # Errors
///
/// Fails off the game thread.
pub fn closest_barricade<'a, I>(
    thread: &GameThread,
    index: &'a I,
    query: &ProximityQuery,
) -> Result<BarricadeInfo<'a>, QueryError>
where
    I: RegionIndex<Barricade> + ?Sized,
{
    super::closest(thread, index, query, filter::any)
}

/// Closest barricade accepted by `predicate`.
///
/// # Errors
///
/// Fails off the game thread.
pub fn closest_barricade_where<'a, I, F>(
    thread: &GameThread,
    index: &'a I,
    query: &ProximityQuery,
    predicate: F,
) -> Result<BarricadeInfo<'a>, QueryError>
where
    I: RegionIndex<Barricade> + ?Sized,
    F: FnMut(&Barricade) -> bool,
{
    super::closest(thread, index, query, predicate)
}

/// Closest barricade spawned from `asset`.
///
/// # Errors
///
/// Fails off the game thread.
pub fn closest_barricade_of_asset<'a, I>(
    thread: &GameThread,
    index: &'a I,
    query: &ProximityQuery,
    asset: AssetId,
) -> Result<BarricadeInfo<'a>, QueryError>
where
    I: RegionIndex<Barricade> + ?Sized,
{
    super::closest(thread, index, query, filter::of_asset::<Barricade>(asset))
}

/// Closest barricade of `asset` belonging to `group`.
///
/// # Errors
///
/// Fails off the game thread.
pub fn closest_friendly_barricade<'a, I>(
    thread: &GameThread,
    index: &'a I,
    query: &ProximityQuery,
    asset: AssetId,
    group: GroupId,
) -> Result<BarricadeInfo<'a>, QueryError>
where
    I: RegionIndex<Barricade> + ?Sized,
{
    let of_asset = filter::of_asset::<Barricade>(asset);
    let in_group = filter::in_group::<Barricade>(group);
    super::closest(thread, index, query, |b: &Barricade| of_asset(b) && in_group(b))
}

/// Whether a barricade accepted by `predicate` is in range.
///
/// # Errors
///
/// Fails off the game thread.
pub fn is_barricade_in_range<I, F>(
    thread: &GameThread,
    index: &I,
    query: &ProximityQuery,
    predicate: F,
) -> Result<bool, QueryError>
where
    I: RegionIndex<Barricade> + ?Sized,
    F: FnMut(&Barricade) -> bool,
{
    super::is_in_range(thread, index, query, predicate)
}

/// Count barricades in range accepted by `predicate`, stopping at `max`.
///
/// # Errors
///
/// Fails off the game thread.
pub fn count_barricades_in_range<I, F>(
    thread: &GameThread,
    index: &I,
    query: &ProximityQuery,
    max: Option<usize>,
    predicate: F,
) -> Result<usize, QueryError>
where
    I: RegionIndex<Barricade> + ?Sized,
    F: FnMut(&Barricade) -> bool,
{
    super::count(thread, index, query, max, predicate)
}

/// Count barricades anywhere, planted ones included, stopping at `max`.
///
/// # Errors
///
/// Fails off the game thread.
pub fn count_barricades_where<I, F>(
    thread: &GameThread,
    index: &I,
    max: Option<usize>,
    predicate: F,
) -> Result<usize, QueryError>
where
    I: RegionIndex<Barricade> + ?Sized,
    F: FnMut(&Barricade) -> bool,
{
    super::count_where(thread, index, QueryFlags::INCLUDE_PLANTED, max, predicate)
}

/// Every barricade in range accepted by `predicate`.
///
/// # Errors
///
/// Fails off the game thread.
pub fn barricades_in_range<'a, I, F>(
    thread: &GameThread,
    index: &'a I,
    query: &ProximityQuery,
    predicate: F,
) -> Result<Vec<BarricadeInfo<'a>>, QueryError>
where
    I: RegionIndex<Barricade> + ?Sized,
    F: FnMut(&Barricade) -> bool,
{
    super::collect_in_range(thread, index, query, predicate)
}

#[cfg(test)]
mod tests {
    use regions::GridConfig;

    use super::*;
    use crate::entity::PlayerId;
    use crate::index::RegionGrid;
    use crate::info::EntityLocation;

    const SANDBAGS: AssetId = AssetId::new(365);
    const WIRE: AssetId = AssetId::new(1050);

    fn setup(thread: &GameThread) -> RegionGrid<Barricade> {
        let mut grid = RegionGrid::new(GridConfig::new(8, 10.0));
        let entries = [
            (1, SANDBAGS, Vec3::new(31.0, 0.0, 30.0), 1),
            (2, WIRE, Vec3::new(30.5, 0.0, 30.0), 2),
            (3, SANDBAGS, Vec3::new(36.0, 0.0, 30.0), 2),
        ];
        for (id, asset, position, group) in entries {
            let barricade = Barricade::new(InstanceId::new(id), asset, position)
                .with_owner(PlayerId::new(id.into()), GroupId::new(group));
            grid.insert(thread, barricade).unwrap();
        }
        grid
    }

    #[test]
    fn test_closest_any() {
        let thread = GameThread::bind_current();
        let grid = setup(&thread);
        let query = ProximityQuery::new(Vec3::new(30.0, 0.0, 30.0));
        let hit = closest_barricade(&thread, &grid, &query).unwrap();
        assert_eq!(hit.entity().unwrap().instance_id, InstanceId::new(2));
    }

    #[test]
    fn test_closest_of_asset_and_group() {
        let thread = GameThread::bind_current();
        let grid = setup(&thread);
        let query = ProximityQuery::new(Vec3::new(30.0, 0.0, 30.0)).within(10.0);

        let sandbags = closest_barricade_of_asset(&thread, &grid, &query, SANDBAGS).unwrap();
        assert_eq!(sandbags.entity().unwrap().instance_id, InstanceId::new(1));

        let friendly =
            closest_friendly_barricade(&thread, &grid, &query, SANDBAGS, GroupId::new(2)).unwrap();
        assert_eq!(friendly.entity().unwrap().instance_id, InstanceId::new(3));

        let none =
            closest_friendly_barricade(&thread, &grid, &query, WIRE, GroupId::new(1)).unwrap();
        assert!(!none.has_value());
    }

    #[test]
    fn test_find_planted_barricade() {
        let thread = GameThread::bind_current();
        let mut grid = setup(&thread);
        let plant = grid.add_plant(&thread).unwrap();
        let planted = Barricade::new(InstanceId::new(40), WIRE, Vec3::new(5.0, 2.0, 5.0));
        grid.insert_planted(&thread, plant, planted).unwrap();

        let hint = Some(Vec3::new(5.0, 2.0, 5.0));
        let hit = find_barricade(&thread, &grid, InstanceId::new(40), hint).unwrap();
        assert_eq!(hit.location(), EntityLocation::Plant(plant));
        assert_eq!(hit.index(), 0);
    }

    #[test]
    fn test_planted_only_counted_when_asked() {
        let thread = GameThread::bind_current();
        let mut grid = setup(&thread);
        let plant = grid.add_plant(&thread).unwrap();
        grid.insert_planted(
            &thread,
            plant,
            Barricade::new(InstanceId::new(40), WIRE, Vec3::new(30.0, 0.0, 30.0)),
        )
        .unwrap();

        let query = ProximityQuery::new(Vec3::new(30.0, 0.0, 30.0)).within(10.0);
        let plain = count_barricades_in_range(&thread, &grid, &query, None, filter::any).unwrap();
        let with_planted =
            count_barricades_in_range(&thread, &grid, &query.include_planted(), None, filter::any)
                .unwrap();
        assert_eq!(plain, 3);
        assert_eq!(with_planted, 4);
        assert_eq!(count_barricades_where(&thread, &grid, None, filter::any).unwrap(), 4);
    }

    #[test]
    fn test_in_range_and_collect() {
        let thread = GameThread::bind_current();
        let grid = setup(&thread);
        let query = ProximityQuery::new(Vec3::new(30.0, 0.0, 30.0)).within(2.0);
        let wire = filter::of_asset::<Barricade>(WIRE);
        assert!(is_barricade_in_range(&thread, &grid, &query, wire).unwrap());
        let hits = barricades_in_range(&thread, &grid, &query, filter::any).unwrap();
        assert_eq!(hits.len(), 2);
    }
}
