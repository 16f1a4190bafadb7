//! Determinism verification tests.
//!
//! Nearest-match queries carry no hidden randomness: for a fixed layout and a
//! fixed query they return the same entity at the same list position every
//! time, and that entity is a true nearest one.

use glam::Vec3;

use crate::entity::SpatialEntity;
use crate::query::{self, barricades, filter, ProximityQuery};
use crate::thread::GameThread;

use super::helpers::{brute_force_closest_sqr, grid_with, init_tracing, scatter_barricades};

const QUERY_POINTS: [Vec3; 4] = [
    Vec3::new(0.0, 0.0, 0.0),
    Vec3::new(40.0, 10.0, 40.0),
    Vec3::new(79.0, 5.0, 3.0),
    Vec3::new(12.5, 0.0, 66.0),
];

#[test]
fn test_closest_is_repeatable() {
    init_tracing();
    let thread = GameThread::bind_current();
    let grid = grid_with(&thread, scatter_barricades(42, 200));

    for position in QUERY_POINTS {
        let query = ProximityQuery::new(position).within(15.0);
        let first = barricades::closest_barricade(&thread, &grid, &query).unwrap();
        for _ in 0..10 {
            let again = barricades::closest_barricade(&thread, &grid, &query).unwrap();
            assert_eq!(again.location(), first.location());
            assert_eq!(again.index(), first.index());
            assert_eq!(
                again.entity().map(|b| b.instance_id),
                first.entity().map(|b| b.instance_id)
            );
        }
    }
}

#[test]
fn test_same_seed_same_answer() {
    let thread = GameThread::bind_current();
    let a = grid_with(&thread, scatter_barricades(7, 150));
    let b = grid_with(&thread, scatter_barricades(7, 150));

    for position in QUERY_POINTS {
        let query = ProximityQuery::new(position);
        let hit_a = barricades::closest_barricade(&thread, &a, &query).unwrap();
        let hit_b = barricades::closest_barricade(&thread, &b, &query).unwrap();
        assert_eq!(
            hit_a.entity().map(|e| e.instance_id),
            hit_b.entity().map(|e| e.instance_id)
        );
    }
}

#[test]
fn test_closest_matches_brute_force() {
    let thread = GameThread::bind_current();
    for seed in 0..8 {
        let entities = scatter_barricades(seed, 120);
        let grid = grid_with(&thread, entities.clone());

        for position in QUERY_POINTS {
            for query in [
                ProximityQuery::new(position),
                ProximityQuery::new(position).within(9.0),
                ProximityQuery::new(position).within(25.0).horizontal_only(),
            ] {
                let expected = brute_force_closest_sqr(&entities, &query);
                let hit = barricades::closest_barricade(&thread, &grid, &query).unwrap();
                let actual = hit.entity().map(|e| query.sqr_distance_to(e.position()));
                assert_eq!(actual, expected, "seed {seed}, query {query:?}");
            }
        }
    }
}

#[test]
fn test_count_matches_brute_force() {
    let thread = GameThread::bind_current();
    let entities = scatter_barricades(99, 300);
    let grid = grid_with(&thread, entities.clone());

    for position in QUERY_POINTS {
        let query = ProximityQuery::new(position).within(20.0);
        let expected = entities
            .iter()
            .filter(|e| query.sqr_distance_to(e.position()) <= 20.0 * 20.0)
            .count();
        let counted = query::count(&thread, &grid, &query, None, filter::any).unwrap();
        assert_eq!(counted, expected);
    }
}
