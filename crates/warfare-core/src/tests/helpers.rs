//! Test helper functions for building grids and entities.

use std::sync::atomic::{AtomicUsize, Ordering};

use glam::Vec3;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use regions::{GridConfig, RegionCoord};

use crate::entity::{AssetId, Barricade, InstanceId, SpatialEntity};
use crate::index::{RegionGrid, RegionIndex};
use crate::query::ProximityQuery;
use crate::thread::GameThread;

/// Side length of the test grid, in world units.
pub const TEST_WORLD_EXTENT: f32 = 80.0;

/// Asset used by every test barricade.
pub const TEST_ASSET: AssetId = AssetId::new(365);

/// An 8x8 grid of 10 unit regions anchored at the world origin.
pub fn test_grid() -> GridConfig {
    GridConfig::new(8, 10.0)
}

/// Route `tracing` output to the test harness. Safe to call more than once.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::TRACE)
        .try_init();
}

/// A barricade of [`TEST_ASSET`] at `(x, y, z)`.
pub fn barricade(id: u32, x: f32, y: f32, z: f32) -> Barricade {
    Barricade::new(InstanceId::new(id), TEST_ASSET, Vec3::new(x, y, z))
}

/// Insert `entities` into a fresh [`test_grid`].
pub fn grid_with(
    thread: &GameThread,
    entities: impl IntoIterator<Item = Barricade>,
) -> RegionGrid<Barricade> {
    let mut grid = RegionGrid::new(test_grid());
    for entity in entities {
        grid.insert(thread, entity).expect("test entities lie inside the grid");
    }
    grid
}

/// `count` barricades at seeded random positions inside the test grid.
pub fn scatter_barricades(seed: u64, count: u32) -> Vec<Barricade> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (1..=count)
        .map(|id| {
            let x = rng.gen_range(0.0..TEST_WORLD_EXTENT);
            let y = rng.gen_range(0.0..20.0);
            let z = rng.gen_range(0.0..TEST_WORLD_EXTENT);
            barricade(id, x, y, z)
        })
        .collect()
}

/// Smallest squared distance over every entity in range, by exhaustive scan.
pub fn brute_force_closest_sqr(entities: &[Barricade], query: &ProximityQuery) -> Option<f32> {
    entities
        .iter()
        .map(|e| query.sqr_distance_to(e.position()))
        .filter(|&d| query.range.map_or(true, |r| d <= r * r))
        .min_by(f32::total_cmp)
}

/// [`RegionIndex`] wrapper counting how many region lists were read.
pub struct SpyIndex<'a> {
    inner: &'a RegionGrid<Barricade>,
    reads: AtomicUsize,
}

impl<'a> SpyIndex<'a> {
    pub fn new(inner: &'a RegionGrid<Barricade>) -> Self {
        Self {
            inner,
            reads: AtomicUsize::new(0),
        }
    }

    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

impl RegionIndex<Barricade> for SpyIndex<'_> {
    fn grid(&self) -> &GridConfig {
        self.inner.grid()
    }

    fn region(&self, coord: RegionCoord) -> &[Barricade] {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.inner.region(coord)
    }

    fn plant_count(&self) -> u16 {
        self.inner.plant_count()
    }

    fn plant(&self, plant: u16) -> &[Barricade] {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.inner.plant(plant)
    }
}
