//! Region-indexed entity storage.
//!
//! Queries read entities through the [`RegionIndex`] capability instead of a
//! concrete global, so the game host can hand in its own lists and tests can
//! build synthetic grids. [`RegionGrid`] is the `Vec`-backed implementation.
//!
//! # Planted lists
//!
//! Barricades attached to vehicles do not live in a world region. Each vehicle
//! gets a plant list, addressed by a `u16` plant index, and queries that ask
//! for planted entities scan those lists after the regions.
//!
//! # Example
//!
//! ```
//! use glam::Vec3;
//! use regions::{GridConfig, RegionCoord};
//! use warfare_core::entity::{AssetId, DroppedItem, InstanceId};
//! use warfare_core::index::{RegionGrid, RegionIndex};
//! use warfare_core::thread::GameThread;
//!
//! let game_thread = GameThread::bind_current();
//! let mut items = RegionGrid::new(GridConfig::new(8, 10.0));
//!
//! let item = DroppedItem::new(InstanceId::new(1), AssetId::new(81), Vec3::new(35.0, 0.0, 42.0));
//! let coord = items.insert(&game_thread, item)?;
//!
//! assert_eq!(coord, RegionCoord::new(3, 4));
//! assert_eq!(items.region(coord).len(), 1);
//! # Ok::<(), warfare_core::QueryError>(())
//! ```

use regions::{GridConfig, RegionCoord};

use crate::entity::SpatialEntity;
use crate::error::QueryError;
use crate::info::EntityLocation;
use crate::thread::GameThread;

/// Read-only access to per-region entity lists.
pub trait RegionIndex<E> {
    /// Shape of the grid.
    fn grid(&self) -> &GridConfig;

    /// Entities in one region. Empty for coordinates off the grid.
    fn region(&self, coord: RegionCoord) -> &[E];

    /// Number of planted lists.
    fn plant_count(&self) -> u16 {
        0
    }

    /// Entities planted on one vehicle. Empty for unknown plants.
    fn plant(&self, _plant: u16) -> &[E] {
        &[]
    }
}

/// `Vec`-backed region grid with optional planted lists.
#[derive(Debug, Clone)]
pub struct RegionGrid<E> {
    grid: GridConfig,
    regions: Vec<Vec<E>>,
    plants: Vec<Vec<E>>,
}

impl<E> RegionGrid<E> {
    /// Create an empty grid.
    #[must_use]
    pub fn new(grid: GridConfig) -> Self {
        let regions = std::iter::repeat_with(Vec::new)
            .take(grid.region_count())
            .collect();
        Self {
            grid,
            regions,
            plants: Vec::new(),
        }
    }

    /// Total number of entities, planted ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.regions.iter().chain(&self.plants).map(Vec::len).sum()
    }

    /// Whether the grid holds no entities.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Append an entity to an explicit region.
    ///
    /// Returns its index within the region.
    ///
    /// # Errors
    ///
    /// Fails off the game thread or when `coord` is off the grid.
    pub fn insert_at(
        &mut self,
        thread: &GameThread,
        coord: RegionCoord,
        entity: E,
    ) -> Result<usize, QueryError> {
        thread.assert_current()?;
        let list = self.region_list_mut(i32::from(coord.x), i32::from(coord.y))?;
        list.push(entity);
        tracing::trace!(region = %coord, index = list.len() - 1, "inserted entity");
        Ok(list.len() - 1)
    }

    /// Register a new vehicle and return its plant index.
    ///
    /// At most `u16::MAX` plants exist, so [`RegionIndex::plant_count`] always
    /// fits a `u16`.
    ///
    /// # Errors
    ///
    /// Fails off the game thread or when every plant index is taken.
    pub fn add_plant(&mut self, thread: &GameThread) -> Result<u16, QueryError> {
        thread.assert_current()?;
        let plant = u16::try_from(self.plants.len())
            .ok()
            .filter(|&plant| plant < u16::MAX)
            .ok_or(QueryError::TooManyPlants)?;
        self.plants.push(Vec::new());
        tracing::trace!(plant, "registered vehicle plant");
        Ok(plant)
    }

    /// Append an entity to a vehicle's planted list.
    ///
    /// # Errors
    ///
    /// Fails off the game thread or for an unknown plant.
    pub fn insert_planted(
        &mut self,
        thread: &GameThread,
        plant: u16,
        entity: E,
    ) -> Result<usize, QueryError> {
        thread.assert_current()?;
        let list = self
            .plants
            .get_mut(usize::from(plant))
            .ok_or(QueryError::PlantOutOfRange(plant))?;
        list.push(entity);
        tracing::trace!(plant, index = list.len() - 1, "planted entity");
        Ok(list.len() - 1)
    }

    /// Remove the entity at `index` of region `(x, y)`.
    ///
    /// Later entities in the region shift down by one, which invalidates any
    /// [`EntityInfo`](crate::info::EntityInfo) taken before the call.
    ///
    /// # Errors
    ///
    /// Fails off the game thread, for coordinates off the grid, or for an
    /// index past the end of the region.
    pub fn remove(
        &mut self,
        thread: &GameThread,
        x: i32,
        y: i32,
        index: usize,
    ) -> Result<E, QueryError> {
        thread.assert_current()?;
        let list = self.region_list_mut(x, y)?;
        if index >= list.len() {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let location = EntityLocation::Region(RegionCoord::new(x as u8, y as u8));
            return Err(QueryError::IndexOutOfRange {
                index,
                len: list.len(),
                location,
            });
        }
        let entity = list.remove(index);
        tracing::trace!(x, y, index, "removed entity");
        Ok(entity)
    }

    /// Remove the entity at `index` of a vehicle's planted list.
    ///
    /// # Errors
    ///
    /// Fails off the game thread, for an unknown plant, or for an index past
    /// the end of the list.
    pub fn remove_planted(
        &mut self,
        thread: &GameThread,
        plant: u16,
        index: usize,
    ) -> Result<E, QueryError> {
        thread.assert_current()?;
        let list = self
            .plants
            .get_mut(usize::from(plant))
            .ok_or(QueryError::PlantOutOfRange(plant))?;
        if index >= list.len() {
            return Err(QueryError::IndexOutOfRange {
                index,
                len: list.len(),
                location: EntityLocation::Plant(plant),
            });
        }
        let entity = list.remove(index);
        tracing::trace!(plant, index, "removed planted entity");
        Ok(entity)
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn region_list_mut(&mut self, x: i32, y: i32) -> Result<&mut Vec<E>, QueryError> {
        if !self.grid.contains(x, y) {
            return Err(QueryError::RegionOutOfRange {
                x,
                y,
                world_size: self.grid.world_size,
            });
        }
        let slot = RegionCoord::new(x as u8, y as u8).index(self.grid.world_size);
        Ok(&mut self.regions[slot])
    }
}

impl<E: SpatialEntity> RegionGrid<E> {
    /// Append an entity to the region its position falls in.
    ///
    /// # Errors
    ///
    /// Fails off the game thread or when the position is off the grid.
    pub fn insert(&mut self, thread: &GameThread, entity: E) -> Result<RegionCoord, QueryError> {
        let position = entity.position();
        let coord = self
            .grid
            .try_get_coordinate(position)
            .ok_or(QueryError::OutsideWorld {
                x: position.x,
                z: position.z,
            })?;
        self.insert_at(thread, coord, entity)?;
        Ok(coord)
    }
}

impl<E> RegionIndex<E> for RegionGrid<E> {
    fn grid(&self) -> &GridConfig {
        &self.grid
    }

    fn region(&self, coord: RegionCoord) -> &[E] {
        if !self
            .grid
            .contains(i32::from(coord.x), i32::from(coord.y))
        {
            return &[];
        }
        &self.regions[coord.index(self.grid.world_size)]
    }

    fn plant_count(&self) -> u16 {
        u16::try_from(self.plants.len()).unwrap_or(u16::MAX)
    }

    fn plant(&self, plant: u16) -> &[E] {
        self.plants.get(usize::from(plant)).map_or(&[], Vec::as_slice)
    }
}
