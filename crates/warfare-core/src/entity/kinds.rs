//! Concrete entity kinds kept in region lists.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::{AssetId, GroupId, InstanceId, Owned, PlayerId, SpatialEntity};

/// A barricade placed in the world or planted on a vehicle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Barricade {
    /// Engine-assigned identity.
    pub instance_id: InstanceId,
    /// Barricade asset.
    pub asset: AssetId,
    /// World position.
    pub position: Vec3,
    /// Player who placed it.
    pub owner: PlayerId,
    /// Group of the placer.
    pub group: GroupId,
    /// Remaining health.
    pub health: u16,
}

impl Barricade {
    /// Create an unowned barricade.
    #[must_use]
    pub fn new(instance_id: InstanceId, asset: AssetId, position: Vec3) -> Self {
        Self {
            instance_id,
            asset,
            position,
            owner: PlayerId::default(),
            group: GroupId::default(),
            health: 100,
        }
    }

    /// Set the owner and group.
    #[must_use]
    pub fn with_owner(mut self, owner: PlayerId, group: GroupId) -> Self {
        self.owner = owner;
        self.group = group;
        self
    }
}

/// A structure (floor, wall, pillar, roof) placed in the world.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Structure {
    /// Engine-assigned identity.
    pub instance_id: InstanceId,
    /// Structure asset.
    pub asset: AssetId,
    /// World position.
    pub position: Vec3,
    /// Player who placed it.
    pub owner: PlayerId,
    /// Group of the placer.
    pub group: GroupId,
    /// Remaining health.
    pub health: u16,
}

impl Structure {
    /// Create an unowned structure.
    #[must_use]
    pub fn new(instance_id: InstanceId, asset: AssetId, position: Vec3) -> Self {
        Self {
            instance_id,
            asset,
            position,
            owner: PlayerId::default(),
            group: GroupId::default(),
            health: 100,
        }
    }

    /// Set the owner and group.
    #[must_use]
    pub fn with_owner(mut self, owner: PlayerId, group: GroupId) -> Self {
        self.owner = owner;
        self.group = group;
        self
    }
}

/// An item lying on the ground.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DroppedItem {
    /// Engine-assigned identity.
    pub instance_id: InstanceId,
    /// Item asset.
    pub asset: AssetId,
    /// World position.
    pub position: Vec3,
    /// Stack size or ammo count.
    pub amount: u8,
    /// Durability, 0 to 100.
    pub quality: u8,
}

impl DroppedItem {
    /// Create a full-quality single item.
    #[must_use]
    pub fn new(instance_id: InstanceId, asset: AssetId, position: Vec3) -> Self {
        Self {
            instance_id,
            asset,
            position,
            amount: 1,
            quality: 100,
        }
    }
}

/// A level object (tree, rock, building) baked into the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelObject {
    /// Engine-assigned identity.
    pub instance_id: InstanceId,
    /// Object asset.
    pub asset: AssetId,
    /// World position.
    pub position: Vec3,
}

impl LevelObject {
    /// Create a level object.
    #[must_use]
    pub fn new(instance_id: InstanceId, asset: AssetId, position: Vec3) -> Self {
        Self {
            instance_id,
            asset,
            position,
        }
    }
}

macro_rules! impl_spatial {
    ($($kind:ty),* $(,)?) => {
        $(
            impl SpatialEntity for $kind {
                fn instance_id(&self) -> InstanceId {
                    self.instance_id
                }

                fn asset(&self) -> AssetId {
                    self.asset
                }

                fn position(&self) -> Vec3 {
                    self.position
                }
            }
        )*
    };
}

impl_spatial!(Barricade, Structure, DroppedItem, LevelObject);

impl Owned for Barricade {
    fn owner(&self) -> PlayerId {
        self.owner
    }

    fn group(&self) -> GroupId {
        self.group
    }
}

impl Owned for Structure {
    fn owner(&self) -> PlayerId {
        self.owner
    }

    fn group(&self) -> GroupId {
        self.group
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_barricade_defaults_unowned() {
        let barricade = Barricade::new(InstanceId::new(1), AssetId::new(2), Vec3::ZERO);
        assert_eq!(barricade.owner(), PlayerId::default());
        assert_eq!(barricade.group(), GroupId::default());
    }

    #[test]
    fn test_structure_with_owner() {
        let structure = Structure::new(InstanceId::new(1), AssetId::new(31), Vec3::ONE)
            .with_owner(PlayerId::new(5), GroupId::new(6));
        assert_eq!(structure.owner(), PlayerId::new(5));
        assert_eq!(structure.group(), GroupId::new(6));
        assert_eq!(structure.position(), Vec3::ONE);
    }

    #[test]
    fn test_item_roundtrips_through_json() {
        let item = DroppedItem::new(InstanceId::new(3), AssetId::new(81), Vec3::new(1.0, 2.0, 3.0));
        let json = serde_json::to_string(&item).unwrap();
        let back: DroppedItem = serde_json::from_str(&json).unwrap();
        assert_eq!(back, item);
    }
}
