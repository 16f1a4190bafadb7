//! Reusable predicates for proximity queries.
//!
//! Predicates compose with plain closures:
//!
//! ```
//! use warfare_core::entity::{AssetId, Barricade, GroupId};
//! use warfare_core::query::filter;
//!
//! let sandbags = filter::of_asset::<Barricade>(AssetId::new(365));
//! let friendly = filter::in_group::<Barricade>(GroupId::new(1));
//! let both = move |b: &Barricade| sandbags(b) && friendly(b);
//! # let _ = both;
//! ```

use crate::entity::{AssetId, GroupId, Owned, PlayerId, SpatialEntity};

/// Accept everything.
#[must_use]
pub fn any<E>(_: &E) -> bool {
    true
}

/// Accept entities spawned from `asset`.
pub fn of_asset<E: SpatialEntity>(asset: AssetId) -> impl Fn(&E) -> bool + Copy {
    move |entity| entity.asset() == asset
}

/// Accept entities spawned from any of `assets`.
pub fn of_assets<E: SpatialEntity>(assets: &[AssetId]) -> impl Fn(&E) -> bool + '_ {
    move |entity| assets.contains(&entity.asset())
}

/// Accept placeables belonging to `group`.
pub fn in_group<E: Owned>(group: GroupId) -> impl Fn(&E) -> bool + Copy {
    move |entity| entity.group() == group
}

/// Accept placeables placed by `owner`.
pub fn owned_by<E: Owned>(owner: PlayerId) -> impl Fn(&E) -> bool + Copy {
    move |entity| entity.owner() == owner
}
