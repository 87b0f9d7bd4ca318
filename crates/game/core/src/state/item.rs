//! World items: weapons lying around, ammo boxes, and whatever the
//! character is carrying.

use bitflags::bitflags;
use strum::{Display, EnumIter};

use crate::math::Vec3;
use crate::sched::Seconds;
use crate::state::weapon::WeaponState;
use crate::state::ammo::AmmoType;

/// Identifier for a spawned item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemId(pub u32);

/// Presentation tier driving glow color, widget tint, and star count.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemRarity {
    Damaged,
    Common,
    Uncommon,
    Rare,
    Legendary,
    Mythic,
}

impl ItemRarity {
    pub const COUNT: usize = 6;

    pub fn ordinal(self) -> u8 {
        match self {
            Self::Damaged => 0,
            Self::Common => 1,
            Self::Uncommon => 2,
            Self::Rare => 3,
            Self::Legendary => 4,
            Self::Mythic => 5,
        }
    }

    /// Star indicators for the pickup widget: entries at or below the
    /// rarity ordinal light up.
    pub fn active_stars(self) -> [bool; Self::COUNT] {
        let ordinal = self.ordinal() as usize;
        core::array::from_fn(|index| index <= ordinal)
    }
}

/// Lifecycle phase of an item. Each phase implies a collision/visibility
/// preset; see [`MeshFlags::for_state`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemState {
    /// Sitting in the world, tracing and overlap volumes live.
    #[default]
    Pickup,
    /// Flying toward the character along the equip interp.
    EquipInterping,
    /// Carried in the inventory but not in hand.
    PickedUp,
    /// In the character's hand.
    Equipped,
    /// Thrown, simulating physics until the throw timer lands it.
    Falling,
}

bitflags! {
    /// Per-state collision and visibility preset the host applies to an
    /// item's meshes when its state changes.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct MeshFlags: u8 {
        const VISIBLE = 1 << 0;
        const SIMULATE_PHYSICS = 1 << 1;
        const ENABLE_GRAVITY = 1 << 2;
        /// Sphere that shows/hides the pickup widget on character overlap.
        const OVERLAP_VOLUME_ACTIVE = 1 << 3;
        /// Box the look-trace tests when deciding what widget to show.
        const TRACE_BOX_ACTIVE = 1 << 4;
        const BLOCK_WORLD_STATIC = 1 << 5;
    }
}

impl MeshFlags {
    /// The preset each lifecycle state implies.
    pub fn for_state(state: ItemState) -> Self {
        match state {
            ItemState::Pickup => Self::VISIBLE | Self::OVERLAP_VOLUME_ACTIVE | Self::TRACE_BOX_ACTIVE,
            ItemState::EquipInterping => Self::VISIBLE,
            ItemState::PickedUp => Self::empty(),
            ItemState::Equipped => Self::VISIBLE,
            ItemState::Falling => {
                Self::VISIBLE | Self::SIMULATE_PHYSICS | Self::ENABLE_GRAVITY | Self::BLOCK_WORLD_STATIC
            }
        }
    }
}

/// What an item is, with the state specific to that kind.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemKind {
    Weapon(WeaponState),
    Ammo { ammo_type: AmmoType },
}

impl ItemKind {
    pub fn is_weapon(&self) -> bool {
        matches!(self, Self::Weapon(_))
    }
}

/// A spawned item and its transient interp bookkeeping.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    /// Rounds in an ammo box; unused for weapons.
    pub count: u32,
    pub rarity: ItemRarity,
    pub state: ItemState,
    pub kind: ItemKind,

    pub location: Vec3,
    pub yaw: f32,
    pub scale: f32,

    /// Inventory slot while `PickedUp`/`Equipped`.
    pub slot_index: Option<u8>,

    /// Interp destination slot while `EquipInterping`.
    pub interp_slot: Option<usize>,
    /// World location captured when the interp started.
    pub interp_start: Vec3,
    /// Camera-relative yaw captured when the interp started, so the item
    /// keeps a fixed facing relative to the camera while flying in.
    pub yaw_offset: f32,
    pub interp_started_at: Seconds,

    /// When the current glow-pulse curve pass began.
    pub pulse_started_at: Seconds,
}

impl Item {
    /// Moves the item to `state` and returns the mesh preset the host
    /// should apply.
    pub fn set_state(&mut self, state: ItemState) -> MeshFlags {
        self.state = state;
        MeshFlags::for_state(state)
    }

    pub fn weapon(&self) -> Option<&WeaponState> {
        match &self.kind {
            ItemKind::Weapon(weapon) => Some(weapon),
            ItemKind::Ammo { .. } => None,
        }
    }

    pub fn weapon_mut(&mut self) -> Option<&mut WeaponState> {
        match &mut self.kind {
            ItemKind::Weapon(weapon) => Some(weapon),
            ItemKind::Ammo { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn star_vector_follows_ordinal() {
        assert_eq!(
            ItemRarity::Damaged.active_stars(),
            [true, false, false, false, false, false]
        );
        assert_eq!(
            ItemRarity::Rare.active_stars(),
            [true, true, true, true, false, false]
        );
        assert_eq!(ItemRarity::Mythic.active_stars(), [true; 6]);
    }

    #[test]
    fn state_presets_match_lifecycle() {
        assert!(MeshFlags::for_state(ItemState::Pickup).contains(MeshFlags::TRACE_BOX_ACTIVE));
        assert_eq!(MeshFlags::for_state(ItemState::PickedUp), MeshFlags::empty());
        assert_eq!(MeshFlags::for_state(ItemState::EquipInterping), MeshFlags::VISIBLE);
        let falling = MeshFlags::for_state(ItemState::Falling);
        assert!(falling.contains(MeshFlags::SIMULATE_PHYSICS));
        assert!(falling.contains(MeshFlags::ENABLE_GRAVITY));
        assert!(!falling.contains(MeshFlags::OVERLAP_VOLUME_ACTIVE));
    }
}
