//! Weapon-specific item state: the magazine and the stats copied from the
//! weapon table at spawn.

use strum::{Display, EnumIter};

use crate::env::WeaponSpec;
use crate::state::ammo::AmmoType;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WeaponType {
    Smg,
    AssaultRifle,
    Pistol,
}

/// Magazine contents plus spawn-time copies of the table row.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeaponState {
    pub weapon_type: WeaponType,
    pub ammo_type: AmmoType,
    /// Rounds currently in the magazine.
    pub ammo: u32,
    pub magazine_capacity: u32,
    pub damage: u32,
    pub headshot_damage: u32,
    pub automatic: bool,
    pub auto_fire_rate: f32,
    pub reload_montage_section: String,
    pub clip_bone_name: String,
    /// True while the reload animation has the clip detached; the host
    /// keeps the clip mesh glued to the hand instead of the weapon.
    pub moving_clip: bool,
}

impl WeaponState {
    pub fn from_spec(spec: &WeaponSpec) -> Self {
        Self {
            weapon_type: spec.weapon_type,
            ammo_type: spec.ammo_type,
            ammo: spec.starting_ammo,
            magazine_capacity: spec.magazine_capacity,
            damage: spec.damage,
            headshot_damage: spec.headshot_damage,
            automatic: spec.automatic,
            auto_fire_rate: spec.auto_fire_rate,
            reload_montage_section: spec.reload_montage_section.clone(),
            clip_bone_name: spec.clip_bone_name.clone(),
            moving_clip: false,
        }
    }

    /// Removes one round; an empty magazine stays at zero.
    pub fn decrement_ammo(&mut self) {
        self.ammo = self.ammo.saturating_sub(1);
    }

    /// Adds `amount` rounds. The caller computes the magazine gap first;
    /// overfilling is a caller bug and aborts.
    pub fn reload_ammo(&mut self, amount: u32) {
        assert!(
            self.ammo + amount <= self.magazine_capacity,
            "reload would exceed magazine capacity"
        );
        self.ammo += amount;
    }

    pub fn clip_is_full(&self) -> bool {
        self.ammo >= self.magazine_capacity
    }

    /// Rooms left in the magazine.
    pub fn magazine_gap(&self) -> u32 {
        self.magazine_capacity - self.ammo.min(self.magazine_capacity)
    }
}
