use crate::state::{AmmoType, WeaponType};

/// One row of the weapon stat table.
///
/// Everything a spawned weapon copies at creation time; the simulation never
/// reads the table again after the copy, so hot-reloading rows only affects
/// future spawns.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeaponSpec {
    pub weapon_type: WeaponType,
    pub name: String,
    pub ammo_type: AmmoType,
    /// Rounds loaded when the weapon spawns.
    pub starting_ammo: u32,
    pub magazine_capacity: u32,
    pub damage: u32,
    pub headshot_damage: u32,
    /// Holding the trigger keeps firing at `auto_fire_rate` intervals.
    pub automatic: bool,
    /// Seconds between automatic shots.
    pub auto_fire_rate: f32,
    /// Montage section selecting the per-weapon reload animation.
    pub reload_montage_section: String,
    /// Skeleton bone the character grabs during the reload clip phase.
    pub clip_bone_name: String,
}

/// Read-only access to weapon stat rows.
pub trait WeaponOracle: Send + Sync {
    fn spec(&self, weapon_type: WeaponType) -> Option<&WeaponSpec>;
}

impl WeaponOracle for [WeaponSpec] {
    fn spec(&self, weapon_type: WeaponType) -> Option<&WeaponSpec> {
        self.iter().find(|row| row.weapon_type == weapon_type)
    }
}

impl WeaponOracle for Vec<WeaponSpec> {
    fn spec(&self, weapon_type: WeaponType) -> Option<&WeaponSpec> {
        self.as_slice().spec(weapon_type)
    }
}
