//! Player character state: combat phase, carried items, crosshair spread.

use strum::Display;

use crate::config::GameConfig;
use crate::math::{Vec3, interp_to, map_range_clamped};
use crate::sched::TimerHandle;
use crate::state::ammo::AmmoLedger;
use crate::state::inventory::{InterpSlots, Inventory};
use crate::state::item::ItemId;

/// What the character is busy with. Fire, reload, and equip requests are
/// silently dropped unless the state is `Unoccupied`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CombatState {
    #[default]
    Unoccupied,
    FireTimerInProgress,
    Reloading,
    Equipping,
}

/// Camera sample the host feeds in each frame; the item interp and throw
/// directions are derived from it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CameraPose {
    pub location: Vec3,
    pub forward: Vec3,
    pub yaw: f32,
}

impl CameraPose {
    /// World point interping items fly toward: in front of the camera, then
    /// lifted.
    pub fn interp_target(&self, config: &GameConfig) -> Vec3 {
        self.location
            .add(self.forward.scaled(config.camera_interp_distance))
            .add(Vec3::new(0.0, 0.0, config.camera_interp_elevation))
    }
}

/// Exponentially-smoothed crosshair spread factors.
///
/// `spread = 0.5 + velocity + airborne - aim + shooting`, recomputed every
/// frame. Only the shot-kick flag is event-driven; the rest is a pure
/// function of movement and aim state.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CrosshairSpread {
    pub velocity_factor: f32,
    pub in_air_factor: f32,
    pub aim_factor: f32,
    pub shooting_factor: f32,
    /// Set when a shot fires, cleared by the kick timer.
    pub kick_active: bool,
}

impl CrosshairSpread {
    /// Advances the smoothed factors and returns the combined spread.
    pub fn update(
        &mut self,
        dt: f32,
        ground_speed: f32,
        max_walk_speed: f32,
        airborne: bool,
        aiming: bool,
    ) -> f32 {
        self.velocity_factor = map_range_clamped(ground_speed, 0.0, max_walk_speed, 0.0, 1.0);

        // Spread opens slowly in the air and snaps shut on landing.
        self.in_air_factor = if airborne {
            interp_to(self.in_air_factor, 2.25, dt, 2.25)
        } else {
            interp_to(self.in_air_factor, 0.0, dt, 30.0)
        };

        self.aim_factor = if aiming {
            interp_to(self.aim_factor, 0.6, dt, 30.0)
        } else {
            interp_to(self.aim_factor, 0.0, dt, 30.0)
        };

        self.shooting_factor = if self.kick_active {
            interp_to(self.shooting_factor, 0.3, dt, 60.0)
        } else {
            interp_to(self.shooting_factor, 0.0, dt, 60.0)
        };

        self.spread()
    }

    pub fn spread(&self) -> f32 {
        0.5 + self.velocity_factor + self.in_air_factor - self.aim_factor + self.shooting_factor
    }
}

/// The player-controlled entity.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharacterState {
    pub combat: CombatState,
    /// The item in hand. Always also present in the inventory.
    pub equipped: Option<ItemId>,
    pub inventory: Inventory,
    pub ammo: AmmoLedger,
    pub interp_slots: InterpSlots,

    pub aiming: bool,
    /// The aim button edge, separate from `aiming` so a reload can suspend
    /// the zoom and restore it when the button is still held.
    pub aim_button_held: bool,
    pub fire_button_held: bool,

    pub crosshair: CrosshairSpread,
    pub camera: CameraPose,

    pub auto_fire_timer: Option<TimerHandle>,
    pub kick_timer: Option<TimerHandle>,
}

impl CharacterState {
    pub fn with_starting_ammo(config: &GameConfig) -> Self {
        Self {
            ammo: AmmoLedger::with_starting_ammo(config),
            ..Self::default()
        }
    }

    pub fn is_unoccupied(&self) -> bool {
        self.combat == CombatState::Unoccupied
    }
}
