//! Gameplay tuning values.
//!
//! Compile-time constants cover structural limits (inventory width, slot
//! counts); everything a designer would tweak lives in [`GameConfig`] so
//! hosts can override it without rebuilding the crate.

use crate::math::{FloatCurve, VectorCurve};

/// Tunable gameplay parameters with defaults matching the shipped balance.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    /// Seconds for an item to interpolate from its pickup spot to the hand.
    pub equip_interp_time: f32,
    /// Seconds a thrown weapon simulates physics before settling.
    pub throw_time: f32,
    /// Impulse magnitude applied to a thrown weapon.
    pub throw_impulse: f32,
    /// Half-angle of the random horizontal cone for weapon throws, degrees.
    pub throw_cone_degrees: f32,
    /// Downward tilt applied to the throw direction, degrees.
    pub throw_pitch_degrees: f32,
    /// Period of the idle pickup glow pulse.
    pub pulse_curve_time: f32,
    /// How long the crosshair stays kicked open after a shot.
    pub crosshair_kick_time: f32,
    /// Floor for the auto-fire interval so a zero rate cannot re-fire
    /// within the same frame forever.
    pub min_auto_fire_interval: f32,

    /// Distance in front of the camera where interping items aim.
    pub camera_interp_distance: f32,
    /// Height above that point where interping items aim.
    pub camera_interp_elevation: f32,
    /// Horizontal interpolation speed for items flying to the character.
    pub item_interp_xy_speed: f32,
    /// Vertical offset profile over the equip interp, scaled by the initial
    /// height difference.
    pub item_z_curve: FloatCurve,
    /// Scale profile over the equip interp.
    pub item_scale_curve: FloatCurve,
    /// Glow material parameters over one pulse period:
    /// `[glow_amount, fresnel_exponent, fresnel_reflect_fraction]`.
    pub pulse_curve: VectorCurve,

    /// Starting ammunition granted per type at spawn.
    pub starting_9mm: u32,
    pub starting_ar: u32,

    pub max_walk_speed: f32,
    pub crouch_walk_speed: f32,
    pub standing_half_height: f32,
    pub crouching_half_height: f32,
    pub capsule_interp_speed: f32,

    /// Camera field of view while aiming.
    pub zoomed_fov: f32,
    pub zoom_interp_speed: f32,

    /// Gamepad stick turn/look rates, degrees per second.
    pub hip_turn_rate: f32,
    pub hip_look_up_rate: f32,
    pub aiming_turn_rate: f32,
    pub aiming_look_up_rate: f32,
    /// Mouse sensitivity scale factors.
    pub mouse_hip_turn_rate: f32,
    pub mouse_hip_look_up_rate: f32,
    pub mouse_aiming_turn_rate: f32,
    pub mouse_aiming_look_up_rate: f32,

    /// Seconds with no hits before an enemy's health bar hides.
    pub health_bar_display_time: f32,
    /// Bounds for the random delay between enemy hit-react montages.
    pub hit_react_delay_min: f32,
    pub hit_react_delay_max: f32,
}

impl GameConfig {
    /// Carried-item capacity, equipped weapon included.
    pub const INVENTORY_CAPACITY: usize = 6;
    /// Interp destinations on the character; slot 0 is weapons-only.
    pub const INTERP_SLOT_COUNT: usize = 7;
    /// Distinct ammunition types the ledger can register.
    pub const MAX_AMMO_TYPES: usize = 4;
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            equip_interp_time: 0.7,
            throw_time: 0.7,
            throw_impulse: 20_000.0,
            throw_cone_degrees: 30.0,
            throw_pitch_degrees: 20.0,
            pulse_curve_time: 5.0,
            crosshair_kick_time: 0.05,
            min_auto_fire_interval: 0.01,

            camera_interp_distance: 250.0,
            camera_interp_elevation: 65.0,
            item_interp_xy_speed: 30.0,
            item_z_curve: FloatCurve::new(vec![
                (0.0, 0.0),
                (0.35, 1.8),
                (0.55, 1.25),
                (0.7, 1.0),
            ]),
            item_scale_curve: FloatCurve::new(vec![(0.0, 1.0), (0.45, 1.0), (0.7, 0.2)]),
            pulse_curve: VectorCurve::new(vec![
                (0.0, [150.0, 3.0, 4.0]),
                (1.25, [30.0, 2.0, 2.5]),
                (2.5, [150.0, 3.0, 4.0]),
                (3.75, [30.0, 2.0, 2.5]),
                (5.0, [150.0, 3.0, 4.0]),
            ]),

            starting_9mm: 85,
            starting_ar: 120,

            max_walk_speed: 600.0,
            crouch_walk_speed: 300.0,
            standing_half_height: 88.0,
            crouching_half_height: 44.0,
            capsule_interp_speed: 20.0,

            zoomed_fov: 35.0,
            zoom_interp_speed: 20.0,

            hip_turn_rate: 90.0,
            hip_look_up_rate: 90.0,
            aiming_turn_rate: 20.0,
            aiming_look_up_rate: 20.0,
            mouse_hip_turn_rate: 1.0,
            mouse_hip_look_up_rate: 1.0,
            mouse_aiming_turn_rate: 0.2,
            mouse_aiming_look_up_rate: 0.2,

            health_bar_display_time: 4.0,
            hit_react_delay_min: 0.4,
            hit_react_delay_max: 1.5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn curves_cover_their_windows() {
        let config = GameConfig::default();
        assert!((config.item_z_curve.duration() - config.equip_interp_time).abs() < 1e-6);
        assert!((config.item_scale_curve.duration() - config.equip_interp_time).abs() < 1e-6);
        // The interp ends with the item at the target height and shrunk for
        // the hand attach.
        assert!((config.item_z_curve.sample(0.7) - 1.0).abs() < 1e-6);
        assert!(config.item_scale_curve.sample(0.7) < 1.0);
    }
}
