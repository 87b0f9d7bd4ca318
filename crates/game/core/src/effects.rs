//! Outbound requests from the simulation to the host.
//!
//! The state machines never touch audio, animation, rendering, or physics
//! directly. Every transition instead appends [`Effect`] values describing
//! what the host should do; the runtime drains them after each action and
//! forwards them to whatever presentation layer is attached. Hosts may
//! ignore effects they have no use for.

use crate::math::{LinearColor, Vec3};
use crate::state::{EnemyId, ExplosiveId, ItemId, MeshFlags};

/// Sound cues the simulation can request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SoundKind {
    Pickup,
    Equip,
    Fire,
    EnemyImpact,
    Explosion,
}

/// Animation montages the simulation can request. The section name rides
/// alongside in [`Effect::PlayMontage`] where one applies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MontageKind {
    HipFire,
    Reload,
    Equip,
    HitReact,
    Death,
}

/// Notifications for an AI layer observing the player character.
#[derive(Clone, Debug, PartialEq)]
pub enum AiSignal {
    /// An enemy has noticed the player as a combat target.
    TargetAcquired { enemy: EnemyId },
    /// A named boolean on an enemy's decision state changed.
    SetFlag {
        enemy: EnemyId,
        key: &'static str,
        value: bool,
    },
}

/// A single host-side request produced by an action or a frame tick.
/// Effects are transient frame output and never serialized with state.
#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    PlaySound { sound: SoundKind },
    /// Fire the equipped weapon's cosmetic side: muzzle flash, trace, beam.
    EmitShot,
    PlayMontage { montage: MontageKind, section: String },

    /// Apply a per-state collision/visibility preset to an item's meshes.
    SetVisuals { item: ItemId, flags: MeshFlags },
    SetItemTransform {
        item: ItemId,
        location: Vec3,
        yaw: f32,
        scale: f32,
    },
    /// One-shot physics impulse, used by the weapon throw.
    ApplyImpulse {
        item: ItemId,
        direction: Vec3,
        magnitude: f32,
    },
    SetGlow { item: ItemId, enabled: bool },
    /// Per-frame glow material parameters sampled from the pulse curve.
    SetGlowPulse {
        item: ItemId,
        glow_amount: f32,
        fresnel_exponent: f32,
        fresnel_reflect_fraction: f32,
    },
    SetPickupWidget { item: ItemId, visible: bool },
    /// Tint for an item's widget and glow, from the rarity table.
    SetRarityTint {
        item: ItemId,
        glow_color: LinearColor,
        light_color: LinearColor,
        dark_color: LinearColor,
        stars: u8,
        /// Stencil value selecting the item's outline color.
        custom_depth_stencil: u8,
    },
    AttachToHand { item: ItemId },
    Detach { item: ItemId },
    DespawnItem { item: ItemId },

    ShowHealthBar { enemy: EnemyId },
    HideHealthBar { enemy: EnemyId },
    /// Spawn impact particles and a damage number widget at a hit point.
    SpawnImpact {
        location: Vec3,
        damage: u32,
        headshot: bool,
    },
    DespawnEnemy { enemy: EnemyId },

    RadialDamage {
        center: Vec3,
        radius: f32,
        damage: u32,
    },
    DespawnExplosive { explosive: ExplosiveId },

    Ai(AiSignal),
}
