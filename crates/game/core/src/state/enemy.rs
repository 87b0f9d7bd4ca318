//! Enemies and explosive props.

use crate::math::Vec3;
use crate::sched::TimerHandle;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyId(pub u32);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExplosiveId(pub u32);

/// A damageable enemy with hit-react pacing and a timed health bar.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Enemy {
    pub id: EnemyId,
    pub location: Vec3,
    pub health: f32,
    pub max_health: f32,
    /// Bone name hits are compared against for headshot detection.
    pub head_bone: String,
    /// Hit-react montages are rate limited; cleared by a random-delay timer.
    pub can_hit_react: bool,
    pub health_bar_timer: Option<TimerHandle>,
}

impl Enemy {
    pub fn new(id: EnemyId, location: Vec3, max_health: f32, head_bone: impl Into<String>) -> Self {
        Self {
            id,
            location,
            health: max_health,
            max_health,
            head_bone: head_bone.into(),
            can_hit_react: true,
            health_bar_timer: None,
        }
    }
}

/// A prop that explodes when shot, dealing radial damage.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Explosive {
    pub id: ExplosiveId,
    pub location: Vec3,
    pub damage: u32,
    pub radius: f32,
}
