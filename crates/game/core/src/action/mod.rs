//! Discrete state transitions.
//!
//! Every external stimulus enters the simulation as an [`Action`]: input
//! edges, expired timers, and animation completion callbacks all funnel
//! through the same [`ActionTransition`] pipeline. Each action validates its
//! preconditions against immutable state first, then applies; rejected
//! actions are dropped without side effects, matching the silent-no-op
//! policy for busy combat states and stale references.
mod damage;
mod equip;
mod fire;
mod pickup;
mod reload;

pub use damage::{EnemyHit, ExplosiveHit, HideHealthBar, HitReactReset};
pub use equip::{DropEquipped, ExchangeSlot, FinishEquip};
pub use fire::{AutoFireReset, CrosshairKickEnd, FireWeapon};
pub use pickup::{FinishInterp, PulseTick, SelectItem, StopFalling};
pub use reload::{FinishReload, GrabClip, ReleaseClip, StartReload};

use thiserror::Error;

use crate::effects::Effect;
use crate::engine::ExecuteError;
use crate::env::GameEnv;
use crate::math::Vec3;
use crate::sched::{Seconds, TimerHandle, TimerKind, TimerQueue};
use crate::state::{EnemyId, ExplosiveId, ItemId, ShooterState};

/// Why an action was dropped. Drops are expected control flow, not errors;
/// the runtime logs them at debug level and moves on.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    #[error("combat state is busy")]
    Busy,
    #[error("no weapon equipped")]
    NoWeapon,
    #[error("magazine is empty")]
    NoAmmo,
    #[error("magazine is already full")]
    ClipFull,
    #[error("no carried ammo of the weapon's type")]
    NoCarriedAmmo,
    #[error("inventory slot out of bounds")]
    SlotOutOfBounds,
    #[error("slot already equipped")]
    SameSlot,
    #[error("item is not in pickup state")]
    NotPickup,
    #[error("item is not interping")]
    NotInterping,
    #[error("item is not falling")]
    NotFalling,
    #[error("combat state is not reloading")]
    NotReloading,
    #[error("combat state is not equipping")]
    NotEquipping,
    #[error("combat state is not firing")]
    NotFiring,
    #[error("referenced entity no longer exists")]
    MissingTarget,
}

/// Mutable context handed to `apply`: the clock, the timer queue, and the
/// outbound effect buffer.
pub struct ActionCtx<'a> {
    pub now: Seconds,
    pub timers: &'a mut TimerQueue,
    pub effects: &'a mut Vec<Effect>,
}

impl ActionCtx<'_> {
    pub fn emit(&mut self, effect: Effect) {
        self.effects.push(effect);
    }

    /// Schedules a timer `delay` seconds from now.
    pub fn schedule_in(&mut self, delay: Seconds, kind: TimerKind) -> TimerHandle {
        self.timers.schedule(self.now + delay, kind)
    }
}

/// A state transition: validate against immutable state, then apply.
///
/// `pre_validate` must not mutate anything; a rejection there guarantees the
/// action had no observable effect.
pub trait ActionTransition {
    fn pre_validate(&self, _state: &ShooterState, _env: &GameEnv) -> Result<(), Rejection> {
        Ok(())
    }

    fn apply(
        &self,
        state: &mut ShooterState,
        env: &GameEnv,
        ctx: &mut ActionCtx,
    ) -> Result<(), ExecuteError>;
}

/// Every transition the engine can execute.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Action {
    /// The player interacted with a pickup in front of the crosshair.
    SelectItem { item: ItemId },
    /// Equip interpolation reached the character.
    FinishInterp { item: ItemId },
    /// A thrown weapon's flight timer landed it.
    StopFalling { item: ItemId },
    /// Glow-pulse period rollover for a pickup.
    PulseTick { item: ItemId },

    FireWeapon,
    AutoFireReset,
    CrosshairKickEnd,

    StartReload,
    /// Reload montage completed; transfer rounds from the ledger.
    FinishReload,
    /// Anim notify: the hand grabbed the clip.
    GrabClip,
    /// Anim notify: the clip snapped back into the weapon.
    ReleaseClip,

    /// Hotkey swap to an inventory slot.
    ExchangeSlot { index: usize },
    /// Equip montage completed.
    FinishEquip,
    /// Throw the equipped weapon.
    DropEquipped,

    /// A shot landed on an enemy.
    EnemyHit {
        enemy: EnemyId,
        location: Vec3,
        headshot: bool,
    },
    HitReactReset { enemy: EnemyId },
    HideHealthBar { enemy: EnemyId },
    /// A shot landed on an explosive prop.
    ExplosiveHit { explosive: ExplosiveId },
}

impl From<TimerKind> for Action {
    fn from(kind: TimerKind) -> Self {
        match kind {
            TimerKind::AutoFireReset => Self::AutoFireReset,
            TimerKind::CrosshairKickEnd => Self::CrosshairKickEnd,
            TimerKind::FinishInterp(item) => Self::FinishInterp { item },
            TimerKind::StopFalling(item) => Self::StopFalling { item },
            TimerKind::PulseTick(item) => Self::PulseTick { item },
            TimerKind::HideHealthBar(enemy) => Self::HideHealthBar { enemy },
            TimerKind::HitReactReset(enemy) => Self::HitReactReset { enemy },
        }
    }
}

impl ActionTransition for Action {
    fn pre_validate(&self, state: &ShooterState, env: &GameEnv) -> Result<(), Rejection> {
        match *self {
            Self::SelectItem { item } => SelectItem { item }.pre_validate(state, env),
            Self::FinishInterp { item } => FinishInterp { item }.pre_validate(state, env),
            Self::StopFalling { item } => StopFalling { item }.pre_validate(state, env),
            Self::PulseTick { item } => PulseTick { item }.pre_validate(state, env),
            Self::FireWeapon => FireWeapon.pre_validate(state, env),
            Self::AutoFireReset => AutoFireReset.pre_validate(state, env),
            Self::CrosshairKickEnd => CrosshairKickEnd.pre_validate(state, env),
            Self::StartReload => StartReload.pre_validate(state, env),
            Self::FinishReload => FinishReload.pre_validate(state, env),
            Self::GrabClip => GrabClip.pre_validate(state, env),
            Self::ReleaseClip => ReleaseClip.pre_validate(state, env),
            Self::ExchangeSlot { index } => ExchangeSlot { index }.pre_validate(state, env),
            Self::FinishEquip => FinishEquip.pre_validate(state, env),
            Self::DropEquipped => DropEquipped.pre_validate(state, env),
            Self::EnemyHit {
                enemy,
                location,
                headshot,
            } => EnemyHit {
                enemy,
                location,
                headshot,
            }
            .pre_validate(state, env),
            Self::HitReactReset { enemy } => HitReactReset { enemy }.pre_validate(state, env),
            Self::HideHealthBar { enemy } => HideHealthBar { enemy }.pre_validate(state, env),
            Self::ExplosiveHit { explosive } => {
                ExplosiveHit { explosive }.pre_validate(state, env)
            }
        }
    }

    fn apply(
        &self,
        state: &mut ShooterState,
        env: &GameEnv,
        ctx: &mut ActionCtx,
    ) -> Result<(), ExecuteError> {
        match *self {
            Self::SelectItem { item } => SelectItem { item }.apply(state, env, ctx),
            Self::FinishInterp { item } => FinishInterp { item }.apply(state, env, ctx),
            Self::StopFalling { item } => StopFalling { item }.apply(state, env, ctx),
            Self::PulseTick { item } => PulseTick { item }.apply(state, env, ctx),
            Self::FireWeapon => FireWeapon.apply(state, env, ctx),
            Self::AutoFireReset => AutoFireReset.apply(state, env, ctx),
            Self::CrosshairKickEnd => CrosshairKickEnd.apply(state, env, ctx),
            Self::StartReload => StartReload.apply(state, env, ctx),
            Self::FinishReload => FinishReload.apply(state, env, ctx),
            Self::GrabClip => GrabClip.apply(state, env, ctx),
            Self::ReleaseClip => ReleaseClip.apply(state, env, ctx),
            Self::ExchangeSlot { index } => ExchangeSlot { index }.apply(state, env, ctx),
            Self::FinishEquip => FinishEquip.apply(state, env, ctx),
            Self::DropEquipped => DropEquipped.apply(state, env, ctx),
            Self::EnemyHit {
                enemy,
                location,
                headshot,
            } => EnemyHit {
                enemy,
                location,
                headshot,
            }
            .apply(state, env, ctx),
            Self::HitReactReset { enemy } => HitReactReset { enemy }.apply(state, env, ctx),
            Self::HideHealthBar { enemy } => HideHealthBar { enemy }.apply(state, env, ctx),
            Self::ExplosiveHit { explosive } => ExplosiveHit { explosive }.apply(state, env, ctx),
        }
    }
}
