//! Firing and the auto-fire cooldown chain.

use crate::action::reload::try_start_reload;
use crate::action::{ActionCtx, ActionTransition, Rejection};
use crate::effects::{Effect, MontageKind, SoundKind};
use crate::engine::ExecuteError;
use crate::env::GameEnv;
use crate::sched::TimerKind;
use crate::state::{CombatState, ShooterState};

/// Fire-button edge (or an auto-fire continuation).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FireWeapon;

pub(crate) fn can_fire(state: &ShooterState) -> Result<(), Rejection> {
    if state.character.combat != CombatState::Unoccupied {
        return Err(Rejection::Busy);
    }
    let weapon = state.equipped_weapon().ok_or(Rejection::NoWeapon)?;
    if weapon.ammo == 0 {
        return Err(Rejection::NoAmmo);
    }
    Ok(())
}

/// Shared fire routine. Preconditions checked by the caller.
///
/// Effect order matters for presentation parity: sound, shot, montage, then
/// the crosshair kick, then the ammo decrement and cooldown arm.
pub(crate) fn perform_fire(
    state: &mut ShooterState,
    env: &GameEnv,
    ctx: &mut ActionCtx,
) -> Result<(), ExecuteError> {
    let config = env.config()?;

    ctx.emit(Effect::PlaySound {
        sound: SoundKind::Fire,
    });
    ctx.emit(Effect::EmitShot);
    ctx.emit(Effect::PlayMontage {
        montage: MontageKind::HipFire,
        section: "StartFire".into(),
    });

    // Restart the kick window on every shot.
    state.character.crosshair.kick_active = true;
    if let Some(handle) = state.character.kick_timer.take() {
        ctx.timers.cancel(handle);
    }
    state.character.kick_timer =
        Some(ctx.schedule_in(config.crosshair_kick_time, TimerKind::CrosshairKickEnd));

    // The reset must land strictly in the future even when the host zeroes
    // the configured floor.
    let min_interval = config.min_auto_fire_interval.max(f32::EPSILON);
    let weapon = state
        .equipped_weapon_mut()
        .ok_or(ExecuteError::NoEquippedWeapon)?;
    weapon.decrement_ammo();
    // The cooldown floor keeps a zero fire rate from re-firing within the
    // same frame forever.
    let interval = weapon.auto_fire_rate.max(min_interval);

    state.character.combat = CombatState::FireTimerInProgress;
    state.character.auto_fire_timer = Some(ctx.schedule_in(interval, TimerKind::AutoFireReset));
    Ok(())
}

impl ActionTransition for FireWeapon {
    fn pre_validate(&self, state: &ShooterState, _env: &GameEnv) -> Result<(), Rejection> {
        can_fire(state)
    }

    fn apply(
        &self,
        state: &mut ShooterState,
        env: &GameEnv,
        ctx: &mut ActionCtx,
    ) -> Result<(), ExecuteError> {
        perform_fire(state, env, ctx)
    }
}

/// Cooldown expiry: return to `Unoccupied`, then either re-fire (automatic
/// weapon, trigger still held, rounds left) or auto-reload on an empty
/// magazine. The next shot arms a fresh timer, so the chain never recurses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AutoFireReset;

impl ActionTransition for AutoFireReset {
    fn pre_validate(&self, state: &ShooterState, _env: &GameEnv) -> Result<(), Rejection> {
        if state.character.combat != CombatState::FireTimerInProgress {
            return Err(Rejection::NotFiring);
        }
        Ok(())
    }

    fn apply(
        &self,
        state: &mut ShooterState,
        env: &GameEnv,
        ctx: &mut ActionCtx,
    ) -> Result<(), ExecuteError> {
        state.character.combat = CombatState::Unoccupied;
        state.character.auto_fire_timer = None;

        let Some(weapon) = state.equipped_weapon() else {
            return Ok(());
        };
        if weapon.ammo > 0 {
            if weapon.automatic && state.character.fire_button_held {
                perform_fire(state, env, ctx)?;
            }
        } else {
            // Empty magazine rolls straight into a reload when possible.
            try_start_reload(state, ctx)?;
        }
        Ok(())
    }
}

/// Kick-window expiry: the shooting factor starts decaying.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CrosshairKickEnd;

impl ActionTransition for CrosshairKickEnd {
    fn apply(
        &self,
        state: &mut ShooterState,
        _env: &GameEnv,
        ctx: &mut ActionCtx,
    ) -> Result<(), ExecuteError> {
        state.character.crosshair.kick_active = false;
        if let Some(handle) = state.character.kick_timer.take() {
            ctx.timers.cancel(handle);
        }
        Ok(())
    }
}
