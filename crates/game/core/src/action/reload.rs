//! Reload orchestration.
//!
//! Starting a reload only plays the montage; the actual round transfer is
//! deferred to the animation completion callback so interrupting the clip
//! animation never duplicates ammo.

use crate::action::{ActionCtx, ActionTransition, Rejection};
use crate::effects::{Effect, MontageKind};
use crate::engine::ExecuteError;
use crate::env::GameEnv;
use crate::state::{CombatState, ShooterState};

pub(crate) fn can_reload(state: &ShooterState) -> Result<(), Rejection> {
    if state.character.combat != CombatState::Unoccupied {
        return Err(Rejection::Busy);
    }
    let weapon = state.equipped_weapon().ok_or(Rejection::NoWeapon)?;
    if !state.character.ammo.has_ammo(weapon.ammo_type) {
        return Err(Rejection::NoCarriedAmmo);
    }
    if weapon.clip_is_full() {
        return Err(Rejection::ClipFull);
    }
    Ok(())
}

fn begin_reload(state: &mut ShooterState, ctx: &mut ActionCtx) {
    // The zoom drops during the clip animation; FinishReload restores it
    // when the aim button is still held.
    state.character.aiming = false;
    state.character.combat = CombatState::Reloading;
    let section = state
        .equipped_weapon()
        .map(|weapon| weapon.reload_montage_section.clone())
        .unwrap_or_default();
    ctx.emit(Effect::PlayMontage {
        montage: MontageKind::Reload,
        section,
    });
}

/// Starts a reload when the preconditions hold, otherwise does nothing.
/// Used by the auto-reload path where a failed start is normal.
pub(crate) fn try_start_reload(
    state: &mut ShooterState,
    ctx: &mut ActionCtx,
) -> Result<(), ExecuteError> {
    if can_reload(state).is_ok() {
        begin_reload(state, ctx);
    }
    Ok(())
}

/// Reload-button edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StartReload;

impl ActionTransition for StartReload {
    fn pre_validate(&self, state: &ShooterState, _env: &GameEnv) -> Result<(), Rejection> {
        can_reload(state)
    }

    fn apply(
        &self,
        state: &mut ShooterState,
        _env: &GameEnv,
        ctx: &mut ActionCtx,
    ) -> Result<(), ExecuteError> {
        begin_reload(state, ctx);
        Ok(())
    }
}

/// Reload montage completed: transfer rounds from the ledger into the
/// magazine, bounded by the magazine gap.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FinishReload;

impl ActionTransition for FinishReload {
    fn pre_validate(&self, state: &ShooterState, _env: &GameEnv) -> Result<(), Rejection> {
        if state.character.combat != CombatState::Reloading {
            return Err(Rejection::NotReloading);
        }
        Ok(())
    }

    fn apply(
        &self,
        state: &mut ShooterState,
        _env: &GameEnv,
        _ctx: &mut ActionCtx,
    ) -> Result<(), ExecuteError> {
        state.character.combat = CombatState::Unoccupied;
        if state.character.aim_button_held {
            state.character.aiming = true;
        }

        let Some(weapon) = state.equipped_weapon() else {
            return Ok(());
        };
        let ammo_type = weapon.ammo_type;
        let gap = weapon.magazine_gap();
        let taken = state.character.ammo.withdraw_up_to(ammo_type, gap);
        if taken > 0 {
            let weapon = state
                .equipped_weapon_mut()
                .ok_or(ExecuteError::NoEquippedWeapon)?;
            weapon.reload_ammo(taken);
        }
        Ok(())
    }
}

/// Anim notify: the reload animation detached the clip into the hand.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GrabClip;

impl ActionTransition for GrabClip {
    fn pre_validate(&self, state: &ShooterState, _env: &GameEnv) -> Result<(), Rejection> {
        if state.character.combat != CombatState::Reloading {
            return Err(Rejection::NotReloading);
        }
        if state.equipped_weapon().is_none() {
            return Err(Rejection::NoWeapon);
        }
        Ok(())
    }

    fn apply(
        &self,
        state: &mut ShooterState,
        _env: &GameEnv,
        _ctx: &mut ActionCtx,
    ) -> Result<(), ExecuteError> {
        let weapon = state
            .equipped_weapon_mut()
            .ok_or(ExecuteError::NoEquippedWeapon)?;
        weapon.moving_clip = true;
        Ok(())
    }
}

/// Anim notify: the clip snapped back into the weapon.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReleaseClip;

impl ActionTransition for ReleaseClip {
    fn pre_validate(&self, state: &ShooterState, _env: &GameEnv) -> Result<(), Rejection> {
        if state.equipped_weapon().is_none() {
            return Err(Rejection::NoWeapon);
        }
        Ok(())
    }

    fn apply(
        &self,
        state: &mut ShooterState,
        _env: &GameEnv,
        _ctx: &mut ActionCtx,
    ) -> Result<(), ExecuteError> {
        let weapon = state
            .equipped_weapon_mut()
            .ok_or(ExecuteError::NoEquippedWeapon)?;
        weapon.moving_clip = false;
        Ok(())
    }
}
