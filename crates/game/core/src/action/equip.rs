//! Equipping, hotkey slot swaps, and weapon throws.

use crate::action::{ActionCtx, ActionTransition, Rejection};
use crate::effects::{Effect, MontageKind, SoundKind};
use crate::engine::ExecuteError;
use crate::env::{GameEnv, compute_seed};
use crate::math::Vec3;
use crate::sched::TimerKind;
use crate::state::{CombatState, ItemId, ItemState, ShooterState};

/// Puts `item` in the character's hand. The caller has already placed it in
/// the inventory at `slot`.
pub(crate) fn equip_item(state: &mut ShooterState, ctx: &mut ActionCtx, item: ItemId, slot: u8) {
    if let Some(entry) = state.item_mut(item) {
        entry.slot_index = Some(slot);
        let flags = entry.set_state(ItemState::Equipped);
        ctx.emit(Effect::SetVisuals { item, flags });
    }
    ctx.emit(Effect::AttachToHand { item });
    state.character.equipped = Some(item);
}

/// Detaches `item` and throws it: outward-and-down direction with a bounded
/// random horizontal rotation, then a flight timer that lands it.
pub(crate) fn throw_item(
    state: &mut ShooterState,
    env: &GameEnv,
    ctx: &mut ActionCtx,
    item: ItemId,
) -> Result<(), ExecuteError> {
    let config = env.config()?;
    let rng = env.rng()?;

    let entry = state.item_mut(item).ok_or(ExecuteError::MissingItem(item))?;
    entry.slot_index = None;
    let flags = entry.set_state(ItemState::Falling);
    let yaw = entry.yaw;

    ctx.emit(Effect::Detach { item });
    ctx.emit(Effect::SetVisuals { item, flags });

    let forward = Vec3::from_yaw(yaw);
    let right = forward.rotate_around(Vec3::UP, 90.0);
    let seed = compute_seed(state.game_seed, state.nonce, item.0, 0);
    let random_yaw = rng.range_f32(seed, -config.throw_cone_degrees, config.throw_cone_degrees);
    let direction = right
        .rotate_around(forward, -config.throw_pitch_degrees)
        .rotate_around(Vec3::UP, random_yaw);

    ctx.emit(Effect::ApplyImpulse {
        item,
        direction,
        magnitude: config.throw_impulse,
    });
    ctx.schedule_in(config.throw_time, TimerKind::StopFalling(item));
    Ok(())
}

/// Hotkey swap: stow the equipped item and draw the one at `index`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExchangeSlot {
    pub index: usize,
}

impl ActionTransition for ExchangeSlot {
    fn pre_validate(&self, state: &ShooterState, _env: &GameEnv) -> Result<(), Rejection> {
        if state.character.combat != CombatState::Unoccupied {
            return Err(Rejection::Busy);
        }
        let target = state
            .character
            .inventory
            .get(self.index)
            .ok_or(Rejection::SlotOutOfBounds)?;
        if state.character.equipped == Some(target) {
            return Err(Rejection::SameSlot);
        }
        Ok(())
    }

    fn apply(
        &self,
        state: &mut ShooterState,
        _env: &GameEnv,
        ctx: &mut ActionCtx,
    ) -> Result<(), ExecuteError> {
        let target = state
            .character
            .inventory
            .get(self.index)
            .ok_or(ExecuteError::InventoryIndexOutOfBounds(self.index))?;

        if let Some(old) = state.character.equipped
            && let Some(entry) = state.item_mut(old)
        {
            let flags = entry.set_state(ItemState::PickedUp);
            ctx.emit(Effect::Detach { item: old });
            ctx.emit(Effect::SetVisuals { item: old, flags });
        }

        equip_item(state, ctx, target, self.index as u8);
        state.character.combat = CombatState::Equipping;
        ctx.emit(Effect::PlayMontage {
            montage: MontageKind::Equip,
            section: "Equip".into(),
        });
        ctx.emit(Effect::PlaySound {
            sound: SoundKind::Equip,
        });
        Ok(())
    }
}

/// Equip montage completed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FinishEquip;

impl ActionTransition for FinishEquip {
    fn pre_validate(&self, state: &ShooterState, _env: &GameEnv) -> Result<(), Rejection> {
        if state.character.combat != CombatState::Equipping {
            return Err(Rejection::NotEquipping);
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
        Ok(())
    }
}

/// Throws the equipped weapon away, vacating its inventory slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DropEquipped;

impl ActionTransition for DropEquipped {
    fn pre_validate(&self, state: &ShooterState, _env: &GameEnv) -> Result<(), Rejection> {
        if state.character.equipped.is_none() {
            return Err(Rejection::NoWeapon);
        }
        Ok(())
    }

    fn apply(
        &self,
        state: &mut ShooterState,
        env: &GameEnv,
        ctx: &mut ActionCtx,
    ) -> Result<(), ExecuteError> {
        let item = state
            .character
            .equipped
            .take()
            .ok_or(ExecuteError::NoEquippedWeapon)?;

        if let Some(index) = state.character.inventory.index_of(item) {
            state.character.inventory.remove(index);
            // Later slots shifted down; keep their items' slot indices true.
            for slot in index..state.character.inventory.len() {
                if let Some(id) = state.character.inventory.get(slot)
                    && let Some(entry) = state.item_mut(id)
                {
                    entry.slot_index = Some(slot as u8);
                }
            }
        }

        throw_item(state, env, ctx, item)
    }
}
