//! The pickup/equip item lifecycle.

use crate::action::equip::{equip_item, throw_item};
use crate::action::{ActionCtx, ActionTransition, Rejection};
use crate::effects::{Effect, SoundKind};
use crate::engine::ExecuteError;
use crate::env::GameEnv;
use crate::sched::TimerKind;
use crate::state::{InterpSlots, ItemId, ItemKind, ItemState, ShooterState};

/// Interact with a pickup: reserve an interp slot and launch the item
/// toward the character.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectItem {
    pub item: ItemId,
}

impl ActionTransition for SelectItem {
    fn pre_validate(&self, state: &ShooterState, _env: &GameEnv) -> Result<(), Rejection> {
        let item = state.item(self.item).ok_or(Rejection::MissingTarget)?;
        if item.state != ItemState::Pickup {
            return Err(Rejection::NotPickup);
        }
        Ok(())
    }

    fn apply(
        &self,
        state: &mut ShooterState,
        env: &GameEnv,
        ctx: &mut ActionCtx,
    ) -> Result<(), ExecuteError> {
        let config = env.config()?;

        // Weapons fly to the dedicated hand slot, everything else fans out
        // over the least-loaded generic slot.
        let entry = state
            .item(self.item)
            .ok_or(ExecuteError::MissingItem(self.item))?;
        let slot = if entry.kind.is_weapon() {
            InterpSlots::WEAPON_SLOT
        } else {
            state.character.interp_slots.least_loaded()
        };
        state.character.interp_slots.adjust(slot, 1);

        let camera_yaw = state.character.camera.yaw;
        let now = ctx.now;
        let entry = state
            .item_mut(self.item)
            .ok_or(ExecuteError::MissingItem(self.item))?;
        entry.interp_slot = Some(slot);
        entry.interp_start = entry.location;
        entry.yaw_offset = entry.yaw - camera_yaw;
        entry.interp_started_at = now;
        let flags = entry.set_state(ItemState::EquipInterping);

        // The pulse stops while the item is in flight.
        ctx.timers.cancel_item(self.item);

        ctx.emit(Effect::SetVisuals {
            item: self.item,
            flags,
        });
        ctx.emit(Effect::SetPickupWidget {
            item: self.item,
            visible: false,
        });
        ctx.emit(Effect::PlaySound {
            sound: SoundKind::Pickup,
        });
        ctx.schedule_in(config.equip_interp_time, TimerKind::FinishInterp(self.item));
        Ok(())
    }
}

/// Interp timer completion: release the slot and let the character decide
/// what the item becomes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FinishInterp {
    pub item: ItemId,
}

impl ActionTransition for FinishInterp {
    fn pre_validate(&self, state: &ShooterState, _env: &GameEnv) -> Result<(), Rejection> {
        let item = state.item(self.item).ok_or(Rejection::MissingTarget)?;
        if item.state != ItemState::EquipInterping {
            return Err(Rejection::NotInterping);
        }
        Ok(())
    }

    fn apply(
        &self,
        state: &mut ShooterState,
        env: &GameEnv,
        ctx: &mut ActionCtx,
    ) -> Result<(), ExecuteError> {
        let entry = state
            .item_mut(self.item)
            .ok_or(ExecuteError::MissingItem(self.item))?;
        let slot = entry.interp_slot.take();
        entry.scale = 1.0;
        let kind = entry.kind.clone();
        let count = entry.count;

        if let Some(slot) = slot {
            state.character.interp_slots.adjust(slot, -1);
        }
        ctx.emit(Effect::SetGlow {
            item: self.item,
            enabled: false,
        });
        ctx.emit(Effect::PlaySound {
            sound: SoundKind::Equip,
        });

        match kind {
            ItemKind::Ammo { ammo_type } => {
                state.character.ammo.add(ammo_type, count);

                // An empty equipped weapon of the same type reloads as soon
                // as compatible rounds arrive.
                let auto_reload = state
                    .equipped_weapon()
                    .is_some_and(|weapon| weapon.ammo == 0 && weapon.ammo_type == ammo_type);

                ctx.emit(Effect::DespawnItem { item: self.item });
                state.remove_item(self.item);

                if auto_reload {
                    crate::action::reload::try_start_reload(state, ctx)?;
                }
            }
            ItemKind::Weapon(_) => {
                if state.character.equipped.is_none() {
                    let slot = state
                        .character
                        .inventory
                        .push(self.item)
                        .ok_or(ExecuteError::InventoryFull)?;
                    equip_item(state, ctx, self.item, slot as u8);
                } else if let Some(slot) = state.character.inventory.push(self.item) {
                    let entry = state
                        .item_mut(self.item)
                        .ok_or(ExecuteError::MissingItem(self.item))?;
                    entry.slot_index = Some(slot as u8);
                    let flags = entry.set_state(ItemState::PickedUp);
                    ctx.emit(Effect::SetVisuals {
                        item: self.item,
                        flags,
                    });
                } else {
                    // Inventory full: the new weapon takes the equipped
                    // item's slot and the old one is thrown away.
                    let old = state
                        .character
                        .equipped
                        .ok_or(ExecuteError::NoEquippedWeapon)?;
                    let slot = state
                        .character
                        .inventory
                        .index_of(old)
                        .ok_or(ExecuteError::MissingItem(old))?;
                    state.character.inventory.replace(slot, self.item);
                    throw_item(state, env, ctx, old)?;
                    equip_item(state, ctx, self.item, slot as u8);
                }
            }
        }
        Ok(())
    }
}

/// Flight timer completion for a thrown weapon: settle back into a pickup
/// and restart the glow pulse.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StopFalling {
    pub item: ItemId,
}

impl ActionTransition for StopFalling {
    fn pre_validate(&self, state: &ShooterState, _env: &GameEnv) -> Result<(), Rejection> {
        let item = state.item(self.item).ok_or(Rejection::MissingTarget)?;
        if item.state != ItemState::Falling {
            return Err(Rejection::NotFalling);
        }
        Ok(())
    }

    fn apply(
        &self,
        state: &mut ShooterState,
        env: &GameEnv,
        ctx: &mut ActionCtx,
    ) -> Result<(), ExecuteError> {
        let config = env.config()?;
        let entry = state
            .item_mut(self.item)
            .ok_or(ExecuteError::MissingItem(self.item))?;
        let flags = entry.set_state(ItemState::Pickup);
        entry.pulse_started_at = ctx.now;

        ctx.emit(Effect::SetVisuals {
            item: self.item,
            flags,
        });
        ctx.emit(Effect::SetGlow {
            item: self.item,
            enabled: true,
        });
        ctx.schedule_in(config.pulse_curve_time, TimerKind::PulseTick(self.item));
        Ok(())
    }
}

/// Pulse period rollover: restart the glow curve and re-arm. The timer
/// chain dies as soon as the item leaves the pickup state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PulseTick {
    pub item: ItemId,
}

impl ActionTransition for PulseTick {
    fn pre_validate(&self, state: &ShooterState, _env: &GameEnv) -> Result<(), Rejection> {
        let item = state.item(self.item).ok_or(Rejection::MissingTarget)?;
        if item.state != ItemState::Pickup {
            return Err(Rejection::NotPickup);
        }
        Ok(())
    }

    fn apply(
        &self,
        state: &mut ShooterState,
        env: &GameEnv,
        ctx: &mut ActionCtx,
    ) -> Result<(), ExecuteError> {
        let config = env.config()?;
        let entry = state
            .item_mut(self.item)
            .ok_or(ExecuteError::MissingItem(self.item))?;
        entry.pulse_started_at = ctx.now;
        ctx.schedule_in(config.pulse_curve_time, TimerKind::PulseTick(self.item));
        Ok(())
    }
}
