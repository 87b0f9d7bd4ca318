//! Action execution and the per-frame continuous update.
//!
//! [`ShooterEngine`] borrows the state mutably for the duration of a call;
//! it owns no state of its own. `execute` runs one discrete action through
//! validate-then-apply; `tick` advances the continuous pieces (crosshair
//! smoothing, item interpolation, glow pulse) and returns transform/material
//! effects for the host to apply.

use thiserror::Error;

use crate::action::{Action, ActionCtx, ActionTransition, Rejection};
use crate::effects::Effect;
use crate::env::{GameEnv, OracleError};
use crate::math::interp_to;
use crate::sched::{Seconds, TimerQueue};
use crate::state::{EnemyId, ExplosiveId, ItemId, ItemKind, ItemState, ShooterState};

/// Errors that indicate a broken invariant rather than a droppable request.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ExecuteError {
    #[error(transparent)]
    Oracle(#[from] OracleError),

    #[error("no weapon equipped while one was required")]
    NoEquippedWeapon,

    #[error("item {0:?} does not exist")]
    MissingItem(ItemId),

    #[error("enemy {0:?} does not exist")]
    MissingEnemy(EnemyId),

    #[error("explosive {0:?} does not exist")]
    MissingExplosive(ExplosiveId),

    #[error("inventory index {0} out of bounds")]
    InventoryIndexOutOfBounds(usize),

    #[error("inventory is full")]
    InventoryFull,
}

/// Result of executing one action.
#[derive(Clone, Debug, PartialEq)]
pub enum ExecutionOutcome {
    /// The action ran; effects are in emission order.
    Applied { effects: Vec<Effect> },
    /// Preconditions failed; nothing changed.
    Dropped { rejection: Rejection },
}

impl ExecutionOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied { .. })
    }
}

/// Continuous inputs the host samples each frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameInputs {
    /// Horizontal movement speed.
    pub ground_speed: f32,
    pub airborne: bool,
}

/// Executes actions and frame updates against a borrowed state.
pub struct ShooterEngine<'a> {
    pub state: &'a mut ShooterState,
}

impl<'a> ShooterEngine<'a> {
    pub fn new(state: &'a mut ShooterState) -> Self {
        Self { state }
    }

    /// Runs one action: validate, bump the nonce, apply.
    pub fn execute(
        &mut self,
        env: &GameEnv,
        timers: &mut TimerQueue,
        now: Seconds,
        action: &Action,
    ) -> Result<ExecutionOutcome, ExecuteError> {
        if let Err(rejection) = action.pre_validate(self.state, env) {
            return Ok(ExecutionOutcome::Dropped { rejection });
        }

        self.state.next_nonce();
        let mut effects = Vec::new();
        let mut ctx = ActionCtx {
            now,
            timers,
            effects: &mut effects,
        };
        action.apply(self.state, env, &mut ctx)?;
        Ok(ExecutionOutcome::Applied { effects })
    }

    /// Advances the continuous state for one frame and returns the visual
    /// effects: crosshair factors update in place, interping items move,
    /// pickups sample their glow pulse.
    pub fn tick(
        &mut self,
        env: &GameEnv,
        now: Seconds,
        dt: Seconds,
        inputs: &FrameInputs,
    ) -> Result<Vec<Effect>, ExecuteError> {
        let config = env.config()?;
        let mut effects = Vec::new();

        let aiming = self.state.character.aiming;
        self.state.character.crosshair.update(
            dt,
            inputs.ground_speed,
            config.max_walk_speed,
            inputs.airborne,
            aiming,
        );

        let target = self.state.character.camera.interp_target(config);
        let camera_yaw = self.state.character.camera.yaw;

        for item in &mut self.state.items {
            match item.state {
                ItemState::EquipInterping => {
                    let elapsed = now - item.interp_started_at;
                    // Horizontal chase at a fixed rate; height follows the
                    // curve scaled by the initial height gap.
                    item.location.x =
                        interp_to(item.location.x, target.x, dt, config.item_interp_xy_speed);
                    item.location.y =
                        interp_to(item.location.y, target.y, dt, config.item_interp_xy_speed);
                    let delta_z = target.z - item.interp_start.z;
                    item.location.z =
                        item.interp_start.z + config.item_z_curve.sample(elapsed) * delta_z;
                    item.scale = config.item_scale_curve.sample(elapsed);
                    item.yaw = camera_yaw + item.yaw_offset;
                    effects.push(Effect::SetItemTransform {
                        item: item.id,
                        location: item.location,
                        yaw: item.yaw,
                        scale: item.scale,
                    });
                }
                ItemState::Pickup => {
                    // Ammo boxes have no glow material.
                    if matches!(item.kind, ItemKind::Weapon(_)) {
                        let elapsed = now - item.pulse_started_at;
                        let [glow, exponent, fraction] = config.pulse_curve.sample(elapsed);
                        effects.push(Effect::SetGlowPulse {
                            item: item.id,
                            glow_amount: glow,
                            fresnel_exponent: exponent,
                            fresnel_reflect_fraction: fraction,
                        });
                    }
                }
                _ => {}
            }
        }

        Ok(effects)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::env::{Env, PcgRng, RarityRow, WeaponSpec};
    use crate::math::{LinearColor, Vec3};
    use crate::sched::TimerKind;
    use crate::state::{
        AmmoType, CombatState, ItemRarity, ItemState, MeshFlags, ShooterState, WeaponType,
    };

    struct Fixture {
        weapons: Vec<WeaponSpec>,
        rarity: Vec<RarityRow>,
        rng: PcgRng,
        config: GameConfig,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                weapons: vec![smg_spec(), ar_spec()],
                rarity: vec![RarityRow {
                    rarity: ItemRarity::Common,
                    glow_color: LinearColor::new(0.0, 1.0, 0.0, 1.0),
                    light_color: LinearColor::new(0.2, 1.0, 0.2, 1.0),
                    dark_color: LinearColor::new(0.0, 0.3, 0.0, 1.0),
                    stars: 2,
                    custom_depth_stencil: 252,
                }],
                rng: PcgRng,
                config: GameConfig::default(),
            }
        }

        fn env(&self) -> GameEnv<'_> {
            Env::with_all(&self.weapons, &self.rarity, &self.rng, &self.config).as_game_env()
        }
    }

    fn smg_spec() -> WeaponSpec {
        WeaponSpec {
            weapon_type: WeaponType::Smg,
            name: "SMG".into(),
            ammo_type: AmmoType::Mm9,
            starting_ammo: 10,
            magazine_capacity: 30,
            damage: 20,
            headshot_damage: 45,
            automatic: true,
            auto_fire_rate: 0.1,
            reload_montage_section: "Reload SMG".into(),
            clip_bone_name: "smg_clip".into(),
        }
    }

    fn ar_spec() -> WeaponSpec {
        WeaponSpec {
            weapon_type: WeaponType::AssaultRifle,
            name: "Assault Rifle".into(),
            ammo_type: AmmoType::AssaultRifle,
            starting_ammo: 30,
            magazine_capacity: 30,
            damage: 25,
            headshot_damage: 60,
            automatic: true,
            auto_fire_rate: 0.08,
            reload_montage_section: "Reload AR".into(),
            clip_bone_name: "ar_clip".into(),
        }
    }

    /// Spawns an SMG and walks it through select + interp so it ends up
    /// equipped the same way live play would produce it.
    fn state_with_equipped_smg(
        fixture: &Fixture,
        timers: &mut TimerQueue,
    ) -> (ShooterState, crate::state::ItemId) {
        let mut state = ShooterState::new(7, &fixture.config);
        let item = state.spawn_weapon(
            &smg_spec(),
            ItemRarity::Common,
            Vec3::new(100.0, 0.0, 0.0),
            0.0,
        );
        let env = fixture.env();
        let mut engine = ShooterEngine::new(&mut state);
        let outcome = engine
            .execute(&env, timers, 0.0, &Action::SelectItem { item })
            .unwrap();
        assert!(outcome.is_applied());
        let kind = timers.pop_due(0.7).unwrap();
        assert_eq!(kind, TimerKind::FinishInterp(item));
        let outcome = engine
            .execute(&env, timers, 0.7, &Action::from(kind))
            .unwrap();
        assert!(outcome.is_applied());
        assert_eq!(state.character.equipped, Some(item));
        (state, item)
    }

    #[test]
    fn reload_transfers_min_of_carried_and_gap() {
        let fixture = Fixture::new();
        let mut timers = TimerQueue::new();
        let (mut state, _item) = state_with_equipped_smg(&fixture, &mut timers);
        let env = fixture.env();

        assert_eq!(state.character.ammo.carried(AmmoType::Mm9), 85);
        assert_eq!(state.equipped_weapon().unwrap().ammo, 10);

        let mut engine = ShooterEngine::new(&mut state);
        let outcome = engine
            .execute(&env, &mut timers, 1.0, &Action::StartReload)
            .unwrap();
        assert!(outcome.is_applied());
        assert_eq!(state.character.combat, CombatState::Reloading);

        let mut engine = ShooterEngine::new(&mut state);
        engine
            .execute(&env, &mut timers, 2.0, &Action::FinishReload)
            .unwrap();
        // min(carried 85, gap 20) = 20 transferred.
        assert_eq!(state.equipped_weapon().unwrap().ammo, 30);
        assert_eq!(state.character.ammo.carried(AmmoType::Mm9), 65);
        assert_eq!(state.character.combat, CombatState::Unoccupied);
    }

    #[test]
    fn reload_drains_ledger_when_carried_is_short() {
        let fixture = Fixture::new();
        let mut timers = TimerQueue::new();
        let (mut state, _item) = state_with_equipped_smg(&fixture, &mut timers);
        let env = fixture.env();

        state.character.ammo = Default::default();
        state.character.ammo.add(AmmoType::Mm9, 5);

        let mut engine = ShooterEngine::new(&mut state);
        engine
            .execute(&env, &mut timers, 1.0, &Action::StartReload)
            .unwrap();
        engine
            .execute(&env, &mut timers, 2.0, &Action::FinishReload)
            .unwrap();
        assert_eq!(state.equipped_weapon().unwrap().ammo, 15);
        assert_eq!(state.character.ammo.carried(AmmoType::Mm9), 0);
    }

    #[test]
    fn fire_with_empty_magazine_is_dropped() {
        let fixture = Fixture::new();
        let mut timers = TimerQueue::new();
        let (mut state, _item) = state_with_equipped_smg(&fixture, &mut timers);
        let env = fixture.env();

        state.equipped_weapon_mut().unwrap().ammo = 0;
        let timers_before = timers.len();

        let mut engine = ShooterEngine::new(&mut state);
        let outcome = engine
            .execute(&env, &mut timers, 1.0, &Action::FireWeapon)
            .unwrap();
        assert_eq!(
            outcome,
            ExecutionOutcome::Dropped {
                rejection: Rejection::NoAmmo
            }
        );
        assert_eq!(state.equipped_weapon().unwrap().ammo, 0);
        assert_eq!(state.character.combat, CombatState::Unoccupied);
        assert_eq!(timers.len(), timers_before);
    }

    #[test]
    fn requests_while_reloading_are_dropped() {
        let fixture = Fixture::new();
        let mut timers = TimerQueue::new();
        let (mut state, _item) = state_with_equipped_smg(&fixture, &mut timers);
        let env = fixture.env();

        let mut engine = ShooterEngine::new(&mut state);
        engine
            .execute(&env, &mut timers, 1.0, &Action::StartReload)
            .unwrap();
        assert_eq!(state.character.combat, CombatState::Reloading);

        let mut engine = ShooterEngine::new(&mut state);
        let fire = engine
            .execute(&env, &mut timers, 1.1, &Action::FireWeapon)
            .unwrap();
        assert_eq!(
            fire,
            ExecutionOutcome::Dropped {
                rejection: Rejection::Busy
            }
        );
        let reload = engine
            .execute(&env, &mut timers, 1.1, &Action::StartReload)
            .unwrap();
        assert_eq!(
            reload,
            ExecutionOutcome::Dropped {
                rejection: Rejection::Busy
            }
        );
        assert_eq!(state.character.combat, CombatState::Reloading);
    }

    #[test]
    fn fire_decrements_ammo_and_arms_cooldown() {
        let fixture = Fixture::new();
        let mut timers = TimerQueue::new();
        let (mut state, _item) = state_with_equipped_smg(&fixture, &mut timers);
        let env = fixture.env();

        let mut engine = ShooterEngine::new(&mut state);
        let outcome = engine
            .execute(&env, &mut timers, 1.0, &Action::FireWeapon)
            .unwrap();
        assert!(outcome.is_applied());
        assert_eq!(state.equipped_weapon().unwrap().ammo, 9);
        assert_eq!(state.character.combat, CombatState::FireTimerInProgress);
        assert!(state.character.auto_fire_timer.is_some());
        assert!(state.character.crosshair.kick_active);

        // Another trigger pull during the cooldown is dropped.
        let mut engine = ShooterEngine::new(&mut state);
        let outcome = engine
            .execute(&env, &mut timers, 1.01, &Action::FireWeapon)
            .unwrap();
        assert!(!outcome.is_applied());
        assert_eq!(state.equipped_weapon().unwrap().ammo, 9);
    }

    #[test]
    fn held_trigger_refires_on_cooldown_expiry() {
        let fixture = Fixture::new();
        let mut timers = TimerQueue::new();
        let (mut state, _item) = state_with_equipped_smg(&fixture, &mut timers);
        let env = fixture.env();

        state.character.fire_button_held = true;
        let mut engine = ShooterEngine::new(&mut state);
        engine
            .execute(&env, &mut timers, 1.0, &Action::FireWeapon)
            .unwrap();
        engine
            .execute(&env, &mut timers, 1.1, &Action::AutoFireReset)
            .unwrap();
        // Re-fired: another round gone, cooldown re-armed.
        assert_eq!(state.equipped_weapon().unwrap().ammo, 8);
        assert_eq!(state.character.combat, CombatState::FireTimerInProgress);
    }

    #[test]
    fn empty_magazine_auto_reloads_on_cooldown_expiry() {
        let fixture = Fixture::new();
        let mut timers = TimerQueue::new();
        let (mut state, _item) = state_with_equipped_smg(&fixture, &mut timers);
        let env = fixture.env();

        state.equipped_weapon_mut().unwrap().ammo = 1;
        state.character.fire_button_held = true;
        let mut engine = ShooterEngine::new(&mut state);
        engine
            .execute(&env, &mut timers, 1.0, &Action::FireWeapon)
            .unwrap();
        assert_eq!(state.equipped_weapon().unwrap().ammo, 0);

        let mut engine = ShooterEngine::new(&mut state);
        engine
            .execute(&env, &mut timers, 1.1, &Action::AutoFireReset)
            .unwrap();
        assert_eq!(state.character.combat, CombatState::Reloading);
    }

    #[test]
    fn zero_fire_rate_still_schedules_into_the_future() {
        let fixture = Fixture::new();
        let mut timers = TimerQueue::new();
        let (mut state, _item) = state_with_equipped_smg(&fixture, &mut timers);
        let env = fixture.env();

        state.equipped_weapon_mut().unwrap().auto_fire_rate = 0.0;
        let mut engine = ShooterEngine::new(&mut state);
        engine
            .execute(&env, &mut timers, 1.0, &Action::FireWeapon)
            .unwrap();
        // The cooldown floor keeps the reset out of the current instant.
        assert_eq!(timers.pop_due(1.0), None);
        assert_eq!(
            timers.pop_due(1.0 + fixture.config.min_auto_fire_interval),
            Some(TimerKind::AutoFireReset)
        );
    }

    #[test]
    fn zeroed_interval_floor_cannot_rearm_at_the_same_instant() {
        let mut fixture = Fixture::new();
        fixture.config.min_auto_fire_interval = 0.0;
        let mut timers = TimerQueue::new();
        let (mut state, _item) = state_with_equipped_smg(&fixture, &mut timers);
        let env = fixture.env();

        state.equipped_weapon_mut().unwrap().auto_fire_rate = 0.0;
        let mut engine = ShooterEngine::new(&mut state);
        engine
            .execute(&env, &mut timers, 1.0, &Action::FireWeapon)
            .unwrap();
        // The reset is due strictly after the firing instant.
        assert_eq!(timers.pop_due(1.0), None);
    }

    #[test]
    fn item_cycle_returns_to_pickup_flags() {
        let fixture = Fixture::new();
        let mut timers = TimerQueue::new();
        let (mut state, item) = state_with_equipped_smg(&fixture, &mut timers);
        let env = fixture.env();

        let original = MeshFlags::for_state(ItemState::Pickup);

        let mut engine = ShooterEngine::new(&mut state);
        engine
            .execute(&env, &mut timers, 1.0, &Action::DropEquipped)
            .unwrap();
        assert_eq!(state.item(item).unwrap().state, ItemState::Falling);

        let mut engine = ShooterEngine::new(&mut state);
        engine
            .execute(&env, &mut timers, 1.7, &Action::StopFalling { item })
            .unwrap();
        let entry = state.item(item).unwrap();
        assert_eq!(entry.state, ItemState::Pickup);
        assert_eq!(MeshFlags::for_state(entry.state), original);
        assert_eq!(state.character.equipped, None);
        assert!(state.character.inventory.is_empty());
    }

    #[test]
    fn slot_swap_goes_through_equipping() {
        let fixture = Fixture::new();
        let mut timers = TimerQueue::new();
        let (mut state, first) = state_with_equipped_smg(&fixture, &mut timers);
        let env = fixture.env();

        let second = state.spawn_weapon(&ar_spec(), ItemRarity::Common, Vec3::ZERO, 0.0);
        let mut engine = ShooterEngine::new(&mut state);
        engine
            .execute(&env, &mut timers, 1.0, &Action::SelectItem { item: second })
            .unwrap();
        engine
            .execute(&env, &mut timers, 1.7, &Action::FinishInterp { item: second })
            .unwrap();
        assert_eq!(state.item(second).unwrap().state, ItemState::PickedUp);

        // Swapping to the same slot is a no-op.
        let mut engine = ShooterEngine::new(&mut state);
        let same = engine
            .execute(&env, &mut timers, 2.0, &Action::ExchangeSlot { index: 0 })
            .unwrap();
        assert_eq!(
            same,
            ExecutionOutcome::Dropped {
                rejection: Rejection::SameSlot
            }
        );

        let outcome = engine
            .execute(&env, &mut timers, 2.0, &Action::ExchangeSlot { index: 1 })
            .unwrap();
        assert!(outcome.is_applied());
        assert_eq!(state.character.equipped, Some(second));
        assert_eq!(state.item(first).unwrap().state, ItemState::PickedUp);
        assert_eq!(state.character.combat, CombatState::Equipping);

        // Busy: further swaps drop until the montage callback lands.
        let mut engine = ShooterEngine::new(&mut state);
        let busy = engine
            .execute(&env, &mut timers, 2.1, &Action::ExchangeSlot { index: 0 })
            .unwrap();
        assert!(!busy.is_applied());

        engine
            .execute(&env, &mut timers, 2.5, &Action::FinishEquip)
            .unwrap();
        assert_eq!(state.character.combat, CombatState::Unoccupied);
    }

    #[test]
    fn out_of_bounds_slot_is_dropped() {
        let fixture = Fixture::new();
        let mut timers = TimerQueue::new();
        let (mut state, _item) = state_with_equipped_smg(&fixture, &mut timers);
        let env = fixture.env();

        let mut engine = ShooterEngine::new(&mut state);
        let outcome = engine
            .execute(&env, &mut timers, 1.0, &Action::ExchangeSlot { index: 5 })
            .unwrap();
        assert_eq!(
            outcome,
            ExecutionOutcome::Dropped {
                rejection: Rejection::SlotOutOfBounds
            }
        );
    }

    #[test]
    fn ammo_pickup_credits_ledger_and_despawns() {
        let fixture = Fixture::new();
        let mut timers = TimerQueue::new();
        let (mut state, _item) = state_with_equipped_smg(&fixture, &mut timers);
        let env = fixture.env();

        let ammo = state.spawn_ammo(AmmoType::Mm9, 45, ItemRarity::Common, Vec3::ZERO);
        let mut engine = ShooterEngine::new(&mut state);
        engine
            .execute(&env, &mut timers, 1.0, &Action::SelectItem { item: ammo })
            .unwrap();
        engine
            .execute(&env, &mut timers, 1.7, &Action::FinishInterp { item: ammo })
            .unwrap();
        assert_eq!(state.character.ammo.carried(AmmoType::Mm9), 130);
        assert!(state.item(ammo).is_none());
    }

    #[test]
    fn ammo_pickup_with_empty_matching_weapon_starts_reload() {
        let fixture = Fixture::new();
        let mut timers = TimerQueue::new();
        let (mut state, _item) = state_with_equipped_smg(&fixture, &mut timers);
        let env = fixture.env();

        state.equipped_weapon_mut().unwrap().ammo = 0;
        state.character.ammo = Default::default();

        let ammo = state.spawn_ammo(AmmoType::Mm9, 45, ItemRarity::Common, Vec3::ZERO);
        let mut engine = ShooterEngine::new(&mut state);
        engine
            .execute(&env, &mut timers, 1.0, &Action::SelectItem { item: ammo })
            .unwrap();
        engine
            .execute(&env, &mut timers, 1.7, &Action::FinishInterp { item: ammo })
            .unwrap();
        assert_eq!(state.character.combat, CombatState::Reloading);
    }

    #[test]
    fn full_inventory_pickup_swaps_out_the_equipped_weapon() {
        let fixture = Fixture::new();
        let mut timers = TimerQueue::new();
        let (mut state, first) = state_with_equipped_smg(&fixture, &mut timers);
        let env = fixture.env();

        // Fill the remaining five slots.
        for _ in 0..5 {
            let id = state.spawn_weapon(&ar_spec(), ItemRarity::Common, Vec3::ZERO, 0.0);
            let mut engine = ShooterEngine::new(&mut state);
            engine
                .execute(&env, &mut timers, 1.0, &Action::SelectItem { item: id })
                .unwrap();
            engine
                .execute(&env, &mut timers, 1.7, &Action::FinishInterp { item: id })
                .unwrap();
        }
        assert!(state.character.inventory.is_full());

        let incoming = state.spawn_weapon(&ar_spec(), ItemRarity::Common, Vec3::ZERO, 0.0);
        let mut engine = ShooterEngine::new(&mut state);
        engine
            .execute(&env, &mut timers, 2.0, &Action::SelectItem { item: incoming })
            .unwrap();
        engine
            .execute(
                &env,
                &mut timers,
                2.7,
                &Action::FinishInterp { item: incoming },
            )
            .unwrap();

        assert_eq!(state.character.equipped, Some(incoming));
        assert_eq!(state.item(first).unwrap().state, ItemState::Falling);
        assert_eq!(state.character.inventory.get(0), Some(incoming));
        assert!(state.character.inventory.is_full());
    }

    #[test]
    fn weapon_select_reserves_the_weapon_slot() {
        let fixture = Fixture::new();
        let mut timers = TimerQueue::new();
        let mut state = ShooterState::new(7, &fixture.config);
        let item = state.spawn_weapon(&smg_spec(), ItemRarity::Common, Vec3::ZERO, 0.0);
        let env = fixture.env();

        let mut engine = ShooterEngine::new(&mut state);
        engine
            .execute(&env, &mut timers, 0.0, &Action::SelectItem { item })
            .unwrap();
        assert_eq!(state.character.interp_slots.occupancy(0), 1);
        assert_eq!(state.item(item).unwrap().interp_slot, Some(0));

        let mut engine = ShooterEngine::new(&mut state);
        engine
            .execute(&env, &mut timers, 0.7, &Action::FinishInterp { item })
            .unwrap();
        assert_eq!(state.character.interp_slots.occupancy(0), 0);
    }

    #[test]
    fn lethal_hit_despawns_the_enemy() {
        let fixture = Fixture::new();
        let mut timers = TimerQueue::new();
        let (mut state, _item) = state_with_equipped_smg(&fixture, &mut timers);
        let env = fixture.env();

        // SMG body damage is 20; one hit is lethal.
        let enemy = state.spawn_enemy(Vec3::new(300.0, 0.0, 0.0), 15.0, "head");
        let hit = Action::EnemyHit {
            enemy,
            location: Vec3::new(300.0, 0.0, 50.0),
            headshot: false,
        };

        let mut engine = ShooterEngine::new(&mut state);
        let outcome = engine.execute(&env, &mut timers, 1.0, &hit).unwrap();
        let effects = match outcome {
            ExecutionOutcome::Applied { effects } => effects,
            ExecutionOutcome::Dropped { rejection } => panic!("dropped: {rejection}"),
        };
        assert!(
            effects
                .iter()
                .any(|effect| matches!(effect, Effect::DespawnEnemy { .. }))
        );
        assert!(state.enemy(enemy).is_none());
        assert!(state.enemies.is_empty());

        // A stale hit against the removed enemy is dropped, not an error.
        let mut engine = ShooterEngine::new(&mut state);
        let stale = engine.execute(&env, &mut timers, 1.1, &hit).unwrap();
        assert_eq!(
            stale,
            ExecutionOutcome::Dropped {
                rejection: Rejection::MissingTarget
            }
        );
    }

    #[test]
    fn tick_moves_interping_item_toward_camera_target() {
        let fixture = Fixture::new();
        let mut timers = TimerQueue::new();
        let mut state = ShooterState::new(7, &fixture.config);
        let item = state.spawn_weapon(
            &smg_spec(),
            ItemRarity::Common,
            Vec3::new(400.0, 0.0, 0.0),
            0.0,
        );
        state.character.camera = crate::state::CameraPose {
            location: Vec3::ZERO,
            forward: Vec3::new(1.0, 0.0, 0.0),
            yaw: 0.0,
        };
        let env = fixture.env();

        let mut engine = ShooterEngine::new(&mut state);
        engine
            .execute(&env, &mut timers, 0.0, &Action::SelectItem { item })
            .unwrap();

        let before = state.item(item).unwrap().location.x;
        let mut engine = ShooterEngine::new(&mut state);
        let effects = engine
            .tick(&env, 0.1, 1.0 / 60.0, &FrameInputs::default())
            .unwrap();
        let after = state.item(item).unwrap().location.x;
        // 400 chases the target at x=250.
        assert!(after < before);
        assert!(
            effects
                .iter()
                .any(|effect| matches!(effect, Effect::SetItemTransform { .. }))
        );
    }

    #[test]
    fn tick_pulses_weapon_pickups_but_not_ammo() {
        let fixture = Fixture::new();
        let mut state = ShooterState::new(7, &fixture.config);
        let weapon = state.spawn_weapon(&smg_spec(), ItemRarity::Common, Vec3::ZERO, 0.0);
        let ammo = state.spawn_ammo(AmmoType::Mm9, 45, ItemRarity::Common, Vec3::ZERO);
        let env = fixture.env();

        let mut engine = ShooterEngine::new(&mut state);
        let effects = engine
            .tick(&env, 1.0, 1.0 / 60.0, &FrameInputs::default())
            .unwrap();
        let pulsed: Vec<_> = effects
            .iter()
            .filter_map(|effect| match effect {
                Effect::SetGlowPulse { item, .. } => Some(*item),
                _ => None,
            })
            .collect();
        assert_eq!(pulsed, vec![weapon]);
        assert!(!pulsed.contains(&ammo));
    }
}
