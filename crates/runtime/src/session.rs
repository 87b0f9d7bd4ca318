//! The session orchestrator.

use game_core::{
    Action, AiSignal, AmmoType, CameraPose, CombatState, Effect, Env, EnemyId, ExecuteError,
    ExecutionOutcome, ExplosiveId, FrameInputs, GameConfig, ItemId, ItemRarity, ItemState,
    MeshFlags, PcgRng, RarityOracle, RarityRow, Seconds, ShooterEngine, ShooterState, TimerKind,
    TimerQueue, Vec3, WeaponOracle, WeaponSpec, WeaponType, interp_to,
};
use tracing::{debug, warn};

use crate::error::{Result, SessionError};
use crate::input::InputEvent;
use crate::perception::Perception;

/// Continuous samples the host provides every frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HostFrame {
    /// Horizontal movement speed.
    pub ground_speed: f32,
    pub airborne: bool,
    pub camera: CameraPose,
    /// The pickup the host's look-trace currently hits, if any.
    pub trace_hit: Option<ItemId>,
}

/// A landed shot, as reported by the host's hit trace.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BulletHit {
    Enemy {
        enemy: EnemyId,
        location: Vec3,
        headshot: bool,
    },
    Explosive { explosive: ExplosiveId },
}

/// Owns the world state, the timer queue, and the content tables, and turns
/// host stimuli into simulation actions.
pub struct Session {
    state: ShooterState,
    timers: TimerQueue,
    now: Seconds,
    config: GameConfig,
    weapons: Vec<WeaponSpec>,
    rarity: Vec<RarityRow>,
    rng: PcgRng,
    effects: Vec<Effect>,

    camera_fov: f32,
    default_fov: f32,
    capsule_half_height: f32,
    crouching: bool,
    last_airborne: bool,
    /// Pickups whose overlap volume currently contains the character. The
    /// look-trace only runs while this is non-zero.
    overlapped_pickups: u32,
    trace_hit_item: Option<ItemId>,
}

impl Session {
    pub fn new(
        seed: u64,
        default_fov: f32,
        config: GameConfig,
        weapons: Vec<WeaponSpec>,
        rarity: Vec<RarityRow>,
    ) -> Self {
        let state = ShooterState::new(seed, &config);
        let capsule_half_height = config.standing_half_height;
        Self {
            state,
            timers: TimerQueue::new(),
            now: 0.0,
            config,
            weapons,
            rarity,
            rng: PcgRng,
            effects: Vec::new(),
            camera_fov: default_fov,
            default_fov,
            capsule_half_height,
            crouching: false,
            last_airborne: false,
            overlapped_pickups: 0,
            trace_hit_item: None,
        }
    }

    /// Builds a session from RON table files.
    pub fn from_content_files(
        seed: u64,
        default_fov: f32,
        config: GameConfig,
        weapons_path: &std::path::Path,
        rarity_path: &std::path::Path,
    ) -> Result<Self> {
        let weapons = game_content::WeaponLoader::load(weapons_path)
            .map_err(|error| SessionError::Content(error.to_string()))?;
        let rarity = game_content::RarityLoader::load(rarity_path)
            .map_err(|error| SessionError::Content(error.to_string()))?;
        Ok(Self::new(seed, default_fov, config, weapons, rarity))
    }

    pub fn state(&self) -> &ShooterState {
        &self.state
    }

    pub fn now(&self) -> Seconds {
        self.now
    }

    pub fn camera_fov(&self) -> f32 {
        self.camera_fov
    }

    pub fn capsule_half_height(&self) -> f32 {
        self.capsule_half_height
    }

    pub fn crouching(&self) -> bool {
        self.crouching
    }

    /// Walk speed cap the host's movement component should apply.
    pub fn max_walk_speed(&self) -> f32 {
        if self.crouching {
            self.config.crouch_walk_speed
        } else {
            self.config.max_walk_speed
        }
    }

    /// Gamepad turn rate, degrees per second.
    pub fn turn_rate(&self) -> f32 {
        if self.state.character.aiming {
            self.config.aiming_turn_rate
        } else {
            self.config.hip_turn_rate
        }
    }

    /// Gamepad look-up rate, degrees per second.
    pub fn look_up_rate(&self) -> f32 {
        if self.state.character.aiming {
            self.config.aiming_look_up_rate
        } else {
            self.config.hip_look_up_rate
        }
    }

    /// Mouse sensitivity scale for horizontal turning.
    pub fn mouse_turn_scale(&self) -> f32 {
        if self.state.character.aiming {
            self.config.mouse_aiming_turn_rate
        } else {
            self.config.mouse_hip_turn_rate
        }
    }

    /// Mouse sensitivity scale for vertical looking.
    pub fn mouse_look_scale(&self) -> f32 {
        if self.state.character.aiming {
            self.config.mouse_aiming_look_up_rate
        } else {
            self.config.mouse_hip_look_up_rate
        }
    }

    pub fn crosshair_spread(&self) -> f32 {
        self.state.character.crosshair.spread()
    }

    /// Runs one action through the engine, buffering its effects. Dropped
    /// actions are logged and swallowed.
    fn dispatch(&mut self, action: Action) -> Result<()> {
        let env =
            Env::with_all(&self.weapons, &self.rarity, &self.rng, &self.config).as_game_env();
        let mut engine = ShooterEngine::new(&mut self.state);
        match engine.execute(&env, &mut self.timers, self.now, &action) {
            Ok(ExecutionOutcome::Applied { effects }) => {
                self.effects.extend(effects);
                Ok(())
            }
            Ok(ExecutionOutcome::Dropped { rejection }) => {
                debug!(?action, %rejection, "action dropped");
                Ok(())
            }
            Err(error) => {
                warn!(?action, %error, "action failed");
                Err(error.into())
            }
        }
    }

    pub fn handle_input(&mut self, event: InputEvent) -> Result<()> {
        match event {
            InputEvent::FirePressed => {
                self.state.character.fire_button_held = true;
                self.dispatch(Action::FireWeapon)
            }
            InputEvent::FireReleased => {
                self.state.character.fire_button_held = false;
                Ok(())
            }
            InputEvent::AimPressed => {
                self.state.character.aim_button_held = true;
                // The zoom waits out reloads and equips; those completion
                // callbacks restore it from the held flag.
                if !matches!(
                    self.state.character.combat,
                    CombatState::Reloading | CombatState::Equipping
                ) {
                    self.state.character.aiming = true;
                }
                Ok(())
            }
            InputEvent::AimReleased => {
                self.state.character.aim_button_held = false;
                self.state.character.aiming = false;
                Ok(())
            }
            InputEvent::SelectPressed => {
                if self.state.character.combat != CombatState::Unoccupied {
                    return Ok(());
                }
                match self.trace_hit_item {
                    Some(item) => self.dispatch(Action::SelectItem { item }),
                    None => Ok(()),
                }
            }
            InputEvent::ReloadPressed => self.dispatch(Action::StartReload),
            InputEvent::CrouchPressed => {
                if !self.last_airborne {
                    self.crouching = !self.crouching;
                }
                Ok(())
            }
            InputEvent::JumpPressed => {
                // Jumping from a crouch just stands up; the host only
                // launches the jump when `crouching` is already false.
                self.crouching = false;
                Ok(())
            }
            InputEvent::Hotkey(index) => self.dispatch(Action::ExchangeSlot { index }),
        }
    }

    /// Advances the session one frame. The update order is fixed: camera
    /// zoom, continuous engine update, pickup-widget trace, capsule height,
    /// then expired timers. Returns the frame's accumulated effects.
    pub fn tick(&mut self, dt: Seconds, frame: &HostFrame) -> Result<Vec<Effect>> {
        self.now += dt;
        self.last_airborne = frame.airborne;
        self.state.character.camera = frame.camera;

        let fov_target = if self.state.character.aiming {
            self.config.zoomed_fov
        } else {
            self.default_fov
        };
        self.camera_fov = interp_to(
            self.camera_fov,
            fov_target,
            dt,
            self.config.zoom_interp_speed,
        );

        {
            let env =
                Env::with_all(&self.weapons, &self.rarity, &self.rng, &self.config).as_game_env();
            let mut engine = ShooterEngine::new(&mut self.state);
            let inputs = FrameInputs {
                ground_speed: frame.ground_speed,
                airborne: frame.airborne,
            };
            let effects = engine.tick(&env, self.now, dt, &inputs)?;
            self.effects.extend(effects);
        }

        self.update_trace_widget(frame.trace_hit);

        let capsule_target = if self.crouching {
            self.config.crouching_half_height
        } else {
            self.config.standing_half_height
        };
        self.capsule_half_height = interp_to(
            self.capsule_half_height,
            capsule_target,
            dt,
            self.config.capsule_interp_speed,
        );

        // Bounded drain: a timer whose handler re-arms at the current
        // instant cannot stall the frame.
        const MAX_TIMER_POPS: usize = 64;
        for _ in 0..MAX_TIMER_POPS {
            let Some(kind) = self.timers.pop_due(self.now) else {
                break;
            };
            self.dispatch(Action::from(kind))?;
        }

        Ok(std::mem::take(&mut self.effects))
    }

    /// Shows the widget of the pickup under the crosshair and hides the
    /// previous one when the trace moves off it.
    fn update_trace_widget(&mut self, trace_hit: Option<ItemId>) {
        let trace_hit = if self.overlapped_pickups == 0 {
            None
        } else {
            // Only items sitting in the world present a widget.
            trace_hit.filter(|&item| {
                self.state
                    .item(item)
                    .is_some_and(|entry| entry.state == ItemState::Pickup)
            })
        };

        if trace_hit == self.trace_hit_item {
            return;
        }
        if let Some(previous) = self.trace_hit_item {
            self.effects.push(Effect::SetPickupWidget {
                item: previous,
                visible: false,
            });
        }
        if let Some(item) = trace_hit {
            self.effects.push(Effect::SetPickupWidget {
                item,
                visible: true,
            });
        }
        self.trace_hit_item = trace_hit;
    }

    /// The character entered a pickup's overlap volume.
    pub fn begin_pickup_overlap(&mut self) {
        self.overlapped_pickups += 1;
    }

    /// The character left a pickup's overlap volume.
    pub fn end_pickup_overlap(&mut self) {
        self.overlapped_pickups = self.overlapped_pickups.saturating_sub(1);
        if self.overlapped_pickups == 0 {
            self.update_trace_widget(None);
        }
    }

    fn rarity_tint_effect(&self, item: ItemId, rarity: ItemRarity) -> Result<Effect> {
        let row = self
            .rarity
            .row(rarity)
            .ok_or_else(|| SessionError::UnknownRarity(rarity.to_string()))?;
        Ok(Effect::SetRarityTint {
            item,
            glow_color: row.glow_color,
            light_color: row.light_color,
            dark_color: row.dark_color,
            stars: row.stars,
            custom_depth_stencil: row.custom_depth_stencil,
        })
    }

    /// Spawns a weapon pickup and starts its glow pulse.
    pub fn spawn_weapon(
        &mut self,
        weapon_type: WeaponType,
        rarity: ItemRarity,
        location: Vec3,
        yaw: f32,
    ) -> Result<ItemId> {
        let spec = self
            .weapons
            .spec(weapon_type)
            .ok_or_else(|| SessionError::UnknownWeapon(weapon_type.to_string()))?
            .clone();
        let item = self.state.spawn_weapon(&spec, rarity, location, yaw);
        if let Some(entry) = self.state.item_mut(item) {
            entry.pulse_started_at = self.now;
        }
        self.timers
            .schedule(self.now + self.config.pulse_curve_time, TimerKind::PulseTick(item));

        let tint = self.rarity_tint_effect(item, rarity)?;
        self.effects.push(tint);
        self.effects.push(Effect::SetGlow {
            item,
            enabled: true,
        });
        self.effects.push(Effect::SetVisuals {
            item,
            flags: MeshFlags::for_state(ItemState::Pickup),
        });
        Ok(item)
    }

    /// Spawns an ammo box pickup.
    pub fn spawn_ammo(
        &mut self,
        ammo_type: AmmoType,
        count: u32,
        rarity: ItemRarity,
        location: Vec3,
    ) -> Result<ItemId> {
        let item = self.state.spawn_ammo(ammo_type, count, rarity, location);
        let tint = self.rarity_tint_effect(item, rarity)?;
        self.effects.push(tint);
        self.effects.push(Effect::SetVisuals {
            item,
            flags: MeshFlags::for_state(ItemState::Pickup),
        });
        Ok(item)
    }

    /// Spawns a weapon directly into the character's hand, bypassing the
    /// pickup interp. Used for the starting loadout.
    pub fn equip_default_weapon(&mut self, weapon_type: WeaponType) -> Result<ItemId> {
        let spec = self
            .weapons
            .spec(weapon_type)
            .ok_or_else(|| SessionError::UnknownWeapon(weapon_type.to_string()))?
            .clone();
        if self.state.character.inventory.is_full() {
            return Err(SessionError::Execute(ExecuteError::InventoryFull));
        }
        let item = self
            .state
            .spawn_weapon(&spec, ItemRarity::Common, Vec3::ZERO, 0.0);

        let slot = self
            .state
            .character
            .inventory
            .push(item)
            .ok_or(SessionError::Execute(ExecuteError::InventoryFull))?;
        if let Some(entry) = self.state.item_mut(item) {
            entry.slot_index = Some(slot as u8);
            let flags = entry.set_state(ItemState::Equipped);
            self.effects.push(Effect::SetVisuals { item, flags });
        }
        self.state.character.equipped = Some(item);
        self.effects.push(Effect::AttachToHand { item });
        Ok(item)
    }

    pub fn spawn_enemy(
        &mut self,
        location: Vec3,
        max_health: f32,
        head_bone: impl Into<String>,
    ) -> EnemyId {
        self.state.spawn_enemy(location, max_health, head_bone)
    }

    pub fn spawn_explosive(&mut self, location: Vec3, damage: u32, radius: f32) -> ExplosiveId {
        self.state.spawn_explosive(location, damage, radius)
    }

    /// The host's hit trace landed a shot on something damageable.
    pub fn bullet_hit(&mut self, hit: BulletHit) -> Result<()> {
        match hit {
            BulletHit::Enemy {
                enemy,
                location,
                headshot,
            } => self.dispatch(Action::EnemyHit {
                enemy,
                location,
                headshot,
            }),
            BulletHit::Explosive { explosive } => self.dispatch(Action::ExplosiveHit { explosive }),
        }
    }

    /// Resolves whether a hit bone counts as a headshot for `enemy`.
    pub fn is_headshot(&self, enemy: EnemyId, bone: &str) -> bool {
        self.state
            .enemy(enemy)
            .is_some_and(|entry| entry.head_bone == bone)
    }

    // Animation completion callbacks, forwarded from the host's montage
    // notify events.

    pub fn finish_reloading(&mut self) -> Result<()> {
        self.dispatch(Action::FinishReload)
    }

    pub fn finish_equipping(&mut self) -> Result<()> {
        self.dispatch(Action::FinishEquip)
    }

    pub fn grab_clip(&mut self) -> Result<()> {
        self.dispatch(Action::GrabClip)
    }

    pub fn release_clip(&mut self) -> Result<()> {
        self.dispatch(Action::ReleaseClip)
    }
}

/// Forwards AI signals in `effects` to `perception` and returns the rest
/// for the presentation layer.
pub fn route_ai(effects: Vec<Effect>, perception: &mut dyn Perception) -> Vec<Effect> {
    let mut rest = Vec::with_capacity(effects.len());
    for effect in effects {
        match effect {
            Effect::Ai(AiSignal::TargetAcquired { enemy }) => perception.target_acquired(enemy),
            Effect::Ai(AiSignal::SetFlag { enemy, key, value }) => {
                perception.set_flag(enemy, key, value)
            }
            other => rest.push(other),
        }
    }
    rest
}
