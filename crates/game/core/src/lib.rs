//! Deterministic shooter gameplay logic shared across hosts.
//!
//! `game-core` defines the canonical rules for the pickup/equip item
//! lifecycle, the combat state machine, and ammunition bookkeeping, and
//! exposes pure APIs that can be reused by both the runtime and offline
//! tools. All state mutation flows through [`engine::ShooterEngine`], which
//! turns inbound actions (input edges, timer expiries, animation callbacks)
//! into state transitions plus an explicit list of outbound [`Effect`]
//! requests for the host engine to carry out.
pub mod action;
pub mod config;
pub mod effects;
pub mod engine;
pub mod env;
pub mod math;
pub mod sched;
pub mod state;

pub use action::{Action, ActionTransition, Rejection};
pub use config::GameConfig;
pub use effects::{AiSignal, Effect, MontageKind, SoundKind};
pub use engine::{ExecuteError, ExecutionOutcome, FrameInputs, ShooterEngine};
pub use env::{
    Env, GameEnv, OracleError, PcgRng, RarityOracle, RarityRow, RngOracle, WeaponOracle,
    WeaponSpec, compute_seed,
};
pub use math::{FloatCurve, LinearColor, Vec3, VectorCurve, interp_to, map_range_clamped};
pub use sched::{Seconds, TimerHandle, TimerKind, TimerQueue};
pub use state::{
    AmmoLedger, AmmoType, CameraPose, CharacterState, CombatState, CrosshairSpread, Enemy, EnemyId,
    Explosive, ExplosiveId, InterpSlots, Inventory, Item, ItemId, ItemKind, ItemRarity, ItemState,
    MeshFlags, ShooterState, WeaponState, WeaponType,
};
