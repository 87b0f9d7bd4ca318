//! AI observer interface.
//!
//! The simulation announces combat-relevant facts (an enemy noticed the
//! player, an enemy died) as typed signals instead of writing into an AI
//! framework's key-value store directly. The host adapts this trait to
//! whatever decision system its enemies run.

use game_core::EnemyId;

/// Receives AI-relevant notifications from the session.
pub trait Perception {
    /// An enemy has acquired the player as a combat target.
    fn target_acquired(&mut self, enemy: EnemyId);

    /// A named boolean on an enemy's decision state changed.
    fn set_flag(&mut self, enemy: EnemyId, key: &str, value: bool);
}

/// Discards all notifications. Useful for tests and AI-less hosts.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullPerception;

impl Perception for NullPerception {
    fn target_acquired(&mut self, _enemy: EnemyId) {}

    fn set_flag(&mut self, _enemy: EnemyId, _key: &str, _value: bool) {}
}
