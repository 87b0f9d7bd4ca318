//! Carried-ammunition ledger.

use arrayvec::ArrayVec;
use strum::{Display, EnumIter};

use crate::config::GameConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AmmoType {
    /// 9mm rounds for the SMG and pistol family.
    Mm9,
    /// Assault rifle rounds.
    AssaultRifle,
}

/// Rounds carried outside any magazine, per ammo type.
///
/// Types are registered explicitly: `add` creates the entry, and reading an
/// unregistered type reports zero rounds rather than inventing an entry.
/// Withdrawing from an unregistered type yields nothing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AmmoLedger {
    entries: ArrayVec<(AmmoType, u32), { GameConfig::MAX_AMMO_TYPES }>,
}

impl AmmoLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ledger pre-loaded with the configured starting ammunition.
    pub fn with_starting_ammo(config: &GameConfig) -> Self {
        let mut ledger = Self::new();
        ledger.add(AmmoType::Mm9, config.starting_9mm);
        ledger.add(AmmoType::AssaultRifle, config.starting_ar);
        ledger
    }

    /// Rounds carried of `ammo_type`; zero when never registered.
    pub fn carried(&self, ammo_type: AmmoType) -> u32 {
        self.entries
            .iter()
            .find(|(kind, _)| *kind == ammo_type)
            .map(|(_, count)| *count)
            .unwrap_or(0)
    }

    pub fn has_ammo(&self, ammo_type: AmmoType) -> bool {
        self.carried(ammo_type) > 0
    }

    /// Adds rounds, registering the type on first use.
    pub fn add(&mut self, ammo_type: AmmoType, amount: u32) {
        if let Some(entry) = self.entries.iter_mut().find(|(kind, _)| *kind == ammo_type) {
            entry.1 = entry.1.saturating_add(amount);
        } else {
            self.entries.push((ammo_type, amount));
        }
    }

    /// Takes up to `want` rounds and returns how many were taken.
    pub fn withdraw_up_to(&mut self, ammo_type: AmmoType, want: u32) -> u32 {
        let Some(entry) = self.entries.iter_mut().find(|(kind, _)| *kind == ammo_type) else {
            return 0;
        };
        let taken = want.min(entry.1);
        entry.1 -= taken;
        taken
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unregistered_type_reads_zero() {
        let ledger = AmmoLedger::new();
        assert_eq!(ledger.carried(AmmoType::Mm9), 0);
        assert!(!ledger.has_ammo(AmmoType::Mm9));
    }

    #[test]
    fn withdraw_from_unregistered_takes_nothing() {
        let mut ledger = AmmoLedger::new();
        assert_eq!(ledger.withdraw_up_to(AmmoType::AssaultRifle, 30), 0);
    }

    #[test]
    fn add_registers_then_accumulates() {
        let mut ledger = AmmoLedger::new();
        ledger.add(AmmoType::Mm9, 85);
        ledger.add(AmmoType::Mm9, 15);
        assert_eq!(ledger.carried(AmmoType::Mm9), 100);
    }

    #[test]
    fn withdraw_is_capped_by_carried() {
        let mut ledger = AmmoLedger::new();
        ledger.add(AmmoType::Mm9, 5);
        assert_eq!(ledger.withdraw_up_to(AmmoType::Mm9, 20), 5);
        assert_eq!(ledger.carried(AmmoType::Mm9), 0);
    }

    #[test]
    fn starting_ammo_matches_config() {
        let ledger = AmmoLedger::with_starting_ammo(&GameConfig::default());
        assert_eq!(ledger.carried(AmmoType::Mm9), 85);
        assert_eq!(ledger.carried(AmmoType::AssaultRifle), 120);
    }
}
