//! Traits describing read-only content tables.
//!
//! Oracles expose weapon stat rows, rarity presentation rows, and the RNG.
//! The [`Env`] aggregate bundles them with the tuning config so the engine
//! can reach everything it needs without hard coupling to concrete
//! implementations; hosts wire in content-crate loaders or test fixtures.
mod error;
mod rarity;
mod rng;
mod weapons;

pub use error::OracleError;
pub use rarity::{RarityOracle, RarityRow};
pub use rng::{PcgRng, RngOracle, compute_seed};
pub use weapons::{WeaponOracle, WeaponSpec};

use crate::config::GameConfig;

/// Aggregates the read-only oracles required by the action pipeline.
#[derive(Clone, Copy, Debug)]
pub struct Env<'a, W, R, G>
where
    W: WeaponOracle + ?Sized,
    R: RarityOracle + ?Sized,
    G: RngOracle + ?Sized,
{
    weapons: Option<&'a W>,
    rarity: Option<&'a R>,
    rng: Option<&'a G>,
    config: Option<&'a GameConfig>,
}

pub type GameEnv<'a> = Env<'a, dyn WeaponOracle + 'a, dyn RarityOracle + 'a, dyn RngOracle + 'a>;

impl<'a, W, R, G> Env<'a, W, R, G>
where
    W: WeaponOracle + ?Sized,
    R: RarityOracle + ?Sized,
    G: RngOracle + ?Sized,
{
    pub fn new(
        weapons: Option<&'a W>,
        rarity: Option<&'a R>,
        rng: Option<&'a G>,
        config: Option<&'a GameConfig>,
    ) -> Self {
        Self {
            weapons,
            rarity,
            rng,
            config,
        }
    }

    pub fn with_all(weapons: &'a W, rarity: &'a R, rng: &'a G, config: &'a GameConfig) -> Self {
        Self::new(Some(weapons), Some(rarity), Some(rng), Some(config))
    }

    pub fn empty() -> Self {
        Self {
            weapons: None,
            rarity: None,
            rng: None,
            config: None,
        }
    }

    /// Returns the weapon table, or an error if not available.
    pub fn weapons(&self) -> Result<&'a W, OracleError> {
        self.weapons.ok_or(OracleError::WeaponsNotAvailable)
    }

    /// Returns the rarity table, or an error if not available.
    pub fn rarity(&self) -> Result<&'a R, OracleError> {
        self.rarity.ok_or(OracleError::RarityNotAvailable)
    }

    /// Returns the RNG oracle, or an error if not available.
    pub fn rng(&self) -> Result<&'a G, OracleError> {
        self.rng.ok_or(OracleError::RngNotAvailable)
    }

    /// Returns the tuning config, or an error if not available.
    pub fn config(&self) -> Result<&'a GameConfig, OracleError> {
        self.config.ok_or(OracleError::ConfigNotAvailable)
    }
}

impl<'a, W, R, G> Env<'a, W, R, G>
where
    W: WeaponOracle + 'a,
    R: RarityOracle + 'a,
    G: RngOracle + 'a,
{
    /// Converts this environment into a trait-object based [`GameEnv`].
    pub fn as_game_env(&self) -> GameEnv<'a> {
        let weapons: Option<&'a dyn WeaponOracle> = self.weapons.map(|weapons| weapons as _);
        let rarity: Option<&'a dyn RarityOracle> = self.rarity.map(|rarity| rarity as _);
        let rng: Option<&'a dyn RngOracle> = self.rng.map(|rng| rng as _);
        Env::new(weapons, rarity, rng, self.config)
    }
}
