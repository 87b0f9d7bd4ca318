use thiserror::Error;

/// Errors returned when an [`super::Env`] accessor finds no oracle wired in.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum OracleError {
    #[error("weapon table not available in environment")]
    WeaponsNotAvailable,

    #[error("rarity table not available in environment")]
    RarityNotAvailable,

    #[error("rng oracle not available in environment")]
    RngNotAvailable,

    #[error("game config not available in environment")]
    ConfigNotAvailable,

    #[error("weapon type has no table row")]
    MissingWeaponRow,

    #[error("rarity has no table row")]
    MissingRarityRow,
}
