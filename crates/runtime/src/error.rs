use game_core::ExecuteError;
use thiserror::Error;

/// Session errors. Dropped actions are not errors; these indicate broken
/// invariants or missing content.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("action execution failed: {0}")]
    Execute(#[from] ExecuteError),

    #[error("weapon table has no row for {0}")]
    UnknownWeapon(String),

    #[error("rarity table has no row for {0}")]
    UnknownRarity(String),

    #[error("content load failed: {0}")]
    Content(String),
}

pub type Result<T> = std::result::Result<T, SessionError>;
