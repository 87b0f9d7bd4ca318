//! Data-driven content tables and loaders.
//!
//! This crate houses the static gameplay tables and provides loaders for
//! RON data files:
//! - Weapon stat rows (damage, magazine, fire rate, montage sections)
//! - Rarity presentation rows (glow/widget colors, stars, stencil values)
//!
//! Tables are consumed through the game-core oracle traits and never appear
//! in game state; a spawned weapon copies its row once.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{RarityLoader, WeaponLoader};
