//! Content loaders for reading gameplay tables from files.

pub mod rarity;
pub mod weapons;

pub use rarity::RarityLoader;
pub use weapons::WeaponLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
