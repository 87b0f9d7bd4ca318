//! Rarity presentation table loader.

use std::path::Path;

use game_core::RarityRow;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Rarity table structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RarityCatalog {
    pub rows: Vec<RarityRow>,
}

/// Loader for the rarity presentation table from RON files.
pub struct RarityLoader;

impl RarityLoader {
    /// Load the rarity table from a RON file.
    pub fn load(path: &Path) -> LoadResult<Vec<RarityRow>> {
        let content = read_file(path)?;
        let catalog: RarityCatalog = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse rarity table RON: {}", e))?;

        for (index, row) in catalog.rows.iter().enumerate() {
            if catalog.rows[..index]
                .iter()
                .any(|other| other.rarity == row.rarity)
            {
                anyhow::bail!("duplicate rarity table row for {}", row.rarity);
            }
        }
        Ok(catalog.rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{ItemRarity, RarityOracle};

    #[test]
    fn loads_shipped_table_with_all_tiers() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/rarity.ron");
        let rows = RarityLoader::load(&path).unwrap();
        assert_eq!(rows.len(), 6);
        // Star counts track the rarity ordinal.
        let mythic = rows.row(ItemRarity::Mythic).unwrap();
        assert_eq!(mythic.stars, 6);
    }
}
