//! Weapon stat table loader.

use std::path::Path;

use game_core::WeaponSpec;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Weapon table structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeaponCatalog {
    pub weapons: Vec<WeaponSpec>,
}

/// Loader for the weapon stat table from RON files.
pub struct WeaponLoader;

impl WeaponLoader {
    /// Load the weapon table from a RON file and reject duplicate rows.
    pub fn load(path: &Path) -> LoadResult<Vec<WeaponSpec>> {
        let content = read_file(path)?;
        let catalog: WeaponCatalog = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse weapon table RON: {}", e))?;

        for (index, row) in catalog.weapons.iter().enumerate() {
            if catalog.weapons[..index]
                .iter()
                .any(|other| other.weapon_type == row.weapon_type)
            {
                anyhow::bail!("duplicate weapon table row for {}", row.weapon_type);
            }
            if row.starting_ammo > row.magazine_capacity {
                anyhow::bail!(
                    "weapon {} spawns with more ammo than its magazine holds",
                    row.name
                );
            }
        }
        Ok(catalog.weapons)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_table(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_shipped_table() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/weapons.ron");
        let weapons = WeaponLoader::load(&path).unwrap();
        assert!(weapons.len() >= 3);
        assert!(weapons.iter().all(|row| row.magazine_capacity > 0));
    }

    #[test]
    fn rejects_duplicate_rows() {
        let file = write_table(
            r#"(weapons: [
                (weapon_type: Smg, name: "SMG", ammo_type: Mm9, starting_ammo: 20,
                 magazine_capacity: 30, damage: 20, headshot_damage: 45, automatic: true,
                 auto_fire_rate: 0.1, reload_montage_section: "Reload SMG",
                 clip_bone_name: "smg_clip"),
                (weapon_type: Smg, name: "SMG copy", ammo_type: Mm9, starting_ammo: 20,
                 magazine_capacity: 30, damage: 20, headshot_damage: 45, automatic: true,
                 auto_fire_rate: 0.1, reload_montage_section: "Reload SMG",
                 clip_bone_name: "smg_clip"),
            ])"#,
        );
        assert!(WeaponLoader::load(file.path()).is_err());
    }

    #[test]
    fn rejects_overfull_spawn_magazine() {
        let file = write_table(
            r#"(weapons: [
                (weapon_type: Pistol, name: "Pistol", ammo_type: Mm9, starting_ammo: 99,
                 magazine_capacity: 8, damage: 25, headshot_damage: 60, automatic: false,
                 auto_fire_rate: 0.3, reload_montage_section: "Reload Pistol",
                 clip_bone_name: "pistol_clip"),
            ])"#,
        );
        assert!(WeaponLoader::load(file.path()).is_err());
    }
}
