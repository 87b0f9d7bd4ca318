//! Canonical simulation state.
//!
//! [`ShooterState`] is a plain value: no handles into the host engine, no
//! interior mutability. The engine mutates it through actions and everything
//! presentation-related leaves as effects, so snapshots and replays are just
//! clones.
mod ammo;
mod character;
mod enemy;
mod inventory;
mod item;
mod weapon;

pub use ammo::{AmmoLedger, AmmoType};
pub use character::{CameraPose, CharacterState, CombatState, CrosshairSpread};
pub use enemy::{Enemy, EnemyId, Explosive, ExplosiveId};
pub use inventory::{InterpSlots, Inventory};
pub use item::{Item, ItemId, ItemKind, ItemRarity, ItemState, MeshFlags};
pub use weapon::{WeaponState, WeaponType};

use crate::config::GameConfig;
use crate::env::WeaponSpec;
use crate::math::Vec3;

/// Everything the simulation knows about the world.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShooterState {
    pub character: CharacterState,
    pub items: Vec<Item>,
    pub enemies: Vec<Enemy>,
    pub explosives: Vec<Explosive>,

    /// Base seed fixed at session start; random rolls derive from it.
    pub game_seed: u64,
    /// Increments once per executed action so repeated rolls differ.
    pub nonce: u64,

    next_item: u32,
    next_enemy: u32,
    next_explosive: u32,
}

impl ShooterState {
    pub fn new(game_seed: u64, config: &GameConfig) -> Self {
        Self {
            character: CharacterState::with_starting_ammo(config),
            game_seed,
            ..Self::default()
        }
    }

    /// Bumps and returns the action nonce.
    pub fn next_nonce(&mut self) -> u64 {
        self.nonce = self.nonce.wrapping_add(1);
        self.nonce
    }

    fn next_item_id(&mut self) -> ItemId {
        let id = ItemId(self.next_item);
        self.next_item += 1;
        id
    }

    /// Spawns a weapon pickup from a stat-table row.
    pub fn spawn_weapon(
        &mut self,
        spec: &WeaponSpec,
        rarity: ItemRarity,
        location: Vec3,
        yaw: f32,
    ) -> ItemId {
        let id = self.next_item_id();
        self.items.push(Item {
            id,
            name: spec.name.clone(),
            count: 0,
            rarity,
            state: ItemState::Pickup,
            kind: ItemKind::Weapon(WeaponState::from_spec(spec)),
            location,
            yaw,
            scale: 1.0,
            slot_index: None,
            interp_slot: None,
            interp_start: Vec3::ZERO,
            yaw_offset: 0.0,
            interp_started_at: 0.0,
            pulse_started_at: 0.0,
        });
        id
    }

    /// Spawns an ammo box holding `count` rounds.
    pub fn spawn_ammo(
        &mut self,
        ammo_type: AmmoType,
        count: u32,
        rarity: ItemRarity,
        location: Vec3,
    ) -> ItemId {
        let id = self.next_item_id();
        self.items.push(Item {
            id,
            name: format!("{ammo_type} ammo"),
            count,
            rarity,
            state: ItemState::Pickup,
            kind: ItemKind::Ammo { ammo_type },
            location,
            yaw: 0.0,
            scale: 1.0,
            slot_index: None,
            interp_slot: None,
            interp_start: Vec3::ZERO,
            yaw_offset: 0.0,
            interp_started_at: 0.0,
            pulse_started_at: 0.0,
        });
        id
    }

    pub fn spawn_enemy(
        &mut self,
        location: Vec3,
        max_health: f32,
        head_bone: impl Into<String>,
    ) -> EnemyId {
        let id = EnemyId(self.next_enemy);
        self.next_enemy += 1;
        self.enemies.push(Enemy::new(id, location, max_health, head_bone));
        id
    }

    pub fn spawn_explosive(&mut self, location: Vec3, damage: u32, radius: f32) -> ExplosiveId {
        let id = ExplosiveId(self.next_explosive);
        self.next_explosive += 1;
        self.explosives.push(Explosive {
            id,
            location,
            damage,
            radius,
        });
        id
    }

    pub fn item(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn item_mut(&mut self, id: ItemId) -> Option<&mut Item> {
        self.items.iter_mut().find(|item| item.id == id)
    }

    pub fn remove_item(&mut self, id: ItemId) -> Option<Item> {
        let index = self.items.iter().position(|item| item.id == id)?;
        Some(self.items.remove(index))
    }

    pub fn enemy(&self, id: EnemyId) -> Option<&Enemy> {
        self.enemies.iter().find(|enemy| enemy.id == id)
    }

    pub fn enemy_mut(&mut self, id: EnemyId) -> Option<&mut Enemy> {
        self.enemies.iter_mut().find(|enemy| enemy.id == id)
    }

    pub fn remove_enemy(&mut self, id: EnemyId) -> Option<Enemy> {
        let index = self.enemies.iter().position(|enemy| enemy.id == id)?;
        Some(self.enemies.remove(index))
    }

    pub fn explosive(&self, id: ExplosiveId) -> Option<&Explosive> {
        self.explosives.iter().find(|explosive| explosive.id == id)
    }

    pub fn remove_explosive(&mut self, id: ExplosiveId) -> Option<Explosive> {
        let index = self
            .explosives
            .iter()
            .position(|explosive| explosive.id == id)?;
        Some(self.explosives.remove(index))
    }

    /// The equipped item's weapon state, when a weapon is in hand.
    pub fn equipped_weapon(&self) -> Option<&WeaponState> {
        let id = self.character.equipped?;
        self.item(id)?.weapon()
    }

    pub fn equipped_weapon_mut(&mut self) -> Option<&mut WeaponState> {
        let id = self.character.equipped?;
        self.item_mut(id)?.weapon_mut()
    }
}
