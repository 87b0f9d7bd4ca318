//! Carried-item list and the interp destination slots.

use arrayvec::ArrayVec;

use crate::config::GameConfig;
use crate::state::item::ItemId;

/// Items the character carries, equipped weapon included. Position in the
/// list is the hotkey slot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Inventory {
    slots: ArrayVec<ItemId, { GameConfig::INVENTORY_CAPACITY }>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_full(&self) -> bool {
        self.slots.is_full()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<ItemId> {
        self.slots.get(index).copied()
    }

    pub fn index_of(&self, item: ItemId) -> Option<usize> {
        self.slots.iter().position(|&id| id == item)
    }

    /// Appends `item` and returns its slot, or `None` when full.
    pub fn push(&mut self, item: ItemId) -> Option<usize> {
        if self.slots.is_full() {
            return None;
        }
        self.slots.push(item);
        Some(self.slots.len() - 1)
    }

    /// Removes the item at `index`, shifting later slots down.
    pub fn remove(&mut self, index: usize) -> Option<ItemId> {
        if index >= self.slots.len() {
            return None;
        }
        Some(self.slots.remove(index))
    }

    /// Replaces the item at `index`, returning the previous occupant.
    pub fn replace(&mut self, index: usize, item: ItemId) -> Option<ItemId> {
        let slot = self.slots.get_mut(index)?;
        Some(core::mem::replace(slot, item))
    }

    pub fn iter(&self) -> impl Iterator<Item = ItemId> + '_ {
        self.slots.iter().copied()
    }
}

/// Occupancy counts for the interp destinations on the character.
///
/// Slot 0 is reserved for weapons; slots 1.. take everything else. Incoming
/// items pick the least-loaded slot so simultaneous pickups fan out instead
/// of stacking on one spot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InterpSlots {
    counts: [u8; GameConfig::INTERP_SLOT_COUNT],
}

impl InterpSlots {
    pub fn new() -> Self {
        Self::default()
    }

    /// Interp slot for a weapon pickup.
    pub const WEAPON_SLOT: usize = 0;

    /// Least-loaded non-weapon slot; ties resolve to the lowest index.
    pub fn least_loaded(&self) -> usize {
        let mut best = 1;
        for index in 2..self.counts.len() {
            if self.counts[index] < self.counts[best] {
                best = index;
            }
        }
        best
    }

    pub fn occupancy(&self, index: usize) -> u8 {
        self.counts.get(index).copied().unwrap_or(0)
    }

    /// Adjusts a slot's occupancy by exactly one. Other magnitudes,
    /// out-of-range indices, and decrements below zero are ignored.
    pub fn adjust(&mut self, index: usize, delta: i8) {
        if delta.unsigned_abs() != 1 {
            return;
        }
        let Some(count) = self.counts.get_mut(index) else {
            return;
        };
        *count = count.saturating_add_signed(delta);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inventory_caps_at_capacity() {
        let mut inventory = Inventory::new();
        for id in 0..GameConfig::INVENTORY_CAPACITY as u32 {
            assert_eq!(inventory.push(ItemId(id)), Some(id as usize));
        }
        assert!(inventory.is_full());
        assert_eq!(inventory.push(ItemId(99)), None);
    }

    #[test]
    fn replace_swaps_in_place() {
        let mut inventory = Inventory::new();
        inventory.push(ItemId(1));
        inventory.push(ItemId(2));
        assert_eq!(inventory.replace(1, ItemId(7)), Some(ItemId(2)));
        assert_eq!(inventory.get(1), Some(ItemId(7)));
        assert_eq!(inventory.replace(5, ItemId(8)), None);
    }

    #[test]
    fn least_loaded_skips_weapon_slot_and_prefers_low_index() {
        let mut slots = InterpSlots::new();
        // Slot 0 being empty must not attract non-weapon items.
        assert_eq!(slots.least_loaded(), 1);

        slots.adjust(1, 1);
        slots.adjust(1, 1);
        slots.adjust(3, 1);
        // Counts are [0, 2, 0, 1, 0, 0, 0]: slot 2 wins the tie with 4..6.
        assert_eq!(slots.least_loaded(), 2);
    }

    #[test]
    fn adjust_ignores_underflow_out_of_range_and_non_unit_deltas() {
        let mut slots = InterpSlots::new();
        slots.adjust(1, -1);
        assert_eq!(slots.occupancy(1), 0);
        slots.adjust(42, 1);
        assert_eq!(slots.occupancy(42), 0);
        slots.adjust(1, 3);
        slots.adjust(1, 0);
        assert_eq!(slots.occupancy(1), 0);
    }
}
