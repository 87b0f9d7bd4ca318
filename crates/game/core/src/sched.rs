//! Explicit timer scheduling.
//!
//! Every delayed gameplay transition (auto-fire reset, throw-weapon landing,
//! equip interpolation finish, glow-pulse restart, ...) is a scheduled event
//! in a [`TimerQueue`] rather than a callback registered with the host. The
//! runtime polls the queue once per frame and feeds expired entries back into
//! the engine as actions, which keeps the whole thing deterministic and
//! trivially cancellable.

use crate::state::{EnemyId, ItemId};

/// Simulation time in seconds.
pub type Seconds = f32;

/// Opaque handle for cancelling a scheduled timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimerHandle(u32);

/// What a timer does when it fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TimerKind {
    /// Combat leaves `FireTimerInProgress`; may re-fire or auto-reload.
    AutoFireReset,
    /// Ends the brief crosshair spread bump after a shot.
    CrosshairKickEnd,
    /// An item's equip interpolation reaches the character.
    FinishInterp(ItemId),
    /// A thrown weapon stops simulating physics and becomes a pickup.
    StopFalling(ItemId),
    /// Restarts a pickup's glow-pulse curve from time zero.
    PulseTick(ItemId),
    /// Hides an enemy's health bar after a period with no hits.
    HideHealthBar(EnemyId),
    /// An enemy may play hit-react montages again.
    HitReactReset(EnemyId),
}

#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
struct Entry {
    handle: TimerHandle,
    due: Seconds,
    kind: TimerKind,
}

/// Pending timers ordered by due time.
///
/// Backed by a plain vector; the population is a handful of entries so a
/// linear scan beats a heap here. Pops are ordered by `(due, handle)` so two
/// timers expiring on the same frame resolve in scheduling order.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimerQueue {
    entries: Vec<Entry>,
    next_handle: u32,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules `kind` to fire at absolute time `due`.
    pub fn schedule(&mut self, due: Seconds, kind: TimerKind) -> TimerHandle {
        let handle = TimerHandle(self.next_handle);
        self.next_handle = self.next_handle.wrapping_add(1);
        self.entries.push(Entry { handle, due, kind });
        handle
    }

    /// Cancels a pending timer. Cancelling an already-fired or unknown
    /// handle is a no-op.
    pub fn cancel(&mut self, handle: TimerHandle) {
        self.entries.retain(|entry| entry.handle != handle);
    }

    /// Cancels every pending timer that refers to `item`.
    pub fn cancel_item(&mut self, item: ItemId) {
        self.entries.retain(|entry| {
            !matches!(
                entry.kind,
                TimerKind::FinishInterp(id) | TimerKind::StopFalling(id) | TimerKind::PulseTick(id)
                    if id == item
            )
        });
    }

    /// Pops the earliest timer due at or before `now`, if any.
    pub fn pop_due(&mut self, now: Seconds) -> Option<TimerKind> {
        let index = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.due <= now)
            .min_by(|(_, a), (_, b)| {
                a.due
                    .partial_cmp(&b.due)
                    .unwrap_or(core::cmp::Ordering::Equal)
                    .then(a.handle.0.cmp(&b.handle.0))
            })
            .map(|(index, _)| index)?;
        Some(self.entries.swap_remove(index).kind)
    }

    /// True if a timer with this handle is still pending.
    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.entries.iter().any(|entry| entry.handle == handle)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_in_due_order() {
        let mut queue = TimerQueue::new();
        queue.schedule(0.7, TimerKind::StopFalling(ItemId(1)));
        queue.schedule(0.05, TimerKind::CrosshairKickEnd);
        queue.schedule(0.1, TimerKind::AutoFireReset);

        assert_eq!(queue.pop_due(1.0), Some(TimerKind::CrosshairKickEnd));
        assert_eq!(queue.pop_due(1.0), Some(TimerKind::AutoFireReset));
        assert_eq!(queue.pop_due(1.0), Some(TimerKind::StopFalling(ItemId(1))));
        assert_eq!(queue.pop_due(1.0), None);
    }

    #[test]
    fn not_due_yet_stays_queued() {
        let mut queue = TimerQueue::new();
        queue.schedule(0.5, TimerKind::AutoFireReset);
        assert_eq!(queue.pop_due(0.4), None);
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.pop_due(0.5), Some(TimerKind::AutoFireReset));
    }

    #[test]
    fn cancel_removes_entry() {
        let mut queue = TimerQueue::new();
        let handle = queue.schedule(0.1, TimerKind::AutoFireReset);
        assert!(queue.is_pending(handle));
        queue.cancel(handle);
        assert!(!queue.is_pending(handle));
        assert_eq!(queue.pop_due(1.0), None);

        // Cancelling again is harmless.
        queue.cancel(handle);
    }

    #[test]
    fn same_due_resolves_in_schedule_order() {
        let mut queue = TimerQueue::new();
        queue.schedule(0.2, TimerKind::AutoFireReset);
        queue.schedule(0.2, TimerKind::CrosshairKickEnd);
        assert_eq!(queue.pop_due(0.2), Some(TimerKind::AutoFireReset));
        assert_eq!(queue.pop_due(0.2), Some(TimerKind::CrosshairKickEnd));
    }

    #[test]
    fn cancel_item_drops_all_item_timers() {
        let mut queue = TimerQueue::new();
        queue.schedule(0.1, TimerKind::PulseTick(ItemId(3)));
        queue.schedule(0.2, TimerKind::FinishInterp(ItemId(3)));
        queue.schedule(0.3, TimerKind::AutoFireReset);
        queue.cancel_item(ItemId(3));
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.pop_due(1.0), Some(TimerKind::AutoFireReset));
    }
}
