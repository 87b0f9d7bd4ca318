//! Input edges from the host's binding layer.

/// A discrete input event, already resolved from whatever device produced
/// it. Held-state bookkeeping lives in the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    FirePressed,
    FireReleased,
    AimPressed,
    AimReleased,
    /// Interact with the pickup under the crosshair.
    SelectPressed,
    ReloadPressed,
    CrouchPressed,
    JumpPressed,
    /// Inventory hotkey, slot 0..=5.
    Hotkey(usize),
}
