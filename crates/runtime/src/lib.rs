//! Host-facing session layer over the gameplay core.
//!
//! The engine integration embeds a [`Session`] and drives it with the host
//! loop: input edges, per-frame samples (movement speed, camera pose, the
//! item under the crosshair), and animation completion callbacks all go in;
//! [`game_core::Effect`] requests come back out for the presentation layer
//! to execute. The session owns the world state, the timer queue, and the
//! content tables, and polls expired timers every frame.
//!
//! Modules are organized by responsibility:
//! - [`session`] hosts the session orchestrator
//! - [`input`] maps input edges to simulation actions
//! - [`perception`] routes AI signals to an observer interface
pub mod input;
pub mod perception;
pub mod session;

mod error;

pub use error::{Result, SessionError};
pub use input::InputEvent;
pub use perception::{NullPerception, Perception};
pub use session::{BulletHit, HostFrame, Session, route_ai};
