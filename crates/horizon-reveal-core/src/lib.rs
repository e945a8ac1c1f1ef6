//! Core systems for Horizon Reveal: geometry primitives, the signal/slot
//! mechanism, and logging targets.
//!
//! The reveal engine runs entirely on the UI thread, so the signal system
//! here invokes slots directly; there is no queued cross-thread delivery.

mod geometry;
pub mod logging;
mod signal;

pub use geometry::{Color, Point, Rect, Size};
pub use signal::{ConnectionGuard, ConnectionId, Signal};
