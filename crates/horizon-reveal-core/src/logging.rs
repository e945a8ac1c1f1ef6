//! Logging facilities for Horizon Reveal.
//!
//! Horizon Reveal uses the `tracing` crate for instrumentation. To see logs,
//! install a tracing subscriber in your application:
//!
//! ```ignore
//! use tracing_subscriber;
//!
//! fn main() {
//!     tracing_subscriber::fmt::init();
//!
//!     // Your application code...
//! }
//! ```
//!
//! The [`targets`] module lists the target names each subsystem logs under,
//! so directives like `horizon_reveal::gesture=trace` filter cleanly.

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "horizon_reveal_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "horizon_reveal_core::signal";
    /// Reveal controller state machine target.
    pub const CONTROLLER: &str = "horizon_reveal::controller";
    /// Gesture recognition target.
    pub const GESTURE: &str = "horizon_reveal::gesture";
    /// Menu layout target.
    pub const LAYOUT: &str = "horizon_reveal::layout";
    /// Offset animation target.
    pub const ANIMATION: &str = "horizon_reveal::animation";
    /// Host cell adapter target.
    pub const HOST: &str = "horizon_reveal::host";
}
