//! Error types for the reveal engine.

use crate::controller::Edge;

/// Result type alias for reveal operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in the reveal engine.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Swipe recognition requested for an edge that only supports taps.
    ///
    /// Menus anchored to the top or bottom edge slide vertically, which
    /// conflicts with list scrolling, so they must be driven by an explicit
    /// toggle control rather than swipe or pan gestures.
    #[error("swipe and pan gestures are not available for the {edge:?} edge; use a toggle control")]
    GestureUnavailable { edge: Edge },

    /// An operation referenced a cell that is not bound to the adapter.
    #[error("cell is not bound to this adapter")]
    StaleCell,
}
