//! Gesture recognition for the reveal engine.
//!
//! Two gesture kinds drive a menu: a one-shot directional swipe that maps
//! straight to open or close, and a continuous pan that scrubs the offset.
//! Near-vertical pans are rejected so the hosting scrollable container keeps
//! priority for scrolling.

use horizon_reveal_core::Point;
use horizon_reveal_core::logging::targets;

use crate::controller::Edge;
use crate::error::{Error, Result};

/// Which gesture drives a menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GestureKind {
    /// One-shot directional swipe.
    #[default]
    Swipe,
    /// Continuous drag that scrubs the offset.
    Pan,
}

/// Direction of a recognized swipe.
///
/// Only horizontal swipes exist; menus on vertical edges are driven by a
/// toggle control instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    Left,
    Right,
}

/// What a recognized gesture asks the menu to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Open,
    Close,
}

/// Pans steeper than this angle from horizontal are container scrolls.
pub const SCROLL_ANGLE_THRESHOLD_DEG: f32 = 20.0;

/// Map a swipe direction to a menu action for the given edge.
///
/// A menu on the right edge opens with a leftward swipe and closes with a
/// rightward one; the left edge mirrors that. Vertical edges have no swipe
/// axis, so requesting one is a configuration error.
pub fn swipe_action(edge: Edge, direction: SwipeDirection) -> Result<MenuAction> {
    match edge {
        Edge::Right => Ok(match direction {
            SwipeDirection::Left => MenuAction::Open,
            SwipeDirection::Right => MenuAction::Close,
        }),
        Edge::Left => Ok(match direction {
            SwipeDirection::Right => MenuAction::Open,
            SwipeDirection::Left => MenuAction::Close,
        }),
        Edge::Top | Edge::Bottom => Err(Error::GestureUnavailable { edge }),
    }
}

/// Decide whether a pan with the given initial velocity belongs to the menu.
///
/// Rejects the gesture when the velocity vector leaves the horizontal band,
/// treating it as a vertical container scroll.
pub fn pan_should_begin(velocity: Point) -> bool {
    let degrees = (velocity.y / velocity.x).atan().to_degrees();
    if degrees.abs() > SCROLL_ANGLE_THRESHOLD_DEG {
        tracing::trace!(target: targets::GESTURE, degrees, "pan rejected as scroll");
        return false;
    }
    true
}

/// Accumulates pan translation between platform callbacks.
///
/// The controller consumes translation as it commits offset changes, so
/// deltas never double-apply. Mirrors a platform pan recognizer that reports
/// cumulative translation which the handler resets after each processed
/// increment.
#[derive(Debug, Clone, Default)]
pub struct PanTracker {
    active: bool,
    translation: Point,
    velocity: Point,
}

impl PanTracker {
    /// Create an idle tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a pan with the given initial velocity.
    ///
    /// Returns `false` (and stays idle) when the angle gate rejects the
    /// gesture.
    pub fn begin(&mut self, velocity: Point) -> bool {
        if !pan_should_begin(velocity) {
            return false;
        }
        self.active = true;
        self.translation = Point::ZERO;
        self.velocity = velocity;
        true
    }

    /// Accumulate a translation delta from the platform.
    pub fn update(&mut self, delta: Point, velocity: Point) {
        if !self.active {
            return;
        }
        self.translation.x += delta.x;
        self.translation.y += delta.y;
        self.velocity = velocity;
    }

    /// Translation accumulated since the last [`consume`](Self::consume).
    #[inline]
    pub fn translation(&self) -> Point {
        self.translation
    }

    /// Latest reported velocity.
    #[inline]
    pub fn velocity(&self) -> Point {
        self.velocity
    }

    /// Whether a pan is in progress.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Zero the accumulated translation after it has been applied.
    pub fn consume(&mut self) {
        self.translation = Point::ZERO;
    }

    /// End the pan (finished or cancelled by the platform).
    pub fn end(&mut self) {
        self.active = false;
        self.translation = Point::ZERO;
        self.velocity = Point::ZERO;
    }
}
