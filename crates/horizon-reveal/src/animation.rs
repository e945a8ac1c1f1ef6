//! Offset animation for the reveal engine.
//!
//! Open and close transitions animate the menu offset between its current
//! value and a target. The animation is driven explicitly: the owner calls
//! [`OffsetAnimation::advance`] with elapsed time from its frame clock and
//! applies the returned value. This keeps the engine headless and lets tests
//! step time deterministically.
//!
//! # Example
//!
//! ```ignore
//! use std::time::Duration;
//! use horizon_reveal::animation::{Easing, OffsetAnimation, AnimationStatus};
//!
//! let mut anim = OffsetAnimation::new(0.0, -120.0, Duration::from_secs(1), Easing::EaseInOut);
//! loop {
//!     match anim.advance(Duration::from_millis(16)) {
//!         AnimationStatus::Running(offset) => apply(offset),
//!         AnimationStatus::Finished(offset) => { apply(offset); break; }
//!     }
//! }
//! ```

use std::time::Duration;

use horizon_reveal_core::logging::targets;

/// Easing curves for offset animations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// Constant velocity.
    Linear,
    /// Accelerate from rest.
    EaseIn,
    /// Decelerate to rest.
    EaseOut,
    /// Accelerate then decelerate.
    #[default]
    EaseInOut,
}

impl Easing {
    /// Map linear progress `t` in `[0, 1]` through the curve.
    pub fn ease(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => t * (2.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
        }
    }
}

/// Result of advancing an animation by one time step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimationStatus {
    /// Animation still in flight; apply the interpolated offset.
    Running(f32),
    /// Animation reached its target this step; apply the final offset.
    Finished(f32),
}

impl AnimationStatus {
    /// The offset carried by either variant.
    #[inline]
    pub fn offset(&self) -> f32 {
        match *self {
            AnimationStatus::Running(v) | AnimationStatus::Finished(v) => v,
        }
    }

    /// Whether the animation has completed.
    #[inline]
    pub fn is_finished(&self) -> bool {
        matches!(self, AnimationStatus::Finished(_))
    }
}

/// An in-flight interpolation of the menu offset toward a target value.
#[derive(Debug, Clone)]
pub struct OffsetAnimation {
    from: f32,
    to: f32,
    duration: Duration,
    easing: Easing,
    elapsed: Duration,
}

impl OffsetAnimation {
    /// Start an animation from `from` to `to` over `duration`.
    ///
    /// A zero duration finishes on the first `advance` call.
    pub fn new(from: f32, to: f32, duration: Duration, easing: Easing) -> Self {
        tracing::trace!(target: targets::ANIMATION, from, to, ?duration, "animation started");
        Self {
            from,
            to,
            duration,
            easing,
            elapsed: Duration::ZERO,
        }
    }

    /// The target offset this animation is heading toward.
    #[inline]
    pub fn target(&self) -> f32 {
        self.to
    }

    /// Redirect an in-flight animation toward a new target.
    ///
    /// Restarts timing from `current`, so a reversal mid-flight animates
    /// smoothly instead of jumping. Last writer wins on the target.
    pub fn retarget(&mut self, current: f32, to: f32) {
        tracing::trace!(target: targets::ANIMATION, current, to, "animation retargeted");
        self.from = current;
        self.to = to;
        self.elapsed = Duration::ZERO;
    }

    /// Advance the animation by `dt` and return the new offset.
    pub fn advance(&mut self, dt: Duration) -> AnimationStatus {
        self.elapsed += dt;
        if self.elapsed >= self.duration || self.duration.is_zero() {
            return AnimationStatus::Finished(self.to);
        }
        let t = self.elapsed.as_secs_f32() / self.duration.as_secs_f32();
        let eased = self.easing.ease(t);
        AnimationStatus::Running(self.from + (self.to - self.from) * eased)
    }
}
