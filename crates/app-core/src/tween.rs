//! Time-based tweens for the customizer fly-to and the loader fade.
//!
//! Scroll-scrubbed motion does not use these; see [`crate::Choreographer`].

use crate::pose::CameraPose;
use std::time::Duration;

/// Acceleration curve applied to a linear progress value in [0, 1].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    /// Constant speed throughout.
    Linear,
    /// Fast start, gentle stop (`1 - (1 - t)^2`).
    #[default]
    Power1Out,
    /// Cubic slow-fast-slow.
    Power3InOut,
}

impl Easing {
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::Power1Out => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::Power3InOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

/// Clock for a delayed, fixed-duration eased animation.
#[derive(Clone, Debug)]
pub struct Tween {
    delay: Duration,
    duration: Duration,
    elapsed: Duration,
    easing: Easing,
}

impl Tween {
    pub fn new(duration: Duration, easing: Easing) -> Self {
        Self {
            delay: Duration::ZERO,
            duration,
            elapsed: Duration::ZERO,
            easing,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Linear progress in [0, 1]; stays 0 during the delay.
    pub fn progress(&self) -> f32 {
        let running = self.elapsed.saturating_sub(self.delay);
        if self.duration.is_zero() {
            return if self.elapsed >= self.delay { 1.0 } else { 0.0 };
        }
        (running.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    /// Advance by `dt` and return the eased progress.
    pub fn advance(&mut self, dt: Duration) -> f32 {
        self.elapsed = self.elapsed.saturating_add(dt);
        self.eased()
    }

    #[inline]
    pub fn eased(&self) -> f32 {
        self.easing.apply(self.progress())
    }

    #[inline]
    pub fn in_delay(&self) -> bool {
        self.elapsed < self.delay
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.delay + self.duration
    }
}

/// Fly the whole camera pose from one value to another.
#[derive(Clone, Debug)]
pub struct PoseTween {
    from: CameraPose,
    to: CameraPose,
    clock: Tween,
}

impl PoseTween {
    pub fn new(from: CameraPose, to: CameraPose, duration: Duration, easing: Easing) -> Self {
        Self {
            from,
            to,
            clock: Tween::new(duration, easing),
        }
    }

    /// Pose after advancing by `dt`; exactly `to` once finished.
    pub fn advance(&mut self, dt: Duration) -> CameraPose {
        let e = self.clock.advance(dt);
        if self.clock.is_finished() {
            self.to
        } else {
            self.from.lerp(&self.to, e)
        }
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.clock.is_finished()
    }
}
