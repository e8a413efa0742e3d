//! Tweening/interpolation

use std::time::Duration;

use super::Easing;
use crate::spatial::{EulerRot, Point3D, Pose};

/// Values a [`Tween`] can drive: anything componentwise-interpolatable.
pub trait Interpolate: Copy {
    fn interpolate(&self, other: &Self, t: f32) -> Self;
}

impl Interpolate for f32 {
    fn interpolate(&self, other: &Self, t: f32) -> Self {
        self + (other - self) * t
    }
}

impl Interpolate for Point3D {
    fn interpolate(&self, other: &Self, t: f32) -> Self {
        self.lerp(other, t)
    }
}

impl Interpolate for EulerRot {
    fn interpolate(&self, other: &Self, t: f32) -> Self {
        self.lerp(other, t)
    }
}

impl Interpolate for Pose {
    fn interpolate(&self, other: &Self, t: f32) -> Self {
        self.lerp(other, t)
    }
}

/// A tween animation over one value
#[derive(Debug, Clone)]
pub struct Tween<T: Interpolate> {
    start: T,
    end: T,
    duration: Duration,
    elapsed: Duration,
    easing: Easing,
    complete: bool,
}

impl<T: Interpolate> Tween<T> {
    /// Create a new tween
    pub fn new(start: T, end: T, duration: Duration) -> Self {
        Self {
            start,
            end,
            duration,
            elapsed: Duration::ZERO,
            easing: Easing::Linear,
            complete: duration.is_zero(),
        }
    }

    /// Set easing function
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Advance the tween by one tick
    pub fn update(&mut self, dt: Duration) {
        if self.complete {
            return;
        }

        self.elapsed += dt;
        if self.elapsed >= self.duration {
            self.elapsed = self.duration;
            self.complete = true;
        }
    }

    /// Get current value
    ///
    /// A completed tween reports exactly its end value.
    pub fn value(&self) -> T {
        if self.complete {
            return self.end;
        }
        let progress = self.elapsed.as_secs_f32() / self.duration.as_secs_f32();
        self.start.interpolate(&self.end, self.easing.apply(progress))
    }

    /// Whether the tween has reached its scheduled duration
    pub fn is_complete(&self) -> bool {
        self.complete
    }
}
