//! Animation system: easing curves, tweens, and the transition scheduler

mod easing;
mod jitter;
mod scheduler;
mod tween;

pub use easing::Easing;
pub use jitter::{DurationSource, FixedDuration, UniformJitter};
pub use scheduler::{TransitionProgress, TransitionScheduler};
pub use tween::{Interpolate, Tween};
