//! Concurrent pose transition scheduling

use std::time::Duration;

use super::{DurationSource, Easing, Tween, UniformJitter};
use crate::spatial::{EulerRot, Point3D, Pose};

/// Outcome of one [`TransitionScheduler::advance`] pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionProgress {
    /// No transition in flight
    Idle,
    /// Sub-animations still running; the frame should be rendered
    Animating,
    /// The aggregate ticker completed on this tick — the settled signal
    Settled,
}

/// The two independent sub-animations driving one tile.
struct TileAnimation {
    position: Tween<Point3D>,
    orientation: Tween<EulerRot>,
}

/// Drives every tile's pose toward a target set concurrently.
///
/// Each tile gets an independent position tween and orientation tween with
/// durations drawn from `[duration, 2·duration)`, plus one aggregate ticker
/// fixed at exactly `2·duration`. The ticker therefore outlasts every
/// sub-animation; its completion is the transition's settled signal, and
/// while it runs the host must redraw every tick.
///
/// A new [`transition`](Self::transition) unconditionally discards all
/// in-flight sub-animations — last request wins, with no blending. The new
/// tweens start from whatever poses the tiles currently hold.
pub struct TransitionScheduler {
    animations: Vec<TileAnimation>,
    ticker: Option<Tween<f32>>,
    easing: Easing,
    durations: Box<dyn DurationSource>,
}

impl TransitionScheduler {
    /// Create a scheduler with randomized staggering and the reference
    /// exponential in/out curve
    pub fn new() -> Self {
        Self {
            animations: Vec::new(),
            ticker: None,
            easing: Easing::EaseInOutExpo,
            durations: Box::new(UniformJitter::new()),
        }
    }

    /// Set the easing applied to every per-tile tween
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Replace the duration source (deterministic tests, seeded runs)
    pub fn with_durations(mut self, durations: Box<dyn DurationSource>) -> Self {
        self.durations = durations;
        self
    }

    /// Begin morphing from `current` poses toward `targets`.
    ///
    /// Any previous transition is cancelled outright. Pairing is by index;
    /// if `targets` is shorter than `current` (tetrahedron overflow) the
    /// surplus tiles get no sub-animation and simply hold their poses.
    pub fn transition(&mut self, current: &[Pose], targets: &[Pose], duration: Duration) {
        self.cancel_all();

        for (from, to) in current.iter().zip(targets) {
            self.animations.push(TileAnimation {
                position: Tween::new(from.position, to.position, self.durations.sample(duration))
                    .with_easing(self.easing),
                orientation: Tween::new(
                    from.orientation,
                    to.orientation,
                    self.durations.sample(duration),
                )
                .with_easing(self.easing),
            });
        }

        self.ticker = Some(Tween::new(0.0, 1.0, duration * 2));
        tracing::debug!(
            tiles = self.animations.len(),
            ?duration,
            "transition scheduled"
        );
    }

    /// Synchronously remove every active sub-animation and the ticker
    pub fn cancel_all(&mut self) {
        self.animations.clear();
        self.ticker = None;
    }

    /// Whether a transition is in flight
    pub fn is_animating(&self) -> bool {
        self.ticker.is_some()
    }

    /// Advance every active sub-animation and the ticker by one tick.
    ///
    /// All tweens are advanced in a single pass and each tile's current
    /// pose is reported through `apply(index, pose)` before this returns,
    /// so the host renders whole frames only. Returns
    /// [`TransitionProgress::Settled`] exactly once, on the tick the
    /// aggregate ticker completes.
    pub fn advance(&mut self, dt: Duration, mut apply: impl FnMut(usize, Pose)) -> TransitionProgress {
        let Some(ticker) = self.ticker.as_mut() else {
            return TransitionProgress::Idle;
        };

        for (index, animation) in self.animations.iter_mut().enumerate() {
            animation.position.update(dt);
            animation.orientation.update(dt);
            apply(
                index,
                Pose::new(animation.position.value(), animation.orientation.value()),
            );
        }

        ticker.update(dt);
        if ticker.is_complete() {
            // Per-tile durations are < 2·duration, so everything has
            // already clamped to its exact target pose.
            self.cancel_all();
            TransitionProgress::Settled
        } else {
            TransitionProgress::Animating
        }
    }
}

impl Default for TransitionScheduler {
    fn default() -> Self {
        Self::new()
    }
}
