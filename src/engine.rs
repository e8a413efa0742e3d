//! Layout registry, selection, and the tick-driven engine loop

use std::time::Duration;

use rand::Rng;

use crate::animation::{DurationSource, TransitionProgress, TransitionScheduler};
use crate::config::EngineConfig;
use crate::error::{EngineError, Result};
use crate::layout::{LayoutKind, LayoutSet};
use crate::spatial::{Point3D, Pose};
use crate::tile::Tile;

/// Half-extent of the reference boot scatter cube
const SCATTER_EXTENT: f32 = 2000.0;

/// Random start poses for `count` tiles, uniform in `[-2000, 2000)³` with
/// identity orientation — the reference boot scatter before the first
/// transition.
pub fn scatter_poses<R: Rng>(count: usize, rng: &mut R) -> Vec<Pose> {
    (0..count)
        .map(|_| {
            Pose::at(Point3D::new(
                rng.gen_range(-SCATTER_EXTENT..SCATTER_EXTENT),
                rng.gen_range(-SCATTER_EXTENT..SCATTER_EXTENT),
                rng.gen_range(-SCATTER_EXTENT..SCATTER_EXTENT),
            ))
        })
        .collect()
}

/// Owns the five precomputed layout sets, the active selection, and the
/// transition scheduler for one tile collection.
///
/// The engine is an explicit context object: no globals, so multiple
/// independent engines can coexist. Layout sets are computed once for a
/// fixed tile count; changing the count requires a new engine, and every
/// entry point re-validates the count to catch drift.
pub struct LayoutEngine {
    /// Indexed by `LayoutKind` discriminant ([`LayoutKind::ALL`] order)
    sets: Vec<LayoutSet>,
    active: Option<LayoutKind>,
    scheduler: TransitionScheduler,
    config: EngineConfig,
    tile_count: usize,
}

impl std::fmt::Debug for LayoutEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LayoutEngine")
            .field("active", &self.active)
            .field("config", &self.config)
            .field("tile_count", &self.tile_count)
            .finish_non_exhaustive()
    }
}

impl LayoutEngine {
    /// Create an engine for `tile_count` tiles with default configuration
    pub fn new(tile_count: usize) -> Result<Self> {
        Self::with_config(tile_count, EngineConfig::default())
    }

    /// Create an engine for `tile_count` tiles, evaluating every layout once
    pub fn with_config(tile_count: usize, config: EngineConfig) -> Result<Self> {
        if tile_count == 0 {
            return Err(EngineError::Configuration(
                "layout engine requires at least one tile".to_string(),
            ));
        }

        let sets = LayoutKind::ALL
            .iter()
            .map(|&kind| LayoutSet::generate(kind, tile_count, &config.metrics))
            .collect();
        tracing::info!(tiles = tile_count, "layout sets computed");

        let scheduler = TransitionScheduler::new().with_easing(config.easing);
        Ok(Self {
            sets,
            active: None,
            scheduler,
            config,
            tile_count,
        })
    }

    /// Replace the scheduler's duration source (seeded runs, deterministic
    /// tests). Call before the first transition.
    pub fn with_duration_source(mut self, source: Box<dyn DurationSource>) -> Self {
        self.scheduler = TransitionScheduler::new()
            .with_easing(self.config.easing)
            .with_durations(source);
        self
    }

    /// The cached target set for one arrangement
    pub fn layout_set(&self, kind: LayoutKind) -> &LayoutSet {
        &self.sets[kind as usize]
    }

    /// The arrangement most recently selected, for host UI highlighting
    pub fn active_layout(&self) -> Option<LayoutKind> {
        self.active
    }

    /// Number of tiles this engine was initialized for
    pub fn tile_count(&self) -> usize {
        self.tile_count
    }

    /// Whether a transition is currently in flight
    pub fn is_animating(&self) -> bool {
        self.scheduler.is_animating()
    }

    /// Switch to an arrangement at the configured default duration.
    ///
    /// Any in-flight transition is discarded; the new one starts from the
    /// tiles' current, possibly mid-flight, poses.
    pub fn select_layout<T: Tile>(&mut self, kind: LayoutKind, tiles: &mut [T]) -> Result<()> {
        let duration = self.config.default_duration();
        self.transition_to(kind, tiles, duration)
    }

    /// Switch to an arrangement named by its literal identifier.
    ///
    /// Fails with [`EngineError::UnknownLayout`] for anything outside the
    /// five built-ins, leaving all state unchanged.
    pub fn select_layout_by_name<T: Tile>(&mut self, name: &str, tiles: &mut [T]) -> Result<()> {
        let kind: LayoutKind = name.parse()?;
        self.select_layout(kind, tiles)
    }

    /// Reference boot behavior: transition into the table arrangement
    pub fn start<T: Tile>(&mut self, tiles: &mut [T]) -> Result<()> {
        self.select_layout(LayoutKind::Table, tiles)
    }

    /// Switch to an arrangement with an explicit duration
    pub fn transition_to<T: Tile>(
        &mut self,
        kind: LayoutKind,
        tiles: &mut [T],
        duration: Duration,
    ) -> Result<()> {
        self.check_tile_count(tiles.len())?;

        let current: Vec<Pose> = tiles.iter().map(|tile| tile.pose()).collect();
        let set = &self.sets[kind as usize];
        self.scheduler.transition(&current, set.poses(), duration);
        self.active = Some(kind);
        tracing::info!(layout = %kind, ?duration, "transition started");
        Ok(())
    }

    /// Advance the engine by one host tick.
    ///
    /// All active sub-animations advance in a single pass and the updated
    /// poses are written into `tiles` before `render` fires, so the host
    /// only ever draws whole frames. `render` is invoked once per tick for
    /// as long as the aggregate ticker runs; the returned
    /// [`TransitionProgress::Settled`] is the transition's one completion
    /// signal.
    pub fn advance<T: Tile>(
        &mut self,
        dt: Duration,
        tiles: &mut [T],
        mut render: impl FnMut(),
    ) -> Result<TransitionProgress> {
        self.check_tile_count(tiles.len())?;

        let progress = self.scheduler.advance(dt, |index, pose| {
            if let Some(tile) = tiles.get_mut(index) {
                tile.set_pose(pose);
            }
        });

        match progress {
            TransitionProgress::Idle => {}
            TransitionProgress::Animating => render(),
            TransitionProgress::Settled => {
                render();
                tracing::info!(layout = ?self.active, "transition settled");
            }
        }
        Ok(progress)
    }

    fn check_tile_count(&self, actual: usize) -> Result<()> {
        if actual != self.tile_count {
            return Err(EngineError::Configuration(format!(
                "tile count changed after initialization: expected {}, got {}",
                self.tile_count, actual
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::FixedDuration;
    use crate::tile::StubTile;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const TICK: Duration = Duration::from_millis(16);

    fn engine_with_fixed_durations(tile_count: usize) -> LayoutEngine {
        LayoutEngine::new(tile_count)
            .unwrap()
            .with_duration_source(Box::new(FixedDuration))
    }

    fn scattered_tiles(count: usize) -> Vec<StubTile> {
        let mut rng = StdRng::seed_from_u64(11);
        scatter_poses(count, &mut rng)
            .into_iter()
            .map(StubTile::from_pose)
            .collect()
    }

    fn settle(engine: &mut LayoutEngine, tiles: &mut [StubTile]) -> u32 {
        let mut renders = 0;
        loop {
            let progress = engine.advance(TICK, tiles, || renders += 1).unwrap();
            if progress != TransitionProgress::Animating {
                return renders;
            }
        }
    }

    #[test]
    fn test_zero_tiles_is_a_configuration_error() {
        let err = LayoutEngine::new(0).unwrap_err();
        assert!(matches!(err, EngineError::Configuration(_)));
    }

    #[test]
    fn test_unknown_layout_name_changes_nothing() {
        let mut engine = engine_with_fixed_durations(4);
        let mut tiles = scattered_tiles(4);

        let err = engine
            .select_layout_by_name("pyramid", &mut tiles)
            .unwrap_err();
        assert!(matches!(err, EngineError::UnknownLayout(_)));
        assert_eq!(engine.active_layout(), None);
        assert!(!engine.is_animating());
    }

    #[test]
    fn test_tile_count_drift_is_rejected() {
        let mut engine = engine_with_fixed_durations(5);
        let mut tiles = scattered_tiles(3);

        let err = engine
            .select_layout(LayoutKind::Sphere, &mut tiles)
            .unwrap_err();
        assert!(matches!(err, EngineError::Configuration(_)));
    }

    #[test]
    fn test_all_sets_precomputed_with_matching_length() {
        let engine = LayoutEngine::new(60).unwrap();
        for kind in LayoutKind::ALL {
            assert_eq!(engine.layout_set(kind).len(), 60);
            assert_eq!(engine.layout_set(kind).kind(), kind);
        }
    }

    #[test]
    fn test_transition_settles_on_layout_targets() {
        let mut engine = engine_with_fixed_durations(30);
        let mut tiles = scattered_tiles(30);

        engine
            .transition_to(LayoutKind::Helix, &mut tiles, Duration::from_millis(160))
            .unwrap();
        assert_eq!(engine.active_layout(), Some(LayoutKind::Helix));
        settle(&mut engine, &mut tiles);

        let targets = engine.layout_set(LayoutKind::Helix).poses();
        for (tile, target) in tiles.iter().zip(targets) {
            assert_eq!(tile.pose(), *target);
        }
    }

    #[test]
    fn test_round_trip_returns_to_cached_table_set() {
        let mut engine = engine_with_fixed_durations(25);
        let mut tiles = scattered_tiles(25);
        let duration = Duration::from_millis(96);

        engine
            .transition_to(LayoutKind::Table, &mut tiles, duration)
            .unwrap();
        settle(&mut engine, &mut tiles);
        let after_first: Vec<Pose> = tiles.iter().map(|t| t.pose()).collect();

        engine
            .transition_to(LayoutKind::Sphere, &mut tiles, duration)
            .unwrap();
        settle(&mut engine, &mut tiles);

        engine
            .transition_to(LayoutKind::Table, &mut tiles, duration)
            .unwrap();
        settle(&mut engine, &mut tiles);

        // Sets are precomputed and immutable, so the round trip lands on
        // exactly the same poses
        let after_round_trip: Vec<Pose> = tiles.iter().map(|t| t.pose()).collect();
        assert_eq!(after_first, after_round_trip);
        assert_eq!(after_round_trip, engine.layout_set(LayoutKind::Table).poses());
    }

    #[test]
    fn test_render_fires_once_per_animated_tick() {
        let mut engine = engine_with_fixed_durations(8);
        let mut tiles = scattered_tiles(8);

        engine
            .transition_to(LayoutKind::Grid, &mut tiles, Duration::from_millis(160))
            .unwrap();
        let renders = settle(&mut engine, &mut tiles);
        // 320ms aggregate ticker at 16ms ticks
        assert_eq!(renders, 20);

        // Idle ticks render nothing
        let mut idle_renders = 0;
        let progress = engine.advance(TICK, &mut tiles, || idle_renders += 1).unwrap();
        assert_eq!(progress, TransitionProgress::Idle);
        assert_eq!(idle_renders, 0);
    }

    #[test]
    fn test_interrupted_transition_is_discarded() {
        let mut engine = engine_with_fixed_durations(12);
        let mut tiles = scattered_tiles(12);
        let duration = Duration::from_millis(160);

        engine
            .transition_to(LayoutKind::Sphere, &mut tiles, duration)
            .unwrap();
        for _ in 0..3 {
            engine.advance(TICK, &mut tiles, || {}).unwrap();
        }

        // Last request wins: the sphere transition is cancelled mid-flight
        engine
            .transition_to(LayoutKind::Tetrahedron, &mut tiles, duration)
            .unwrap();
        settle(&mut engine, &mut tiles);

        let targets = engine.layout_set(LayoutKind::Tetrahedron).poses();
        for (tile, target) in tiles.iter().zip(targets) {
            assert_eq!(tile.pose(), *target);
        }
        assert_eq!(engine.active_layout(), Some(LayoutKind::Tetrahedron));
    }

    #[test]
    fn test_start_selects_table() {
        let mut engine = engine_with_fixed_durations(6);
        let mut tiles = scattered_tiles(6);
        engine.start(&mut tiles).unwrap();
        assert_eq!(engine.active_layout(), Some(LayoutKind::Table));
    }

    #[test]
    fn test_scatter_poses_range() {
        let mut rng = StdRng::seed_from_u64(3);
        let poses = scatter_poses(200, &mut rng);
        assert_eq!(poses.len(), 200);
        for pose in poses {
            for value in [pose.position.x, pose.position.y, pose.position.z] {
                assert!((-SCATTER_EXTENT..SCATTER_EXTENT).contains(&value));
            }
            assert_eq!(pose.orientation, crate::spatial::EulerRot::IDENTITY);
        }
    }

    #[test]
    fn test_independent_engines_do_not_share_state() {
        let mut a = engine_with_fixed_durations(4);
        let b = engine_with_fixed_durations(9);

        let mut tiles = scattered_tiles(4);
        a.select_layout(LayoutKind::Grid, &mut tiles).unwrap();

        assert_eq!(a.tile_count(), 4);
        assert_eq!(b.tile_count(), 9);
        assert_eq!(b.active_layout(), None);
        assert_eq!(b.layout_set(LayoutKind::Grid).len(), 9);
    }
}
