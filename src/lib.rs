//! tilescape: 3D tile layout and transition engine
//!
//! This crate computes target poses for a collection of tiles under five
//! named spatial arrangements and morphs between them:
//! - Pure geometry kernel (points, vectors, Euler orientations, look-at)
//! - Five layout generators: table, sphere, helix, grid, tetrahedron
//! - Tick-driven transition scheduler with staggered per-tile tweens and a
//!   single aggregate settled signal
//! - Layout registry with precomputed, immutable target sets
//!
//! Rendering, input, and tile construction stay with the host; the engine
//! only drives pose channels through the [`Tile`] seam.

pub mod animation;
pub mod config;
pub mod engine;
pub mod error;
pub mod layout;
pub mod spatial;
pub mod tile;

// Re-export commonly used types
pub use animation::{DurationSource, Easing, FixedDuration, TransitionProgress, UniformJitter};
pub use config::{EngineConfig, TileMetrics};
pub use engine::{scatter_poses, LayoutEngine};
pub use error::{EngineError, Result};
pub use layout::{LayoutKind, LayoutSet, TETRAHEDRON_CAPACITY};
pub use spatial::{EulerRot, Point3D, Pose, Vector3D};
pub use tile::{StubTile, Tile};
