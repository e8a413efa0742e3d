//! The five built-in tile arrangements
//!
//! Each arrangement is a pure generator mapping a tile count to an ordered
//! sequence of target poses, evaluated once per tile-count epoch and cached
//! by the engine as a [`LayoutSet`].

mod grid;
mod helix;
mod sphere;
mod table;
mod tetrahedron;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::TileMetrics;
use crate::error::EngineError;
use crate::spatial::Pose;

pub use tetrahedron::TETRAHEDRON_CAPACITY;

/// Identifier for one of the built-in arrangements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutKind {
    Table,
    Sphere,
    Helix,
    Grid,
    Tetrahedron,
}

impl LayoutKind {
    /// Every arrangement, in declaration order
    pub const ALL: [LayoutKind; 5] = [
        LayoutKind::Table,
        LayoutKind::Sphere,
        LayoutKind::Helix,
        LayoutKind::Grid,
        LayoutKind::Tetrahedron,
    ];

    /// The literal identifier hosts use to trigger this arrangement
    pub fn name(&self) -> &'static str {
        match self {
            LayoutKind::Table => "table",
            LayoutKind::Sphere => "sphere",
            LayoutKind::Helix => "helix",
            LayoutKind::Grid => "grid",
            LayoutKind::Tetrahedron => "tetrahedron",
        }
    }

    /// Generate target poses for `count` tiles.
    ///
    /// Only the tetrahedron consumes `metrics`; its solid is sized from the
    /// card dimensions. The tetrahedron is also the only arrangement with a
    /// hard capacity ([`TETRAHEDRON_CAPACITY`]); counts above it truncate.
    pub fn generate(&self, count: usize, metrics: &TileMetrics) -> Vec<Pose> {
        match self {
            LayoutKind::Table => table::poses(count),
            LayoutKind::Sphere => sphere::poses(count),
            LayoutKind::Helix => helix::poses(count),
            LayoutKind::Grid => grid::poses(count),
            LayoutKind::Tetrahedron => tetrahedron::poses(count, metrics),
        }
    }
}

impl fmt::Display for LayoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LayoutKind {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "table" => Ok(LayoutKind::Table),
            "sphere" => Ok(LayoutKind::Sphere),
            "helix" => Ok(LayoutKind::Helix),
            "grid" => Ok(LayoutKind::Grid),
            "tetrahedron" => Ok(LayoutKind::Tetrahedron),
            other => Err(EngineError::UnknownLayout(other.to_string())),
        }
    }
}

/// The cached, immutable target poses for one arrangement.
#[derive(Debug, Clone)]
pub struct LayoutSet {
    kind: LayoutKind,
    poses: Vec<Pose>,
}

impl LayoutSet {
    /// Evaluate `kind` for `count` tiles
    pub fn generate(kind: LayoutKind, count: usize, metrics: &TileMetrics) -> Self {
        Self {
            kind,
            poses: kind.generate(count, metrics),
        }
    }

    pub fn kind(&self) -> LayoutKind {
        self.kind
    }

    pub fn poses(&self) -> &[Pose] {
        &self.poses
    }

    pub fn len(&self) -> usize {
        self.poses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.poses.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Pose> {
        self.poses.get(index)
    }
}
