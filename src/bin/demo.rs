//! Headless tilescape demo
//!
//! Builds a collection of stub tiles, scatters them, then cycles through
//! every arrangement with a fixed-step clock, logging how long each
//! transition takes to settle.
//!
//! Usage:
//!   tilescape-demo                    # 120 tiles, 2000ms transitions
//!   tilescape-demo --tiles 200 --seed 7

use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use tilescape::{
    scatter_poses, LayoutEngine, LayoutKind, StubTile, Tile, TransitionProgress, UniformJitter,
};

#[derive(Parser)]
#[command(name = "tilescape-demo", about = "Cycle tiles through every arrangement")]
struct Args {
    /// Number of tiles to lay out
    #[arg(long, default_value_t = 120)]
    tiles: usize,

    /// Transition duration in milliseconds
    #[arg(long, default_value_t = 2000)]
    duration_ms: u64,

    /// Fixed tick step in milliseconds
    #[arg(long, default_value_t = 16)]
    tick_ms: u64,

    /// Seed for the scatter and the per-tile stagger (omit for entropy)
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let args = Args::parse();
    let tick = Duration::from_millis(args.tick_ms);
    let duration = Duration::from_millis(args.duration_ms);

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut tiles: Vec<StubTile> = scatter_poses(args.tiles, &mut rng)
        .into_iter()
        .map(StubTile::from_pose)
        .collect();

    let mut engine = LayoutEngine::new(args.tiles)?;
    if let Some(seed) = args.seed {
        engine = engine.with_duration_source(Box::new(UniformJitter::seeded(seed)));
    }

    for kind in LayoutKind::ALL {
        engine.transition_to(kind, &mut tiles, duration)?;

        let mut frames = 0u32;
        loop {
            let progress = engine.advance(tick, &mut tiles, || {})?;
            frames += 1;
            match progress {
                TransitionProgress::Animating => continue,
                TransitionProgress::Settled => break,
                TransitionProgress::Idle => anyhow::bail!("transition never started"),
            }
        }

        let first = tiles[0].pose();
        println!(
            "{kind:>12}: settled after {frames} frames; tile 0 at ({:.1}, {:.1}, {:.1})",
            first.position.x, first.position.y, first.position.z
        );
    }

    Ok(())
}
