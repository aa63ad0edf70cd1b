//! # stage_app — Stage runner binary
//!
//! Loads a project file given as the first argument (or falls back to a
//! built-in demo project), instantiates its sprites, and runs every script
//! to completion.
//!
//! Log verbosity comes from `RUST_LOG` (e.g. `RUST_LOG=stage_script=debug`).

use std::sync::Arc;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use stage_math::{IVec2, Vec2};
use stage_object::SpriteIdAllocator;
use stage_project::{BrickDef, ProjectFile, SpriteDef};
use stage_runtime::StageRunner;

fn main() -> Result<()> {
    // Initialise structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("stage_app=info".parse()?))
        .init();

    let project = match std::env::args().nth(1) {
        Some(path) => {
            info!(path, "loading project");
            ProjectFile::load(&path)?
        }
        None => demo_project(),
    };

    info!(
        project = project.name,
        sprites = project.sprites.len(),
        "project ready"
    );

    let mut ids = SpriteIdAllocator::new();
    let actors = project.instantiate(&mut ids);

    let mut runner = StageRunner::new(project.name.clone());
    for actor in actors {
        runner.spawn(actor)?;
    }

    let registry = Arc::clone(runner.registry());
    runner.join();

    registry.for_each(|sprite| {
        info!(sprite = sprite.name(), position = ?sprite.position(), "final position");
    });
    info!("stage complete");
    Ok(())
}

/// A small built-in project used when no path is given: one sprite that
/// jumps to the origin, waits, then glides across the stage.
fn demo_project() -> ProjectFile {
    ProjectFile {
        name: "demo".to_string(),
        sprites: vec![SpriteDef {
            name: "scout".to_string(),
            start: Vec2::new(-120.0, -40.0),
            script: vec![
                BrickDef::PlaceAt {
                    destination: IVec2::new(0, 0),
                },
                BrickDef::Wait { duration_ms: 250 },
                BrickDef::GlideTo {
                    destination: IVec2::new(160, 90),
                    duration_ms: 1500,
                },
            ],
        }],
    }
}
