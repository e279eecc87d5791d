//! Penchant Runtime
//!
//! Demo binary: loads settings, probes the generator, and logs a seeded scatter.
//!
//! Usage: `penchant [settings.json]`. Log level is controlled by `RUST_LOG`.

mod scatter;
mod settings;

use anyhow::Result;
use penchant_core::SeededRandom;
use settings::Settings;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!("Penchant v{}", penchant_core::VERSION);

    let settings = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => {
            tracing::info!("Loading settings from {}", path.display());
            Settings::load(&path)?
        }
        None => Settings::default(),
    };

    let mut rng = match settings.generator.seed.as_deref() {
        Some(seed) => SeededRandom::new(seed),
        None => SeededRandom::from_entropy(),
    };
    tracing::info!("Seed: {}", rng);

    let report = rng.self_test(settings.generator.self_test_iterations);
    tracing::debug!("Self-test report: {}", serde_json::to_string(&report)?);

    let layout = scatter::scatter(&mut rng, &settings.scatter)?;
    tracing::info!("Placed {} objects", layout.len());
    for (i, placement) in layout.iter().enumerate() {
        let (yaw, _, _) = placement.rotation.to_euler(glam::EulerRot::YXZ);
        tracing::info!(
            "  #{:02} at ({:7.3}, {:7.3}) yaw {:6.1}°",
            i,
            placement.position.x,
            placement.position.z,
            yaw.to_degrees()
        );
    }

    Ok(())
}
