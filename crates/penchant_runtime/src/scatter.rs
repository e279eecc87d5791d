//! Seeded object scatter
//!
//! Lays out objects on the XZ plane with a random yaw. The same seed and
//! settings always produce the same layout.

use crate::settings::ScatterSettings;
use anyhow::Result;
use glam::{Quat, Vec3};
use penchant_core::SeededRandom;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub position: Vec3,
    pub rotation: Quat,
}

/// Number of objects placed for `settings`.
pub fn object_count(settings: &ScatterSettings) -> usize {
    (settings.density.clamp(0.0, 1.0) * settings.max_count as f32) as usize
}

/// Restart `rng` and place `object_count(settings)` objects.
///
/// Each object consumes three draws: x, z, then yaw.
pub fn scatter(rng: &mut SeededRandom, settings: &ScatterSettings) -> Result<Vec<Placement>> {
    let extent = settings.half_extent.abs();
    rng.reset();

    (0..object_count(settings))
        .map(|_| -> Result<Placement> {
            let x = rng.draw_range(-extent, extent)?;
            let z = rng.draw_range(-extent, extent)?;
            let yaw = (rng.draw() * 360.0).to_radians();
            Ok(Placement {
                position: Vec3::new(x, 0.0, z),
                rotation: Quat::from_rotation_y(yaw),
            })
        })
        .collect()
}
