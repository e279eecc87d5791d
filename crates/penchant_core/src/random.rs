//! Seeded random generator
//!
//! Every draw is a pure function of `(seed, calls)`: the seed and the
//! scaled call counter are hashed together, the hash is normalized into
//! `[0, 1)`, and the counter advances by one. Nothing else is stored, so
//! arbitrarily long sequences replay from call 0 without keeping history.
//!
//! Not thread-safe: draws take `&mut self`. Use one instance per consumer,
//! or serialize access externally.

use crate::error::{RandomError, Result};
use crate::hash::draw_hash;
use crate::seed::Seed;
use crate::uniform::Uniform;
use glam::{EulerRot, Quat, Vec2, Vec3};
use std::fmt;

/// Divisor mapping a signed 32-bit hash onto roughly `[-0.5, 0.5)`.
///
/// Slightly wider than `2^32`, so `hash / HASH_SPAN + 0.5` is strictly inside
/// `(0, 1)` for every `i32`: roughly `[0.00058, 0.99942]`.
pub const HASH_SPAN: f64 = 4_300_000_000.0;

/// Deterministic random values from a string seed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeededRandom {
    seed: Seed,
    calls: u64,
}

impl SeededRandom {
    /// Create a generator from `seed`, normalized per [`Seed::normalize`].
    pub fn new(seed: impl Into<Seed>) -> Self {
        let seed = seed.into();
        tracing::debug!(seed = %seed, "seeded generator created");
        Self { seed, calls: 0 }
    }

    /// Create a generator with a random 20-character seed.
    ///
    /// Only the seed is non-deterministic; once created, the generator
    /// behaves exactly as if that seed had been passed to [`SeededRandom::new`].
    pub fn from_entropy() -> Self {
        Self::new(Seed::from_entropy())
    }

    pub fn seed(&self) -> &str {
        self.seed.as_str()
    }

    /// Number of draws since the last reseed or reset.
    pub fn calls(&self) -> u64 {
        self.calls
    }

    /// Replace the seed and restart the sequence from call 0.
    pub fn set_seed(&mut self, seed: impl Into<Seed>) {
        self.seed = seed.into();
        tracing::debug!(seed = %self.seed, "reseeded");
        self.reset();
    }

    /// Restart the current seed's sequence from call 0.
    pub fn reset(&mut self) {
        self.calls = 0;
    }

    /// Next value in `[0, 1)`, at full precision.
    pub fn draw_f64(&mut self) -> f64 {
        let hash = draw_hash(self.seed.as_str(), self.calls);
        self.calls = self.calls.wrapping_add(1);

        let value = hash as f64 / HASH_SPAN + 0.5;
        debug_assert!((0.0..1.0).contains(&value));
        value
    }

    /// Next value in `[0, 1)`.
    pub fn draw(&mut self) -> f32 {
        self.draw_f64() as f32
    }

    /// A value in `[min, max)`. `min == max` yields `min`.
    ///
    /// Rejects `min > max` and non-finite bounds without consuming a draw.
    pub fn draw_range(&mut self, min: f32, max: f32) -> Result<f32> {
        self.draw_between(min, max)
    }

    /// An integer in `[min, max)`. `min == max` yields `min`.
    pub fn draw_range_int(&mut self, min: i32, max: i32) -> Result<i32> {
        self.draw_between(min, max)
    }

    /// A value of any [`Uniform`] type in `[min, max)`.
    ///
    /// Mixed integer/float bounds should be converted to a common type first.
    pub fn draw_between<T: Uniform>(&mut self, min: T, max: T) -> Result<T> {
        if !min.is_valid_bound() || !max.is_valid_bound() || min > max {
            return Err(RandomError::InvalidRange {
                min: min.as_f64(),
                max: max.as_f64(),
            });
        }
        let t = self.draw_f64();
        Ok(T::from_unit(min, max, t))
    }

    /// Two draws, in x, y order.
    pub fn draw_vec2(&mut self) -> Vec2 {
        let x = self.draw();
        let y = self.draw();
        Vec2::new(x, y)
    }

    /// Three draws, in x, y, z order.
    pub fn draw_vec3(&mut self) -> Vec3 {
        let x = self.draw();
        let y = self.draw();
        let z = self.draw();
        Vec3::new(x, y, z)
    }

    /// Euler angles with each component in `[0, range)`.
    pub fn draw_euler(&mut self, range: f32) -> Vec3 {
        self.draw_vec3() * range
    }

    /// A rotation from Euler angles in `[0, range_degrees)`.
    ///
    /// Rotates about Z, then X, then Y (fixed axes); pass `360.0` for a full turn on each axis.
    pub fn draw_orientation(&mut self, range_degrees: f32) -> Quat {
        let euler = self.draw_euler(range_degrees);
        Quat::from_euler(
            EulerRot::YXZ,
            euler.y.to_radians(),
            euler.x.to_radians(),
            euler.z.to_radians(),
        )
    }

    /// Endless stream of [`SeededRandom::draw`] values.
    pub fn samples(&mut self) -> Samples<'_> {
        Samples { rng: self }
    }

    /// Restart the sequence and collect its first `count` values.
    pub fn sample_bars(&mut self, count: usize) -> Vec<f32> {
        self.reset();
        self.samples().take(count).collect()
    }
}

impl Default for SeededRandom {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl fmt::Display for SeededRandom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.seed, f)
    }
}

/// Iterator returned by [`SeededRandom::samples`].
pub struct Samples<'a> {
    rng: &'a mut SeededRandom,
}

impl Iterator for Samples<'_> {
    type Item = f32;

    fn next(&mut self) -> Option<f32> {
        Some(self.rng.draw())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}
