//! Penchant Core
//!
//! Deterministic, string-seeded random values:
//! - Seed normalization
//! - Hash-based scalar draws keyed on (seed, call count)
//! - Ranges, collection sampling, and glam vector/rotation draws
//! - A self-test that probes the observed output bounds
//!
//! ```
//! use penchant_core::SeededRandom;
//!
//! let mut rng = SeededRandom::new("abc");
//! let first = rng.draw();
//! rng.reset();
//! assert_eq!(rng.draw(), first);
//! ```

pub mod diagnostics;
pub mod error;
pub mod hash;
pub mod random;
pub mod sample;
pub mod seed;
pub mod uniform;

pub use diagnostics::{SelfTestReport, DEFAULT_SELF_TEST_ITERATIONS};
pub use error::{RandomError, Result};
pub use random::{Samples, SeededRandom};
pub use seed::{Seed, MIN_SEED_LEN, SEED_FILLER};
pub use uniform::Uniform;

pub use glam;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
