//! Settings management

use anyhow::{Context, Result};
use penchant_core::DEFAULT_SELF_TEST_ITERATIONS;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Runtime settings, loaded from JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub generator: GeneratorSettings,
    pub scatter: ScatterSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorSettings {
    /// `None` picks a seed from entropy.
    pub seed: Option<String>,
    pub self_test_iterations: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScatterSettings {
    /// Fraction of `max_count` to place, in `[0, 1]`.
    pub density: f32,
    pub max_count: u32,
    /// Objects land in `[-half_extent, half_extent)` on X and Z.
    pub half_extent: f32,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            seed: Some("penchant_example_seed".to_owned()),
            self_test_iterations: DEFAULT_SELF_TEST_ITERATIONS,
        }
    }
}

impl Default for ScatterSettings {
    fn default() -> Self {
        Self {
            density: 0.5,
            max_count: 50,
            half_extent: 10.0,
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("failed to parse settings")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read settings from {}", path.display()))?;
        Self::from_json(&json).with_context(|| format!("in {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_uses_defaults() {
        assert_eq!(Settings::from_json("{}").unwrap(), Settings::default());
    }

    #[test]
    fn partial_override() {
        let settings = Settings::from_json(
            r#"{ "generator": { "seed": null }, "scatter": { "density": 1.0 } }"#,
        )
        .unwrap();
        assert_eq!(settings.generator.seed, None);
        assert_eq!(
            settings.generator.self_test_iterations,
            DEFAULT_SELF_TEST_ITERATIONS
        );
        assert_eq!(settings.scatter.density, 1.0);
        assert_eq!(settings.scatter.max_count, 50);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(Settings::from_json("{ generator: ").is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = Settings::load(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(err.to_string().contains("failed to read settings"));
    }
}
