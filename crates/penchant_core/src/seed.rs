//! Seed normalization
//!
//! Short seeds produce outputs that look too alike, so every seed is
//! trimmed and left-padded to at least [`MIN_SEED_LEN`] characters.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Minimum seed length, in characters.
pub const MIN_SEED_LEN: usize = 10;

/// Character used to left-pad short seeds.
pub const SEED_FILLER: char = '_';

const ENTROPY_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// A normalized seed string. Never shorter than [`MIN_SEED_LEN`] characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String")]
pub struct Seed(String);

impl Seed {
    /// Trim `raw` and left-pad it with [`SEED_FILLER`] up to [`MIN_SEED_LEN`].
    ///
    /// Seeds already at or above the minimum are kept as-is after trimming.
    /// Length is measured in `char`s so multi-byte seeds pad the same way
    /// ASCII seeds do.
    pub fn normalize(raw: &str) -> Self {
        let trimmed = raw.trim();
        let len = trimmed.chars().count();

        if len >= MIN_SEED_LEN {
            return Self(trimmed.to_owned());
        }

        let mut padded = String::with_capacity(trimmed.len() + (MIN_SEED_LEN - len));
        padded.extend(std::iter::repeat(SEED_FILLER).take(MIN_SEED_LEN - len));
        padded.push_str(trimmed);
        Self(padded)
    }

    /// A fresh seed of `2 * MIN_SEED_LEN` characters from `[a-z0-9]`.
    ///
    /// Uses thread-local OS-seeded entropy, so the result is not reproducible.
    pub fn from_entropy() -> Self {
        let mut rng = rand::thread_rng();
        let raw: String = (0..MIN_SEED_LEN * 2)
            .map(|_| ENTROPY_ALPHABET[rng.gen_range(0..ENTROPY_ALPHABET.len())] as char)
            .collect();
        Self::normalize(&raw)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Seed {
    fn from(raw: &str) -> Self {
        Self::normalize(raw)
    }
}

impl From<String> for Seed {
    fn from(raw: String) -> Self {
        Self::normalize(&raw)
    }
}

impl AsRef<str> for Seed {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_seed_is_left_padded() {
        assert_eq!(Seed::normalize("abc").as_str(), "_______abc");
    }

    #[test]
    fn empty_seed_is_all_filler() {
        assert_eq!(Seed::normalize("").as_str(), "__________");
        assert_eq!(Seed::normalize("   \t ").as_str(), "__________");
    }

    #[test]
    fn whitespace_is_trimmed_before_padding() {
        assert_eq!(Seed::normalize("  abc \n").as_str(), "_______abc");
        assert_eq!(
            Seed::normalize("  penchant_example_seed  ").as_str(),
            "penchant_example_seed"
        );
    }

    #[test]
    fn long_seed_is_unchanged() {
        assert_eq!(Seed::normalize("0123456789").as_str(), "0123456789");
        assert_eq!(Seed::normalize("0123456789ab").as_str(), "0123456789ab");
    }

    #[test]
    fn padding_counts_chars_not_bytes() {
        let seed = Seed::normalize("héllo");
        assert_eq!(seed.as_str().chars().count(), MIN_SEED_LEN);
        assert_eq!(seed.as_str(), "_____héllo");
    }

    #[test]
    fn entropy_seed_shape() {
        let seed = Seed::from_entropy();
        assert_eq!(seed.as_str().len(), MIN_SEED_LEN * 2);
        assert!(seed
            .as_str()
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit()));
    }

    #[test]
    fn deserialize_normalizes() {
        let seed: Seed = serde::Deserialize::deserialize(
            serde::de::value::StrDeserializer::<serde::de::value::Error>::new(" xyz "),
        )
        .unwrap();
        assert_eq!(seed.as_str(), "_______xyz");
    }
}
