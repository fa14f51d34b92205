//! Secret generation with weighted character-range sampling.
//!
//! Each output character is drawn uniformly over the union of the supplied
//! code-point ranges, so wider ranges contribute proportionally more
//! characters. Generation is idempotent per secret identity: a registry hit
//! short-circuits before any random draw.

use rand::{Rng, RngCore};

use crate::core::range::CharRange;
use crate::core::registry::SecretRegistry;

/// Alphanumeric ranges used when a secret spec is a bare length.
pub const DEFAULT_RANGES: [CharRange; 3] = [
    CharRange::new(48, 58),  // 0-9
    CharRange::new(65, 91),  // A-Z
    CharRange::new(97, 123), // a-z
];

/// Persistence key for one generated secret.
///
/// `file` is the output file name, absent while the configuration's own
/// values block is being resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SecretIdentity<'a> {
    pub file: Option<&'a str>,
    pub key: &'a str,
    pub env: &'a str,
}

impl SecretIdentity<'_> {
    /// Stable registry key: `file::key::env`, or `key::env` without a file.
    pub fn storage_key(&self) -> String {
        match self.file {
            Some(file) => format!("{}::{}::{}", file, self.key, self.env),
            None => format!("{}::{}", self.key, self.env),
        }
    }
}

/// Draws random strings from weighted code-point ranges, reusing any value
/// already present in the registry.
pub struct SecretGenerator {
    registry: SecretRegistry,
    rng: Box<dyn RngCore>,
}

impl SecretGenerator {
    pub fn new(registry: SecretRegistry) -> Self {
        Self::with_rng(registry, Box::new(rand::thread_rng()))
    }

    /// Use an explicit randomness source. Tests inject a seeded `StdRng` to
    /// make generation deterministic.
    pub fn with_rng(registry: SecretRegistry, rng: Box<dyn RngCore>) -> Self {
        Self { registry, rng }
    }

    pub fn registry(&self) -> &SecretRegistry {
        &self.registry
    }

    /// Generate a secret of exactly `length` characters from `ranges`.
    ///
    /// If the identity already has a registered value, that value is
    /// returned unchanged and no draw happens. Callers must pass at least
    /// one range.
    pub fn generate(
        &mut self,
        identity: &SecretIdentity,
        length: usize,
        ranges: &[CharRange],
    ) -> String {
        let storage_key = identity.storage_key();
        if let Some(existing) = self.registry.get(&storage_key) {
            return existing.to_string();
        }

        // Sorting is not semantically required, but it makes the bucket
        // assignment deterministic regardless of token order.
        let mut ranges = ranges.to_vec();
        ranges.sort_by_key(|range| range.from);
        let total: u32 = ranges.iter().map(CharRange::width).sum();
        debug_assert!(total > 0, "caller must supply a non-empty range set");

        let mut secret = String::with_capacity(length);
        for _ in 0..length {
            let mut n = self.rng.gen_range(0..total);
            for range in &ranges {
                if n < range.width() {
                    secret.push(char::from_u32(range.from + n).unwrap_or('\u{FFFD}'));
                    break;
                }
                n -= range.width();
            }
        }

        self.registry.insert(storage_key, secret.clone());
        secret
    }
}
