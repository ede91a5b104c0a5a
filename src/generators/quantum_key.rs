// src/generators/quantum_key.rs
//
// Toy stand-in for a measured quantum key. Each position is a Bell pair
// prepared in |Φ+⟩: a Hadamard on the primary gives a fair coin, the CNOT
// forces the partner to the same outcome. Only the primary bit is kept since
// the partner carries no extra information. The bits depend on nothing but
// the injected random source, never on password content.

use rand::Rng;
use sha2::{Digest, Sha256};

use crate::core::config::{Config, DEFAULT_KEY_PREFIX};
use crate::errors::{AnalysisError, Result};
use crate::models::QuantumKey;

/// Outcome of measuring both halves of one entangled pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BellMeasurement {
    pub primary: bool,
    pub partner: bool,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BellPair;

impl BellPair {
    /// Collapses the pair: 50/50 on the primary, partner perfectly correlated.
    pub fn collapse<R: Rng + ?Sized>(&self, rng: &mut R) -> BellMeasurement {
        let primary = rng.gen_bool(0.5);
        BellMeasurement {
            primary,
            partner: primary,
        }
    }
}

#[derive(Debug, Clone)]
pub struct QuantumKeyGenerator {
    prefix: String,
}

impl Default for QuantumKeyGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_KEY_PREFIX)
    }
}

impl QuantumKeyGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.key_prefix.clone())
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn generate<R: Rng + ?Sized>(&self, bit_count: usize, rng: &mut R) -> Result<QuantumKey> {
        if bit_count == 0 {
            return Err(AnalysisError::InvalidInput(
                "bit count must be at least 1".into(),
            ));
        }

        let pair = BellPair;
        let bits: Vec<bool> = (0..bit_count)
            .map(|_| pair.collapse(rng).primary)
            .collect();

        let bit_string: String = bits.iter().map(|&b| if b { '1' } else { '0' }).collect();
        let tag = checksum_tag(&bit_string);
        let rendered = format!("{}-{}-{}", self.prefix, bit_string, tag);

        log::debug!("generated {}-bit quantum key", bit_count);

        Ok(QuantumKey {
            bits,
            bit_string,
            tag,
            rendered,
        })
    }
}

/// Four-digit decimal tag: first 4 bytes of SHA-256 as big-endian u32, mod 10000.
pub fn checksum_tag(bit_string: &str) -> String {
    let digest = Sha256::digest(bit_string.as_bytes());
    let head = u32::from_be_bytes([digest[0], digest[1], digest[2], digest[3]]);
    format!("{:04}", head % 10_000)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;
    use std::collections::HashSet;

    #[test]
    fn zero_bits_is_rejected() {
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        let err = QuantumKeyGenerator::default().generate(0, &mut rng).unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidInput(_)));
    }

    #[test]
    fn key_has_requested_length_and_binary_alphabet() {
        let mut rng = rand::thread_rng();
        for bits in [1, 6, 8, 64, 257] {
            let key = QuantumKeyGenerator::default().generate(bits, &mut rng).unwrap();
            assert_eq!(key.len(), bits);
            assert_eq!(key.bit_string.len(), bits);
            assert!(key.bit_string.chars().all(|c| c == '0' || c == '1'));
        }
    }

    #[test]
    fn rendered_format() {
        let mut rng = ChaCha20Rng::seed_from_u64(7);
        let key = QuantumKeyGenerator::new("QK").generate(8, &mut rng).unwrap();
        let parts: Vec<&str> = key.rendered.split('-').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "QK");
        assert_eq!(parts[1], key.bit_string);
        assert_eq!(parts[2], key.tag);
        assert_eq!(key.tag.len(), 4);
        assert!(key.tag.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn same_seed_same_key() {
        let generator = QuantumKeyGenerator::default();
        let a = generator.generate(32, &mut ChaCha20Rng::seed_from_u64(42)).unwrap();
        let b = generator.generate(32, &mut ChaCha20Rng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);

        let c = generator.generate(32, &mut ChaCha20Rng::seed_from_u64(43)).unwrap();
        assert_ne!(a.bit_string, c.bit_string);
    }

    #[test]
    fn unseeded_keys_vary() {
        let generator = QuantumKeyGenerator::default();
        let mut rng = rand::thread_rng();
        let keys: HashSet<String> = (0..1000)
            .map(|_| generator.generate(8, &mut rng).unwrap().bit_string)
            .collect();
        assert!(keys.len() > 1);
    }

    #[test]
    fn partner_always_matches_primary() {
        let mut rng = ChaCha20Rng::seed_from_u64(99);
        for _ in 0..500 {
            let m = BellPair.collapse(&mut rng);
            assert_eq!(m.primary, m.partner);
        }
    }

    #[test]
    fn bits_are_roughly_balanced() {
        let mut rng = ChaCha20Rng::seed_from_u64(2024);
        let key = QuantumKeyGenerator::default().generate(10_000, &mut rng).unwrap();
        let ones = key.bits.iter().filter(|&&b| b).count();
        assert!((4_500..=5_500).contains(&ones), "ones = {}", ones);
    }

    #[test]
    fn checksum_tag_is_deterministic() {
        assert_eq!(checksum_tag("10110001"), "0229");
        assert_eq!(checksum_tag("0000"), "8787");
        assert_eq!(checksum_tag("1"), "9619");
    }
}
