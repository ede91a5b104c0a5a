// src/generators/password.rs
use base64::{engine::general_purpose, Engine as _};
use rand::distributions::{Distribution, Uniform};
use rand::Rng;
use serde::Serialize;

use crate::errors::{AnalysisError, Result};
use crate::models::QuantumKey;

const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";
pub const PUNCTUATION: &[u8] = b"!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Suggested password masked with the quantum key byte. Presentation only,
/// the mask is a single repeated byte.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProtectedSuggestion {
    pub ciphertext: String,
    pub key_fingerprint: String,
}

pub struct PasswordGenerator {
    alphabet: Vec<u8>,
}

impl Default for PasswordGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordGenerator {
    pub fn new() -> Self {
        let mut alphabet = Vec::with_capacity(94);
        alphabet.extend_from_slice(LOWERCASE);
        alphabet.extend_from_slice(UPPERCASE);
        alphabet.extend_from_slice(DIGITS);
        alphabet.extend_from_slice(PUNCTUATION);
        PasswordGenerator { alphabet }
    }

    pub fn alphabet_len(&self) -> usize {
        self.alphabet.len()
    }

    pub fn generate_password<R: Rng + ?Sized>(&self, length: usize, rng: &mut R) -> Result<String> {
        if length == 0 {
            return Err(AnalysisError::InvalidInput(
                "suggestion length must be at least 1".into(),
            ));
        }

        let dist = Uniform::from(0..self.alphabet.len());
        Ok((0..length)
            .map(|_| self.alphabet[dist.sample(rng)] as char)
            .collect())
    }
}

pub fn protect_suggestion(suggestion: &str, key: &QuantumKey) -> ProtectedSuggestion {
    let mask = key.key_byte();
    let masked: Vec<u8> = suggestion.bytes().map(|b| b ^ mask).collect();
    ProtectedSuggestion {
        ciphertext: general_purpose::STANDARD.encode(masked),
        key_fingerprint: key.fingerprint(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::QuantumKeyGenerator;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn alphabet_covers_all_four_classes() {
        let generator = PasswordGenerator::new();
        assert_eq!(generator.alphabet_len(), 26 + 26 + 10 + 32);
        assert_eq!(PUNCTUATION.len(), 32);
    }

    #[test]
    fn generates_requested_length() {
        let mut rng = ChaCha20Rng::seed_from_u64(5);
        let password = PasswordGenerator::new().generate_password(16, &mut rng).unwrap();
        assert_eq!(password.chars().count(), 16);
        assert!(password.is_ascii());
        assert!(password.chars().all(|c| !c.is_whitespace()));
    }

    #[test]
    fn zero_length_is_rejected() {
        let mut rng = ChaCha20Rng::seed_from_u64(5);
        assert!(PasswordGenerator::new().generate_password(0, &mut rng).is_err());
    }

    #[test]
    fn masking_is_reversible_with_key_byte() {
        let mut rng = ChaCha20Rng::seed_from_u64(11);
        let key = QuantumKeyGenerator::default().generate(8, &mut rng).unwrap();
        let protected = protect_suggestion("Correct-Horse", &key);

        let decoded = general_purpose::STANDARD.decode(&protected.ciphertext).unwrap();
        let unmasked: Vec<u8> = decoded.iter().map(|b| b ^ key.key_byte()).collect();
        assert_eq!(unmasked, b"Correct-Horse");
        assert_eq!(protected.key_fingerprint, key.fingerprint());
    }
}
