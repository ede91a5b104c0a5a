// src/models.rs
use num_bigint::BigUint;
use serde::{Serialize, Serializer};
use std::fmt;

/// Character-class makeup of a password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PasswordComposition {
    pub has_lowercase: bool,
    pub has_uppercase: bool,
    pub has_digit: bool,
    pub has_symbol: bool,
    pub length: usize,
    pub alphabet_size: u32,
}

/// Declared character classes and length, used when no concrete password is
/// available (demo and profile mode).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharacterProfile {
    pub length: usize,
    pub use_lowercase: bool,
    pub use_uppercase: bool,
    pub use_digits: bool,
    pub use_symbols: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum StrengthTier {
    VeryWeak,
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl StrengthTier {
    /// Half-open entropy buckets: `<40`, `[40,60)`, `[60,80)`, `[80,100)`, `>=100`.
    pub fn from_entropy(entropy_bits: f64) -> Self {
        if entropy_bits < 40.0 {
            StrengthTier::VeryWeak
        } else if entropy_bits < 60.0 {
            StrengthTier::Weak
        } else if entropy_bits < 80.0 {
            StrengthTier::Medium
        } else if entropy_bits < 100.0 {
            StrengthTier::Strong
        } else {
            StrengthTier::VeryStrong
        }
    }
}

impl fmt::Display for StrengthTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrengthTier::VeryWeak => write!(f, "Very Weak"),
            StrengthTier::Weak => write!(f, "Weak"),
            StrengthTier::Medium => write!(f, "Medium"),
            StrengthTier::Strong => write!(f, "Strong"),
            StrengthTier::VeryStrong => write!(f, "Very Strong"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StrengthAssessment {
    #[serde(serialize_with = "serialize_decimal")]
    pub combinations: BigUint,
    pub entropy_bits: f64,
    pub tier: StrengthTier,
    /// Worst-case (full search space) seconds; `+inf` once beyond f64 range.
    pub crack_time_seconds: f64,
    pub log10_crack_time_seconds: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum VulnerabilityTier {
    Critical,
    Moderate,
    Resistant,
}

impl fmt::Display for VulnerabilityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VulnerabilityTier::Critical => write!(f, "CRITICAL"),
            VulnerabilityTier::Moderate => write!(f, "MODERATE"),
            VulnerabilityTier::Resistant => write!(f, "RESISTANT"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct QuantumAssessment {
    pub quantum_attempts: f64,
    pub speedup_factor: f64,
    pub crack_time_seconds: f64,
    pub log10_crack_time_seconds: f64,
    pub vulnerability: VulnerabilityTier,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuantumKey {
    #[serde(skip)]
    pub bits: Vec<bool>,
    pub bit_string: String,
    pub tag: String,
    pub rendered: String,
}

impl QuantumKey {
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Bit-string read as a big-endian unsigned integer.
    pub fn as_integer(&self) -> BigUint {
        self.bits.iter().fold(BigUint::from(0u32), |acc, &bit| {
            (acc << 1u32) + BigUint::from(bit as u32)
        })
    }

    pub fn fingerprint(&self) -> String {
        format!("0x{}", hex::encode(self.as_integer().to_bytes_be()))
    }

    /// Low byte of the key value, used to mask the suggested password.
    pub fn key_byte(&self) -> u8 {
        self.as_integer().to_bytes_le().first().copied().unwrap_or(0)
    }
}

impl fmt::Display for QuantumKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.rendered)
    }
}

fn serialize_decimal<S>(value: &BigUint, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&value.to_str_radix(10))
}
