// src/lib.rs
//! Password strength under a classical brute-force attacker and a Grover-style
//! quantum attacker, plus a toy "quantum key" generator.
//!
//! The three entry points below use the default configuration. Build a
//! [`ClassicalAnalyzer`], [`QuantumThreatEstimator`] or [`QuantumKeyGenerator`]
//! from a [`Config`] to change any modeling assumption.

pub mod analysis;
pub mod core;
pub mod education;
pub mod errors;
pub mod generators;
pub mod logging;
pub mod models;
pub mod utils;

use num_bigint::BigUint;

pub use crate::analysis::{ClassicalAnalyzer, QuantumThreatEstimator};
pub use crate::core::config::{Config, KeyLength, VulnerabilityThresholds};
pub use crate::core::{AnalysisReport, PasswordAuditor};
pub use crate::errors::{AnalysisError, Result};
pub use crate::generators::{BellPair, PasswordGenerator, QuantumKeyGenerator};
pub use crate::models::{
    CharacterProfile, PasswordComposition, QuantumAssessment, QuantumKey, StrengthAssessment,
    StrengthTier, VulnerabilityTier,
};

pub fn analyze_classical(password: &str) -> Result<StrengthAssessment> {
    ClassicalAnalyzer::default()
        .analyze(password)
        .map(|(_, assessment)| assessment)
}

pub fn analyze_quantum_threat(combinations: &BigUint) -> QuantumAssessment {
    QuantumThreatEstimator::default().assess(combinations)
}

/// Draws from the thread-local RNG, so every call yields a fresh key.
pub fn generate_quantum_key(bit_count: usize) -> Result<QuantumKey> {
    QuantumKeyGenerator::default().generate(bit_count, &mut rand::thread_rng())
}
