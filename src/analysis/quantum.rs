// src/analysis/quantum.rs
use num_bigint::BigUint;
use num_traits::ToPrimitive;

use crate::core::config::{
    Config, VulnerabilityThresholds, DEFAULT_QUANTUM_GUESS_RATE, SECONDS_PER_YEAR,
};
use crate::models::{QuantumAssessment, VulnerabilityTier};

/// Applies the Grover query-count bound (`N -> sqrt(N)`) to a classical
/// search space. No search is simulated; this is a black-box oracle cost
/// model evaluated at an assumed oracle throughput.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuantumThreatEstimator {
    pub guess_rate: f64,
    pub thresholds: VulnerabilityThresholds,
}

impl Default for QuantumThreatEstimator {
    fn default() -> Self {
        Self {
            guess_rate: DEFAULT_QUANTUM_GUESS_RATE,
            thresholds: VulnerabilityThresholds::default(),
        }
    }
}

impl QuantumThreatEstimator {
    pub fn new(guess_rate: f64, thresholds: VulnerabilityThresholds) -> Self {
        Self {
            guess_rate,
            thresholds,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.quantum_guess_rate, config.thresholds)
    }

    pub fn assess(&self, combinations: &BigUint) -> QuantumAssessment {
        self.assess_at_rate(combinations, self.guess_rate)
    }

    pub fn assess_at_rate(&self, combinations: &BigUint, guess_rate: f64) -> QuantumAssessment {
        let classical = combinations.to_f64().filter(|n| n.is_finite());

        let quantum_attempts = match classical {
            Some(n) => n.sqrt(),
            // Space is past f64 range; take the integer root first.
            None => combinations.sqrt().to_f64().unwrap_or(f64::INFINITY),
        };

        let speedup_factor = match classical {
            Some(n) if quantum_attempts > 0.0 => n / quantum_attempts,
            Some(_) => 1.0,
            None => quantum_attempts,
        };

        let crack_time_seconds = quantum_attempts / guess_rate;
        let log10_crack_time_seconds = 0.5 * log10_big(combinations) - guess_rate.log10();
        let vulnerability = self.classify(crack_time_seconds, log10_crack_time_seconds);

        log::debug!(
            "quantum attempts={:.3e} speedup={:.3e} time={:.3e}s -> {:?}",
            quantum_attempts,
            speedup_factor,
            crack_time_seconds,
            vulnerability
        );

        QuantumAssessment {
            quantum_attempts,
            speedup_factor,
            crack_time_seconds,
            log10_crack_time_seconds,
            vulnerability,
        }
    }

    /// `< critical` years is Critical, `>= resistant` years is Resistant,
    /// everything in between is Moderate.
    pub fn classify(&self, crack_time_seconds: f64, log10_crack_time_seconds: f64) -> VulnerabilityTier {
        let log10_years = if crack_time_seconds.is_finite() {
            None
        } else {
            Some(log10_crack_time_seconds - SECONDS_PER_YEAR.log10())
        };

        let below = |years: f64| match log10_years {
            Some(log_years) => log_years < years.log10(),
            None => crack_time_seconds / SECONDS_PER_YEAR < years,
        };

        if below(self.thresholds.critical_below_years) {
            VulnerabilityTier::Critical
        } else if below(self.thresholds.resistant_from_years) {
            VulnerabilityTier::Moderate
        } else {
            VulnerabilityTier::Resistant
        }
    }
}

/// log10 of an arbitrary-size integer, finite for any non-zero value.
pub(crate) fn log10_big(value: &BigUint) -> f64 {
    let bits = value.bits();
    if bits == 0 {
        return f64::NEG_INFINITY;
    }
    if bits <= 1000 {
        if let Some(v) = value.to_f64() {
            return v.log10();
        }
    }
    // Keep the top 64 bits and add back the shifted-out exponent.
    let shift = bits.saturating_sub(64);
    let top = (value >> shift).to_f64().unwrap_or(f64::MAX);
    top.log10() + shift as f64 * std::f64::consts::LOG10_2
}
