// src/core/config.rs
use std::env;
use std::path::PathBuf;
use log::LevelFilter;

use crate::errors::{AnalysisError, Result};

/// Printable ASCII punctuation characters (`!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~`).
pub const DEFAULT_SYMBOL_CLASS_SIZE: u32 = 32;

/// Upper bound for the symbol class: the number of Unicode code points.
pub const MAX_SYMBOL_CLASS_SIZE: u32 = 0x11_0000;

/// Offline classical attacker, attempts per second.
pub const DEFAULT_CLASSICAL_GUESS_RATE: f64 = 1e8;

/// Assumed oracle evaluations per second for a future quantum adversary.
pub const DEFAULT_QUANTUM_GUESS_RATE: f64 = 1e12;

pub const DEFAULT_KEY_PREFIX: &str = "QKD";

pub const DEFAULT_SUGGESTION_LENGTH: usize = 16;

pub const SECONDS_PER_YEAR: f64 = 31_536_000.0;

// Quantum crack-time boundaries, in years
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VulnerabilityThresholds {
    pub critical_below_years: f64,
    pub resistant_from_years: f64,
}

impl Default for VulnerabilityThresholds {
    fn default() -> Self {
        Self {
            critical_below_years: 1.0,
            resistant_from_years: 1000.0,
        }
    }
}

/// How many simulated qubits go into a quantum key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyLength {
    /// One qubit per password character
    PerCharacter,
    Fixed(usize),
}

impl KeyLength {
    pub fn bits_for(&self, password_length: usize) -> usize {
        match self {
            KeyLength::PerCharacter => password_length,
            KeyLength::Fixed(bits) => *bits,
        }
    }
}

// Configuration for the analyzers, the key generator and the report layer
#[derive(Debug, Clone)]
pub struct Config {
    // Classical model
    pub symbol_class_size: u32,
    pub classical_guess_rate: f64,

    // Quantum model
    pub quantum_guess_rate: f64,
    pub thresholds: VulnerabilityThresholds,

    // Key generation
    pub key_length: KeyLength,
    pub key_prefix: String,

    // Suggestions
    pub suggestion_length: usize,

    // Logging
    pub log_level: LevelFilter,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            symbol_class_size: DEFAULT_SYMBOL_CLASS_SIZE,
            classical_guess_rate: DEFAULT_CLASSICAL_GUESS_RATE,

            quantum_guess_rate: DEFAULT_QUANTUM_GUESS_RATE,
            thresholds: VulnerabilityThresholds::default(),

            key_length: KeyLength::PerCharacter,
            key_prefix: DEFAULT_KEY_PREFIX.to_string(),

            suggestion_length: DEFAULT_SUGGESTION_LENGTH,

            log_level: LevelFilter::Info,
            log_file: None,
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        Self::load_from(|name| env::var(name).ok())
    }

    /// Overlays values returned by `lookup` onto the defaults. Unparseable
    /// values are logged and ignored.
    pub fn load_from<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        // Classical model
        if let Some(val) = lookup("QPC_SYMBOL_CLASS_SIZE") {
            match val.parse() {
                Ok(size) => config.symbol_class_size = size,
                Err(_) => log::warn!("Ignoring QPC_SYMBOL_CLASS_SIZE='{}'", val),
            }
        }

        if let Some(val) = lookup("QPC_CLASSICAL_GUESS_RATE") {
            match val.parse() {
                Ok(rate) => config.classical_guess_rate = rate,
                Err(_) => log::warn!("Ignoring QPC_CLASSICAL_GUESS_RATE='{}'", val),
            }
        }

        // Quantum model
        if let Some(val) = lookup("QPC_QUANTUM_GUESS_RATE") {
            match val.parse() {
                Ok(rate) => config.quantum_guess_rate = rate,
                Err(_) => log::warn!("Ignoring QPC_QUANTUM_GUESS_RATE='{}'", val),
            }
        }

        if let Some(val) = lookup("QPC_CRITICAL_BELOW_YEARS") {
            if let Ok(years) = val.parse() {
                config.thresholds.critical_below_years = years;
            }
        }

        if let Some(val) = lookup("QPC_RESISTANT_FROM_YEARS") {
            if let Ok(years) = val.parse() {
                config.thresholds.resistant_from_years = years;
            }
        }

        // Key generation
        if let Some(val) = lookup("QPC_KEY_BITS") {
            if let Ok(bits) = val.parse::<usize>() {
                config.key_length = if bits == 0 {
                    KeyLength::PerCharacter
                } else {
                    KeyLength::Fixed(bits)
                };
            }
        }

        if let Some(prefix) = lookup("QPC_KEY_PREFIX") {
            config.key_prefix = prefix;
        }

        if let Some(val) = lookup("QPC_SUGGESTION_LENGTH") {
            if let Ok(length) = val.parse() {
                config.suggestion_length = length;
            }
        }

        // Logging
        if let Some(level) = lookup("LOG_LEVEL") {
            match level.to_lowercase().as_str() {
                "off" => config.log_level = LevelFilter::Off,
                "error" => config.log_level = LevelFilter::Error,
                "warn" => config.log_level = LevelFilter::Warn,
                "info" => config.log_level = LevelFilter::Info,
                "debug" => config.log_level = LevelFilter::Debug,
                "trace" => config.log_level = LevelFilter::Trace,
                _ => {}
            }
        }

        if let Some(file) = lookup("LOG_FILE") {
            if !file.trim().is_empty() {
                config.log_file = Some(PathBuf::from(file));
            }
        }

        config
    }

    pub fn validate(&self) -> Result<()> {
        if self.symbol_class_size == 0 || self.symbol_class_size > MAX_SYMBOL_CLASS_SIZE {
            return Err(AnalysisError::InvalidConfig(format!(
                "symbol class size must be between 1 and {}, got {}",
                MAX_SYMBOL_CLASS_SIZE, self.symbol_class_size
            )));
        }

        for (name, rate) in [
            ("classical guess rate", self.classical_guess_rate),
            ("quantum guess rate", self.quantum_guess_rate),
        ] {
            if !rate.is_finite() || rate <= 0.0 {
                return Err(AnalysisError::InvalidConfig(format!(
                    "{} must be a positive finite number, got {}",
                    name, rate
                )));
            }
        }

        let t = &self.thresholds;
        if !(t.critical_below_years > 0.0 && t.critical_below_years < t.resistant_from_years)
            || !t.resistant_from_years.is_finite()
        {
            return Err(AnalysisError::InvalidConfig(format!(
                "vulnerability thresholds must satisfy 0 < critical ({}) < resistant ({})",
                t.critical_below_years, t.resistant_from_years
            )));
        }

        if self.key_length == KeyLength::Fixed(0) {
            return Err(AnalysisError::InvalidConfig("fixed key length must be at least 1 bit".into()));
        }

        if self.key_prefix.trim().is_empty() {
            return Err(AnalysisError::InvalidConfig("key prefix must not be empty".into()));
        }

        if self.suggestion_length == 0 {
            return Err(AnalysisError::InvalidConfig("suggestion length must be at least 1".into()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn defaults_are_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.symbol_class_size, 32);
        assert_eq!(config.classical_guess_rate, 1e8);
        assert_eq!(config.quantum_guess_rate, 1e12);
        assert_eq!(config.key_length, KeyLength::PerCharacter);
        assert_eq!(config.key_prefix, "QKD");
    }

    #[test]
    fn environment_overrides_defaults() {
        let config = Config::load_from(lookup_from(&[
            ("QPC_SYMBOL_CLASS_SIZE", "33"),
            ("QPC_CLASSICAL_GUESS_RATE", "2e9"),
            ("QPC_QUANTUM_GUESS_RATE", "5e13"),
            ("QPC_CRITICAL_BELOW_YEARS", "2"),
            ("QPC_RESISTANT_FROM_YEARS", "500"),
            ("QPC_KEY_BITS", "8"),
            ("QPC_KEY_PREFIX", "QK"),
            ("LOG_LEVEL", "debug"),
        ]));

        assert_eq!(config.symbol_class_size, 33);
        assert_eq!(config.classical_guess_rate, 2e9);
        assert_eq!(config.quantum_guess_rate, 5e13);
        assert_eq!(config.thresholds.critical_below_years, 2.0);
        assert_eq!(config.thresholds.resistant_from_years, 500.0);
        assert_eq!(config.key_length, KeyLength::Fixed(8));
        assert_eq!(config.key_prefix, "QK");
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn unparseable_values_keep_defaults() {
        let config = Config::load_from(lookup_from(&[
            ("QPC_SYMBOL_CLASS_SIZE", "many"),
            ("QPC_KEY_BITS", "0"),
        ]));
        assert_eq!(config.symbol_class_size, DEFAULT_SYMBOL_CLASS_SIZE);
        assert_eq!(config.key_length, KeyLength::PerCharacter);
    }

    #[test]
    fn validate_rejects_bad_values() {
        let mut config = Config::default();
        config.symbol_class_size = 0;
        assert!(matches!(config.validate(), Err(AnalysisError::InvalidConfig(_))));

        let mut config = Config::default();
        config.symbol_class_size = u32::MAX;
        assert!(matches!(config.validate(), Err(AnalysisError::InvalidConfig(_))));

        let mut config = Config::default();
        config.symbol_class_size = MAX_SYMBOL_CLASS_SIZE;
        assert!(config.validate().is_ok());

        let mut config = Config::default();
        config.quantum_guess_rate = 0.0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.classical_guess_rate = f64::NAN;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.thresholds.critical_below_years = 2000.0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.key_prefix = "  ".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn key_length_resolves_bits() {
        assert_eq!(KeyLength::PerCharacter.bits_for(12), 12);
        assert_eq!(KeyLength::Fixed(8).bits_for(12), 8);
    }
}
