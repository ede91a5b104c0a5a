// src/analysis/classical.rs
use num_bigint::BigUint;
use num_traits::ToPrimitive;

use crate::core::config::{Config, DEFAULT_CLASSICAL_GUESS_RATE, DEFAULT_SYMBOL_CLASS_SIZE};
use crate::errors::{AnalysisError, Result};
use crate::models::{CharacterProfile, PasswordComposition, StrengthAssessment, StrengthTier};

pub const LOWERCASE_CLASS_SIZE: u32 = 26;
pub const UPPERCASE_CLASS_SIZE: u32 = 26;
pub const DIGIT_CLASS_SIZE: u32 = 10;

/// Brute-force model: every character drawn independently from the union of
/// the classes present, attacker enumerates the whole space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassicalAnalyzer {
    pub symbol_class_size: u32,
    pub guess_rate: f64,
}

impl Default for ClassicalAnalyzer {
    fn default() -> Self {
        Self {
            symbol_class_size: DEFAULT_SYMBOL_CLASS_SIZE,
            guess_rate: DEFAULT_CLASSICAL_GUESS_RATE,
        }
    }
}

impl ClassicalAnalyzer {
    pub fn new(symbol_class_size: u32, guess_rate: f64) -> Self {
        Self {
            symbol_class_size,
            guess_rate,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.symbol_class_size, config.classical_guess_rate)
    }

    /// Scans `password` once. Each character lands in exactly one class:
    /// ASCII lowercase, then ASCII uppercase, then ASCII digit, anything
    /// else (including non-ASCII letters) counts as a symbol.
    pub fn classify(&self, password: &str) -> Result<PasswordComposition> {
        if password.is_empty() {
            return Err(AnalysisError::InvalidInput(
                "password must not be empty".into(),
            ));
        }

        let mut composition = PasswordComposition {
            has_lowercase: false,
            has_uppercase: false,
            has_digit: false,
            has_symbol: false,
            length: 0,
            alphabet_size: 0,
        };

        for c in password.chars() {
            composition.length += 1;
            if c.is_ascii_lowercase() {
                composition.has_lowercase = true;
            } else if c.is_ascii_uppercase() {
                composition.has_uppercase = true;
            } else if c.is_ascii_digit() {
                composition.has_digit = true;
            } else {
                composition.has_symbol = true;
            }
        }

        composition.alphabet_size = self.alphabet_size(
            composition.has_lowercase,
            composition.has_uppercase,
            composition.has_digit,
            composition.has_symbol,
        )?;

        log::debug!(
            "classified {} chars: lower={} upper={} digit={} symbol={} alphabet={}",
            composition.length,
            composition.has_lowercase,
            composition.has_uppercase,
            composition.has_digit,
            composition.has_symbol,
            composition.alphabet_size
        );

        Ok(composition)
    }

    /// Builds a composition from declared classes rather than a concrete
    /// password.
    pub fn compose_profile(&self, profile: &CharacterProfile) -> Result<PasswordComposition> {
        if profile.length == 0 {
            return Err(AnalysisError::InvalidInput(
                "profile length must be at least 1".into(),
            ));
        }

        let alphabet_size = self.alphabet_size(
            profile.use_lowercase,
            profile.use_uppercase,
            profile.use_digits,
            profile.use_symbols,
        )?;
        if alphabet_size == 0 {
            return Err(AnalysisError::InvalidInput(
                "profile must select at least one character class".into(),
            ));
        }

        Ok(PasswordComposition {
            has_lowercase: profile.use_lowercase,
            has_uppercase: profile.use_uppercase,
            has_digit: profile.use_digits,
            has_symbol: profile.use_symbols,
            length: profile.length,
            alphabet_size,
        })
    }

    pub fn assess(&self, composition: &PasswordComposition) -> Result<StrengthAssessment> {
        let exponent = u32::try_from(composition.length).map_err(|_| {
            AnalysisError::NumericOverflow(format!(
                "length {} exceeds the supported exponent range",
                composition.length
            ))
        })?;

        let alphabet = composition.alphabet_size;
        let combinations = BigUint::from(alphabet).pow(exponent);

        let entropy_bits = entropy_bits(alphabet, composition.length);
        let tier = StrengthTier::from_entropy(entropy_bits);

        let crack_time_seconds = self.crack_time_seconds(&combinations);
        let log10_crack_time_seconds = composition.length as f64 * log10_or_zero(alphabet)
            - self.guess_rate.log10();

        log::debug!(
            "assessed alphabet={} length={}: entropy={:.2} bits, tier={:?}",
            alphabet,
            composition.length,
            entropy_bits,
            tier
        );

        Ok(StrengthAssessment {
            combinations,
            entropy_bits,
            tier,
            crack_time_seconds,
            log10_crack_time_seconds,
        })
    }

    /// Full search space over the guess rate. Saturates to `+inf` once the
    /// combination count leaves the f64 range.
    pub fn crack_time_seconds(&self, combinations: &BigUint) -> f64 {
        combinations.to_f64().unwrap_or(f64::INFINITY) / self.guess_rate
    }

    pub fn analyze(&self, password: &str) -> Result<(PasswordComposition, StrengthAssessment)> {
        let composition = self.classify(password)?;
        let assessment = self.assess(&composition)?;
        Ok((composition, assessment))
    }

    pub fn analyze_profile(
        &self,
        profile: &CharacterProfile,
    ) -> Result<(PasswordComposition, StrengthAssessment)> {
        let composition = self.compose_profile(profile)?;
        let assessment = self.assess(&composition)?;
        Ok((composition, assessment))
    }

    /// Sum of the present class sizes. A present symbol class always counts
    /// at least one symbol, so a non-empty password never gets alphabet 0.
    fn alphabet_size(&self, lower: bool, upper: bool, digit: bool, symbol: bool) -> Result<u32> {
        let classes = [
            (lower, LOWERCASE_CLASS_SIZE),
            (upper, UPPERCASE_CLASS_SIZE),
            (digit, DIGIT_CLASS_SIZE),
            (symbol, self.symbol_class_size.max(1)),
        ];

        classes
            .iter()
            .filter(|(present, _)| *present)
            .try_fold(0u32, |total, &(_, size)| {
                total.checked_add(size).ok_or_else(|| {
                    AnalysisError::NumericOverflow(format!(
                        "alphabet size overflows u32 with a symbol class of {}",
                        self.symbol_class_size
                    ))
                })
            })
    }
}

/// `length * log2(alphabet)`, zero for a single-symbol alphabet.
pub fn entropy_bits(alphabet_size: u32, length: usize) -> f64 {
    if alphabet_size < 2 {
        return 0.0;
    }
    length as f64 * (alphabet_size as f64).log2()
}

fn log10_or_zero(alphabet_size: u32) -> f64 {
    if alphabet_size < 2 {
        0.0
    } else {
        (alphabet_size as f64).log10()
    }
}
