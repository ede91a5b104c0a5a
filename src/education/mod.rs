// src/education/mod.rs
//
// Human-facing advice derived from the assessments.

use crate::generators::password::PUNCTUATION;
use crate::models::{PasswordComposition, StrengthAssessment, VulnerabilityTier};

pub const RECOMMENDED_MIN_LENGTH: usize = 12;
pub const LOW_ENTROPY_BITS: f64 = 60.0;
pub const ACCEPTABLE_ENTROPY_BITS: f64 = 50.0;

pub const PASSPHRASE_EXAMPLE: &str = "Correct-Horse-Battery-Staple";

pub fn improvement_suggestions(password: &str, entropy_bits: f64) -> Vec<String> {
    suggestions_for(
        password.chars().count(),
        password.chars().any(|c| c.is_ascii_digit()),
        password.bytes().any(|b| PUNCTUATION.contains(&b)),
        entropy_bits,
    )
}

/// Same rules as `improvement_suggestions`, for a declared profile.
pub fn profile_suggestions(composition: &PasswordComposition, entropy_bits: f64) -> Vec<String> {
    suggestions_for(
        composition.length,
        composition.has_digit,
        composition.has_symbol,
        entropy_bits,
    )
}

fn suggestions_for(length: usize, has_digit: bool, has_punctuation: bool, entropy_bits: f64) -> Vec<String> {
    let mut recs = Vec::new();

    if length < RECOMMENDED_MIN_LENGTH {
        recs.push(format!(
            "Increase length to at least {} characters.",
            RECOMMENDED_MIN_LENGTH
        ));
    }

    if !has_digit {
        recs.push("Include numbers (0-9).".to_string());
    }

    if !has_punctuation {
        recs.push("Add special symbols (e.g., @, #, $).".to_string());
    }

    if entropy_bits < LOW_ENTROPY_BITS {
        recs.push("Current entropy is low; use a passphrase of 4+ random words.".to_string());
    }

    recs
}

pub fn classical_verdict(assessment: &StrengthAssessment) -> &'static str {
    if assessment.entropy_bits > ACCEPTABLE_ENTROPY_BITS {
        "Acceptable for current use"
    } else {
        "Increase length/complexity"
    }
}

pub fn quantum_verdict(vulnerability: VulnerabilityTier) -> &'static str {
    match vulnerability {
        VulnerabilityTier::Critical => "Needs quantum protection",
        VulnerabilityTier::Moderate => "Plan a migration to longer passwords",
        VulnerabilityTier::Resistant => "Quantum-resistant",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_plain_password_gets_every_suggestion() {
        let recs = improvement_suggestions("abcdef", 28.2);
        assert_eq!(recs.len(), 4);
        assert!(recs[0].contains("12 characters"));
        assert!(recs[1].contains("numbers"));
        assert!(recs[2].contains("symbols"));
        assert!(recs[3].contains("passphrase"));
    }

    #[test]
    fn strong_password_gets_none() {
        let recs = improvement_suggestions("x9$Lq!2vB#7mRt", 91.8);
        assert!(recs.is_empty());
    }

    #[test]
    fn non_ascii_symbols_do_not_count_as_punctuation() {
        let recs = improvement_suggestions("abcdefghijk1é", 80.0);
        assert_eq!(recs, vec!["Add special symbols (e.g., @, #, $).".to_string()]);
    }

    #[test]
    fn profile_rules_follow_declared_classes() {
        let composition = PasswordComposition {
            has_lowercase: true,
            has_uppercase: true,
            has_digit: true,
            has_symbol: true,
            length: 12,
            alphabet_size: 94,
        };
        assert!(profile_suggestions(&composition, 78.7).is_empty());

        let plain = PasswordComposition {
            has_digit: false,
            has_symbol: false,
            length: 6,
            ..composition
        };
        assert_eq!(profile_suggestions(&plain, 34.2).len(), 4);
    }

    #[test]
    fn verdicts() {
        assert_eq!(quantum_verdict(VulnerabilityTier::Critical), "Needs quantum protection");
        assert_eq!(quantum_verdict(VulnerabilityTier::Resistant), "Quantum-resistant");
    }
}
