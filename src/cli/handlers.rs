// src/cli/handlers.rs
use anyhow::{Context, Result};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use quantum_passcheck::{AnalysisReport, CharacterProfile, KeyLength, PasswordAuditor};

use crate::cli::report;

// Reference scenarios: lowercase x6, alphanumeric x8, all classes x12
pub const DEMO_SCENARIOS: [(&str, CharacterProfile); 3] = [
    (
        "WEAK",
        CharacterProfile {
            length: 6,
            use_lowercase: true,
            use_uppercase: false,
            use_digits: false,
            use_symbols: false,
        },
    ),
    (
        "MEDIUM",
        CharacterProfile {
            length: 8,
            use_lowercase: true,
            use_uppercase: true,
            use_digits: true,
            use_symbols: false,
        },
    ),
    (
        "STRONG",
        CharacterProfile {
            length: 12,
            use_lowercase: true,
            use_uppercase: true,
            use_digits: true,
            use_symbols: true,
        },
    ),
];

/// Key length for the standalone `key` command when nothing is configured.
pub const DEFAULT_KEY_BITS: usize = 8;

/// An explicit request wins, then a configured fixed length, then the default.
pub fn resolve_key_bits(auditor: &PasswordAuditor, requested: Option<usize>) -> usize {
    match (requested, auditor.config().key_length) {
        (Some(bits), _) => bits,
        (None, KeyLength::Fixed(bits)) => bits,
        (None, KeyLength::PerCharacter) => DEFAULT_KEY_BITS,
    }
}

fn emit(auditor: &PasswordAuditor, report: &AnalysisReport, json: bool) -> Result<()> {
    if json {
        let text = serde_json::to_string_pretty(report).context("serializing report")?;
        println!("{}", text);
    } else {
        print!("{}", report::render_text(report, auditor.config()));
    }
    Ok(())
}

pub fn handle_analyze(auditor: &PasswordAuditor, password: &str, json: bool) -> Result<()> {
    let report = auditor
        .audit(password, &mut rand::thread_rng())
        .context("password analysis failed")?;
    emit(auditor, &report, json)
}

pub fn handle_profile(auditor: &PasswordAuditor, profile: &CharacterProfile, json: bool) -> Result<()> {
    let report = auditor
        .audit_profile(profile, &mut rand::thread_rng())
        .context("profile analysis failed")?;
    emit(auditor, &report, json)
}

pub fn run_demo(auditor: &PasswordAuditor) -> Result<Vec<(&'static str, AnalysisReport)>> {
    let mut rng = rand::thread_rng();
    DEMO_SCENARIOS
        .iter()
        .map(|(label, profile)| {
            auditor
                .audit_profile(profile, &mut rng)
                .map(|report| (*label, report))
                .with_context(|| format!("{} scenario failed", label))
        })
        .collect()
}

pub fn handle_demo(auditor: &PasswordAuditor, json: bool) -> Result<()> {
    let results = run_demo(auditor)?;

    if json {
        let mut map = serde_json::Map::new();
        for (label, report) in &results {
            let value = serde_json::to_value(report).context("serializing demo reports")?;
            map.insert(label.to_string(), value);
        }
        println!("{}", serde_json::to_string_pretty(&map)?);
        return Ok(());
    }

    for (label, report) in &results {
        println!("\nEXAMPLE: {} PASSWORD", label);
        print!("{}", report::render_text(report, auditor.config()));
    }

    let rows: Vec<(&str, &AnalysisReport)> = results.iter().map(|(l, r)| (*l, r)).collect();
    print!("{}", report::render_comparison(&rows));
    Ok(())
}

pub fn handle_key(
    auditor: &PasswordAuditor,
    bits: Option<usize>,
    seed: Option<u64>,
    json: bool,
) -> Result<()> {
    let bits = resolve_key_bits(auditor, bits);
    let key = match seed {
        Some(seed) => auditor
            .keys()
            .generate(bits, &mut ChaCha20Rng::seed_from_u64(seed)),
        None => auditor.keys().generate(bits, &mut rand::thread_rng()),
    }
    .context("key generation failed")?;

    if json {
        let mut value = serde_json::to_value(&key)?;
        value["fingerprint"] = serde_json::Value::String(key.fingerprint());
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        print!("{}", report::render_key(&key));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use quantum_passcheck::{Config, StrengthTier, VulnerabilityTier};

    #[test]
    fn demo_scenarios_span_the_tiers() {
        let results = run_demo(&PasswordAuditor::default()).unwrap();
        assert_eq!(results.len(), 3);

        let (_, weak) = &results[0];
        assert_eq!(weak.composition.alphabet_size, 26);
        assert_eq!(weak.classical.tier, StrengthTier::VeryWeak);
        assert_eq!(weak.quantum.vulnerability, VulnerabilityTier::Critical);

        let (_, medium) = &results[1];
        assert_eq!(medium.composition.alphabet_size, 62);
        assert_eq!(medium.classical.tier, StrengthTier::Weak);

        let (_, strong) = &results[2];
        assert_eq!(strong.composition.alphabet_size, 94);
        assert_eq!(strong.classical.tier, StrengthTier::Medium);
    }

    #[test]
    fn key_handler_rejects_zero_bits() {
        assert!(handle_key(&PasswordAuditor::default(), Some(0), Some(1), false).is_err());
    }

    #[test]
    fn key_bits_fall_back_to_configured_length() {
        let config = Config {
            key_length: KeyLength::Fixed(16),
            ..Config::default()
        };
        let auditor = PasswordAuditor::new(config).unwrap();
        assert_eq!(resolve_key_bits(&auditor, None), 16);
        assert_eq!(resolve_key_bits(&auditor, Some(4)), 4);

        let per_character = PasswordAuditor::default();
        assert_eq!(resolve_key_bits(&per_character, None), DEFAULT_KEY_BITS);
    }
}
