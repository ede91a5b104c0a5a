// src/core/auditor.rs
use chrono::{DateTime, Utc};
use rand::Rng;
use serde::Serialize;

use crate::analysis::{ClassicalAnalyzer, QuantumThreatEstimator};
use crate::core::config::Config;
use crate::education;
use crate::errors::Result;
use crate::generators::{protect_suggestion, PasswordGenerator, ProtectedSuggestion, QuantumKeyGenerator};
use crate::models::{
    CharacterProfile, PasswordComposition, QuantumAssessment, QuantumKey, StrengthAssessment,
};

#[derive(Debug, Clone, Serialize)]
pub struct Recommendations {
    pub classical: String,
    pub quantum: String,
    pub improvements: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PasswordSuggestions {
    pub passphrase: String,
    pub random: String,
    pub quantum_protected: ProtectedSuggestion,
}

/// Everything the presentation layer shows for one evaluation. The password
/// itself is never part of the report.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub generated_at: DateTime<Utc>,
    pub composition: PasswordComposition,
    pub classical: StrengthAssessment,
    pub quantum: QuantumAssessment,
    pub quantum_key: QuantumKey,
    pub recommendations: Recommendations,
    pub suggestions: PasswordSuggestions,
}

/// Chains the classical analyzer, the quantum estimator and the key
/// generator under one validated configuration.
pub struct PasswordAuditor {
    config: Config,
    classical: ClassicalAnalyzer,
    quantum: QuantumThreatEstimator,
    keys: QuantumKeyGenerator,
    passwords: PasswordGenerator,
}

impl PasswordAuditor {
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            classical: ClassicalAnalyzer::from_config(&config),
            quantum: QuantumThreatEstimator::from_config(&config),
            keys: QuantumKeyGenerator::from_config(&config),
            passwords: PasswordGenerator::new(),
            config,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn classical(&self) -> &ClassicalAnalyzer {
        &self.classical
    }

    pub fn quantum(&self) -> &QuantumThreatEstimator {
        &self.quantum
    }

    pub fn keys(&self) -> &QuantumKeyGenerator {
        &self.keys
    }

    pub fn audit<R: Rng + ?Sized>(&self, password: &str, rng: &mut R) -> Result<AnalysisReport> {
        let (composition, classical) = self.classical.analyze(password)?;
        let improvements = education::improvement_suggestions(password, classical.entropy_bits);
        self.finish(composition, classical, improvements, rng)
    }

    pub fn audit_profile<R: Rng + ?Sized>(
        &self,
        profile: &CharacterProfile,
        rng: &mut R,
    ) -> Result<AnalysisReport> {
        let (composition, classical) = self.classical.analyze_profile(profile)?;
        let improvements = education::profile_suggestions(&composition, classical.entropy_bits);
        self.finish(composition, classical, improvements, rng)
    }

    pub fn key_bits_for(&self, password_length: usize) -> usize {
        self.config.key_length.bits_for(password_length)
    }

    fn finish<R: Rng + ?Sized>(
        &self,
        composition: PasswordComposition,
        classical: StrengthAssessment,
        improvements: Vec<String>,
        rng: &mut R,
    ) -> Result<AnalysisReport> {
        let quantum = self.quantum.assess(&classical.combinations);

        let key = self.keys.generate(self.key_bits_for(composition.length), rng)?;

        let random = self
            .passwords
            .generate_password(self.config.suggestion_length, rng)?;
        let quantum_protected = protect_suggestion(&random, &key);

        log::info!(
            "audit complete: {:.2} bits ({}), quantum {}",
            classical.entropy_bits,
            classical.tier,
            quantum.vulnerability
        );

        Ok(AnalysisReport {
            generated_at: Utc::now(),
            recommendations: Recommendations {
                classical: education::classical_verdict(&classical).to_string(),
                quantum: education::quantum_verdict(quantum.vulnerability).to_string(),
                improvements,
            },
            suggestions: PasswordSuggestions {
                passphrase: education::PASSPHRASE_EXAMPLE.to_string(),
                random,
                quantum_protected,
            },
            composition,
            classical,
            quantum,
            quantum_key: key,
        })
    }
}

impl Default for PasswordAuditor {
    fn default() -> Self {
        Self {
            classical: ClassicalAnalyzer::default(),
            quantum: QuantumThreatEstimator::default(),
            keys: QuantumKeyGenerator::default(),
            passwords: PasswordGenerator::new(),
            config: Config::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::KeyLength;
    use crate::errors::AnalysisError;
    use crate::models::{StrengthTier, VulnerabilityTier};
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn rejects_invalid_config() {
        let config = Config {
            symbol_class_size: 0,
            ..Config::default()
        };
        assert!(matches!(
            PasswordAuditor::new(config),
            Err(AnalysisError::InvalidConfig(_))
        ));
    }

    #[test]
    fn audit_chains_all_components() {
        let auditor = PasswordAuditor::default();
        let mut rng = ChaCha20Rng::seed_from_u64(3);
        let report = auditor.audit("P@ss12", &mut rng).unwrap();

        assert_eq!(report.composition.alphabet_size, 94);
        assert_eq!(report.classical.tier, StrengthTier::VeryWeak);
        assert_eq!(report.quantum.vulnerability, VulnerabilityTier::Critical);
        assert_eq!(report.quantum_key.len(), 6);
        assert_eq!(report.suggestions.random.chars().count(), 16);
        assert_eq!(report.recommendations.quantum, "Needs quantum protection");
        assert!(!report.recommendations.improvements.is_empty());
    }

    #[test]
    fn fixed_key_length_overrides_per_character() {
        let config = Config {
            key_length: KeyLength::Fixed(8),
            ..Config::default()
        };
        let auditor = PasswordAuditor::new(config).unwrap();
        let mut rng = ChaCha20Rng::seed_from_u64(3);
        let report = auditor.audit("a much longer passphrase", &mut rng).unwrap();
        assert_eq!(report.quantum_key.len(), 8);
    }

    #[test]
    fn empty_password_propagates_invalid_input() {
        let auditor = PasswordAuditor::default();
        let mut rng = ChaCha20Rng::seed_from_u64(3);
        assert!(matches!(
            auditor.audit("", &mut rng),
            Err(AnalysisError::InvalidInput(_))
        ));
    }

    #[test]
    fn report_serializes_without_password() {
        let auditor = PasswordAuditor::default();
        let mut rng = ChaCha20Rng::seed_from_u64(8);
        let report = auditor.audit("hunter2hunter2", &mut rng).unwrap();
        let json = serde_json::to_string(&report).unwrap();
        assert!(!json.contains("hunter2"));
        assert!(json.contains("\"combinations\""));
        assert!(json.contains("\"vulnerability\""));
    }
}
