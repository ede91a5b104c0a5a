// src/analysis/mod.rs
pub mod classical;
pub mod quantum;

pub use classical::ClassicalAnalyzer;
pub use quantum::QuantumThreatEstimator;
