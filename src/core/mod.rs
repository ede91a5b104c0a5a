// src/core/mod.rs
pub mod auditor;
pub mod config;

pub use auditor::{AnalysisReport, PasswordAuditor};
pub use config::{Config, KeyLength, VulnerabilityThresholds};
