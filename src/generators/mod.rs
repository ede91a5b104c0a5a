// src/generators/mod.rs
pub mod password;
pub mod quantum_key;

pub use password::{protect_suggestion, PasswordGenerator, ProtectedSuggestion};
pub use quantum_key::{BellPair, QuantumKeyGenerator};
