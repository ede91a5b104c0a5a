// src/cli/report.rs
use console::style;

use quantum_passcheck::core::Config;
use quantum_passcheck::models::{QuantumKey, StrengthTier, VulnerabilityTier};
use quantum_passcheck::utils::{format_crack_time, format_rate, format_scientific};
use quantum_passcheck::AnalysisReport;

const RULE: &str = "======================================================================";

fn tier_label(tier: StrengthTier) -> String {
    let label = tier.to_string().to_uppercase();
    match tier {
        StrengthTier::VeryWeak | StrengthTier::Weak => style(label).red().bold().to_string(),
        StrengthTier::Medium => style(label).yellow().bold().to_string(),
        StrengthTier::Strong | StrengthTier::VeryStrong => style(label).green().bold().to_string(),
    }
}

fn vulnerability_label(tier: VulnerabilityTier) -> String {
    let label = tier.to_string();
    match tier {
        VulnerabilityTier::Critical => style(label).red().bold().to_string(),
        VulnerabilityTier::Moderate => style(label).yellow().bold().to_string(),
        VulnerabilityTier::Resistant => style(label).green().bold().to_string(),
    }
}

fn classes(report: &AnalysisReport) -> String {
    let c = &report.composition;
    let mut names = Vec::new();
    if c.has_lowercase {
        names.push("lowercase");
    }
    if c.has_uppercase {
        names.push("uppercase");
    }
    if c.has_digit {
        names.push("digits");
    }
    if c.has_symbol {
        names.push("symbols");
    }
    names.join(", ")
}

pub fn render_text(report: &AnalysisReport, config: &Config) -> String {
    let classical = &report.classical;
    let quantum = &report.quantum;

    let mut lines = vec![
        String::new(),
        RULE.to_string(),
        format!("       SECURE AUDIT: {}", tier_label(classical.tier)),
        RULE.to_string(),
        String::new(),
        style("[CLASSICAL ANALYSIS]").cyan().bold().to_string(),
        format!("  Password Length (L):     {}", report.composition.length),
        format!("  Character Classes:       {}", classes(report)),
        format!("  Alphabet Size (A):       {}", report.composition.alphabet_size),
        format!("  Combinations (A^L):      {}", format_scientific(&classical.combinations)),
        format!("  Entropy:                 {:.2} bits", classical.entropy_bits),
        format!(
            "  Crack Time:              {}  (at {} attempts/sec)",
            format_crack_time(classical.crack_time_seconds, classical.log10_crack_time_seconds),
            format_rate(config.classical_guess_rate)
        ),
        format!("  Strength:                {}", tier_label(classical.tier)),
        format!("  Recommendation:          {}", report.recommendations.classical),
        String::new(),
        style("[QUANTUM THREAT (Grover)]").cyan().bold().to_string(),
        format!("  Quantum Attempts (√N):   {:.2e}", quantum.quantum_attempts),
        format!("  Speedup Factor:          {:.2e}x", quantum.speedup_factor),
        format!(
            "  Crack Time:              {}  (at {} attempts/sec)",
            format_crack_time(quantum.crack_time_seconds, quantum.log10_crack_time_seconds),
            format_rate(config.quantum_guess_rate)
        ),
        format!("  Vulnerability:           {}", vulnerability_label(quantum.vulnerability)),
        format!("  Recommendation:          {}", report.recommendations.quantum),
    ];

    if !report.recommendations.improvements.is_empty() {
        lines.push(String::new());
        lines.push(style("[IMPROVEMENT SUGGESTIONS]").cyan().bold().to_string());
        lines.extend(
            report
                .recommendations
                .improvements
                .iter()
                .map(|rec| format!("  - {}", rec)),
        );
    }

    lines.push(String::new());
    lines.push(style("[SUGGESTED PASSWORDS]").cyan().bold().to_string());
    lines.push(format!("  Passphrase:              {}", report.suggestions.passphrase));
    lines.push(format!("  Random:                  {}", report.suggestions.random));

    lines.push(String::new());
    lines.push(style("[QUANTUM-PROTECTED SUGGESTION]").cyan().bold().to_string());

    let mut out = lines.join("\n");
    out.push('\n');
    out.push_str(&render_key(&report.quantum_key));
    out.push_str(&format!(
        "  Quantum Ciphertext:      {}\n",
        report.suggestions.quantum_protected.ciphertext
    ));
    out
}

pub fn render_key(key: &QuantumKey) -> String {
    format!(
        "  Quantum Key:             {}\n  Key Length:              {} qubits\n  Key Fingerprint:         {}\n",
        style(&key.rendered).magenta(),
        key.len(),
        key.fingerprint()
    )
}

fn table_row<F>(name: &str, rows: &[(&str, &AnalysisReport)], cell: F) -> String
where
    F: Fn(&AnalysisReport) -> String,
{
    let cells: String = rows
        .iter()
        .map(|(_, report)| format!("| {:<13}", cell(report)))
        .collect();
    format!("{:<14}{}\n", name, cells)
}

/// Side-by-side table for the demo scenarios.
pub fn render_comparison(rows: &[(&str, &AnalysisReport)]) -> String {
    let header: String = rows
        .iter()
        .map(|(label, _)| format!("| {:<13}", label))
        .collect();

    let mut out = format!("\n{}\nSIDE-BY-SIDE COMPARISON\n{}\n", RULE, RULE);
    out.push_str(&format!("{:<14}{}\n", "Metric", header));
    out.push_str(&table_row("Length", rows, |r| r.composition.length.to_string()));
    out.push_str(&table_row("Charset Size", rows, |r| r.composition.alphabet_size.to_string()));
    out.push_str(&table_row("Entropy", rows, |r| format!("{:.1}", r.classical.entropy_bits)));
    out.push_str(&table_row("Classical", rows, |r| r.classical.tier.to_string()));
    out.push_str(&table_row("Quantum Vuln", rows, |r| r.quantum.vulnerability.to_string()));
    out
}
