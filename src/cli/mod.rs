// src/cli/mod.rs
use clap::Parser;

pub mod commands;
pub mod handlers;
pub mod menu;
pub mod report;

pub use commands::CliCommand;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Emit the report as JSON instead of formatted text
    #[arg(long, global = true)]
    pub json: bool,

    /// Classical attacker throughput, attempts per second (overrides QPC_CLASSICAL_GUESS_RATE)
    #[arg(long, global = true)]
    pub classical_rate: Option<f64>,

    /// Quantum oracle evaluations per second (overrides QPC_QUANTUM_GUESS_RATE)
    #[arg(long, global = true)]
    pub quantum_rate: Option<f64>,

    /// Size counted for the symbol character class (overrides QPC_SYMBOL_CLASS_SIZE)
    #[arg(long, global = true)]
    pub symbol_size: Option<u32>,

    /// Fixed quantum key length (default: one bit per password character)
    #[arg(long, global = true)]
    pub key_bits: Option<usize>,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn args_are_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn overrides_come_only_from_flags() {
        // Environment values are handled by Config::load, never by clap.
        let args = Args::try_parse_from(["quantum-passcheck", "key"]).unwrap();
        assert!(args.classical_rate.is_none());
        assert!(args.quantum_rate.is_none());
        assert!(args.symbol_size.is_none());
        assert!(args.key_bits.is_none());

        let args = Args::try_parse_from([
            "quantum-passcheck",
            "--symbol-size",
            "40",
            "key",
            "--bits",
            "12",
        ])
        .unwrap();
        assert_eq!(args.symbol_size, Some(40));
        assert!(matches!(
            args.command,
            Some(CliCommand::Key { bits: Some(12), seed: None })
        ));
    }
}
