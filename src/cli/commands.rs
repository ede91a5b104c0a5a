// src/cli/commands.rs
use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Analyze a password (prompted without echo when omitted)
    Analyze {
        /// Password to analyze
        password: Option<String>,
    },

    /// Analyze a declared length and set of character classes
    Profile {
        /// Password length
        #[arg(long, short)]
        length: usize,

        /// Include lowercase letters
        #[arg(long)]
        lower: bool,

        /// Include uppercase letters
        #[arg(long)]
        upper: bool,

        /// Include digits
        #[arg(long)]
        digits: bool,

        /// Include symbols
        #[arg(long)]
        symbols: bool,
    },

    /// Run the weak / medium / strong reference scenarios
    Demo,

    /// Generate a quantum key
    Key {
        /// Number of bits (default: --key-bits / QPC_KEY_BITS, else 8)
        #[arg(long, short)]
        bits: Option<usize>,

        /// Seed for a reproducible key
        #[arg(long)]
        seed: Option<u64>,
    },
}
