use anyhow::Context;
use clap::Parser;
use std::path::Path;
use std::process::ExitCode;

mod cli;

use crate::cli::{Args, CliCommand};
use quantum_passcheck::{logging, Config, KeyLength, PasswordAuditor};

fn build_config(args: &Args) -> Config {
    let mut config = Config::load();

    // Command-line flags win over the environment
    if let Some(rate) = args.classical_rate {
        config.classical_guess_rate = rate;
    }
    if let Some(rate) = args.quantum_rate {
        config.quantum_guess_rate = rate;
    }
    if let Some(size) = args.symbol_size {
        config.symbol_class_size = size;
    }
    if let Some(bits) = args.key_bits {
        config.key_length = KeyLength::Fixed(bits);
    }

    config
}

fn run(args: Args) -> anyhow::Result<()> {
    let config = build_config(&args);
    logging::init(config.log_level, config.log_file.as_deref())
        .context("failed to initialise logging")?;
    log::debug!("Loaded config: {:?}", config);

    let auditor = PasswordAuditor::new(config).context("invalid configuration")?;

    match args.command {
        Some(CliCommand::Analyze { password }) => {
            let password = match password {
                Some(pw) => pw,
                None => cli::menu::prompt_password()?,
            };
            cli::handlers::handle_analyze(&auditor, &password, args.json)
        }
        Some(CliCommand::Profile {
            length,
            lower,
            upper,
            digits,
            symbols,
        }) => {
            let profile = quantum_passcheck::CharacterProfile {
                length,
                use_lowercase: lower,
                use_uppercase: upper,
                use_digits: digits,
                use_symbols: symbols,
            };
            cli::handlers::handle_profile(&auditor, &profile, args.json)
        }
        Some(CliCommand::Demo) => cli::handlers::handle_demo(&auditor, args.json),
        Some(CliCommand::Key { bits, seed }) => {
            cli::handlers::handle_key(&auditor, bits, seed, args.json)
        }
        None => cli::menu::run_cli_menu(&auditor, args.json),
    }
}

fn main() -> ExitCode {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{:#}", e);
            eprintln!("❌ {:#}", e);
            ExitCode::FAILURE
        }
    }
}
