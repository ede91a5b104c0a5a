// src/cli/menu.rs
use anyhow::Result;
use inquire::{Confirm, CustomType, Password, Select};

use quantum_passcheck::{CharacterProfile, PasswordAuditor};

use crate::cli::handlers;

const ANALYZE: &str = "Analyze a password";
const PROFILE: &str = "Analyze a length / character-class profile";
const DEMO: &str = "Run demo examples";
const KEY: &str = "Generate a quantum key";
const EXIT: &str = "Exit";

pub fn prompt_password() -> Result<String> {
    let password = Password::new("Enter password to analyze:")
        .with_display_mode(inquire::PasswordDisplayMode::Hidden)
        .without_confirmation()
        .prompt()?;
    Ok(password)
}

fn prompt_profile() -> Result<CharacterProfile> {
    let length = CustomType::<usize>::new("Password length:")
        .with_error_message("Please enter a whole number")
        .prompt()?;

    Ok(CharacterProfile {
        length,
        use_lowercase: Confirm::new("Include lowercase?").with_default(true).prompt()?,
        use_uppercase: Confirm::new("Include uppercase?").with_default(true).prompt()?,
        use_digits: Confirm::new("Include digits?").with_default(true).prompt()?,
        use_symbols: Confirm::new("Include symbols?").with_default(false).prompt()?,
    })
}

pub fn run_cli_menu(auditor: &PasswordAuditor, json: bool) -> Result<()> {
    println!("╔════════════════════════════════════════════════════╗");
    println!("║   QUANTUM-ENHANCED PASSWORD STRENGTH ANALYZER      ║");
    println!("╚════════════════════════════════════════════════════╝");

    loop {
        let choice = Select::new("What would you like to do?", vec![ANALYZE, PROFILE, DEMO, KEY, EXIT])
            .prompt()?;

        // Errors from a single action are reported, the menu keeps running.
        let outcome = match choice {
            ANALYZE => prompt_password().and_then(|pw| handlers::handle_analyze(auditor, &pw, json)),
            PROFILE => prompt_profile().and_then(|p| handlers::handle_profile(auditor, &p, json)),
            DEMO => handlers::handle_demo(auditor, json),
            KEY => CustomType::<usize>::new("Number of bits:")
                .with_default(handlers::resolve_key_bits(auditor, None))
                .prompt()
                .map_err(anyhow::Error::from)
                .and_then(|bits| handlers::handle_key(auditor, Some(bits), None, json)),
            _ => break,
        };

        if let Err(e) = outcome {
            log::warn!("menu action failed: {:#}", e);
            eprintln!("❌ {:#}", e);
        }
    }

    println!("Goodbye!");
    Ok(())
}
