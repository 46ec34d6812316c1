//! Thin command-line front-end over the password health library.

use anyhow::Result;
use clap::{Parser, Subcommand};
use pwd_health::{evaluate_password_strength, generate_password};
use secrecy::SecretString;

#[derive(Parser, Debug)]
#[command(name = "pwd-health", version, about = "Evaluate password health or generate a healthy password")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate a password and print its length and complexity scores
    Eval {
        /// The password to evaluate, taken verbatim
        password: String,
    },
    /// Generate a healthy password
    Generate,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Eval { password } => {
            let password = SecretString::new(password.into());
            let evaluation = evaluate_password_strength(&password)?;
            println!("Length score: {}", evaluation.length_score_percent());
            println!("Complexity score: {}", evaluation.complexity_score_percent());
        }
        Command::Generate => {
            println!("Here's a healthy password for you:");
            println!("{}", generate_password());
        }
    }

    Ok(())
}
