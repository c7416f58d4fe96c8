pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(
    name = "bincare",
    about = "Bincare pricing engine operator CLI",
    long_about = "Price service requests against the safeguard engine and inspect its rate tables and configuration.",
    after_help = "Examples:\n  bincare quote --file request.json\n  cat request.json | bincare quote\n  bincare rates"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(about = "Price a service request from a JSON payload and print the full quote")]
    Quote {
        #[arg(long, default_value = "-", help = "Path to the request JSON, or '-' for stdin")]
        file: PathBuf,
    },
    #[command(about = "Print the effective rate book as JSON")]
    Rates,
    #[command(about = "Inspect effective configuration values with source attribution")]
    Config,
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Quote { file } => commands::quote::run(&file),
        Command::Rates => commands::rates::run(),
        Command::Config => {
            commands::CommandResult { exit_code: 0, output: commands::config::run() }
        }
    };

    println!("{}", result.output);
    ExitCode::from(result.exit_code)
}
