use clap::{Parser, Subcommand};

mod error;
mod key;
mod utils;

use error::Result;

use key::KeyCommands;

#[derive(Parser)]
#[command(name = "kagi")]
#[command(about = "PEM private-key loading toolkit", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Private key operations
    Key {
        #[command(subcommand)]
        command: KeyCommands,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Key { command } => match command {
            KeyCommands::Inspect(config) => key::inspect(config),
            KeyCommands::Convert(config) => key::convert(config),
        },
    }
}
