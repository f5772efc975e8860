mod board;
mod count;
mod decode;
mod generate;

use clap::{Parser, Subcommand};
use count::{count, CountCommand};
use decode::{decode, DecodeCommand};
use generate::{generate, GenerateCommand};
use std::error::Error;
use tracing::Level;

#[derive(Parser)]
#[command(about = "Winning lines of N-dimensional tic-tac-toe boards")]
struct Cli {
    /// Log every variation pattern as it is folded
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Writes every winning line of the board as packed cell codes
    Generate(GenerateCommand),
    /// Prints how many winning lines the board has
    Count(CountCommand),
    /// Turns packed cell codes back into coordinates
    Decode(DecodeCommand),
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Cli::parse();

    // stdout only carries the output
    tracing_subscriber::fmt()
        .with_max_level(if args.verbose {
            Level::DEBUG
        } else {
            Level::INFO
        })
        .with_writer(std::io::stderr)
        .init();

    match args.command {
        Commands::Generate(cmd) => generate(cmd),
        Commands::Count(cmd) => count(cmd),
        Commands::Decode(cmd) => decode(cmd),
    }
}
