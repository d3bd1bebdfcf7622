use clap::{Parser, Subcommand};
use slsa_provenance::{
    cli::{self, commands::GenerateArgs},
    error::Result,
};

#[derive(Parser)]
#[command(name = cli::CLI_NAME, version = cli::CLI_VERSION, author, about)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the SLSA provenance file
    Generate(GenerateArgs),
}

fn main() -> Result<()> {
    // Initialize logging
    slsa_provenance::init_logging()?;

    // Parse command line arguments
    let cli = Cli::parse();

    // Handle commands
    let result = match cli.command {
        Commands::Generate(args) => cli::handlers::handle_generate_command(args),
    };

    // Format and display any errors
    if let Err(ref e) = result {
        eprintln!("{}", cli::format_error(e));
    }

    result
}
