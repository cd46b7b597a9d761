use clap::{Parser, Subcommand};
use provenance_cli::{
    cli::{self, commands::GenerateArgs},
    error::Result,
};

#[derive(Parser)]
#[command(author, version, about)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate SLSA provenance information on supported cloud CI/CD vendors
    Generate(GenerateArgs),
}

fn main() -> Result<()> {
    // Initialize logging
    provenance_cli::init_logging()?;

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
