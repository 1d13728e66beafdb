use clap::Parser;
use datacontract_init::cli::commands::{cmd_fields, cmd_init};
use datacontract_init::cli::config::{Cli, Commands, load_config};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries prompts and the document
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = load_config(cli.config.as_deref());

    match cli.command {
        Commands::Init {
            spec_version,
            file,
            schema_dir,
        } => {
            cmd_init(&spec_version, file.as_deref(), schema_dir.as_deref(), &config)?;
        }
        Commands::Fields {
            spec_version,
            schema_dir,
        } => {
            cmd_fields(&spec_version, schema_dir.as_deref(), &config)?;
        }
    }

    Ok(())
}
