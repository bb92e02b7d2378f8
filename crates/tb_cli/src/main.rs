//! tb - 5v5 team balancer CLI
//!
//! ```text
//! tb balance --input roster.json --limit 3
//! cat roster.json | tb balance --format json
//! tb schema
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tb_cli::OutputFormat;

#[derive(Parser)]
#[command(name = "tb")]
#[command(about = "Split ten players into two balanced squads of five", long_about = None)]
#[command(version = tb_core::VERSION)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Balance a roster request
    Balance {
        /// Request JSON file (reads stdin when omitted)
        #[arg(long, short)]
        input: Option<PathBuf>,

        /// Number of splits to show (overrides config and request)
        #[arg(long, short)]
        limit: Option<usize>,

        /// Balancer config JSON file (defaults to $TB_BALANCER_CONFIG_PATH)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Print the JSON Schema of a balance request
    Schema,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Balance { input, limit, config, format } => {
            let config = tb_cli::resolve_config(config.as_deref(), limit)?;
            tracing::debug!(limit = config.limit, "resolved balancer config");

            let request = tb_cli::load_request(input.as_deref())?;
            let response = tb_cli::run_balance(request, &config, limit)?;

            print!("{}", tb_cli::render(&response, format)?);
            if format == OutputFormat::Json {
                println!();
            }
        }

        Commands::Schema => {
            println!("{}", tb_core::request_schema_json()?);
        }
    }

    Ok(())
}
