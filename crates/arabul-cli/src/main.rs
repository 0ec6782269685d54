mod commands;

use anyhow::Context;
use arabul_core::SortMode;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "arabul-cli")]
#[command(about = "AraBul supplier ranking command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Rank a saved business list against the configured backend
    Rank {
        /// Path to a business list JSON document (`{"data": [{"Suppliers": [..]}]}`)
        #[arg(long)]
        file: std::path::PathBuf,

        /// Sort mode: nearest, mostPopular or byRanking (defaults to ARABUL_DEFAULT_SORT)
        #[arg(long)]
        mode: Option<SortMode>,
    },
    /// Print favorite counts per supplier
    Popular,
    /// Print average ratings for the given supplier ids
    Ratings {
        #[arg(required = true)]
        ids: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = arabul_core::load_app_config().context("failed to load configuration")?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let client = arabul_client::ArabulClient::from_config(&config)
        .context("failed to build backend client")?;

    match cli.command {
        Commands::Rank { file, mode } => {
            commands::run_rank(client, &file, mode.unwrap_or(config.default_sort)).await?;
        }
        Commands::Popular => commands::run_popular(&client).await?,
        Commands::Ratings { ids } => commands::run_ratings(&client, &ids).await?,
    }

    Ok(())
}
