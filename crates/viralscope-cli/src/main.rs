mod search;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::search::SearchArgs;

#[derive(Debug, Parser)]
#[command(name = "viralscope-cli")]
#[command(about = "Find fast-growing YouTube videos for a keyword")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Search a keyword and print the results ranked by growth
    Search(SearchArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = viralscope_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    // Logs go to stderr so `--json` output stays machine-readable.
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Search(args)) => {
            let output = search::run_search_command(&args, &config).await?;
            println!("{output}");
        }
        None => println!("viralscope-cli: run `viralscope-cli search <KEYWORD>`"),
    }

    Ok(())
}
