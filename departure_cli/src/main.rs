use clap::{Parser, Subcommand};
use indicatif::MultiProgress;
use mimalloc::MiMalloc;

use crate::{config::Config, order::OrderArgs, progress::ProgressWriter, search::SearchArgs};

mod config;
mod input;
mod order;
mod parsers;
mod progress;
mod prompt;
mod search;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the departure hour with the lowest travel plus service time
    #[command(visible_alias = "s")]
    Search {
        #[command(flatten)]
        args: SearchArgs,
    },
    /// Print the optimized visit order when leaving now
    #[command(visible_alias = "o")]
    Order {
        #[command(flatten)]
        args: OrderArgs,
    },
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let cli = Cli::parse();
    let progress = MultiProgress::new();
    tracing_subscriber::fmt()
        .with_writer(ProgressWriter::new(progress.clone()))
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    let config = Config::from_env();

    match cli.command {
        Commands::Search { args } => search::run(args, &config, &progress).await?,
        Commands::Order { args } => order::run(args, &config).await?,
    }

    Ok(())
}
