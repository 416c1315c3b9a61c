mod cli;

use anyhow::Context;
use clap::Parser;
use serde::Serialize;

use rust_algo_explorer_lab::analysis::analyze_transactions;
use rust_algo_explorer_lab::api::{self, AppState};
use rust_algo_explorer_lab::config::Config;
use rust_algo_explorer_lab::indexer::IndexerClient;

use crate::cli::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    let config = Config::from_env().context("failed to load configuration")?;
    let indexer = IndexerClient::new(&config.indexer_url)?;

    match cli.command {
        Commands::Serve { addr } => {
            let bind = addr.unwrap_or_else(|| config.http_bind_addr.clone());
            api::run_http_server(&bind, AppState { indexer }).await?;
        }
        Commands::Block { round, analyze } => {
            let block = indexer
                .get_block(round)
                .await
                .with_context(|| format!("failed to fetch block {}", round))?;
            print_json(&block)?;
            if analyze {
                print_json(&analyze_transactions(&block.transactions))?;
            }
        }
        Commands::AnalyzeBlock { round } => {
            let block = indexer
                .get_block(round)
                .await
                .with_context(|| format!("failed to fetch block {}", round))?;
            print_json(&analyze_transactions(&block.transactions))?;
        }
        Commands::Tx { id } => {
            let tx = indexer
                .get_transaction(&id)
                .await
                .with_context(|| format!("failed to fetch transaction {}", id))?;
            print_json(&tx)?;
        }
        Commands::RecentTxs { limit } => {
            let list = indexer
                .get_recent_transactions(limit)
                .await
                .context("failed to fetch recent transactions")?;
            print_json(&list)?;
        }
        Commands::Asset { id } => {
            let asset = indexer
                .get_asset(id)
                .await
                .with_context(|| format!("failed to fetch asset {}", id))?;
            print_json(&asset)?;
        }
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();
}
