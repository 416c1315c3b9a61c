use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "rust-algo-explorer-lab", version, about = "Algorand indexer explorer")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch a block by round and print it
    Block {
        #[arg(long)]
        round: u64,
        /// Also print the transaction-type/top-sender analysis
        #[arg(long, default_value_t = false)]
        analyze: bool,
    },
    /// Print the type distribution and top senders for a block
    AnalyzeBlock {
        #[arg(long)]
        round: u64,
    },
    /// Fetch a transaction by ID and print it
    Tx {
        #[arg(long)]
        id: String,
    },
    /// Print the most recent transactions seen by the indexer
    RecentTxs {
        #[arg(long, default_value_t = 10)]
        limit: u64,
    },
    /// Fetch an asset by ID and print it
    Asset {
        #[arg(long)]
        id: u64,
    },
    /// Run the HTTP API server
    Serve {
        /// Override bind address, e.g. 0.0.0.0:8080
        #[arg(long)]
        addr: Option<String>,
    },
}
