use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "velorin", version, about = "Read-only Base Sepolia wallet and chain inspector")]
pub struct Cli {
    /// Override BASE_SEPOLIA_RPC_URL
    #[arg(long, global = true)]
    pub rpc_url: Option<String>,
    /// Override WALLET_RPC_URL
    #[arg(long, global = true)]
    pub wallet_url: Option<String>,
    /// Keep the full report in this file instead of printing lines to stdout
    #[arg(long, global = true)]
    pub panel: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Full report: wallet, chain data, balances, bytecode, links (default)
    Run,
    /// Latest block, gas price, base fee and fee history
    Chain,
    /// Native balances of the given addresses
    Balances {
        #[arg(required = true)]
        addresses: Vec<String>,
    },
    /// Check whether code is deployed at the given addresses
    Bytecode {
        /// Defaults to BYTECODE_TARGETS
        addresses: Vec<String>,
    },
    /// Print explorer links
    Links {
        #[arg(long)]
        token: Option<String>,
        #[arg(long)]
        tx: Option<String>,
    },
}
