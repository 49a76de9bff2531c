mod cli;

use anyhow::{bail, Context};
use clap::Parser;
use velorin_inspector::chain::PublicClient;
use velorin_inspector::config::Config;
use velorin_inspector::format::parse_address;
use velorin_inspector::inspector::{run_inspector, Host};
use velorin_inspector::ops;
use velorin_inspector::report::{LineRenderer, PanelRenderer, Report};

use crate::cli::{Cli, Commands};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    if let Err(err) = run(cli).await {
        tracing::error!("inspector failed: {:#}", err);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = Config::from_env().context("failed to load configuration")?;
    if let Some(url) = cli.rpc_url.as_deref() {
        config = config.with_rpc_url(url)?;
    }
    if let Some(url) = cli.wallet_url.as_deref() {
        config = config.with_wallet_url(url)?;
    }

    let mut report = match &cli.panel {
        Some(path) => Report::new(PanelRenderer::new(path)),
        None => Report::new(LineRenderer::stdout()),
    };

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => {
            run_inspector(&config, Host::detect(), &mut report).await?;
        }
        Commands::Chain => {
            let chain = PublicClient::http(&config.rpc_url)?;
            ops::read_block_and_gas(&chain, &mut report).await?;
        }
        Commands::Balances { addresses } => {
            let mut parsed = Vec::with_capacity(addresses.len());
            for raw in &addresses {
                match parse_address(raw) {
                    Some(addr) => parsed.push(addr),
                    None => bail!("invalid address: {}", raw),
                }
            }
            let chain = PublicClient::http(&config.rpc_url)?;
            ops::read_balances(&chain, &parsed, &mut report).await?;
        }
        Commands::Bytecode { addresses } => {
            let targets = if addresses.is_empty() {
                config.bytecode_targets.clone()
            } else {
                addresses
            };
            let chain = PublicClient::http(&config.rpc_url)?;
            ops::check_bytecode(&chain, &targets, &mut report).await?;
        }
        Commands::Links { token, tx } => {
            let token = token.or_else(|| config.sample_token.clone());
            let tx = tx.or_else(|| config.sample_tx.clone());
            ops::print_useful_links(&mut report, token.as_deref(), tx.as_deref());
        }
    }

    Ok(())
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();
}
