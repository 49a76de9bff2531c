use std::io::IsTerminal;

use anyhow::{Context, Result};
use ethers_core::types::Address;

use crate::chain::{build_clients, ChainReader};
use crate::config::Config;
use crate::network::NETWORK_NAME;
use crate::ops;
use crate::report::Report;
use crate::wallet::{create_wallet_provider, WalletAccess, WalletOptions};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Host {
    /// Someone is there to answer a wallet connection prompt.
    Interactive,
    Headless,
}

impl Host {
    pub fn detect() -> Self {
        if std::io::stdin().is_terminal() && std::io::stdout().is_terminal() {
            Host::Interactive
        } else {
            Host::Headless
        }
    }
}

/// Builds the wallet provider and both clients from `config`, then runs the
/// full report.
pub async fn run_inspector(config: &Config, host: Host, report: &mut Report) -> Result<()> {
    let provider = create_wallet_provider(&WalletOptions {
        app_name: &config.app_name,
        app_logo_url: &config.app_logo_url,
        wallet_url: &config.wallet_url,
    })
    .context("failed to create wallet provider")?;
    let clients = build_clients(provider, &config.rpc_url).context("failed to create clients")?;

    run_with(&clients.wallet, &clients.public, config, host, report).await
}

/// The report sequence. Only the wallet connection is allowed to fail; any
/// other error ends the run before `done` is written.
pub async fn run_with<W, C>(
    wallet: &W,
    chain: &C,
    config: &Config,
    host: Host,
    report: &mut Report,
) -> Result<()>
where
    W: WalletAccess + ?Sized,
    C: ChainReader + ?Sized,
{
    tracing::info!(?host, rpc = %config.rpc_url, wallet = %config.wallet_url, "starting inspector run");

    if host == Host::Headless {
        report.emit(format!(
            "{} is designed for an interactive session so the wallet can prompt for connection.",
            config.app_name
        ));
        report.emit("Tip: run it from a terminal with the wallet bridge running.");
        report.emit(format!(
            "Still, {} reads can be performed via RPC: {}",
            NETWORK_NAME, config.rpc_url
        ));
        report.blank();
    }

    let addresses: Vec<Address> = match ops::connect_wallet(wallet, report).await {
        Ok(addresses) => addresses,
        Err(err) => {
            tracing::warn!("wallet connection failed: {:#}", err);
            report.emit(format!("wallet connection failed: {:#}", err));
            report.emit("continuing with read-only chain data without wallet addresses");
            report.blank();
            Vec::new()
        }
    };

    ops::read_block_and_gas(chain, report).await?;

    if !addresses.is_empty() {
        ops::read_balances(chain, &addresses, report).await?;
    }

    ops::check_bytecode(chain, &config.bytecode_targets, report).await?;
    ops::print_useful_links(
        report,
        config.sample_token.as_deref(),
        config.sample_tx.as_deref(),
    );

    report.emit("done");
    tracing::info!(lines = report.lines().len(), "inspector run finished");
    Ok(())
}
