//! The read-only report sections. Each one issues its RPC calls strictly in
//! sequence and writes its lines to the report as results come in.

use anyhow::Result;
use ethers_core::types::Address;

use crate::chain::ChainReader;
use crate::format::{
    address_link, block_link, blocks_link, checksum_address, format_ether, format_gwei,
    gas_tracker_link, has_bytecode, is_address, is_tx_hash, iso_timestamp, now_iso, parse_address,
    short_addr, token_link, tx_link,
};
use crate::models::{BlockSnapshot, BytecodeCheck, ChainData, CodeStatus, FeeWindow};
use crate::network::{BASESCAN, CHAIN_ID, FEE_HISTORY_BLOCKS, FEE_HISTORY_PERCENTILES, NETWORK_NAME};
use crate::report::Report;
use crate::wallet::{WalletAccess, WalletError};

pub async fn connect_wallet<W>(wallet: &W, report: &mut Report) -> Result<Vec<Address>>
where
    W: WalletAccess + ?Sized,
{
    report.emit(format!("time: {}", now_iso()));
    report.emit(format!("network: {} (chainId {})", NETWORK_NAME, CHAIN_ID));
    report.emit(format!("explorer: {}", BASESCAN));
    report.blank();

    let chain_id = wallet.chain_id().await?;
    report.emit(format!("wallet chainId: {}", chain_id));
    if chain_id != CHAIN_ID {
        tracing::warn!(chain_id, expected = CHAIN_ID, "wallet is on a different chain");
        report.emit(format!(
            "warning: wallet is not on {} - data reads will still use {} public RPC",
            NETWORK_NAME, NETWORK_NAME
        ));
    }

    let addresses = wallet.addresses().await?;
    if addresses.is_empty() {
        return Err(WalletError::NoAddresses.into());
    }

    report.emit(format!("wallet connected: {} address(es)", addresses.len()));
    for (i, addr) in addresses.iter().enumerate() {
        let hex = checksum_address(addr);
        report.emit(format!("- [{}] {} ({})", i, hex, address_link(&hex)));
    }
    report.blank();

    Ok(addresses)
}

/// Stops at the first failed lookup; later addresses are not reported.
pub async fn read_balances<C>(chain: &C, addresses: &[Address], report: &mut Report) -> Result<()>
where
    C: ChainReader + ?Sized,
{
    report.emit("balances:");
    for addr in addresses {
        let balance = chain.balance(*addr).await?;
        let hex = checksum_address(addr);
        report.emit(format!(
            "- {}: {} ETH - {}",
            short_addr(&hex),
            format_ether(balance),
            address_link(&hex)
        ));
    }
    report.blank();
    Ok(())
}

pub async fn read_block_and_gas<C>(chain: &C, report: &mut Report) -> Result<ChainData>
where
    C: ChainReader + ?Sized,
{
    let number = chain.block_number().await?;
    let block = chain.block(number).await?;
    let snapshot = BlockSnapshot {
        number: number.as_u64(),
        timestamp: i64::try_from(block.timestamp.low_u64()).unwrap_or(i64::MAX),
        base_fee_per_gas: block.base_fee_per_gas,
    };

    report.emit("chain data:");
    report.emit(format!(
        "- latest block: {} - {}",
        snapshot.number,
        block_link(snapshot.number)
    ));
    report.emit(format!("- timestamp: {}", iso_timestamp(snapshot.timestamp)));

    let gas_price = chain.gas_price().await?;
    report.emit(format!("- gas price: {}", format_gwei(gas_price)));

    match snapshot.base_fee_per_gas {
        Some(base_fee) => report.emit(format!("- base fee: {}", format_gwei(base_fee))),
        None => report.emit("- base fee: not available on this block response"),
    }

    // rewards are requested but deliberately left out of the report
    let history = chain
        .fee_history(FEE_HISTORY_BLOCKS, &FEE_HISTORY_PERCENTILES)
        .await?;
    let fee_window = FeeWindow {
        samples: history.base_fee_per_gas.len(),
        oldest_block: history.oldest_block,
    };
    report.emit(format!(
        "- fee history: {} baseFee points",
        fee_window.samples
    ));
    report.emit(format!(
        "- oldest block in history: {}",
        fee_window.oldest_block
    ));
    report.blank();

    tracing::debug!(block = snapshot.number, %gas_price, "chain data read");

    Ok(ChainData {
        block: snapshot,
        gas_price,
        fee_window,
    })
}

pub async fn check_bytecode<C, S>(
    chain: &C,
    targets: &[S],
    report: &mut Report,
) -> Result<Vec<BytecodeCheck>>
where
    C: ChainReader + ?Sized,
    S: AsRef<str>,
{
    report.emit("bytecode checks:");
    let mut checks = Vec::with_capacity(targets.len());
    for target in targets {
        let raw = target.as_ref();
        let Some(address) = parse_address(raw) else {
            report.emit(format!("- invalid address skipped: {}", raw));
            checks.push(BytecodeCheck::Skipped {
                raw: raw.to_string(),
            });
            continue;
        };

        let code = chain.code(address).await?;
        let status = if has_bytecode(&code) {
            CodeStatus::Contract
        } else {
            CodeStatus::NoCode
        };
        report.emit(format!(
            "- {}: {} - {}",
            short_addr(raw),
            status.describe(),
            address_link(raw)
        ));
        checks.push(BytecodeCheck::Checked { address, status });
    }
    report.blank();
    Ok(checks)
}

pub fn print_useful_links(report: &mut Report, sample_token: Option<&str>, sample_tx: Option<&str>) {
    report.emit("useful basescan links:");
    if let Some(token) = sample_token.filter(|t| is_address(t)) {
        report.emit(format!("- token: {}", token_link(token)));
    }
    if let Some(tx) = sample_tx.filter(|h| is_tx_hash(h)) {
        report.emit(format!("- tx: {}", tx_link(tx)));
    }
    report.emit(format!("- blocks: {}", blocks_link()));
    report.emit(format!("- gas tracker: {}", gas_tracker_link()));
    report.blank();
}
