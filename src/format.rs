//! Display helpers for report lines. Everything here is pure: no I/O and no
//! failure paths, so it can be called anywhere in the report flow.

use std::str::FromStr;

use chrono::{DateTime, SecondsFormat, Utc};
use ethers_core::types::{Address, Bytes, U256};
use ethers_core::utils::to_checksum;

use crate::network::BASESCAN;

pub fn short_addr(addr: &str) -> String {
    if addr.len() < 10 || !addr.is_ascii() {
        return addr.to_string();
    }
    format!("{}...{}", &addr[..6], &addr[addr.len() - 4..])
}

pub fn address_link(address: &str) -> String {
    format!("{}/address/{}", BASESCAN, address)
}

pub fn block_link(block_number: impl std::fmt::Display) -> String {
    format!("{}/block/{}", BASESCAN, block_number)
}

pub fn tx_link(hash: &str) -> String {
    format!("{}/tx/{}", BASESCAN, hash)
}

pub fn token_link(token_address: &str) -> String {
    format!("{}/token/{}", BASESCAN, token_address)
}

pub fn blocks_link() -> String {
    format!("{}/blocks", BASESCAN)
}

pub fn gas_tracker_link() -> String {
    format!("{}/gastracker", BASESCAN)
}

/// EIP-55 mixed-case form, the way wallets hand addresses out.
pub fn checksum_address(addr: &Address) -> String {
    to_checksum(addr, None)
}

pub fn format_gwei(wei: U256) -> String {
    gwei_from_decimal(&wei.to_string())
}

/// Converts a decimal wei string to gwei with three decimals, ties rounded
/// up. When the value does not fit a finite `f64` the raw string is returned
/// untouched.
pub fn gwei_from_decimal(raw: &str) -> String {
    match raw.parse::<f64>() {
        Ok(wei) if (wei / 1e9).is_finite() => {
            let gwei = ((wei / 1e9) * 1000.0).round() / 1000.0;
            format!("{:.3} gwei", gwei)
        }
        _ => raw.to_string(),
    }
}

/// Wei to ether with trailing zeros trimmed (`1.5`, not `1.500000000000000000`).
pub fn format_ether(wei: U256) -> String {
    let unit = U256::exp10(18);
    let whole = wei / unit;
    let frac = wei % unit;
    if frac.is_zero() {
        return whole.to_string();
    }
    let frac = format!("{:0>18}", frac.to_string());
    format!("{}.{}", whole, frac.trim_end_matches('0'))
}

pub fn iso_timestamp(unix_secs: i64) -> String {
    match DateTime::<Utc>::from_timestamp(unix_secs, 0) {
        Some(dt) => dt.to_rfc3339_opts(SecondsFormat::Millis, true),
        None => format!("invalid timestamp {}", unix_secs),
    }
}

pub fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// `0x` followed by 40 hex digits. All-lowercase digits are accepted as is;
/// anything carrying uppercase must be a valid EIP-55 checksum.
pub fn is_address(candidate: &str) -> bool {
    let Some(hex) = candidate.strip_prefix("0x") else {
        return false;
    };
    if hex.len() != 40 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return false;
    }
    if !hex.chars().any(|c| c.is_ascii_uppercase()) {
        return true;
    }
    match Address::from_str(hex) {
        Ok(addr) => to_checksum(&addr, None) == candidate,
        Err(_) => false,
    }
}

pub fn parse_address(candidate: &str) -> Option<Address> {
    if !is_address(candidate) {
        return None;
    }
    Address::from_str(&candidate[2..]).ok()
}

pub fn is_tx_hash(candidate: &str) -> bool {
    candidate
        .strip_prefix("0x")
        .map(|hex| hex.len() == 64 && hex.chars().all(|c| c.is_ascii_hexdigit()))
        .unwrap_or(false)
}

/// `eth_getCode` answers `0x` for accounts without code.
pub fn has_bytecode(code: &Bytes) -> bool {
    !code.as_ref().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_addr_keeps_prefix_and_suffix() {
        let addr = "0xAbCd00000000000000000000000000000000Ef12";
        assert_eq!(short_addr(addr), "0xAbCd...Ef12");
    }

    #[test]
    fn short_addr_leaves_tiny_input_alone() {
        assert_eq!(short_addr("0xAB"), "0xAB");
    }

    #[test]
    fn links_use_the_explorer_base() {
        assert_eq!(
            address_link("0xAB"),
            "https://sepolia.basescan.org/address/0xAB"
        );
        assert_eq!(block_link(42u64), "https://sepolia.basescan.org/block/42");
        assert_eq!(tx_link("0xff"), "https://sepolia.basescan.org/tx/0xff");
        assert_eq!(token_link("0xAB"), "https://sepolia.basescan.org/token/0xAB");
        assert_eq!(blocks_link(), "https://sepolia.basescan.org/blocks");
        assert_eq!(gas_tracker_link(), "https://sepolia.basescan.org/gastracker");
    }

    #[test]
    fn gwei_rounds_to_three_decimals() {
        assert_eq!(format_gwei(U256::from(1_234_567_890u64)), "1.235 gwei");
        assert_eq!(format_gwei(U256::zero()), "0.000 gwei");
        assert_eq!(format_gwei(U256::from(50_000_000u64)), "0.050 gwei");
    }

    #[test]
    fn gwei_rounds_exact_ties_up() {
        assert_eq!(format_gwei(U256::from(62_500_000u64)), "0.063 gwei");
        assert_eq!(format_gwei(U256::from(1_062_500_000u64)), "1.063 gwei");
        assert_eq!(format_gwei(U256::from(2_500_000u64)), "0.003 gwei");
    }

    #[test]
    fn gwei_falls_back_to_raw_value_when_not_finite() {
        let huge = "9".repeat(400);
        assert_eq!(gwei_from_decimal(&huge), huge);
    }

    #[test]
    fn gwei_handles_max_u256() {
        let out = format_gwei(U256::MAX);
        assert!(out.ends_with(" gwei"));
    }

    #[test]
    fn ether_trims_trailing_zeros() {
        assert_eq!(format_ether(U256::zero()), "0");
        assert_eq!(format_ether(U256::exp10(18)), "1");
        assert_eq!(
            format_ether(U256::from(1_500_000_000_000_000_000u64)),
            "1.5"
        );
        assert_eq!(format_ether(U256::from(1u64)), "0.000000000000000001");
    }

    #[test]
    fn iso_timestamp_matches_utc_millis() {
        assert_eq!(iso_timestamp(1_700_000_000), "2023-11-14T22:13:20.000Z");
    }

    #[test]
    fn address_validation() {
        assert!(is_address("0x0000000000000000000000000000000000000000"));
        assert!(is_address("0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed"));
        assert!(is_address("0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed"));
        // wrong checksum casing
        assert!(!is_address("0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAeD"));
        // all-uppercase digits still need a matching checksum
        assert!(!is_address("0x5AAEB6053F3E94C9B9A09F33669435E7EF1BEAED"));
        assert!(parse_address("0x5AAEB6053F3E94C9B9A09F33669435E7EF1BEAED").is_none());
        // no letters at all: the checksum is the input itself
        assert!(is_address("0x1111111111111111111111111111111111111111"));
        assert!(!is_address("0x123"));
        assert!(!is_address("5aaeb6053f3e94c9b9a09f33669435e7ef1beaed"));
        assert!(!is_address("0xzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzz"));
    }

    #[test]
    fn parsed_addresses_print_checksummed() {
        let addr = parse_address("0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed").unwrap();
        assert_eq!(
            checksum_address(&addr),
            "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed"
        );
        assert!(parse_address("nope").is_none());
    }

    #[test]
    fn tx_hash_validation() {
        assert!(is_tx_hash(&format!("0x{}", "ab".repeat(32))));
        assert!(!is_tx_hash(&format!("0x{}", "ab".repeat(31))));
        assert!(!is_tx_hash(&format!("0x{}", "zz".repeat(32))));
        assert!(!is_tx_hash(&"ab".repeat(33)));
    }

    #[test]
    fn bytecode_presence() {
        assert!(!has_bytecode(&Bytes::new()));
        assert!(has_bytecode(&Bytes::from(vec![0x60, 0x80])));
    }
}
