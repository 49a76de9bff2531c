//! Base Sepolia is the only network the inspector talks to.

pub const CHAIN_ID: u64 = 84532;
pub const NETWORK_NAME: &str = "Base Sepolia";
pub const BASESCAN: &str = "https://sepolia.basescan.org";

pub const FEE_HISTORY_BLOCKS: u64 = 6;
pub const FEE_HISTORY_PERCENTILES: [f64; 3] = [10.0, 50.0, 90.0];
