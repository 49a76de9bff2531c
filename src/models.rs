use ethers_core::types::{Address, U256};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockSnapshot {
    pub number: u64,
    pub timestamp: i64,
    /// Missing on chains without a fee market.
    pub base_fee_per_gas: Option<U256>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FeeWindow {
    pub samples: usize,
    pub oldest_block: U256,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeStatus {
    Contract,
    NoCode,
}

impl CodeStatus {
    pub fn describe(self) -> &'static str {
        match self {
            CodeStatus::Contract => "contract bytecode found",
            CodeStatus::NoCode => "no bytecode (EOA or not deployed)",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BytecodeCheck {
    Skipped { raw: String },
    Checked { address: Address, status: CodeStatus },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChainData {
    pub block: BlockSnapshot,
    pub gas_price: U256,
    pub fee_window: FeeWindow,
}
