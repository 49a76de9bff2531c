use anyhow::{Context, Result};
use async_trait::async_trait;
use ethers_core::types::{
    Address, Block, BlockId, BlockNumber, Bytes, FeeHistory, TxHash, U256, U64,
};
use ethers_providers::{Http, Middleware, Provider};
use url::Url;

use crate::wallet::{WalletClient, WalletProvider};

/// Unauthenticated chain-state reads.
#[async_trait]
pub trait ChainReader: Send + Sync {
    async fn block_number(&self) -> Result<U64>;
    async fn block(&self, number: U64) -> Result<Block<TxHash>>;
    async fn gas_price(&self) -> Result<U256>;
    async fn fee_history(&self, block_count: u64, percentiles: &[f64]) -> Result<FeeHistory>;
    async fn balance(&self, address: Address) -> Result<U256>;
    async fn code(&self, address: Address) -> Result<Bytes>;
}

#[derive(Debug, Clone)]
pub struct PublicClient<M> {
    inner: M,
}

impl<M> PublicClient<M> {
    pub fn new(inner: M) -> Self {
        Self { inner }
    }
}

impl PublicClient<Provider<Http>> {
    pub fn http(rpc_url: &Url) -> Result<Self> {
        let client = reqwest::Client::builder()
            .no_proxy()
            .build()
            .context("failed to build reqwest client")?;
        let transport = Http::new_with_client(rpc_url.clone(), client);
        Ok(Self::new(Provider::new(transport)))
    }
}

#[async_trait]
impl<M> ChainReader for PublicClient<M>
where
    M: Middleware + 'static,
    M::Error: 'static,
{
    async fn block_number(&self) -> Result<U64> {
        self.inner
            .get_block_number()
            .await
            .context("failed to fetch latest block number")
    }

    async fn block(&self, number: U64) -> Result<Block<TxHash>> {
        self.inner
            .get_block(BlockId::Number(number.into()))
            .await
            .with_context(|| format!("failed to fetch block {}", number))?
            .with_context(|| format!("block {} not found", number))
    }

    async fn gas_price(&self) -> Result<U256> {
        self.inner
            .get_gas_price()
            .await
            .context("failed to fetch gas price")
    }

    async fn fee_history(&self, block_count: u64, percentiles: &[f64]) -> Result<FeeHistory> {
        self.inner
            .fee_history(block_count, BlockNumber::Latest, percentiles)
            .await
            .context("failed to fetch fee history")
    }

    async fn balance(&self, address: Address) -> Result<U256> {
        self.inner
            .get_balance(address, None)
            .await
            .with_context(|| format!("failed to fetch balance of 0x{:x}", address))
    }

    async fn code(&self, address: Address) -> Result<Bytes> {
        self.inner
            .get_code(address, None)
            .await
            .with_context(|| format!("failed to fetch bytecode at 0x{:x}", address))
    }
}

pub struct Clients {
    pub wallet: WalletClient<Provider<Http>>,
    pub public: PublicClient<Provider<Http>>,
}

/// Splits the wallet handle into the authorized client and a public client
/// pinned to `rpc_url`, whatever chain the wallet claims to be on. No network
/// traffic happens here.
pub fn build_clients(provider: WalletProvider, rpc_url: &Url) -> Result<Clients> {
    Ok(Clients {
        wallet: WalletClient::new(provider.into_inner()),
        public: PublicClient::http(rpc_url)?,
    })
}
