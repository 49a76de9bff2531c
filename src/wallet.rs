use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use ethers_core::types::Address;
use ethers_providers::{Http, Middleware, Provider};
use url::Url;

use crate::network::CHAIN_ID;

#[derive(thiserror::Error, Debug)]
pub enum WalletError {
    #[error("no addresses returned by wallet")]
    NoAddresses,
}

#[derive(Debug, Clone)]
pub struct WalletOptions<'a> {
    pub app_name: &'a str,
    pub app_logo_url: &'a str,
    pub wallet_url: &'a Url,
}

/// Connection handle to the wallet bridge. The chain id is fixed; the wallet
/// only ever gets asked which chain it is on and which accounts it exposes.
#[derive(Debug, Clone)]
pub struct WalletProvider {
    provider: Provider<Http>,
    app_name: String,
    app_logo_url: String,
}

impl WalletProvider {
    pub fn chain_id(&self) -> u64 {
        CHAIN_ID
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    pub fn app_logo_url(&self) -> &str {
        &self.app_logo_url
    }

    pub(crate) fn into_inner(self) -> Provider<Http> {
        self.provider
    }
}

pub fn create_wallet_provider(opts: &WalletOptions<'_>) -> Result<WalletProvider> {
    let client = reqwest::Client::builder()
        .no_proxy()
        .user_agent(opts.app_name)
        .build()
        .context("failed to build wallet http client")?;
    let transport = Http::new_with_client(opts.wallet_url.clone(), client);
    tracing::debug!(
        app = opts.app_name,
        logo = opts.app_logo_url,
        wallet = %opts.wallet_url,
        chain_id = CHAIN_ID,
        "wallet provider created"
    );
    Ok(WalletProvider {
        provider: Provider::new(transport),
        app_name: opts.app_name.to_string(),
        app_logo_url: opts.app_logo_url.to_string(),
    })
}

/// Account-authorized calls. Never used for writes.
#[async_trait]
pub trait WalletAccess: Send + Sync {
    async fn chain_id(&self) -> Result<u64>;
    async fn addresses(&self) -> Result<Vec<Address>>;
}

#[derive(Debug, Clone)]
pub struct WalletClient<M> {
    inner: M,
}

impl<M> WalletClient<M> {
    pub fn new(inner: M) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<M> WalletAccess for WalletClient<M>
where
    M: Middleware + 'static,
    M::Error: 'static,
{
    async fn chain_id(&self) -> Result<u64> {
        let id = self
            .inner
            .get_chainid()
            .await
            .context("failed to query wallet chain id")?;
        if id.bits() > 64 {
            bail!("wallet reported an out of range chain id: {}", id);
        }
        Ok(id.low_u64())
    }

    async fn addresses(&self) -> Result<Vec<Address>> {
        self.inner
            .get_accounts()
            .await
            .context("failed to request wallet accounts")
    }
}
