//! Chain-bound client over the wallet agent.
//!
//! The factory resolves the chain descriptor matching the agent's reported
//! chain id, builds an HTTP provider for standard reads, and embeds the
//! account adapter for wallet-authenticated writes. The client holds no
//! mutable state and is reconstructed on every connect.

mod error;

pub use error::ClientError;

use std::fmt;
use std::sync::Arc;

use alloy::network::Ethereum;
use alloy::primitives::{Address, U256};
use alloy::providers::{Provider, RootProvider};
use alloy::rpc::client::RpcClient;
use alloy::transports::http::{Http, reqwest};

use crate::account::ConnectAccount;
use crate::chain::{ChainDescriptor, ChainError, ChainId, find_chain};
use crate::error::Result;
use crate::wallet::{SignedTransaction, TransactionIntent, WalletAgent};

/// HTTP header carrying the API key on every RPC request, so remote calls
/// made through the bound provider are attributable.
const API_KEY_HEADER: &str = "apikey";

/// A client bound to one chain and one wallet agent: standard reads through
/// an HTTP provider, writes through the embedded [`ConnectAccount`].
pub struct ConnectClient {
    chain: &'static ChainDescriptor,
    provider: RootProvider<Ethereum>,
    account: ConnectAccount,
}

impl fmt::Debug for ConnectClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectClient")
            .field("chain", &self.chain.name)
            .field("account", &self.account.address())
            .finish_non_exhaustive()
    }
}

impl ConnectClient {
    /// Build a client for the chain the agent reports.
    ///
    /// Fails with [`ChainError::NotFound`] when the agent's chain id matches
    /// no supported descriptor; a client is never constructed against an
    /// unresolved chain. `rpc_url` overrides the chain's default endpoint.
    pub fn new(
        agent: Arc<dyn WalletAgent>,
        api_key: &str,
        rpc_url: Option<&str>,
    ) -> Result<Self> {
        let chain_id = agent.chain_id();
        let chain = find_chain(chain_id).ok_or(ChainError::NotFound(chain_id))?;

        let endpoint = rpc_url.unwrap_or_else(|| chain.default_rpc_url());
        let url: reqwest::Url = endpoint.parse().map_err(|e| ClientError::InvalidRpcUrl {
            url: endpoint.to_string(),
            reason: format!("{e}"),
        })?;

        let mut headers = reqwest::header::HeaderMap::new();
        let key = reqwest::header::HeaderValue::from_str(api_key)
            .map_err(|e| ClientError::transport(format!("api key is not a valid header: {e}")))?;
        headers.insert(API_KEY_HEADER, key);

        let http_client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| ClientError::transport(e.to_string()))?;

        let transport = Http::with_client(http_client, url);
        let provider = RootProvider::<Ethereum>::new(RpcClient::new(transport, false));

        let account = ConnectAccount::new(agent);

        Ok(Self {
            chain,
            provider,
            account,
        })
    }

    /// The chain this client is bound to.
    #[must_use]
    pub const fn chain(&self) -> &'static ChainDescriptor {
        self.chain
    }

    /// Numeric id of the bound chain.
    #[must_use]
    pub const fn chain_id(&self) -> ChainId {
        self.chain.id
    }

    /// The wallet-backed account used for write actions.
    #[must_use]
    pub const fn account(&self) -> &ConnectAccount {
        &self.account
    }

    /// Get the native token balance of `address`.
    pub async fn balance(&self, address: Address) -> Result<U256> {
        Ok(self
            .provider
            .get_balance(address)
            .await
            .map_err(|e| ClientError::transport(format!("failed to get balance: {e}")))?)
    }

    /// Get the current block number.
    pub async fn block_number(&self) -> Result<u64> {
        Ok(self
            .provider
            .get_block_number()
            .await
            .map_err(|e| ClientError::transport(format!("failed to get block number: {e}")))?)
    }

    /// Sign an arbitrary message with the bound wallet.
    pub async fn sign_message(&self, message: &str) -> Result<String> {
        self.account.sign_message(message).await
    }

    /// Sign a transaction with the bound wallet (remote build, then sign).
    pub async fn sign_transaction(&self, intent: &TransactionIntent) -> Result<SignedTransaction> {
        self.account.sign_transaction(intent).await
    }
}
