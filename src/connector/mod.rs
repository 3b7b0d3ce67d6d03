//! Connector lifecycle state machine.
//!
//! [`SmartConnect`] owns the connect/disconnect/reauthorize lifecycle of a
//! wallet session: chain and credential selection, construction of the
//! wallet agent and the chain-bound client on every connect, and session
//! persistence across page reloads via the shim-disconnect flag.
//!
//! # Lifecycle
//!
//! ```text
//! Uninitialized ──connect──▶ Connecting ──ok──▶ Connected
//!        ▲                       │                 │  ▲
//!        └───────────err────────┘│                 │  └─connect (reconnect)
//!                                ▼                 ▼
//!                           Disconnected ◀──disconnect
//! ```
//!
//! `connect` resolves the session address in three ways, tried in order: an
//! explicit address from the options, a previously persisted address from
//! storage, or a fresh connect whose resulting address is then persisted.
//! That priority is what makes reload-time session resumption work.

mod error;
mod options;

pub use error::{Capability, ConnectorError};
pub use options::{ConnectorOptions, ConnectorOptionsBuilder};

use std::fmt;
use std::sync::Arc;

use alloy::primitives::Address;
use async_trait::async_trait;
use tracing::{info, warn};

use crate::chain::{self, ChainDescriptor, ChainId, NetworkId};
use crate::client::ConnectClient;
use crate::error::Result;
use crate::storage::{self, Storage};
use crate::wallet::{AgentConfig, WalletAgent, WalletAgentFactory};

/// Fixed identity string of this connector.
pub const CONNECTOR_ID: &str = "smart-connect";

/// Human-readable connector name.
pub const CONNECTOR_NAME: &str = "Smart Connect";

/// Lifecycle states of a connector instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectorState {
    /// Constructed, never connected.
    #[default]
    Uninitialized,
    /// A connect is in flight.
    Connecting,
    /// A session is active.
    Connected,
    /// The last session was explicitly ended.
    Disconnected,
}

/// Parameters for [`Connector::connect`].
///
/// `chain_id` and `provided_api_key` only take effect together; when either
/// is missing the connector falls back to the first chain derived as
/// supported at construction and the options-level API key.
#[derive(Debug, Clone, Default)]
pub struct ConnectRequest {
    /// Target chain.
    pub chain_id: Option<ChainId>,
    /// API key linked to the target chain.
    pub provided_api_key: Option<String>,
}

/// Successful connection summary returned by [`Connector::connect`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Connection {
    /// The connected account address.
    pub account: Address,
    /// The chain the session is bound to.
    pub chain: ConnectionChain,
}

/// Chain summary inside a [`Connection`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectionChain {
    /// Numeric chain id, as reported live by the wallet agent.
    pub id: ChainId,
    /// Whether the hosting framework should treat the chain as unsupported.
    /// Always false here: an unsupported chain fails `connect` instead.
    pub unsupported: bool,
}

/// Capability contract of a wallet connector, as consumed by a hosting
/// framework.
#[async_trait]
pub trait Connector: Send {
    /// Fixed identity string, also used to namespace persisted keys.
    fn id(&self) -> &'static str;

    /// Human-readable display name.
    fn name(&self) -> &'static str;

    /// Whether the connector is ready to accept `connect` calls.
    fn ready(&self) -> bool;

    /// Establish a wallet session.
    async fn connect(&mut self, request: ConnectRequest) -> Result<Connection>;

    /// End the active session.
    async fn disconnect(&mut self) -> Result<()>;

    /// Address of the active session.
    async fn account(&self) -> Result<Address>;

    /// Live chain id when connected; before any connect, the first
    /// construction-derived supported chain as a best-effort default.
    async fn chain_id(&self) -> Result<ChainId>;

    /// Whether a session can be resumed without user action. Never fails:
    /// frameworks poll this speculatively, so every error degrades to
    /// `false`.
    async fn is_authorized(&self) -> bool;

    /// The currently bound client, if any.
    fn provider(&self) -> Option<Arc<ConnectClient>>;

    /// The currently bound client, if any (write-capable view).
    fn wallet_client(&self) -> Option<Arc<ConnectClient>>;

    /// Subscribe to accounts-changed notifications. Not supported; fails so
    /// frameworks learn the gap instead of waiting on silence.
    fn on_accounts_changed(&mut self) -> Result<()>;

    /// Subscribe to chain-changed notifications. Not supported.
    fn on_chain_changed(&mut self) -> Result<()>;

    /// Subscribe to disconnect notifications. Not supported.
    fn on_disconnect(&mut self) -> Result<()>;
}

/// Connector for the remote smart-contract wallet service.
pub struct SmartConnect {
    options: ConnectorOptions,
    supported_chains: Vec<NetworkId>,
    state: ConnectorState,
    wallet: Option<Arc<dyn WalletAgent>>,
    client: Option<Arc<ConnectClient>>,
    factory: Arc<dyn WalletAgentFactory>,
    storage: Arc<dyn Storage>,
    shim_key: String,
}

impl fmt::Debug for SmartConnect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SmartConnect")
            .field("state", &self.state)
            .field("supported_chains", &self.supported_chains)
            .finish_non_exhaustive()
    }
}

impl SmartConnect {
    /// Create a connector over the given candidate chains.
    ///
    /// Chains the wallet service does not support are skipped with a
    /// warning. An empty result is not an error here: the connector stays
    /// ready and the failure surfaces on `connect`, where the caller can act
    /// on it.
    pub fn new(
        chains: &[ChainDescriptor],
        options: ConnectorOptions,
        factory: Arc<dyn WalletAgentFactory>,
        storage: Arc<dyn Storage>,
    ) -> Self {
        let mut supported = Vec::with_capacity(chains.len());
        for descriptor in chains {
            let network = descriptor.id.to_network_id();
            if chain::is_supported_network(&network) {
                supported.push(network);
            } else {
                warn!(
                    chain = descriptor.name,
                    id = %descriptor.id,
                    "chain is not supported by the wallet service"
                );
            }
        }

        Self {
            options,
            supported_chains: supported,
            state: ConnectorState::Uninitialized,
            wallet: None,
            client: None,
            factory,
            storage,
            shim_key: storage::shim_disconnect_key(CONNECTOR_ID),
        }
    }

    /// Current lifecycle state.
    #[must_use]
    pub const fn state(&self) -> ConnectorState {
        self.state
    }

    /// Networks derived as supported at construction, in input order.
    #[must_use]
    pub fn supported_chains(&self) -> &[NetworkId] {
        &self.supported_chains
    }

    /// Chain/credential selection policy.
    ///
    /// An explicit chain id and API key together override the default
    /// derived at construction; the chain id must then pass the support
    /// check. The
    /// two failure modes are distinct: an unsupported explicit chain raises
    /// [`ConnectorError::UnsupportedNetwork`], an empty derived set raises
    /// [`ConnectorError::NoSupportedChains`].
    fn select_chain_and_key(&self, request: &ConnectRequest) -> Result<(NetworkId, String)> {
        if let (Some(chain_id), Some(key)) = (request.chain_id, request.provided_api_key.clone()) {
            let network = chain_id.to_network_id();
            if !chain::is_supported_network(&network) {
                return Err(ConnectorError::UnsupportedNetwork(chain_id).into());
            }
            return Ok((network, key));
        }

        let Some(first) = self.supported_chains.first() else {
            return Err(ConnectorError::NoSupportedChains.into());
        };
        if self.supported_chains.len() > 1 {
            warn!("multichain is not supported; using the first configured chain");
        }
        Ok((first.clone(), self.options.api_key.clone()))
    }

    /// Three-way address resolution, in priority order: explicit options
    /// address (persisted after connecting), persisted address (resumed
    /// as-is), fresh connect (resulting address persisted).
    async fn resolve_address(&self, agent: &Arc<dyn WalletAgent>) -> Result<()> {
        if let Some(address) = self.options.wallet_address {
            agent.connect(Some(address)).await?;
            self.storage
                .set_item(storage::WALLET_ADDRESS_KEY, &address.to_checksum(None));
            return Ok(());
        }

        if let Some(saved) = self.storage.get_item(storage::WALLET_ADDRESS_KEY) {
            match saved.parse::<Address>() {
                Ok(address) => {
                    agent.connect(Some(address)).await?;
                    return Ok(());
                }
                Err(err) => {
                    warn!(%err, "discarding unparseable persisted wallet address");
                }
            }
        }

        agent.connect(None).await?;
        self.storage
            .set_item(storage::WALLET_ADDRESS_KEY, &agent.address().to_checksum(None));
        Ok(())
    }

    /// The connect phases, strictly in sequence: selection, agent
    /// construction, client construction, address resolution, shim
    /// persistence. Each phase's output feeds the next.
    async fn do_connect(&mut self, request: ConnectRequest) -> Result<Connection> {
        let (network, api_key) = self.select_chain_and_key(&request)?;
        let chain_id = network.to_chain_id()?;

        let agent = self.factory.create(AgentConfig {
            chain_id,
            api_key,
            disable_eoa_fallback: self.options.disable_eoa_fallback,
            encryption_salt: self.options.encryption_salt.clone(),
            webauthn_options: self.options.webauthn_options.clone(),
            passkey_name: self.options.passkey_name.clone(),
            ui_config: self.options.ui_config.clone(),
            base_url: self.options.base_url.clone(),
            rpc_url: self.options.rpc_url.clone(),
        })?;

        let client = ConnectClient::new(
            Arc::clone(&agent),
            &self.options.api_key,
            self.options.rpc_url.as_deref(),
        )?;

        self.resolve_address(&agent).await?;

        if self.options.shim_disconnect {
            self.storage.set_item(&self.shim_key, "true");
        }

        let account = agent.address();
        let live_chain = agent.chain_id();
        self.wallet = Some(agent);
        self.client = Some(Arc::new(client));

        info!(account = %account, chain = %network, "connected");

        Ok(Connection {
            account,
            chain: ConnectionChain {
                id: live_chain,
                unsupported: false,
            },
        })
    }
}

/// Restores the pre-connect state when a `connect` future is dropped at an
/// await point. Without this, an abandoned connect would leave the connector
/// in `Connecting` and reject every later attempt.
struct ConnectingGuard<'a> {
    connector: &'a mut SmartConnect,
    previous: ConnectorState,
}

impl Drop for ConnectingGuard<'_> {
    fn drop(&mut self) {
        if self.connector.state == ConnectorState::Connecting {
            self.connector.state = self.previous;
        }
    }
}

#[async_trait]
impl Connector for SmartConnect {
    fn id(&self) -> &'static str {
        CONNECTOR_ID
    }

    fn name(&self) -> &'static str {
        CONNECTOR_NAME
    }

    fn ready(&self) -> bool {
        true
    }

    async fn connect(&mut self, request: ConnectRequest) -> Result<Connection> {
        if self.state == ConnectorState::Connecting {
            return Err(ConnectorError::ConnectInProgress.into());
        }
        let previous = self.state;
        let mut guard = ConnectingGuard {
            connector: self,
            previous,
        };
        guard.connector.state = ConnectorState::Connecting;
        let connection = guard.connector.do_connect(request).await?;
        guard.connector.state = ConnectorState::Connected;
        Ok(connection)
    }

    async fn disconnect(&mut self) -> Result<()> {
        let Some(wallet) = self.wallet.clone() else {
            return Err(ConnectorError::NotConnected.into());
        };
        if self.options.shim_disconnect {
            self.storage.remove_item(&self.shim_key);
        }
        wallet.logout().await?;
        // Known hazard: the wallet and client references stay populated
        // after logout. They are functionally invalid and must not be
        // reused.
        self.state = ConnectorState::Disconnected;
        Ok(())
    }

    async fn account(&self) -> Result<Address> {
        self.wallet
            .as_ref()
            .map(|wallet| wallet.address())
            .ok_or_else(|| ConnectorError::NotConnected.into())
    }

    async fn chain_id(&self) -> Result<ChainId> {
        if let Some(wallet) = &self.wallet {
            return Ok(wallet.chain_id());
        }
        let Some(first) = self.supported_chains.first() else {
            return Err(ConnectorError::NoSupportedChains.into());
        };
        Ok(first.to_chain_id()?)
    }

    async fn is_authorized(&self) -> bool {
        // Absence of the shim flag means no previous explicit connect, even
        // if a wallet session could technically be resumed.
        if self.options.shim_disconnect && self.storage.get_item(&self.shim_key).is_none() {
            return false;
        }
        self.client.is_some()
    }

    fn provider(&self) -> Option<Arc<ConnectClient>> {
        self.client.clone()
    }

    fn wallet_client(&self) -> Option<Arc<ConnectClient>> {
        self.client.clone()
    }

    fn on_accounts_changed(&mut self) -> Result<()> {
        Err(ConnectorError::Unsupported(Capability::AccountsChangedEvents).into())
    }

    fn on_chain_changed(&mut self) -> Result<()> {
        Err(ConnectorError::Unsupported(Capability::ChainChangedEvents).into())
    }

    fn on_disconnect(&mut self) -> Result<()> {
        Err(ConnectorError::Unsupported(Capability::DisconnectEvents).into())
    }
}
