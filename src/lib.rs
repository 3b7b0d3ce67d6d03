//! Connector adapter that lets a remote smart-contract wallet participate as
//! a standard account inside an Ethereum-style client/account framework.
//!
//! The wallet service performs connection, transaction building, and signing
//! remotely; this crate adapts that surface onto the connector, client, and
//! account contracts a hosting framework expects:
//!
//! - [`connector::SmartConnect`] — the connect/disconnect lifecycle state
//!   machine: chain and credential selection, the three-way address
//!   resolution that makes reload-time session resumption work, and the
//!   persisted shim-disconnect flag.
//! - [`client::ConnectClient`] — a chain-bound client combining standard
//!   reads with wallet-backed write actions.
//! - [`account::ConnectAccount`] — the wallet presented as a signing
//!   account. Typed-data signing is deliberately unsupported and always
//!   fails.
//!
//! The wallet service itself is consumed behind the [`wallet::WalletAgent`]
//! trait, and persisted state behind [`storage::Storage`]. Both are injected
//! capabilities: hosts supply their own implementations, tests use
//! in-memory stand-ins.
//!
//! # Example
//!
//! ```rust,ignore
//! use smart_connect::{
//!     ConnectRequest, Connector, ConnectorOptions, SmartConnect, SUPPORTED_CHAINS,
//! };
//!
//! let options = ConnectorOptions::builder("api-key").build();
//! let mut connector = SmartConnect::new(&SUPPORTED_CHAINS[..1], options, factory, storage);
//!
//! let connection = connector.connect(ConnectRequest::default()).await?;
//! let client = connector.wallet_client().expect("bound after connect");
//! let signature = client.sign_message("hello").await?;
//! ```

pub mod account;
pub mod chain;
pub mod client;
pub mod connector;
pub mod error;
pub mod storage;
pub mod wallet;

pub use account::{AccountSource, ConnectAccount};
pub use chain::{ChainDescriptor, ChainError, ChainId, NetworkId, SUPPORTED_CHAINS};
pub use client::{ClientError, ConnectClient};
pub use connector::{
    CONNECTOR_ID, CONNECTOR_NAME, Capability, ConnectRequest, Connection, Connector,
    ConnectorError, ConnectorOptions, ConnectorState, SmartConnect,
};
pub use error::{Error, Result};
pub use storage::{MemoryStorage, Storage};
pub use wallet::{
    AgentConfig, AgentError, PreparedTransaction, SignedTransaction, TransactionIntent,
    WalletAgent, WalletAgentFactory,
};
