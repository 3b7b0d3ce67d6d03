//! The wallet-agent boundary.
//!
//! The remote smart-contract wallet is consumed as an opaque capability:
//! [`WalletAgent`] is the operation surface the rest of the crate programs
//! against, and [`WalletAgentFactory`] constructs an agent bound to a
//! selected chain and API key. Concrete implementations live with the host;
//! this crate only adapts the surface onto the account/client/connector
//! contracts a framework expects.
//!
//! Transaction signing is two-phase by contract: the service first builds a
//! normalized payload ([`PreparedTransaction`]) from a [`TransactionIntent`],
//! then signs that payload. Both payloads are opaque here.

mod error;
#[cfg(test)]
pub(crate) mod mock;

pub use error::AgentError;

use std::sync::Arc;

use alloy::primitives::{Address, Bytes, U256};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::chain::ChainId;

/// A transaction the caller wants signed: recipient, value, calldata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionIntent {
    /// Recipient address.
    pub to: Address,
    /// Native value in wei.
    pub value: U256,
    /// Calldata; empty for plain transfers.
    pub data: Bytes,
}

impl TransactionIntent {
    /// Hex encoding of the value, the representation the wallet service
    /// expects for big integers.
    #[must_use]
    pub fn value_hex(&self) -> String {
        format!("{:#x}", self.value)
    }
}

/// A transaction payload built by the wallet service. Opaque to this crate;
/// it is handed back unchanged for signing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreparedTransaction(pub serde_json::Value);

/// A signed transaction payload produced by the wallet service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedTransaction(pub String);

/// Configuration handed to a [`WalletAgentFactory`] when the connector
/// constructs an agent for a selected chain and API key.
#[derive(Debug, Clone)]
pub struct AgentConfig {
    /// The chain the agent is bound to.
    pub chain_id: ChainId,
    /// API key the agent authenticates with.
    pub api_key: String,
    /// Disable falling back to a locally stored key when WebAuthn is
    /// unavailable.
    pub disable_eoa_fallback: bool,
    /// Salt mixed into local credential encryption.
    pub encryption_salt: Option<String>,
    /// WebAuthn credential options, forwarded opaquely.
    pub webauthn_options: Option<serde_json::Value>,
    /// Display name for a newly created passkey.
    pub passkey_name: Option<String>,
    /// UI behavior options, forwarded opaquely.
    pub ui_config: Option<serde_json::Value>,
    /// Override for the wallet service base URL.
    pub base_url: Option<String>,
    /// Override for the chain RPC endpoint.
    pub rpc_url: Option<String>,
}

/// Operation surface of the remote smart-contract wallet.
///
/// All failures cross this boundary unmodified as [`AgentError`]; the
/// adapter layers above add no retry policy and no reclassification.
#[async_trait]
pub trait WalletAgent: Send + Sync {
    /// Establish a session, resuming `address` when given or provisioning a
    /// fresh wallet otherwise. May involve interactive authentication.
    async fn connect(&self, address: Option<Address>) -> Result<(), AgentError>;

    /// The wallet address of the current session.
    fn address(&self) -> Address;

    /// The chain this agent is bound to.
    fn chain_id(&self) -> ChainId;

    /// Sign an arbitrary message; returns a `0x`-prefixed hex signature.
    async fn sign_message(&self, message: &str) -> Result<String, AgentError>;

    /// Ask the wallet service to build a normalized transaction payload.
    async fn build_transaction(
        &self,
        intent: &TransactionIntent,
    ) -> Result<PreparedTransaction, AgentError>;

    /// Sign a payload previously returned by
    /// [`build_transaction`](Self::build_transaction).
    async fn sign_transaction(
        &self,
        prepared: &PreparedTransaction,
    ) -> Result<SignedTransaction, AgentError>;

    /// End the session.
    async fn logout(&self) -> Result<(), AgentError>;
}

/// Constructor capability for wallet agents.
///
/// The connector calls this once per `connect`, after chain and credential
/// selection.
pub trait WalletAgentFactory: Send + Sync {
    /// Build an agent bound to the chain and credentials in `config`.
    fn create(&self, config: AgentConfig) -> Result<Arc<dyn WalletAgent>, AgentError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transaction_intent_value_hex() {
        let intent = TransactionIntent {
            to: Address::ZERO,
            value: U256::from(1_000_000_000_000_000_000_u64),
            data: Bytes::new(),
        };
        assert_eq!(intent.value_hex(), "0xde0b6b3a7640000");

        let zero = TransactionIntent {
            to: Address::ZERO,
            value: U256::ZERO,
            data: Bytes::new(),
        };
        assert_eq!(zero.value_hex(), "0x0");
    }
}
