//! Account adapter over a wallet agent.
//!
//! [`ConnectAccount`] presents the remote smart-contract wallet as a
//! standard signing account: an address, message signing, and transaction
//! signing. Typed-data (EIP-712) signing is a deliberate capability gap of
//! the wallet service and always fails loudly, distinguishable from
//! transport errors via [`Error::unsupported_capability`].
//!
//! [`Error::unsupported_capability`]: crate::error::Error::unsupported_capability

use std::fmt;
use std::sync::Arc;

use alloy::primitives::Address;
use serde::Serialize;

use crate::connector::{Capability, ConnectorError};
use crate::error::Result;
use crate::wallet::{SignedTransaction, TransactionIntent, WalletAgent};

/// Provenance tag an account advertises to frameworks that branch on how an
/// account signs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[non_exhaustive]
pub enum AccountSource {
    /// Private-key-style account. Reported for compatibility even though no
    /// raw private key exists anywhere; signing happens in the remote wallet.
    #[serde(rename = "privateKey")]
    PrivateKey,
}

impl AccountSource {
    /// The tag's wire form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PrivateKey => "privateKey",
        }
    }
}

/// The wallet agent wrapped into the generic signing-account shape.
#[derive(Clone)]
pub struct ConnectAccount {
    agent: Arc<dyn WalletAgent>,
}

impl fmt::Debug for ConnectAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectAccount")
            .field("address", &self.agent.address())
            .finish_non_exhaustive()
    }
}

impl ConnectAccount {
    /// Wrap `agent` into an account.
    #[must_use]
    pub fn new(agent: Arc<dyn WalletAgent>) -> Self {
        Self { agent }
    }

    /// The account address, as reported live by the wallet agent.
    ///
    /// Not cached: an account may be wrapped before the session is
    /// established, and the address it reports must track the session.
    #[must_use]
    pub fn address(&self) -> Address {
        self.agent.address()
    }

    /// The public key this account advertises. Equal to the address: the
    /// real key material never leaves the wallet service.
    #[must_use]
    pub fn public_key(&self) -> Address {
        self.address()
    }

    /// Provenance tag of this account.
    #[must_use]
    pub const fn source(&self) -> AccountSource {
        AccountSource::PrivateKey
    }

    /// Sign an arbitrary message with the remote wallet.
    ///
    /// May trigger interactive authentication inside the wallet service; any
    /// rejection propagates unchanged.
    pub async fn sign_message(&self, message: &str) -> Result<String> {
        Ok(self.agent.sign_message(message).await?)
    }

    /// Sign a transaction.
    ///
    /// Two-phase: the wallet service first builds the normalized payload
    /// from the intent, then signs it. The phases run strictly in sequence;
    /// a build failure aborts before signing is attempted.
    pub async fn sign_transaction(&self, intent: &TransactionIntent) -> Result<SignedTransaction> {
        let prepared = self.agent.build_transaction(intent).await?;
        Ok(self.agent.sign_transaction(&prepared).await?)
    }

    /// Typed-data (EIP-712) signing. Always fails with
    /// [`ConnectorError::Unsupported`]: the wallet service cannot produce
    /// these signatures, and callers must be able to tell that apart from a
    /// transient failure.
    pub async fn sign_typed_data(&self, _typed_data: &serde_json::Value) -> Result<String> {
        Err(ConnectorError::Unsupported(Capability::TypedDataSigning).into())
    }
}
