use std::fmt;

use crate::chain::ChainId;

/// Capabilities this connector deliberately does not provide.
///
/// These are permanent gaps, not transient failures; retrying is never
/// meaningful.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Capability {
    /// Typed-data (EIP-712) signing.
    TypedDataSigning,
    /// Live accounts-changed notifications.
    AccountsChangedEvents,
    /// Live chain-changed notifications.
    ChainChangedEvents,
    /// Live disconnect notifications.
    DisconnectEvents,
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::TypedDataSigning => "typed-data signing",
            Self::AccountsChangedEvents => "accounts-changed events",
            Self::ChainChangedEvents => "chain-changed events",
            Self::DisconnectEvents => "disconnect events",
        };
        write!(f, "{name}")
    }
}

/// Errors raised by the connector lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ConnectorError {
    /// An explicitly requested chain is not supported by the wallet service.
    #[error("network {0} is not supported")]
    UnsupportedNetwork(ChainId),

    /// None of the chains configured at construction are supported.
    #[error("none of the configured chains are supported")]
    NoSupportedChains,

    /// An operation that needs an active wallet session ran before a
    /// successful `connect`.
    #[error("wallet is not connected")]
    NotConnected,

    /// A permanently unavailable capability was invoked.
    #[error("unsupported capability: {0}")]
    Unsupported(Capability),

    /// A `connect` call overlapped with one already in flight.
    #[error("a connect is already in progress")]
    ConnectInProgress,
}
