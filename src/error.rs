//! Crate-level error type aggregating the per-module errors.
//!
//! Each module owns its own error enum ([`ConnectorError`], [`ChainError`],
//! [`ClientError`], [`AgentError`]); this top-level [`Error`] wraps them so
//! callers can hold a single type while still matching on the exact failure.
//!
//! [`ConnectorError`]: crate::connector::ConnectorError
//! [`ChainError`]: crate::chain::ChainError
//! [`ClientError`]: crate::client::ClientError
//! [`AgentError`]: crate::wallet::AgentError

use crate::connector::{Capability, ConnectorError};

/// Result type alias for connector operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for this crate.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Connector lifecycle error.
    #[error(transparent)]
    Connector(#[from] ConnectorError),

    /// Chain lookup or network-id conversion error.
    #[error(transparent)]
    Chain(#[from] crate::chain::ChainError),

    /// Client construction error.
    #[error(transparent)]
    Client(#[from] crate::client::ClientError),

    /// Failure propagated unmodified from the wallet agent.
    #[error(transparent)]
    Agent(#[from] crate::wallet::AgentError),
}

impl Error {
    /// The permanently unavailable capability behind this error, if that is
    /// what it is.
    ///
    /// Lets callers tell a deliberate capability gap (typed-data signing,
    /// live event subscriptions) apart from transport or state failures;
    /// retrying a capability gap is never meaningful.
    #[must_use]
    pub const fn unsupported_capability(&self) -> Option<Capability> {
        match self {
            Self::Connector(ConnectorError::Unsupported(capability)) => Some(*capability),
            _ => None,
        }
    }
}
