//! Chain identity types and the supported-network registry.
//!
//! A chain is identified internally by its numeric EIP-155 id ([`ChainId`]).
//! The wallet service's own support enum speaks the hex-encoded form instead
//! ([`NetworkId`]); the two representations are reconciled only through the
//! named conversions here, never ad hoc at call sites.

mod error;
mod registry;

pub use error::ChainError;
pub use registry::{SUPPORTED_CHAINS, find_chain, is_supported_network};

use serde::{Deserialize, Serialize};

/// Numeric chain identifier (EIP-155).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct ChainId(pub u64);

impl ChainId {
    /// Hex-encode this chain id into the representation the wallet service's
    /// network enum uses (lowercase, `0x`-prefixed).
    #[must_use]
    pub fn to_network_id(self) -> NetworkId {
        NetworkId(format!("{:#x}", self.0))
    }
}

impl From<u64> for ChainId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ChainId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Hex-string network identifier, e.g. `"0x89"` for Polygon.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NetworkId(String);

impl NetworkId {
    /// Decode back to the numeric chain id.
    pub fn to_chain_id(&self) -> Result<ChainId, ChainError> {
        let digits = self
            .0
            .strip_prefix("0x")
            .ok_or_else(|| ChainError::InvalidNetworkId(self.0.clone()))?;
        u64::from_str_radix(digits, 16)
            .map(ChainId)
            .map_err(|_| ChainError::InvalidNetworkId(self.0.clone()))
    }

    /// The raw hex string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for NetworkId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Native currency metadata for a chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NativeCurrency {
    /// Currency name.
    pub name: &'static str,
    /// Ticker symbol.
    pub symbol: &'static str,
    /// Decimal places of the smallest unit.
    pub decimals: u8,
}

/// Static metadata describing a blockchain network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainDescriptor {
    /// Numeric chain id.
    pub id: ChainId,
    /// Display name.
    pub name: &'static str,
    /// Native currency of the chain.
    pub native_currency: NativeCurrency,
    /// Public RPC endpoints, most preferred first.
    pub rpc_urls: &'static [&'static str],
}

impl ChainDescriptor {
    /// The preferred RPC endpoint for this chain.
    #[must_use]
    pub const fn default_rpc_url(&self) -> &'static str {
        self.rpc_urls[0]
    }
}
