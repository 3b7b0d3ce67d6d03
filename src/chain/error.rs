use super::ChainId;

/// Errors from chain lookup and network-id conversion.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ChainError {
    /// No supported chain descriptor matches the requested id.
    #[error("no supported chain with id {0}")]
    NotFound(ChainId),

    /// A network id string is not a valid hex-encoded chain id.
    #[error("invalid network id '{0}'")]
    InvalidNetworkId(String),
}
