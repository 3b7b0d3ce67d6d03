/// Errors from client construction and RPC access.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ClientError {
    /// The RPC endpoint URL could not be parsed.
    #[error("invalid rpc url '{url}': {reason}")]
    InvalidRpcUrl {
        /// The offending URL string.
        url: String,
        /// Parser diagnostic.
        reason: String,
    },

    /// The HTTP transport could not be constructed or an RPC call failed.
    #[error("transport error: {0}")]
    Transport(String),
}

impl ClientError {
    /// Create a transport error.
    #[must_use]
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }
}
