/// Errors surfaced by a wallet agent.
///
/// These pass through the adapter layers unmodified: no retry policy, no
/// reclassification of remote failures. The variants only mark which side of
/// the boundary failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum AgentError {
    /// Network or connection failure reaching the wallet service.
    #[error("transport error: {0}")]
    Transport(String),

    /// The wallet service answered with an error.
    #[error("wallet service error: {0}")]
    Remote(String),

    /// The user or authenticator rejected an interactive request.
    #[error("request rejected: {0}")]
    Rejected(String),
}

impl AgentError {
    /// Create a transport error.
    #[must_use]
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    /// Create a remote service error.
    #[must_use]
    pub fn remote(message: impl Into<String>) -> Self {
        Self::Remote(message.into())
    }

    /// Create a rejection error.
    #[must_use]
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected(message.into())
    }
}
