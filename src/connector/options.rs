//! Connector configuration.

use alloy::primitives::Address;

/// Immutable configuration for a [`SmartConnect`](super::SmartConnect)
/// instance.
///
/// Built via [`ConnectorOptions::builder`], which requires the API key up
/// front; everything else is optional. `shim_disconnect` defaults to true:
/// the wallet service has no native disconnect signal, so disconnected state
/// is emulated by a flag in persisted storage and sessions are only resumed
/// when the flag shows a previous explicit connect.
#[derive(Debug, Clone)]
pub struct ConnectorOptions {
    /// API key for the wallet service.
    pub api_key: String,
    /// Address to resume. Takes priority over any persisted address.
    pub wallet_address: Option<Address>,
    /// Disable the EOA fallback used when WebAuthn is unavailable.
    pub disable_eoa_fallback: bool,
    /// Salt mixed into local credential encryption.
    pub encryption_salt: Option<String>,
    /// WebAuthn credential options, forwarded opaquely to the wallet agent.
    pub webauthn_options: Option<serde_json::Value>,
    /// Display name for a newly created passkey.
    pub passkey_name: Option<String>,
    /// UI behavior options, forwarded opaquely to the wallet agent.
    pub ui_config: Option<serde_json::Value>,
    /// Override for the wallet service base URL.
    pub base_url: Option<String>,
    /// Override for the chain RPC endpoint.
    pub rpc_url: Option<String>,
    /// Track connection status in storage and only resume sessions that
    /// were explicitly established.
    pub shim_disconnect: bool,
}

impl ConnectorOptions {
    /// Start building options with the required API key.
    #[must_use]
    pub fn builder(api_key: impl Into<String>) -> ConnectorOptionsBuilder {
        ConnectorOptionsBuilder {
            options: Self {
                api_key: api_key.into(),
                wallet_address: None,
                disable_eoa_fallback: false,
                encryption_salt: None,
                webauthn_options: None,
                passkey_name: None,
                ui_config: None,
                base_url: None,
                rpc_url: None,
                shim_disconnect: true,
            },
        }
    }
}

/// Builder for [`ConnectorOptions`].
#[derive(Debug)]
pub struct ConnectorOptionsBuilder {
    options: ConnectorOptions,
}

impl ConnectorOptionsBuilder {
    /// Set the wallet address to resume.
    #[must_use]
    pub const fn wallet_address(mut self, address: Address) -> Self {
        self.options.wallet_address = Some(address);
        self
    }

    /// Disable the EOA fallback.
    #[must_use]
    pub const fn disable_eoa_fallback(mut self, disable: bool) -> Self {
        self.options.disable_eoa_fallback = disable;
        self
    }

    /// Set the credential encryption salt.
    #[must_use]
    pub fn encryption_salt(mut self, salt: impl Into<String>) -> Self {
        self.options.encryption_salt = Some(salt.into());
        self
    }

    /// Set the WebAuthn credential options.
    #[must_use]
    pub fn webauthn_options(mut self, options: serde_json::Value) -> Self {
        self.options.webauthn_options = Some(options);
        self
    }

    /// Set the display name for a newly created passkey.
    #[must_use]
    pub fn passkey_name(mut self, name: impl Into<String>) -> Self {
        self.options.passkey_name = Some(name.into());
        self
    }

    /// Set the UI behavior options.
    #[must_use]
    pub fn ui_config(mut self, config: serde_json::Value) -> Self {
        self.options.ui_config = Some(config);
        self
    }

    /// Override the wallet service base URL.
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.options.base_url = Some(url.into());
        self
    }

    /// Override the chain RPC endpoint.
    #[must_use]
    pub fn rpc_url(mut self, url: impl Into<String>) -> Self {
        self.options.rpc_url = Some(url.into());
        self
    }

    /// Enable or disable the shim-disconnect flag (default: enabled).
    #[must_use]
    pub const fn shim_disconnect(mut self, enabled: bool) -> Self {
        self.options.shim_disconnect = enabled;
        self
    }

    /// Finish building.
    #[must_use]
    pub fn build(self) -> ConnectorOptions {
        self.options
    }
}
