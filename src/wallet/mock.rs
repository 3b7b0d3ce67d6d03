//! Scriptable wallet agent and factory for tests.
//!
//! [`MockAgent`] records every call in order and supports injected failures,
//! so tests can assert both outcomes and the exact sequence of boundary
//! operations.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use alloy::primitives::Address;
use async_trait::async_trait;

use super::{
    AgentConfig, AgentError, PreparedTransaction, SignedTransaction, TransactionIntent,
    WalletAgent, WalletAgentFactory,
};
use crate::chain::ChainId;

pub(crate) struct MockAgent {
    own_address: Address,
    chain_id: ChainId,
    fail_build: bool,
    fail_connect: bool,
    stall_connect: bool,
    /// Boundary calls in invocation order.
    pub calls: Mutex<Vec<&'static str>>,
    /// The argument of the last `connect` call, once one happened.
    pub connected_with: Mutex<Option<Option<Address>>>,
    current: Mutex<Option<Address>>,
}

impl MockAgent {
    pub fn new(own_address: Address, chain_id: ChainId) -> Self {
        Self {
            own_address,
            chain_id,
            fail_build: false,
            fail_connect: false,
            stall_connect: false,
            calls: Mutex::new(Vec::new()),
            connected_with: Mutex::new(None),
            current: Mutex::new(None),
        }
    }

    pub fn failing_build(mut self) -> Self {
        self.fail_build = true;
        self
    }

    pub fn failing_connect(mut self) -> Self {
        self.fail_connect = true;
        self
    }

    /// Make `connect` park forever, so tests can drop a connect future at
    /// an await point.
    pub fn stalling_connect(mut self) -> Self {
        self.stall_connect = true;
        self
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().expect("mock mutex").clone()
    }

    pub fn connect_argument(&self) -> Option<Option<Address>> {
        *self.connected_with.lock().expect("mock mutex")
    }

    fn record(&self, call: &'static str) {
        self.calls.lock().expect("mock mutex").push(call);
    }
}

#[async_trait]
impl WalletAgent for MockAgent {
    async fn connect(&self, address: Option<Address>) -> Result<(), AgentError> {
        self.record("connect");
        *self.connected_with.lock().expect("mock mutex") = Some(address);
        if self.stall_connect {
            std::future::pending::<()>().await;
        }
        if self.fail_connect {
            return Err(AgentError::remote("connect refused"));
        }
        *self.current.lock().expect("mock mutex") = Some(address.unwrap_or(self.own_address));
        Ok(())
    }

    fn address(&self) -> Address {
        self.current
            .lock()
            .expect("mock mutex")
            .unwrap_or(self.own_address)
    }

    fn chain_id(&self) -> ChainId {
        self.chain_id
    }

    async fn sign_message(&self, _message: &str) -> Result<String, AgentError> {
        self.record("sign_message");
        Ok("0xsigned".to_string())
    }

    async fn build_transaction(
        &self,
        intent: &TransactionIntent,
    ) -> Result<PreparedTransaction, AgentError> {
        self.record("build_transaction");
        if self.fail_build {
            return Err(AgentError::remote("build refused"));
        }
        Ok(PreparedTransaction(serde_json::json!({
            "to": intent.to.to_checksum(None),
            "value": intent.value_hex(),
            "data": format!("{}", intent.data),
        })))
    }

    async fn sign_transaction(
        &self,
        prepared: &PreparedTransaction,
    ) -> Result<SignedTransaction, AgentError> {
        self.record("sign_transaction");
        Ok(SignedTransaction(format!("signed:{}", prepared.0)))
    }

    async fn logout(&self) -> Result<(), AgentError> {
        self.record("logout");
        Ok(())
    }
}

/// Factory handing out one preconfigured [`MockAgent`], counting creations
/// and capturing the last [`AgentConfig`].
pub(crate) struct MockFactory {
    pub agent: Arc<MockAgent>,
    pub created: AtomicUsize,
    pub last_config: Mutex<Option<AgentConfig>>,
    fail_create: bool,
}

impl MockFactory {
    pub fn new(agent: Arc<MockAgent>) -> Self {
        Self {
            agent,
            created: AtomicUsize::new(0),
            last_config: Mutex::new(None),
            fail_create: false,
        }
    }

    pub fn failing(agent: Arc<MockAgent>) -> Self {
        Self {
            fail_create: true,
            ..Self::new(agent)
        }
    }

    pub fn created_count(&self) -> usize {
        self.created.load(Ordering::SeqCst)
    }

    pub fn last_config(&self) -> Option<AgentConfig> {
        self.last_config.lock().expect("mock mutex").clone()
    }
}

impl WalletAgentFactory for MockFactory {
    fn create(&self, config: AgentConfig) -> Result<Arc<dyn WalletAgent>, AgentError> {
        self.created.fetch_add(1, Ordering::SeqCst);
        *self.last_config.lock().expect("mock mutex") = Some(config);
        if self.fail_create {
            return Err(AgentError::remote("provisioning failed"));
        }
        let agent: Arc<dyn WalletAgent> = self.agent.clone();
        Ok(agent)
    }
}
