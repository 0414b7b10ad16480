//! Common utilities for integration tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use alloy::primitives::{Address, TxHash};
use async_trait::async_trait;
use block_info_mcp::{
    types::{ReceiptStatusResponse, TransactionSummary},
    AppError, BlockInfoServer, ChainProvider, ChainQueryService, Config, ExplorerApi, Result,
};

/// In-memory chain provider.
#[derive(Default)]
pub struct FakeChain {
    pub block_number: u64,
    pub miners: HashMap<u64, Address>,
    pub gas_price: u128,
    pub transactions: HashMap<TxHash, TransactionSummary>,
    /// When set, every call fails with a transport error carrying this message.
    pub failure: Option<String>,
}

impl FakeChain {
    fn check(&self) -> Result<()> {
        match &self.failure {
            Some(msg) => Err(AppError::Transport(msg.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl ChainProvider for FakeChain {
    async fn block_number(&self) -> Result<u64> {
        self.check()?;
        Ok(self.block_number)
    }

    async fn block_miner(&self, number: u64) -> Result<Option<Address>> {
        self.check()?;
        Ok(self.miners.get(&number).copied())
    }

    async fn gas_price(&self) -> Result<u128> {
        self.check()?;
        Ok(self.gas_price)
    }

    async fn transaction_by_hash(&self, hash: TxHash) -> Result<Option<TransactionSummary>> {
        self.check()?;
        Ok(self.transactions.get(&hash).cloned())
    }
}

/// Explorer double returning a canned JSON envelope.
#[derive(Default)]
pub struct FakeExplorer {
    pub response: serde_json::Value,
    pub failure: Option<String>,
    /// Hashes passed to the explorer, in call order.
    pub requested: Mutex<Vec<String>>,
}

impl FakeExplorer {
    pub fn responding(response: serde_json::Value) -> Self {
        Self { response, ..Default::default() }
    }
}

#[async_trait]
impl ExplorerApi for FakeExplorer {
    async fn tx_receipt_status(&self, tx_hash: &str) -> Result<ReceiptStatusResponse> {
        self.requested.lock().unwrap().push(tx_hash.to_string());
        if let Some(msg) = &self.failure {
            return Err(AppError::Transport(msg.clone()));
        }
        serde_json::from_value(self.response.clone())
            .map_err(|e| AppError::Parse(e.to_string()))
    }
}

/// Build a server over the given fakes.
pub fn server_with(chain: FakeChain, explorer: FakeExplorer) -> BlockInfoServer {
    BlockInfoServer::with_service(ChainQueryService::new(Arc::new(chain), Arc::new(explorer)))
}

/// Build a server whose explorer is shared with the test for inspection.
pub fn server_with_shared_explorer(
    chain: FakeChain,
    explorer: Arc<FakeExplorer>,
) -> BlockInfoServer {
    BlockInfoServer::with_service(ChainQueryService::new(Arc::new(chain), explorer))
}

/// Server with no chain data and an explorer that reports failure.
pub fn empty_server() -> BlockInfoServer {
    server_with(FakeChain::default(), FakeExplorer::responding(serde_json::json!({"status": "0"})))
}

/// `0x` followed by 40 hex digits.
pub fn is_hex_address(s: &str) -> bool {
    s.len() == 42 && s.starts_with("0x") && s[2..].chars().all(|c| c.is_ascii_hexdigit())
}

/// One or more ASCII digits, optionally followed by `.` and more digits.
pub fn is_decimal(s: &str) -> bool {
    let mut parts = s.splitn(2, '.');
    let digits = |p: &str| !p.is_empty() && p.chars().all(|c| c.is_ascii_digit());
    let integer = parts.next().unwrap_or_default();
    digits(integer) && parts.next().map_or(true, digits)
}

/// Helper to create a server against a live node from environment variables.
pub fn create_live_server() -> Option<BlockInfoServer> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let has_endpoint = ["INFURA_PROJECT_ID", "ETHEREUM_RPC_URL"]
        .iter()
        .any(|name| std::env::var(name).map(|v| !v.is_empty()).unwrap_or(false));

    if !has_endpoint {
        return None;
    }

    BlockInfoServer::new(Config::from_env()).ok()
}

/// Skip test if no live endpoint is configured.
#[macro_export]
macro_rules! skip_if_no_server {
    () => {
        match common::create_live_server() {
            Some(server) => server,
            None => {
                eprintln!("Skipping test: INFURA_PROJECT_ID or ETHEREUM_RPC_URL not set");
                return;
            }
        }
    };
}
