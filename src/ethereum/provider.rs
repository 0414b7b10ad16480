//! Chain data provider abstraction.

use alloy::primitives::{Address, TxHash};
use async_trait::async_trait;

use crate::{error::Result, types::TransactionSummary};

/// Read-only access to an Ethereum node.
///
/// The server holds this behind an `Arc<dyn ChainProvider>` so the query
/// service can run against the real JSON-RPC client or an in-memory fake.
#[async_trait]
pub trait ChainProvider: Send + Sync {
    /// Latest block height.
    async fn block_number(&self) -> Result<u64>;

    /// Coinbase of the given block, `None` if the node has no such block.
    async fn block_miner(&self, number: u64) -> Result<Option<Address>>;

    /// Current gas price in wei (`eth_gasPrice`).
    async fn gas_price(&self) -> Result<u128>;

    /// Transaction lookup by hash, `None` if the node does not know it.
    async fn transaction_by_hash(&self, hash: TxHash) -> Result<Option<TransactionSummary>>;
}
