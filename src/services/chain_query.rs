//! Chain query service.
//!
//! One method per tool. Each method makes a single upstream call and always
//! yields a [`ToolOutcome`]; nothing propagates past this layer.

use std::sync::Arc;

use alloy::primitives::{TxHash, U256};

use crate::{
    error::{AppError, Result},
    ethereum::ChainProvider,
    explorer::ExplorerApi,
    services::ToolOutcome,
    types::{format_ether, format_gwei, TransactionSummary},
};

/// Returned when the explorer lookup fails or carries no receipt.
pub const TX_STATUS_UNAVAILABLE: &str = "Unable to fetch status or invalid transaction hash.";

/// Printed in place of a recipient for contract-creation transactions.
const CONTRACT_CREATION: &str = "Contract Creation";

/// Service answering the block and transaction queries.
#[derive(Clone)]
pub struct ChainQueryService {
    chain: Arc<dyn ChainProvider>,
    explorer: Arc<dyn ExplorerApi>,
}

impl ChainQueryService {
    /// Create a new chain query service.
    pub fn new(chain: Arc<dyn ChainProvider>, explorer: Arc<dyn ExplorerApi>) -> Self {
        Self { chain, explorer }
    }

    /// Latest block height.
    pub async fn current_block(&self) -> ToolOutcome {
        self.chain
            .block_number()
            .await
            .map(|number| format!("The current block number is: {number}"))
            .into()
    }

    /// Miner (coinbase) of a block.
    pub async fn block_miner(&self, number: u64) -> ToolOutcome {
        self.try_block_miner(number).await.into()
    }

    async fn try_block_miner(&self, number: u64) -> Result<String> {
        let miner =
            self.chain.block_miner(number).await?.ok_or(AppError::BlockNotFound(number))?;
        Ok(format!("The miner of block {number} is: {}", miner.to_checksum(None)))
    }

    /// Current gas price in gwei.
    pub async fn gas_price(&self) -> ToolOutcome {
        self.try_gas_price().await.into()
    }

    async fn try_gas_price(&self) -> Result<String> {
        let wei = self.chain.gas_price().await?;
        Ok(format!("Current gas price: {} Gwei", format_gwei(U256::from(wei))?))
    }

    /// Sender, recipient, value and gas price of a transaction.
    pub async fn transaction_details(&self, tx_hash: &str) -> ToolOutcome {
        self.try_transaction_details(tx_hash).await.into()
    }

    async fn try_transaction_details(&self, tx_hash: &str) -> Result<String> {
        let hash = parse_tx_hash(tx_hash)?;

        match self.chain.transaction_by_hash(hash).await? {
            Some(tx) => format_transaction(&tx),
            None => Ok(format!("Transaction not found for hash: {tx_hash}")),
        }
    }

    /// Receipt status reported by the block explorer.
    pub async fn transaction_status(&self, tx_hash: &str) -> ToolOutcome {
        self.try_transaction_status(tx_hash).await.into()
    }

    async fn try_transaction_status(&self, tx_hash: &str) -> Result<String> {
        let response = self.explorer.tx_receipt_status(tx_hash).await?;

        Ok(match response.receipt_status() {
            Some(status) => format!("Transaction status for {tx_hash} is: {status}"),
            None => {
                tracing::debug!(
                    tx_hash = %tx_hash,
                    status = %response.status,
                    message = ?response.message,
                    "Explorer returned no receipt status"
                );
                TX_STATUS_UNAVAILABLE.to_string()
            }
        })
    }
}

/// Parse a 32-byte transaction hash, with or without the `0x` prefix.
fn parse_tx_hash(s: &str) -> Result<TxHash> {
    s.trim()
        .parse::<TxHash>()
        .map_err(|e| AppError::InvalidTransactionHash(format!("'{}' ({})", s, e)))
}

fn format_transaction(tx: &TransactionSummary) -> Result<String> {
    let to = tx.to.map_or_else(|| CONTRACT_CREATION.to_string(), |to| to.to_checksum(None));

    Ok(format!(
        "Transaction details:\nFrom: {}\nTo: {}\nValue: {} ETH\nGas Price: {} Gwei",
        tx.from.to_checksum(None),
        to,
        format_ether(tx.value)?,
        format_gwei(U256::from(tx.gas_price))?,
    ))
}
