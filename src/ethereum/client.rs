//! Ethereum RPC client.

use alloy::{
    consensus::Transaction as ConsensusTransaction,
    eips::BlockNumberOrTag,
    network::{Ethereum, TransactionResponse},
    primitives::{Address, TxHash},
    providers::{Provider, ProviderBuilder, RootProvider},
    rpc::types::Transaction,
};
use async_trait::async_trait;
use std::sync::Arc;

use crate::{
    error::{AppError, Result},
    ethereum::ChainProvider,
    types::TransactionSummary,
};

/// Type alias for the HTTP provider.
type HttpProvider = RootProvider<Ethereum>;

/// Ethereum RPC client wrapper.
///
/// Cloning is cheap and every clone shares the same provider.
#[derive(Clone)]
pub struct EthereumClient {
    /// The underlying provider.
    provider: Arc<HttpProvider>,
}

impl EthereumClient {
    /// Create a new Ethereum client.
    ///
    /// Note: This does NOT make any network calls. The connection is
    /// established lazily when the first operation is performed, so a bad
    /// project id only shows up as an error from the first query.
    pub fn new(rpc_url: &str) -> Result<Self> {
        let url = rpc_url
            .parse()
            .map_err(|_| AppError::Config(format!("Invalid RPC URL: {}", rpc_url)))?;

        #[allow(deprecated)]
        let provider = ProviderBuilder::new().connect_http(url).root().clone();

        tracing::info!("Ethereum client created (lazy initialization)");

        Ok(Self { provider: Arc::new(provider) })
    }
}

/// Reduce an RPC transaction to the fields the tools report.
///
/// The gas price prefers the effective price reported for mined
/// transactions, then the legacy gas price, then the EIP-1559 fee cap.
fn summarize_transaction(tx: &Transaction) -> TransactionSummary {
    let gas_price = tx
        .effective_gas_price
        .or_else(|| ConsensusTransaction::gas_price(tx))
        .unwrap_or_else(|| ConsensusTransaction::max_fee_per_gas(tx));

    TransactionSummary {
        from: TransactionResponse::from(tx),
        to: ConsensusTransaction::to(tx),
        value: ConsensusTransaction::value(tx),
        gas_price,
    }
}

#[async_trait]
impl ChainProvider for EthereumClient {
    async fn block_number(&self) -> Result<u64> {
        let number = self.provider.get_block_number().await?;
        tracing::debug!(block_number = number, "Fetched latest block number");
        Ok(number)
    }

    async fn block_miner(&self, number: u64) -> Result<Option<Address>> {
        tracing::debug!(block_number = number, "Fetching block");
        let block = self.provider.get_block_by_number(BlockNumberOrTag::Number(number)).await?;
        Ok(block.map(|block| block.header.beneficiary))
    }

    async fn gas_price(&self) -> Result<u128> {
        let gas_price = self.provider.get_gas_price().await?;
        tracing::debug!(gas_price = %gas_price, "Fetched gas price");
        Ok(gas_price)
    }

    async fn transaction_by_hash(&self, hash: TxHash) -> Result<Option<TransactionSummary>> {
        tracing::debug!(tx_hash = %hash, "Fetching transaction");
        let tx = self.provider.get_transaction_by_hash(hash).await?;
        Ok(tx.as_ref().map(summarize_transaction))
    }
}
