//! MCP server implementation.

use std::sync::Arc;

use rmcp::{
    handler::server::router::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::{Implementation, ServerCapabilities, ServerInfo},
    schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler,
};
use serde::{de, Deserialize, Deserializer};

use crate::{
    config::Config,
    error::AppError,
    ethereum::EthereumClient,
    explorer::EtherscanClient,
    services::ChainQueryService,
};

/// Block Info MCP Server.
///
/// Exposes read-only block and transaction queries. Tool handlers always
/// answer with a single text item; upstream failures come back as
/// `Error: ...` text rather than protocol errors.
#[derive(Clone)]
pub struct BlockInfoServer {
    chain_query: ChainQueryService,
    tool_router: ToolRouter<Self>,
}

impl BlockInfoServer {
    /// Create a new Block Info MCP Server.
    ///
    /// Note: no network calls are made during server startup. Both upstream
    /// clients connect on the first tool invocation.
    pub fn new(config: Config) -> Result<Self, AppError> {
        tracing::info!("Initializing Block Info MCP Server");

        let chain = Arc::new(EthereumClient::new(&config.rpc_url)?);
        let explorer =
            Arc::new(EtherscanClient::new(config.etherscan_api_url, config.etherscan_api_key)?);

        tracing::info!("Block Info MCP Server initialized successfully");

        Ok(Self::with_service(ChainQueryService::new(chain, explorer)))
    }

    /// Create a server around an existing query service.
    pub fn with_service(chain_query: ChainQueryService) -> Self {
        Self { chain_query, tool_router: Self::tool_router() }
    }
}

/// Input parameters for the getBlockMiner tool.
#[derive(Debug, Clone, serde::Deserialize, schemars::JsonSchema)]
pub struct GetBlockMinerInput {
    /// Block number to inspect (e.g., 17000000).
    #[serde(rename = "blockNumber", deserialize_with = "deserialize_block_number")]
    #[schemars(with = "u64")]
    pub block_number: u64,
}

/// Input parameters for the transaction tools.
#[derive(Debug, Clone, serde::Deserialize, schemars::JsonSchema)]
pub struct TransactionHashInput {
    /// Transaction hash (0x followed by 64 hex characters).
    #[serde(rename = "txHash")]
    pub tx_hash: String,
}

/// Accept a block number as a JSON integer or as a decimal string.
fn deserialize_block_number<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawBlockNumber {
        Number(u64),
        Text(String),
    }

    match RawBlockNumber::deserialize(deserializer)? {
        RawBlockNumber::Number(n) => Ok(n),
        RawBlockNumber::Text(s) => s.trim().parse::<u64>().map_err(|_| {
            de::Error::custom(format!("blockNumber must be a non-negative integer, got '{}'", s))
        }),
    }
}

#[tool_router]
impl BlockInfoServer {
    /// Get the latest block number.
    #[tool(name = "getCurrentBlock", description = "Get the current Ethereum block number")]
    pub async fn get_current_block(&self) -> Result<String, McpError> {
        tracing::info!("getCurrentBlock called");

        Ok(self.chain_query.current_block().await.into_text())
    }

    /// Get the miner (coinbase) address of a block.
    #[tool(
        name = "getBlockMiner",
        description = "Get the miner (coinbase) address of an Ethereum block by block number"
    )]
    pub async fn get_block_miner(
        &self,
        Parameters(input): Parameters<GetBlockMinerInput>,
    ) -> Result<String, McpError> {
        tracing::info!(block_number = input.block_number, "getBlockMiner called");

        Ok(self.chain_query.block_miner(input.block_number).await.into_text())
    }

    /// Get the current gas price.
    #[tool(name = "getGasPrice", description = "Get the current Ethereum gas price in Gwei")]
    pub async fn get_gas_price(&self) -> Result<String, McpError> {
        tracing::info!("getGasPrice called");

        Ok(self.chain_query.gas_price().await.into_text())
    }

    /// Get sender, recipient, value and gas price of a transaction.
    #[tool(
        name = "getTransactionDetails",
        description = "Get the sender, recipient, value (ETH) and gas price (Gwei) of an Ethereum transaction by hash"
    )]
    pub async fn get_transaction_details(
        &self,
        Parameters(input): Parameters<TransactionHashInput>,
    ) -> Result<String, McpError> {
        tracing::info!(tx_hash = %input.tx_hash, "getTransactionDetails called");

        Ok(self.chain_query.transaction_details(&input.tx_hash).await.into_text())
    }

    /// Get the receipt status of a transaction from Etherscan.
    #[tool(
        name = "getTransactionStatus",
        description = "Get whether an Ethereum transaction succeeded or failed, using its receipt status from Etherscan"
    )]
    pub async fn get_transaction_status(
        &self,
        Parameters(input): Parameters<TransactionHashInput>,
    ) -> Result<String, McpError> {
        tracing::info!(tx_hash = %input.tx_hash, "getTransactionStatus called");

        Ok(self.chain_query.transaction_status(&input.tx_hash).await.into_text())
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for BlockInfoServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "block-info-mcp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                title: Some("BlockInfo MCP Agent".to_string()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Block Info MCP Server. Provides read-only Ethereum mainnet queries: current \
                 block number, block miner, gas price, transaction details and transaction \
                 status. Upstream failures are reported as text starting with 'Error: '."
                    .to_string(),
            ),
        }
    }
}
