//! Block Info MCP Server Library
//!
//! A Model Context Protocol server that lets an agent read live Ethereum
//! chain data. Every tool issues one upstream call and answers with a single
//! line of text; upstream failures are reported as text, never as protocol
//! errors.
//!
//! # Tools
//!
//! - **getCurrentBlock**: latest block height
//! - **getBlockMiner**: the coinbase address of a block
//! - **getGasPrice**: current gas price in gwei
//! - **getTransactionDetails**: sender, recipient, value and gas price of a transaction
//! - **getTransactionStatus**: receipt status from the Etherscan API
//!
//! # Example
//!
//! ```rust,ignore
//! use block_info_mcp::{BlockInfoServer, Config};
//! use rmcp::ServiceExt;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let server = BlockInfoServer::new(Config::from_env())?;
//!     server.serve(rmcp::transport::stdio()).await?.waiting().await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod ethereum;
pub mod explorer;
pub mod mcp;
pub mod services;
pub mod types;

pub use config::Config;
pub use error::{AppError, Result};
pub use ethereum::{ChainProvider, EthereumClient};
pub use explorer::{EtherscanClient, ExplorerApi};
pub use mcp::BlockInfoServer;
pub use services::{ChainQueryService, ToolOutcome, TX_STATUS_UNAVAILABLE};
