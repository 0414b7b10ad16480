//! Block explorer module.
//!
//! Contains the explorer API abstraction and the Etherscan REST client.

pub mod etherscan;

pub use etherscan::{EtherscanClient, ExplorerApi};
