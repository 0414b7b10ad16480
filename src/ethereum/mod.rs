//! Ethereum interaction module.
//!
//! Contains the chain provider abstraction and its alloy-backed client.

pub mod client;
pub mod constants;
pub mod provider;

pub use client::EthereumClient;
pub use provider::ChainProvider;
