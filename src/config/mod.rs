//! Configuration management module.
//!
//! Handles loading configuration from environment variables.

use std::{env, fmt};

use crate::ethereum::constants::{ETHERSCAN_API_URL, INFURA_MAINNET_URL};

/// Application configuration.
#[derive(Clone)]
pub struct Config {
    /// Ethereum JSON-RPC endpoint URL.
    pub rpc_url: String,
    /// Etherscan API key used for receipt status lookups.
    pub etherscan_api_key: String,
    /// Etherscan API endpoint.
    pub etherscan_api_url: String,
    /// Logging level (default: info).
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `INFURA_PROJECT_ID`: Infura project id for the mainnet endpoint
    /// - `ETHEREUM_RPC_URL`: full JSON-RPC URL, takes precedence over the Infura id
    /// - `ETHERSCAN_API_KEY`: Etherscan API key
    /// - `ETHERSCAN_API_URL`: Etherscan endpoint (default: `https://api.etherscan.io/api`)
    /// - `LOG_LEVEL`: Logging level (default: info)
    ///
    /// Missing secrets are not an error here: the resulting clients fail on
    /// first use and the failure is reported through the tool output.
    pub fn from_env() -> Self {
        // Load .env file if present
        let _ = dotenvy::dotenv();

        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build a configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let rpc_url = non_empty("ETHEREUM_RPC_URL").unwrap_or_else(|| {
            let project_id = lookup("INFURA_PROJECT_ID").unwrap_or_default();
            format!("{INFURA_MAINNET_URL}{}", project_id.trim())
        });

        let etherscan_api_key = lookup("ETHERSCAN_API_KEY").unwrap_or_default();

        let etherscan_api_url =
            non_empty("ETHERSCAN_API_URL").unwrap_or_else(|| ETHERSCAN_API_URL.to_string());

        let log_level = non_empty("LOG_LEVEL").unwrap_or_else(|| "info".to_string());

        Self { rpc_url, etherscan_api_key, etherscan_api_url, log_level }
    }
}

/// Keep only the scheme and host so project ids in the path and credentials
/// in the userinfo stay out of logs.
fn redact_url(url: &str) -> String {
    match url.split_once("://") {
        Some((scheme, rest)) => {
            let authority = rest.split('/').next().unwrap_or_default();
            let host = authority.rsplit('@').next().unwrap_or_default();
            if authority.len() + 1 < rest.len() {
                format!("{scheme}://{host}/***")
            } else {
                format!("{scheme}://{host}")
            }
        }
        None => "***".to_string(),
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let api_key = if self.etherscan_api_key.is_empty() { "<unset>" } else { "***" };
        f.debug_struct("Config")
            .field("rpc_url", &redact_url(&self.rpc_url))
            .field("etherscan_api_key", &api_key)
            .field("etherscan_api_url", &self.etherscan_api_url)
            .field("log_level", &self.log_level)
            .finish()
    }
}
