//! Ethereum network constants.
//!
//! Contains endpoint defaults and unit scales.

/// Infura mainnet JSON-RPC endpoint; the project id is appended.
pub const INFURA_MAINNET_URL: &str = "https://mainnet.infura.io/v3/";

/// Etherscan API endpoint for mainnet.
pub const ETHERSCAN_API_URL: &str = "https://api.etherscan.io/api";

/// Decimal places between wei and gwei.
pub const GWEI_DECIMALS: u8 = 9;

/// Decimal places between wei and ether.
pub const ETHER_DECIMALS: u8 = 18;
