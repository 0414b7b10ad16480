//! Wei denomination formatting.
//!
//! Values are printed with the full fractional width of the target unit,
//! trailing zeros included: 20 gwei is `20.000000000`.

use alloy::primitives::{utils::format_units, U256};

use crate::{
    error::Result,
    ethereum::constants::{ETHER_DECIMALS, GWEI_DECIMALS},
};

/// Format a wei amount as gwei (10^9 wei).
pub fn format_gwei(wei: U256) -> Result<String> {
    Ok(format_units(wei, GWEI_DECIMALS)?)
}

/// Format a wei amount as ether (10^18 wei).
pub fn format_ether(wei: U256) -> Result<String> {
    Ok(format_units(wei, ETHER_DECIMALS)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::utils::parse_units;

    #[test]
    fn test_format_gwei_whole() {
        let wei = U256::from(20_000_000_000u64);
        assert_eq!(format_gwei(wei).unwrap(), "20.000000000");
    }

    #[test]
    fn test_format_gwei_fractional() {
        let wei = U256::from(12_345_678_901u64);
        assert_eq!(format_gwei(wei).unwrap(), "12.345678901");
    }

    #[test]
    fn test_format_gwei_sub_gwei() {
        assert_eq!(format_gwei(U256::from(1u64)).unwrap(), "0.000000001");
        assert_eq!(format_gwei(U256::ZERO).unwrap(), "0.000000000");
    }

    #[test]
    fn test_format_ether() {
        let one_eth = U256::from(1_000_000_000_000_000_000u64);
        assert_eq!(format_ether(one_eth).unwrap(), "1.000000000000000000");

        let value = U256::from(1_123_456_789_012_345_678u64);
        assert_eq!(format_ether(value).unwrap(), "1.123456789012345678");

        assert_eq!(format_ether(U256::from(1u64)).unwrap(), "0.000000000000000001");
    }

    #[test]
    fn test_format_ether_large_values() {
        // 1 million ETH
        let million_eth = U256::from(1_000_000u64) * U256::from(10u64).pow(U256::from(18u64));
        assert_eq!(format_ether(million_eth).unwrap(), "1000000.000000000000000000");
    }

    #[test]
    fn test_format_parse_roundtrip() {
        let original = U256::from(1_234_567_890_123_456_789u64);

        let gwei = format_gwei(original).unwrap();
        let parsed: U256 = parse_units(&gwei, GWEI_DECIMALS).unwrap().into();
        assert_eq!(parsed, original);

        let ether = format_ether(original).unwrap();
        let parsed: U256 = parse_units(&ether, ETHER_DECIMALS).unwrap().into();
        assert_eq!(parsed, original);
    }
}
