use std::str::FromStr;

use alloy_primitives::{Address, Bytes, B256, U256};

/// Parses a `uint256` given as decimal or `0x` hex.
pub fn parse_uint(value: &str) -> eyre::Result<U256> {
    let value = value.trim();
    let (digits, radix) = match value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
    {
        Some(hex) => (hex, 16),
        None => (value, 10),
    };

    if digits.is_empty() {
        eyre::bail!("Invalid uint256 `{}`: no digits", value);
    }

    U256::from_str_radix(digits, radix)
        .map_err(|e| eyre::eyre!("Invalid uint256 `{}`: {}", value, e))
}

pub fn parse_address(value: &str) -> eyre::Result<Address> {
    let value = value.trim();

    if !value.starts_with("0x") && !value.starts_with("0X") {
        eyre::bail!("Address must start with 0x: `{}`", value);
    }

    Address::from_str(value).map_err(|e| eyre::eyre!("Invalid address `{}`: {}", value, e))
}

pub fn parse_bytes(value: &str) -> eyre::Result<Bytes> {
    Bytes::from_str(value.trim()).map_err(|e| eyre::eyre!("Invalid bytes `{}`: {}", value, e))
}

/// Inclusion result of a submitted transaction.
#[derive(Debug, Clone, PartialEq)]
pub struct TxReceipt {
    pub transaction_hash: B256,
    pub block_number: Option<u64>,
    pub success: bool,
}
