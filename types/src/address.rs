//! Wallet address type with `0x` prefix.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// An Ethereum-style wallet address: `0x` followed by 40 hex characters.
///
/// Stored in its original casing; comparison is case-insensitive via the
/// lowercased form used for `Eq`/`Hash`.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WalletAddress(String);

/// Errors produced when parsing a wallet address from raw input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AddressError {
    #[error("address must start with 0x")]
    MissingPrefix,

    #[error("address must be 40 hex characters after 0x, got {0}")]
    BadLength(usize),

    #[error("address contains non-hex characters")]
    NotHex,
}

impl WalletAddress {
    /// The standard prefix for all wallet addresses.
    pub const PREFIX: &'static str = "0x";

    /// Parse and validate a wallet address from a raw string.
    pub fn parse(raw: impl Into<String>) -> Result<Self, AddressError> {
        let s = raw.into();
        let body = s
            .strip_prefix(Self::PREFIX)
            .ok_or(AddressError::MissingPrefix)?;
        if body.len() != 40 {
            return Err(AddressError::BadLength(body.len()));
        }
        hex::decode(body).map_err(|_| AddressError::NotHex)?;
        Ok(Self(s))
    }

    /// Return the raw address string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Validate that this address is well-formed.
    ///
    /// Always true for addresses built via [`WalletAddress::parse`]; useful
    /// for addresses deserialized off the wire.
    pub fn is_valid(&self) -> bool {
        WalletAddress::parse(self.0.clone()).is_ok()
    }
}

impl PartialEq for WalletAddress {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

impl Eq for WalletAddress {}

impl std::hash::Hash for WalletAddress {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.0.to_ascii_lowercase().hash(state);
    }
}

impl fmt::Display for WalletAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for WalletAddress {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
