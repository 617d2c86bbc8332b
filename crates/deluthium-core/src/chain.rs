//! Supported chains and per-chain token addresses.

use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Address representing the native (gas) token on every supported chain.
pub const NATIVE_TOKEN_ADDRESS: &str = "0x0000000000000000000000000000000000000000";

/// Chains Deluthium quotes on, with their wrapped native token contracts.
const SUPPORTED_CHAINS: &[(u64, &str, &str)] = &[
    (56, "BSC", "0xbb4CdB9CBd36B01bD1cBaEBF2De08d9173bc095c"),
    (8453, "Base", "0x4200000000000000000000000000000000000006"),
    (1, "Ethereum", "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2"),
];

/// Default chain when none is configured (BSC).
pub const DEFAULT_CHAIN_ID: u64 = 56;

/// A validated chain identifier.
///
/// Construction fails for chains outside the supported set, so any
/// chain-scoped operation holding a `ChainId` is known to target a chain
/// the venue can serve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct ChainId(u64);

impl ChainId {
    /// Validate and wrap a raw chain id.
    pub fn new(id: u64) -> Result<Self> {
        if Self::is_supported(id) {
            Ok(Self(id))
        } else {
            Err(CoreError::UnsupportedChain(id))
        }
    }

    /// Check whether a raw chain id belongs to the supported set.
    pub fn is_supported(id: u64) -> bool {
        SUPPORTED_CHAINS.iter().any(|(chain, _, _)| *chain == id)
    }

    /// Raw numeric chain id.
    pub fn value(&self) -> u64 {
        self.0
    }

    /// Human-readable chain name.
    pub fn name(&self) -> &'static str {
        SUPPORTED_CHAINS
            .iter()
            .find(|(chain, _, _)| *chain == self.0)
            .map(|(_, name, _)| *name)
            .unwrap_or("unknown")
    }

    /// Wrapped native token contract address for this chain.
    pub fn wrapped_token(&self) -> &'static str {
        SUPPORTED_CHAINS
            .iter()
            .find(|(chain, _, _)| *chain == self.0)
            .map(|(_, _, wrapped)| *wrapped)
            .expect("ChainId is validated at construction")
    }
}

/// Wrapped native token address for a raw chain id.
///
/// Unlike [`ChainId::wrapped_token`], this accepts unvalidated input and
/// returns an error for unsupported chains.
pub fn get_wrapped_token(chain_id: u64) -> Result<&'static str> {
    Ok(ChainId::new(chain_id)?.wrapped_token())
}

/// Check whether an address denotes the native gas token.
pub fn is_native_token(address: &str) -> bool {
    address.eq_ignore_ascii_case(NATIVE_TOKEN_ADDRESS)
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.0, self.name())
    }
}

impl TryFrom<u64> for ChainId {
    type Error = CoreError;

    fn try_from(id: u64) -> Result<Self> {
        Self::new(id)
    }
}

impl From<ChainId> for u64 {
    fn from(chain: ChainId) -> Self {
        chain.0
    }
}
