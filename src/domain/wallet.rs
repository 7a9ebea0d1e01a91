//! Wallet-wide status used to parametrise the views.

use serde::{Deserialize, Serialize};

/// The wallet's native unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unit {
    pub ticker: String,
    pub decimals: u8,
}

impl Default for Unit {
    fn default() -> Self {
        Self {
            ticker: "XCH".to_string(),
            decimals: 12,
        }
    }
}

/// Response of `get_sync_status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncStatus {
    /// Spendable balance in base units.
    #[serde(default)]
    pub balance: String,
    pub unit: Unit,
    #[serde(default)]
    pub synced_coins: u32,
    #[serde(default)]
    pub total_coins: u32,
    #[serde(default)]
    pub receive_address: String,
}

/// Response of `get_nft_status`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NftStatus {
    #[serde(default)]
    pub nfts: u32,
    #[serde(default)]
    pub visible_nfts: u32,
    #[serde(default)]
    pub collections: u32,
    #[serde(default)]
    pub visible_collections: u32,
}
