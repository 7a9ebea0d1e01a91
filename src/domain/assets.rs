//! One side of a trade and the pure edits that can be applied to it.
//!
//! Every edit consumes the current [`AssetSet`] by reference and returns a
//! complete new value. Callers replace their copy wholesale, so a previous
//! set is never aliased by the next one.

use serde::{Deserialize, Serialize};

// ============================================================================
// Types
// ============================================================================

/// A fungible token entry as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenEntry {
    /// Token asset id (hex).
    pub asset_id: String,
    /// Amount in display units.
    pub amount: String,
}

impl TokenEntry {
    #[must_use]
    pub fn new(asset_id: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            asset_id: asset_id.into(),
            amount: amount.into(),
        }
    }
}

/// Assets offered or requested on one side of a trade.
///
/// `native_amount` is `None` while the native slot is disabled and
/// `Some(String::new())` once enabled but not yet filled in. Tokens and NFTs
/// keep insertion order with the newest entry first. An empty NFT id is a
/// placeholder waiting for a pick.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetSet {
    pub native_amount: Option<String>,
    pub tokens: Vec<TokenEntry>,
    pub nfts: Vec<String>,
}

// ============================================================================
// Editor Operations
// ============================================================================

impl AssetSet {
    /// Returns `true` if nothing has been added to this side.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.native_amount.is_none() && self.tokens.is_empty() && self.nfts.is_empty()
    }

    /// Returns `true` if the native amount slot is shown.
    #[must_use]
    pub fn has_native(&self) -> bool {
        self.native_amount.is_some()
    }

    /// Enables the native amount slot. An already enabled slot is kept as is.
    #[must_use]
    pub fn with_native_enabled(&self) -> Self {
        Self {
            native_amount: Some(self.native_amount.clone().unwrap_or_default()),
            ..self.clone()
        }
    }

    /// Drops the native amount slot together with its value.
    #[must_use]
    pub fn without_native(&self) -> Self {
        Self {
            native_amount: None,
            ..self.clone()
        }
    }

    /// Replaces the native amount, enabling the slot if needed.
    #[must_use]
    pub fn with_native_amount(&self, amount: impl Into<String>) -> Self {
        Self {
            native_amount: Some(amount.into()),
            ..self.clone()
        }
    }

    /// Prepends an empty token entry.
    #[must_use]
    pub fn with_token_added(&self) -> Self {
        let tokens = std::iter::once(TokenEntry::default())
            .chain(self.tokens.iter().cloned())
            .collect();
        Self {
            tokens,
            ..self.clone()
        }
    }

    /// Removes the token entry at `index`. Out of range indices are ignored.
    #[must_use]
    pub fn with_token_removed(&self, index: usize) -> Self {
        let tokens = self
            .tokens
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != index)
            .map(|(_, token)| token.clone())
            .collect();
        Self {
            tokens,
            ..self.clone()
        }
    }

    /// Replaces the asset id of the token at `index`.
    #[must_use]
    pub fn with_token_asset_id(&self, index: usize, asset_id: impl Into<String>) -> Self {
        let asset_id = asset_id.into();
        self.map_token(index, |token| TokenEntry::new(asset_id, token.amount.clone()))
    }

    /// Replaces the amount of the token at `index`.
    #[must_use]
    pub fn with_token_amount(&self, index: usize, amount: impl Into<String>) -> Self {
        let amount = amount.into();
        self.map_token(index, |token| TokenEntry::new(token.asset_id.clone(), amount))
    }

    /// Prepends an empty NFT placeholder.
    #[must_use]
    pub fn with_nft_added(&self) -> Self {
        let nfts = std::iter::once(String::new())
            .chain(self.nfts.iter().cloned())
            .collect();
        Self {
            nfts,
            ..self.clone()
        }
    }

    /// Removes the NFT entry at `index`. Out of range indices are ignored.
    #[must_use]
    pub fn with_nft_removed(&self, index: usize) -> Self {
        let nfts = self
            .nfts
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != index)
            .map(|(_, id)| id.clone())
            .collect();
        Self {
            nfts,
            ..self.clone()
        }
    }

    /// Replaces the NFT id at `index`.
    #[must_use]
    pub fn with_nft(&self, index: usize, nft_id: impl Into<String>) -> Self {
        let nft_id = nft_id.into();
        let nfts = self
            .nfts
            .iter()
            .enumerate()
            .map(|(i, id)| if i == index { nft_id.clone() } else { id.clone() })
            .collect();
        Self {
            nfts,
            ..self.clone()
        }
    }

    fn map_token(&self, index: usize, f: impl FnOnce(&TokenEntry) -> TokenEntry) -> Self {
        let mut tokens = self.tokens.clone();
        if let Some(slot) = tokens.get_mut(index) {
            *slot = f(slot);
        }
        Self {
            tokens,
            ..self.clone()
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
