//! Offer draft, offer records, and the wire payloads for offer commands.

use serde::{Deserialize, Serialize};

use super::assets::AssetSet;

// ============================================================================
// Draft
// ============================================================================

/// Expiration timer as typed by the user. Blank fields count as zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expiration {
    pub days: String,
    pub hours: String,
    pub minutes: String,
}

impl Default for Expiration {
    /// Switching the timer on starts from one day.
    fn default() -> Self {
        Self {
            days: "1".to_string(),
            hours: String::new(),
            minutes: String::new(),
        }
    }
}

/// Working state of the offer composer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfferDraft {
    pub offered: AssetSet,
    pub requested: AssetSet,
    /// Network fee in display units.
    pub fee: String,
    /// `None` means the offer never expires.
    pub expiration: Option<Expiration>,
}

/// Side of the trade an asset belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Offered,
    Requested,
}

impl Side {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Offered => "Offered",
            Self::Requested => "Requested",
        }
    }
}

impl OfferDraft {
    /// Returns the asset set for `side`.
    #[must_use]
    pub fn side(&self, side: Side) -> &AssetSet {
        match side {
            Side::Offered => &self.offered,
            Side::Requested => &self.requested,
        }
    }

    /// Returns a new draft with `side` replaced by `assets`.
    #[must_use]
    pub fn with_side(&self, side: Side, assets: AssetSet) -> Self {
        match side {
            Side::Offered => Self {
                offered: assets,
                ..self.clone()
            },
            Side::Requested => Self {
                requested: assets,
                ..self.clone()
            },
        }
    }

    /// Returns `true` if the user has started filling in this draft.
    ///
    /// A non-empty fee, any native amount, or any token or NFT entry counts.
    #[must_use]
    pub fn has_content(&self) -> bool {
        let side_has_content = |assets: &AssetSet| {
            assets
                .native_amount
                .as_deref()
                .is_some_and(|amount| !amount.is_empty())
                || !assets.tokens.is_empty()
                || !assets.nfts.is_empty()
        };

        !self.fee.is_empty() || side_has_content(&self.offered) || side_has_content(&self.requested)
    }

    /// Iterates over every filled NFT slot as `(side, index, nft_id)`.
    pub fn nft_slots(&self) -> impl Iterator<Item = (Side, usize, &str)> {
        let offered = self
            .offered
            .nfts
            .iter()
            .enumerate()
            .map(|(i, id)| (Side::Offered, i, id.as_str()));
        let requested = self
            .requested
            .nfts
            .iter()
            .enumerate()
            .map(|(i, id)| (Side::Requested, i, id.as_str()));
        offered.chain(requested).filter(|(_, _, id)| !id.is_empty())
    }

    /// Returns the first NFT id that occupies more than one slot.
    #[must_use]
    pub fn duplicate_nft(&self) -> Option<&str> {
        let mut seen = std::collections::HashSet::new();
        self.nft_slots()
            .map(|(_, _, id)| id)
            .find(|id| !seen.insert(*id))
    }
}

// ============================================================================
// Records
// ============================================================================

/// Lifecycle state of an offer known to the wallet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OfferRecordStatus {
    Active,
    Completed,
    Cancelled,
    Expired,
}

impl OfferRecordStatus {
    /// Label shown in the offer list.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Active => "Pending",
            Self::Completed => "Taken",
            Self::Cancelled => "Cancelled",
            Self::Expired => "Expired",
        }
    }
}

/// An offer stored by the wallet. Read-only on this side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfferRecord {
    pub offer: String,
    pub status: OfferRecordStatus,
    pub creation_date: String,
}

// ============================================================================
// Wire Payloads
// ============================================================================

/// A token amount in base units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatAmount {
    pub asset_id: String,
    pub amount: String,
}

/// One side of a `make_offer` request, all amounts in base units.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assets {
    pub xch: String,
    pub cats: Vec<CatAmount>,
    pub nfts: Vec<String>,
}

/// Request body of the `make_offer` command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MakeOffer {
    pub offered_assets: Assets,
    pub requested_assets: Assets,
    pub fee: String,
    pub expires_at_second: Option<u64>,
}

/// Response of the `make_offer` command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MakeOfferResponse {
    pub offer: String,
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_format_and_labels() {
        let status: OfferRecordStatus = serde_json::from_str("\"completed\"").unwrap();
        assert_eq!(status, OfferRecordStatus::Completed);
        assert_eq!(status.label(), "Taken");
        assert_eq!(OfferRecordStatus::Active.label(), "Pending");
    }

    #[test]
    fn test_has_content() {
        let draft = OfferDraft::default();
        assert!(!draft.has_content());

        // An enabled but blank native slot is not content yet.
        let enabled = draft.with_side(Side::Offered, draft.offered.with_native_enabled());
        assert!(!enabled.has_content());

        let with_fee = OfferDraft {
            fee: "0.0001".to_string(),
            ..OfferDraft::default()
        };
        assert!(with_fee.has_content());

        let with_nft = draft.with_side(Side::Requested, draft.requested.with_nft_added());
        assert!(with_nft.has_content());
    }

    #[test]
    fn test_duplicate_nft_ignores_placeholders() {
        let draft = OfferDraft {
            offered: AssetSet {
                nfts: vec![String::new(), "nft1a".to_string()],
                ..AssetSet::default()
            },
            requested: AssetSet {
                nfts: vec![String::new(), "nft1b".to_string()],
                ..AssetSet::default()
            },
            ..OfferDraft::default()
        };
        assert_eq!(draft.duplicate_nft(), None);

        let clash = draft.with_side(Side::Requested, draft.requested.with_nft(0, "nft1a"));
        assert_eq!(clash.duplicate_nft(), Some("nft1a"));
    }

    #[test]
    fn test_make_offer_serializes_null_expiration() {
        let request = MakeOffer {
            offered_assets: Assets::default(),
            requested_assets: Assets::default(),
            fee: "0".to_string(),
            expires_at_second: None,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert!(json["expires_at_second"].is_null());
        assert_eq!(json["offered_assets"]["xch"], "");
    }
}
