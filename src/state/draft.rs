//! Owned store for the offer draft.
//!
//! The draft outlives the composer screen: leaving the screen keeps it, and
//! the offer list redirects back while it holds anything. It is only reset by
//! an explicit cancel or after a successful save.

use crate::domain::{AssetSet, OfferDraft, Side};

#[derive(Debug, Clone, Default)]
pub struct OfferDraftStore {
    draft: OfferDraft,
}

impl OfferDraftStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current draft.
    #[must_use]
    pub fn get(&self) -> &OfferDraft {
        &self.draft
    }

    /// Replaces the whole draft.
    pub fn set(&mut self, draft: OfferDraft) {
        self.draft = draft;
    }

    /// Replaces one side of the draft with the result of `edit`.
    pub fn update_side(&mut self, side: Side, edit: impl FnOnce(&AssetSet) -> AssetSet) {
        let assets = edit(self.draft.side(side));
        self.draft = self.draft.with_side(side, assets);
    }

    /// Resets the draft to empty.
    pub fn clear(&mut self) {
        tracing::debug!("offer draft cleared");
        self.draft = OfferDraft::default();
    }

    /// Returns `true` while a partially filled draft exists.
    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.draft.has_content()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_follows_content() {
        let mut store = OfferDraftStore::new();
        assert!(!store.has_pending());

        store.update_side(Side::Offered, |assets| {
            assets.with_native_amount("1.5")
        });
        assert!(store.has_pending());
        assert_eq!(store.get().offered.native_amount.as_deref(), Some("1.5"));

        store.clear();
        assert!(!store.has_pending());
        assert_eq!(store.get(), &OfferDraft::default());
    }

    #[test]
    fn test_update_side_leaves_other_side() {
        let mut store = OfferDraftStore::new();
        store.update_side(Side::Requested, AssetSet::with_token_added);
        store.update_side(Side::Offered, AssetSet::with_nft_added);

        assert_eq!(store.get().requested.tokens.len(), 1);
        assert!(store.get().requested.nfts.is_empty());
        assert_eq!(store.get().offered.nfts, vec![String::new()]);
    }
}
