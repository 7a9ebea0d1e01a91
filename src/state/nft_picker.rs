//! Paginated NFT picker for the offered side of the composer.
//!
//! The picker is a state machine that never performs I/O itself. Each
//! transition returns the [`PickerEffect`]s the caller must run; results come
//! back through the `on_*` methods.
//!
//! ```text
//! Idle ──open──▶ FetchingPage ──page──▶ PageLoaded ──▶ FetchingThumbnails ──▶ Ready
//!                     ▲                                                        │
//!                     └──────────────────────── page change ───────────────────┘
//! ```

use crate::constants::NFT_PAGE_SIZE;
use crate::domain::{GetNfts, NftRecord, OfferDraft, Side};

use super::thumbnails::ThumbnailCache;

// ============================================================================
// Phases and Effects
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PickerPhase {
    #[default]
    Idle,
    FetchingPage,
    PageLoaded,
    FetchingThumbnails,
    Ready,
}

/// Work the picker asks its owner to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerEffect {
    /// Load catalog page `page` with `query`.
    FetchPage { page: u32, query: GetNfts },
    /// Load the record for the slot's current value.
    FetchSelected { nft_id: String },
    /// Load media for these ids. They are already marked in flight.
    FetchThumbnails { nft_ids: Vec<String> },
}

/// Number of catalog pages for `visible_nfts` items. Never zero.
#[must_use]
pub fn page_count(visible_nfts: u32) -> u32 {
    visible_nfts.div_ceil(NFT_PAGE_SIZE).max(1)
}

/// Returns `true` if `nft_id` may be put in slot `slot` of `side`.
///
/// An id already used by any other NFT slot of the draft, on either side, is
/// blocked. The slot's own current value stays selectable.
#[must_use]
pub fn is_selectable(draft: &OfferDraft, side: Side, slot: usize, nft_id: &str) -> bool {
    !draft
        .nft_slots()
        .any(|(s, i, id)| id == nft_id && (s, i) != (side, slot))
}

// ============================================================================
// Picker
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct NftPicker {
    pub side: Side,
    pub slot: usize,
    /// Current value of the slot being edited. Empty for a placeholder.
    pub nft_id: String,
    pub page: u32,
    pub page_count: u32,
    pub catalog: Vec<NftRecord>,
    pub selected: Option<NftRecord>,
    pub cursor: usize,
    pub phase: PickerPhase,
}

impl NftPicker {
    /// Creates an idle picker for one slot.
    #[must_use]
    pub fn new(side: Side, slot: usize, nft_id: impl Into<String>, visible_nfts: u32) -> Self {
        Self {
            side,
            slot,
            nft_id: nft_id.into(),
            page: 0,
            page_count: page_count(visible_nfts),
            catalog: Vec::new(),
            selected: None,
            cursor: 0,
            phase: PickerPhase::Idle,
        }
    }

    /// Starts loading the first page and the slot's current record.
    pub fn open(&mut self) -> Vec<PickerEffect> {
        let mut effects = vec![self.fetch_page()];
        if !self.nft_id.is_empty() {
            effects.push(PickerEffect::FetchSelected {
                nft_id: self.nft_id.clone(),
            });
        }
        effects
    }

    /// Reacts to the slot's value changing underneath the picker.
    pub fn set_nft_id(&mut self, nft_id: impl Into<String>) -> Vec<PickerEffect> {
        let nft_id = nft_id.into();
        if nft_id == self.nft_id {
            return Vec::new();
        }
        self.nft_id = nft_id;
        if self.nft_id.is_empty() {
            self.selected = None;
            Vec::new()
        } else {
            vec![PickerEffect::FetchSelected {
                nft_id: self.nft_id.clone(),
            }]
        }
    }

    /// Updates the page count. A current page past the new last page moves to
    /// the last page and refetches it.
    pub fn set_page_count(&mut self, visible_nfts: u32) -> Vec<PickerEffect> {
        self.page_count = page_count(visible_nfts);
        self.go_to_page(self.page.min(self.page_count - 1))
    }

    pub fn next_page(&mut self) -> Vec<PickerEffect> {
        self.go_to_page(self.page.saturating_add(1).min(self.page_count - 1))
    }

    pub fn prev_page(&mut self) -> Vec<PickerEffect> {
        self.go_to_page(self.page.saturating_sub(1))
    }

    fn go_to_page(&mut self, page: u32) -> Vec<PickerEffect> {
        if page == self.page {
            return Vec::new();
        }
        self.page = page;
        self.cursor = 0;
        vec![self.fetch_page()]
    }

    fn fetch_page(&mut self) -> PickerEffect {
        self.phase = PickerPhase::FetchingPage;
        PickerEffect::FetchPage {
            page: self.page,
            query: GetNfts::visible_page(self.page, NFT_PAGE_SIZE),
        }
    }

    // ========================================================================
    // Results
    // ========================================================================

    /// Applies a loaded catalog page. Pages other than the current one are
    /// stale and dropped.
    pub fn on_page_loaded(
        &mut self,
        page: u32,
        nfts: Vec<NftRecord>,
        cache: &mut ThumbnailCache,
    ) -> Vec<PickerEffect> {
        if page != self.page {
            tracing::debug!(page, current = self.page, "dropping stale nft page");
            return Vec::new();
        }
        self.catalog = nfts;
        self.cursor = self.cursor.min(self.catalog.len().saturating_sub(1));
        self.phase = PickerPhase::PageLoaded;
        self.prefetch_thumbnails(cache)
    }

    /// A page request failed. The previous catalog stays on screen.
    pub fn on_page_failed(&mut self, page: u32) {
        if page == self.page {
            self.phase = PickerPhase::Ready;
        }
    }

    /// Applies the record fetched for the slot's value.
    pub fn on_selected_loaded(
        &mut self,
        nft: NftRecord,
        cache: &mut ThumbnailCache,
    ) -> Vec<PickerEffect> {
        if nft.launcher_id != self.nft_id {
            return Vec::new();
        }
        self.selected = Some(nft);
        self.prefetch_thumbnails(cache)
    }

    /// Moves to `Ready` once nothing this picker shows is still loading.
    pub fn on_thumbnail_merged(&mut self, cache: &ThumbnailCache) {
        if self.phase == PickerPhase::FetchingThumbnails
            && !self.thumbnail_targets().any(|id| cache.is_in_flight(id))
        {
            self.phase = PickerPhase::Ready;
        }
    }

    /// Ids whose thumbnails the picker shows: the page plus the selected record.
    pub fn thumbnail_targets(&self) -> impl Iterator<Item = &str> {
        let extra = self
            .selected
            .as_ref()
            .filter(|selected| {
                !self
                    .catalog
                    .iter()
                    .any(|nft| nft.launcher_id == selected.launcher_id)
            })
            .map(|selected| selected.launcher_id.as_str());
        self.catalog
            .iter()
            .map(|nft| nft.launcher_id.as_str())
            .chain(extra)
    }

    fn prefetch_thumbnails(&mut self, cache: &mut ThumbnailCache) -> Vec<PickerEffect> {
        let nft_ids = cache.claim(self.thumbnail_targets());
        if nft_ids.is_empty() {
            if !self.thumbnail_targets().any(|id| cache.is_in_flight(id)) {
                self.phase = PickerPhase::Ready;
            } else {
                self.phase = PickerPhase::FetchingThumbnails;
            }
            return Vec::new();
        }
        self.phase = PickerPhase::FetchingThumbnails;
        vec![PickerEffect::FetchThumbnails { nft_ids }]
    }

    // ========================================================================
    // Selection
    // ========================================================================

    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_down(&mut self) {
        if self.cursor + 1 < self.catalog.len() {
            self.cursor += 1;
        }
    }

    #[must_use]
    pub fn highlighted(&self) -> Option<&NftRecord> {
        self.catalog.get(self.cursor)
    }

    /// Returns `true` if `nft_id` can be picked for this slot.
    #[must_use]
    pub fn can_select(&self, draft: &OfferDraft, nft_id: &str) -> bool {
        is_selectable(draft, self.side, self.slot, nft_id)
    }

    /// Id to write into the slot, if the highlighted entry may be picked.
    #[must_use]
    pub fn choose(&self, draft: &OfferDraft) -> Option<String> {
        self.highlighted()
            .filter(|nft| self.can_select(draft, &nft.launcher_id))
            .map(|nft| nft.launcher_id.clone())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AssetSet;
    use crate::test_utils::NftMother;
    use rstest::rstest;

    fn opened(nft_id: &str, visible: u32) -> (NftPicker, Vec<PickerEffect>) {
        let mut picker = NftPicker::new(Side::Offered, 0, nft_id, visible);
        let effects = picker.open();
        (picker, effects)
    }

    #[rstest]
    #[case(0, 1)]
    #[case(1, 1)]
    #[case(20, 1)]
    #[case(21, 2)]
    #[case(100, 5)]
    fn test_page_count(#[case] visible: u32, #[case] expected: u32) {
        assert_eq!(page_count(visible), expected);
    }

    #[test]
    fn test_open_fetches_first_page_and_selected() {
        let (picker, effects) = opened("nft1sel", 40);
        assert_eq!(picker.phase, PickerPhase::FetchingPage);
        assert_eq!(
            effects,
            vec![
                PickerEffect::FetchPage {
                    page: 0,
                    query: GetNfts::visible_page(0, NFT_PAGE_SIZE),
                },
                PickerEffect::FetchSelected {
                    nft_id: "nft1sel".to_string()
                },
            ]
        );

        let (_, effects) = opened("", 40);
        assert_eq!(effects.len(), 1);
    }

    #[test]
    fn test_page_then_thumbnails_then_ready() {
        let mut cache = ThumbnailCache::new();
        let (mut picker, _) = opened("", 40);

        let effects = picker.on_page_loaded(0, NftMother::page(0, 3), &mut cache);
        assert_eq!(picker.phase, PickerPhase::FetchingThumbnails);
        let PickerEffect::FetchThumbnails { nft_ids } = &effects[0] else {
            panic!("expected thumbnail fetch, got {effects:?}");
        };
        assert_eq!(nft_ids.len(), 3);

        for id in nft_ids {
            cache.merge(id, Some(&NftMother::png_data()));
            picker.on_thumbnail_merged(&cache);
        }
        assert_eq!(picker.phase, PickerPhase::Ready);
    }

    #[test]
    fn test_selected_off_page_is_prefetched() {
        let mut cache = ThumbnailCache::new();
        let (mut picker, _) = opened("nft1far", 40);
        picker.on_page_loaded(0, NftMother::page(0, 2), &mut cache);

        let effects = picker.on_selected_loaded(NftMother::named("nft1far", "Far"), &mut cache);
        assert_eq!(
            effects,
            vec![PickerEffect::FetchThumbnails {
                nft_ids: vec!["nft1far".to_string()]
            }]
        );
        assert_eq!(picker.thumbnail_targets().count(), 3);
    }

    #[test]
    fn test_selected_on_page_is_not_fetched_twice() {
        let mut cache = ThumbnailCache::new();
        let page = NftMother::page(0, 2);
        let on_page = page[1].launcher_id.clone();
        let (mut picker, _) = opened(&on_page, 40);
        picker.on_page_loaded(0, page.clone(), &mut cache);

        let effects = picker.on_selected_loaded(page[1].clone(), &mut cache);
        assert!(effects.is_empty());
        assert_eq!(picker.thumbnail_targets().count(), 2);
    }

    #[test]
    fn test_stale_page_is_discarded() {
        let mut cache = ThumbnailCache::new();
        let (mut picker, _) = opened("", 60);
        picker.next_page();
        picker.next_page();
        assert_eq!(picker.page, 2);

        let effects = picker.on_page_loaded(1, NftMother::page(1, 20), &mut cache);
        assert!(effects.is_empty());
        assert!(picker.catalog.is_empty());
        assert_eq!(picker.phase, PickerPhase::FetchingPage);

        picker.on_page_loaded(2, NftMother::page(2, 5), &mut cache);
        assert_eq!(picker.catalog.len(), 5);
    }

    #[test]
    fn test_paging_is_clamped() {
        let (mut picker, _) = opened("", 25);
        assert!(picker.prev_page().is_empty());
        assert_eq!(picker.next_page().len(), 1);
        assert!(picker.next_page().is_empty());
        assert_eq!(picker.page, 1);
    }

    #[test]
    fn test_shrinking_catalog_clamps_current_page() {
        let (mut picker, _) = opened("", 60);
        picker.next_page();
        picker.next_page();
        assert_eq!(picker.page, 2);

        assert_eq!(
            picker.set_page_count(20),
            vec![PickerEffect::FetchPage {
                page: 0,
                query: GetNfts::visible_page(0, NFT_PAGE_SIZE),
            }]
        );
        assert_eq!(picker.page, 0);
        assert!(picker.next_page().is_empty());
        assert_eq!(picker.page, 0);

        // A count that still covers the current page changes nothing.
        assert!(picker.set_page_count(40).is_empty());
        assert_eq!(picker.next_page().len(), 1);
        assert_eq!(picker.page, 1);
    }

    #[test]
    fn test_set_nft_id() {
        let (mut picker, _) = opened("nft1a", 20);
        picker.selected = Some(NftMother::named("nft1a", "A"));

        assert!(picker.set_nft_id("nft1a").is_empty());
        assert_eq!(picker.set_nft_id("nft1b").len(), 1);
        assert!(picker.set_nft_id("").is_empty());
        assert!(picker.selected.is_none());
    }

    #[test]
    fn test_ids_used_elsewhere_are_not_selectable() {
        let draft = OfferDraft {
            offered: AssetSet {
                nfts: vec!["nft1a".to_string(), "nft1b".to_string()],
                ..AssetSet::default()
            },
            requested: AssetSet {
                nfts: vec!["nft1c".to_string()],
                ..AssetSet::default()
            },
            ..OfferDraft::default()
        };

        // Slot 0 may keep its own value but not take slot 1's or the other side's.
        assert!(is_selectable(&draft, Side::Offered, 0, "nft1a"));
        assert!(!is_selectable(&draft, Side::Offered, 0, "nft1b"));
        assert!(!is_selectable(&draft, Side::Offered, 0, "nft1c"));
        assert!(is_selectable(&draft, Side::Offered, 0, "nft1free"));
        assert!(!is_selectable(&draft, Side::Requested, 0, "nft1a"));
    }

    #[test]
    fn test_choose_respects_selectability() {
        let mut cache = ThumbnailCache::new();
        let page = NftMother::page(0, 2);
        let taken = page[0].launcher_id.clone();
        let draft = OfferDraft {
            offered: AssetSet {
                nfts: vec![String::new(), taken],
                ..AssetSet::default()
            },
            ..OfferDraft::default()
        };

        let (mut picker, _) = opened("", 20);
        picker.on_page_loaded(0, page.clone(), &mut cache);
        assert_eq!(picker.choose(&draft), None);

        picker.cursor_down();
        assert_eq!(picker.choose(&draft), Some(page[1].launcher_id.clone()));
    }
}
