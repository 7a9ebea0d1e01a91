//! Shared test utilities and Mother pattern factories.
//!
//! Use these helpers instead of building wallet records by hand in each test.
//! [`MockWallet`] stands in for the RPC server: every command answers from a
//! script and is written to a call log the test can inspect.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use ratatui::buffer::Buffer;

use crate::client::{WalletApi, WalletResult};
use crate::domain::assets::TokenEntry;
use crate::domain::did::TransactionSummary;
use crate::domain::{
    AssetSet, CreateDid, DidRecord, GetNfts, MakeOffer, MakeOfferResponse, NftData, NftRecord,
    NftStatus, OfferDraft, OfferRecord, OfferRecordStatus, SyncStatus,
    TransactionResponse, Unit, UpdateDid, WalletError,
};

// ============================================================================
// Mother Pattern Factories
// ============================================================================

pub struct NftMother;

impl NftMother {
    /// 1x1 transparent PNG.
    #[must_use]
    pub fn png_data() -> NftData {
        NftData {
            mime_type: "image/png".to_string(),
            blob: "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAQAAAC1HAwCAAAAC0lEQVR42mNkYAAAAAYAAjCB0C8AAAAASUVORK5CYII="
                .to_string(),
        }
    }

    #[must_use]
    pub fn gif_data() -> NftData {
        NftData {
            mime_type: "image/gif".to_string(),
            blob: "R0lGODlhAQABAAAAACw=".to_string(),
        }
    }

    #[must_use]
    pub fn named(id: &str, name: &str) -> NftRecord {
        NftRecord {
            launcher_id: id.to_string(),
            name: Some(name.to_string()),
            collection_name: None,
            visible: true,
        }
    }

    /// `count` records of catalog page `page`, with ids unique across pages.
    #[must_use]
    pub fn page(page: u32, count: usize) -> Vec<NftRecord> {
        (0..count)
            .map(|i| Self::named(&format!("nft1p{page}i{i}"), &format!("Page {page} #{i}")))
            .collect()
    }
}

pub struct OfferMother;

impl OfferMother {
    pub const ASSET_ID: &'static str =
        "a628c1c2c6fcb74d53746157e438e108eab5c0bb3e5c80ff9b1910b3e4832913";

    /// 1.5 native offered for 2.5 of a token, 0.0001 fee, no expiration.
    #[must_use]
    pub fn simple_trade() -> OfferDraft {
        OfferDraft {
            offered: AssetSet {
                native_amount: Some("1.5".to_string()),
                ..AssetSet::default()
            },
            requested: AssetSet {
                tokens: vec![TokenEntry::new(Self::ASSET_ID, "2.5")],
                ..AssetSet::default()
            },
            fee: "0.0001".to_string(),
            expiration: None,
        }
    }

    #[must_use]
    pub fn record(offer: &str, status: OfferRecordStatus) -> OfferRecord {
        OfferRecord {
            offer: offer.to_string(),
            status,
            creation_date: "2024-05-01 10:00:00".to_string(),
        }
    }

    /// Pending, taken, and cancelled offers, in that order.
    #[must_use]
    pub fn records() -> Vec<OfferRecord> {
        vec![
            Self::record("offer1pending", OfferRecordStatus::Active),
            Self::record("offer1taken", OfferRecordStatus::Completed),
            Self::record("offer1cancelled", OfferRecordStatus::Cancelled),
        ]
    }
}

pub struct DidMother;

impl DidMother {
    #[must_use]
    pub fn named(id: &str, name: &str) -> DidRecord {
        DidRecord {
            launcher_id: id.to_string(),
            name: Some(name.to_string()),
            visible: true,
            created_height: Some(1_000),
        }
    }

    #[must_use]
    pub fn hidden(id: &str) -> DidRecord {
        DidRecord {
            launcher_id: id.to_string(),
            name: None,
            visible: false,
            created_height: Some(1_000),
        }
    }

    #[must_use]
    pub fn created() -> TransactionResponse {
        TransactionResponse {
            summary: TransactionSummary {
                fee: "1000000".to_string(),
                inputs: Vec::new(),
            },
            coin_spends: vec![serde_json::json!({"coin": "0x01"})],
        }
    }
}

// ============================================================================
// Mock Wallet
// ============================================================================

/// Scripted responses and the call log.
#[derive(Debug)]
pub struct MockState {
    pub calls: Vec<String>,
    pub made_offers: Vec<MakeOffer>,
    pub imported: Vec<String>,
    pub did_updates: Vec<UpdateDid>,
    pub did_creates: Vec<CreateDid>,
    pub nft_queries: Vec<GetNfts>,

    pub offers: Vec<OfferRecord>,
    pub dids: Vec<DidRecord>,
    pub created_offer: String,
    pub unit: Unit,
    pub visible_nfts: u32,
    /// NFTs returned per catalog page.
    pub page_len: usize,
    /// Commands that fail, with the reason they fail with.
    pub failures: HashMap<&'static str, String>,
}

impl Default for MockState {
    fn default() -> Self {
        Self {
            calls: Vec::new(),
            made_offers: Vec::new(),
            imported: Vec::new(),
            did_updates: Vec::new(),
            did_creates: Vec::new(),
            nft_queries: Vec::new(),
            offers: Vec::new(),
            dids: Vec::new(),
            created_offer: "offer1created".to_string(),
            unit: Unit::default(),
            visible_nfts: 45,
            page_len: 3,
            failures: HashMap::new(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MockWallet {
    state: Arc<Mutex<MockState>>,
}

impl MockWallet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_offers(self, offers: Vec<OfferRecord>) -> Self {
        self.state().offers = offers;
        self
    }

    #[must_use]
    pub fn with_dids(self, dids: Vec<DidRecord>) -> Self {
        self.state().dids = dids;
        self
    }

    #[must_use]
    pub fn with_unit(self, ticker: &str, decimals: u8) -> Self {
        self.state().unit = Unit {
            ticker: ticker.to_string(),
            decimals,
        };
        self
    }

    /// Makes `command` fail with a wallet error carrying `reason`.
    #[must_use]
    pub fn failing(self, command: &'static str, reason: &str) -> Self {
        self.state().failures.insert(command, reason.to_string());
        self
    }

    pub fn state(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap()
    }

    /// Command names in call order.
    #[must_use]
    pub fn calls(&self) -> Vec<String> {
        self.state().calls.clone()
    }

    #[must_use]
    pub fn count(&self, command: &str) -> usize {
        self.state().calls.iter().filter(|c| *c == command).count()
    }

    fn record(&self, command: &'static str) -> WalletResult<MutexGuard<'_, MockState>> {
        let mut state = self.state();
        state.calls.push(command.to_string());
        let failure = state.failures.get(command).cloned();
        match failure {
            Some(reason) => Err(WalletError::api("Wallet", reason)),
            None => Ok(state),
        }
    }
}

impl WalletApi for MockWallet {
    async fn make_offer(&self, request: MakeOffer) -> WalletResult<MakeOfferResponse> {
        let mut state = self.record("make_offer")?;
        state.made_offers.push(request);
        Ok(MakeOfferResponse {
            offer: state.created_offer.clone(),
        })
    }

    async fn import_offer(&self, offer: String) -> WalletResult<()> {
        let mut state = self.record("import_offer")?;
        state.imported.push(offer);
        Ok(())
    }

    async fn get_offers(&self) -> WalletResult<Vec<OfferRecord>> {
        Ok(self.record("get_offers")?.offers.clone())
    }

    async fn get_nft(&self, nft_id: String) -> WalletResult<NftRecord> {
        drop(self.record("get_nft")?);
        Ok(NftMother::named(&nft_id, "Selected"))
    }

    async fn get_nfts(&self, query: GetNfts) -> WalletResult<Vec<NftRecord>> {
        let mut state = self.record("get_nfts")?;
        let page = query.offset / query.limit.max(1);
        let len = state.page_len;
        state.nft_queries.push(query);
        Ok(NftMother::page(page, len))
    }

    async fn get_nft_data(&self, _nft_id: String) -> WalletResult<Option<NftData>> {
        drop(self.record("get_nft_data")?);
        Ok(Some(NftMother::png_data()))
    }

    async fn get_nft_status(&self) -> WalletResult<NftStatus> {
        let state = self.record("get_nft_status")?;
        Ok(NftStatus {
            nfts: state.visible_nfts,
            visible_nfts: state.visible_nfts,
            ..NftStatus::default()
        })
    }

    async fn get_sync_status(&self) -> WalletResult<SyncStatus> {
        let state = self.record("get_sync_status")?;
        Ok(SyncStatus {
            balance: "0".to_string(),
            unit: state.unit.clone(),
            synced_coins: 0,
            total_coins: 0,
            receive_address: String::new(),
        })
    }

    async fn get_dids(&self) -> WalletResult<Vec<DidRecord>> {
        Ok(self.record("get_dids")?.dids.clone())
    }

    async fn update_did(&self, request: UpdateDid) -> WalletResult<()> {
        let mut state = self.record("update_did")?;
        state.did_updates.push(request);
        Ok(())
    }

    async fn create_did(&self, request: CreateDid) -> WalletResult<TransactionResponse> {
        let mut state = self.record("create_did")?;
        state.did_creates.push(request);
        Ok(DidMother::created())
    }
}

// ============================================================================
// Buffer Helpers
// ============================================================================

/// Rendered buffer as text, one line per row with trailing spaces trimmed.
#[must_use]
pub fn buffer_text(buffer: &Buffer) -> String {
    let area = buffer.area();
    (area.top()..area.bottom())
        .map(|y| {
            let row: String = (area.left()..area.right())
                .map(|x| buffer[(x, y)].symbol())
                .collect();
            row.trim_end().to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
