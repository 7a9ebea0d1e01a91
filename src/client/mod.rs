//! Clients for the wallet backend.
//!
//! The wallet exposes its commands as JSON over HTTP. [`WalletApi`] is the
//! seam the rest of the application programs against; [`WalletClient`] is the
//! production implementation.
//!
//! # Example
//!
//! ```ignore
//! use crate::client::{WalletApi, WalletClient};
//!
//! let client = WalletClient::new("http://127.0.0.1:9257", Duration::from_secs(30))?;
//! let offers = client.get_offers().await?;
//! ```

use std::future::Future;

use crate::domain::{
    CreateDid, DidRecord, GetNfts, MakeOffer, MakeOfferResponse, NftData, NftRecord, NftStatus,
    OfferRecord, SyncStatus, TransactionResponse, UpdateDid, WalletError,
};

pub mod wallet;

// ============================================================================
// Re-exports
// ============================================================================

pub use wallet::WalletClient;

/// Result type for wallet commands.
pub type WalletResult<T> = Result<T, WalletError>;

// ============================================================================
// Wallet API
// ============================================================================

/// The wallet backend's command surface.
///
/// Every command is an independent request; nothing here holds a session.
pub trait WalletApi: Clone + Send + Sync + 'static {
    /// Builds and signs a new offer, returning its serialized form.
    fn make_offer(
        &self,
        request: MakeOffer,
    ) -> impl Future<Output = WalletResult<MakeOfferResponse>> + Send;

    /// Stores an offer in the wallet's offer list.
    fn import_offer(&self, offer: String) -> impl Future<Output = WalletResult<()>> + Send;

    /// Lists offers known to the wallet.
    fn get_offers(&self) -> impl Future<Output = WalletResult<Vec<OfferRecord>>> + Send;

    /// Fetches a single NFT by launcher id.
    fn get_nft(&self, nft_id: String) -> impl Future<Output = WalletResult<NftRecord>> + Send;

    /// Fetches one page of the NFT catalog.
    fn get_nfts(&self, query: GetNfts)
    -> impl Future<Output = WalletResult<Vec<NftRecord>>> + Send;

    /// Fetches the media attached to an NFT, if any.
    fn get_nft_data(
        &self,
        nft_id: String,
    ) -> impl Future<Output = WalletResult<Option<NftData>>> + Send;

    /// Counts NFTs and collections.
    fn get_nft_status(&self) -> impl Future<Output = WalletResult<NftStatus>> + Send;

    /// Reports sync progress and the wallet unit.
    fn get_sync_status(&self) -> impl Future<Output = WalletResult<SyncStatus>> + Send;

    /// Lists DID profiles.
    fn get_dids(&self) -> impl Future<Output = WalletResult<Vec<DidRecord>>> + Send;

    /// Renames a DID profile or changes its visibility.
    fn update_did(&self, request: UpdateDid) -> impl Future<Output = WalletResult<()>> + Send;

    /// Creates a new DID profile.
    fn create_did(
        &self,
        request: CreateDid,
    ) -> impl Future<Output = WalletResult<TransactionResponse>> + Send;
}
