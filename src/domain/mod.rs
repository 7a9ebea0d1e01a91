//! Domain types for the offerdesk wallet client.
//!
//! # Module Organization
//!
//! - [`error`] - Error types for RPC calls and unit conversion
//! - [`amount`] - Display/base unit conversion
//! - [`assets`] - One side of a trade and its pure edits
//! - [`offer`] - Offer draft, records, and `make_offer` payloads
//! - [`nft`] - NFT records, media, and the media URI builder
//! - [`did`] - DID profile records and commands
//! - [`wallet`] - Wallet unit and status

// ============================================================================
// Module Declarations
// ============================================================================

pub mod amount;
pub mod assets;
pub mod did;
pub mod error;
pub mod nft;
pub mod offer;
pub mod wallet;

// ============================================================================
// Re-exports
// ============================================================================

pub use amount::{TOKEN_DECIMALS, to_base_units_or_zero, to_display_units};
pub use assets::AssetSet;
pub use did::{CreateDid, DidRecord, TransactionResponse, UpdateDid};
pub use error::{AmountError, WalletError};
pub use nft::{GetNfts, NftData, NftRecord};
pub use offer::{
    Assets, CatAmount, Expiration, MakeOffer, MakeOfferResponse, OfferDraft, OfferRecord,
    OfferRecordStatus, Side,
};
pub use wallet::{NftStatus, SyncStatus, Unit};
