//! NFT commands for WalletClient.

use serde::Deserialize;
use serde_json::json;

use super::WalletClient;
use crate::client::WalletResult;
use crate::domain::{GetNfts, NftData, NftRecord, WalletError};

#[derive(Debug, Deserialize)]
pub(super) struct GetNftResponse {
    #[serde(default)]
    pub nft: Option<NftRecord>,
}

#[derive(Debug, Deserialize)]
pub(super) struct GetNftsResponse {
    #[serde(default)]
    pub nfts: Vec<NftRecord>,
}

#[derive(Debug, Deserialize)]
pub(super) struct GetNftDataResponse {
    #[serde(default)]
    pub data: Option<NftData>,
}

impl WalletClient {
    /// Fetches one NFT. A `null` record is reported as not found.
    pub(crate) async fn nft_by_id(&self, nft_id: &str) -> WalletResult<NftRecord> {
        let response: GetNftResponse = self.call("get_nft", &json!({ "nft_id": nft_id })).await?;
        response
            .nft
            .ok_or_else(|| WalletError::not_found("NFT", nft_id))
    }

    pub(crate) async fn nft_page(&self, query: &GetNfts) -> WalletResult<Vec<NftRecord>> {
        let response: GetNftsResponse = self.call("get_nfts", query).await?;
        tracing::debug!(
            offset = query.offset,
            count = response.nfts.len(),
            "nft page"
        );
        Ok(response.nfts)
    }

    pub(crate) async fn nft_media(&self, nft_id: &str) -> WalletResult<Option<NftData>> {
        let response: GetNftDataResponse = self
            .call("get_nft_data", &json!({ "nft_id": nft_id }))
            .await?;
        Ok(response.data)
    }
}
