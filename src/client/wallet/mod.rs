//! HTTP implementation of the wallet command surface.
//!
//! Each command is a `POST {rpc_url}/{command}` carrying a JSON body. Errors
//! come back as a non-2xx status with a `{ "kind", "reason" }` body.

use std::time::Duration;

use reqwest::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::json;

use super::{WalletApi, WalletResult};
use crate::domain::{
    CreateDid, DidRecord, GetNfts, MakeOffer, MakeOfferResponse, NftData, NftRecord, NftStatus,
    OfferRecord, SyncStatus, TransactionResponse, UpdateDid, WalletError,
};

mod dids;
mod nfts;
mod offers;


// ============================================================================
// Wallet Client
// ============================================================================

#[derive(Debug, Clone)]
pub struct WalletClient {
    /// Base URL of the wallet RPC server, without trailing slash.
    pub(crate) base_url: String,
    /// HTTP client for requests.
    client: Client,
}

/// Error body returned by the wallet on failure.
#[derive(Debug, serde::Deserialize)]
struct ErrorBody {
    kind: String,
    reason: String,
}

impl WalletClient {
    /// Creates a client for the wallet RPC server at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns `WalletError::ClientInit` if the HTTP client fails to
    /// initialize (e.g., TLS backend unavailable).
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, WalletError> {
        let client = Client::builder()
            .pool_max_idle_per_host(4)
            .pool_idle_timeout(Duration::from_secs(30))
            .timeout(timeout)
            .build()
            .map_err(|e| WalletError::client_init(e.to_string()))?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn endpoint_url(&self, command: &str) -> String {
        format!("{}/{}", self.base_url, command)
    }

    /// Sends one command and decodes its response.
    pub(crate) async fn call<Req, Res>(&self, command: &str, body: &Req) -> WalletResult<Res>
    where
        Req: Serialize + ?Sized,
        Res: DeserializeOwned,
    {
        let url = self.endpoint_url(command);
        tracing::debug!(command, "wallet request");

        let response = self
            .client
            .post(&url)
            .header("accept", "application/json")
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            tracing::warn!(command, %status, "wallet request failed");
            return Err(Self::decode_error(status.as_u16(), &text));
        }

        let text = response.text().await?;
        Self::decode_response(command, &text)
    }

    /// Decodes a successful response body. An empty body decodes as `null`.
    pub(crate) fn decode_response<Res: DeserializeOwned>(
        command: &str,
        text: &str,
    ) -> WalletResult<Res> {
        let text = if text.trim().is_empty() { "null" } else { text };
        serde_json::from_str(text).map_err(|e| WalletError::parse(format!("{command}: {e}")))
    }

    /// Maps an error response to a [`WalletError`].
    pub(crate) fn decode_error(status: u16, text: &str) -> WalletError {
        match serde_json::from_str::<ErrorBody>(text) {
            Ok(body) if body.kind.eq_ignore_ascii_case("not_found") => {
                WalletError::not_found("item", body.reason)
            }
            Ok(body) => WalletError::api(capitalize(&body.kind), body.reason),
            Err(_) => WalletError::api(format!("HTTP {status}"), text.trim()),
        }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars
        .next()
        .map(|first| first.to_uppercase().chain(chars).collect())
        .unwrap_or_default()
}

/// Body for commands that take no arguments.
fn empty_body() -> serde_json::Value {
    json!({})
}

// ============================================================================
// WalletApi
// ============================================================================

impl WalletApi for WalletClient {
    async fn make_offer(&self, request: MakeOffer) -> WalletResult<MakeOfferResponse> {
        self.make_offer_request(&request).await
    }

    async fn import_offer(&self, offer: String) -> WalletResult<()> {
        self.import_offer_request(&offer).await
    }

    async fn get_offers(&self) -> WalletResult<Vec<OfferRecord>> {
        self.list_offers().await
    }

    async fn get_nft(&self, nft_id: String) -> WalletResult<NftRecord> {
        self.nft_by_id(&nft_id).await
    }

    async fn get_nfts(&self, query: GetNfts) -> WalletResult<Vec<NftRecord>> {
        self.nft_page(&query).await
    }

    async fn get_nft_data(&self, nft_id: String) -> WalletResult<Option<NftData>> {
        self.nft_media(&nft_id).await
    }

    async fn get_nft_status(&self) -> WalletResult<NftStatus> {
        self.call("get_nft_status", &empty_body()).await
    }

    async fn get_sync_status(&self) -> WalletResult<SyncStatus> {
        self.call("get_sync_status", &empty_body()).await
    }

    async fn get_dids(&self) -> WalletResult<Vec<DidRecord>> {
        self.list_dids().await
    }

    async fn update_did(&self, request: UpdateDid) -> WalletResult<()> {
        self.update_did_request(&request).await
    }

    async fn create_did(&self, request: CreateDid) -> WalletResult<TransactionResponse> {
        self.create_did_request(&request).await
    }
}
