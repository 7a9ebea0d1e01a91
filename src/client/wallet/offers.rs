//! Offer commands for WalletClient.

use serde::Deserialize;
use serde_json::json;

use super::WalletClient;
use crate::client::WalletResult;
use crate::domain::{MakeOffer, MakeOfferResponse, OfferRecord, WalletError};

#[derive(Debug, Deserialize)]
pub(super) struct GetOffersResponse {
    #[serde(default)]
    pub offers: Vec<OfferRecord>,
}

impl WalletClient {
    /// Builds a signed offer from base-unit amounts.
    pub(crate) async fn make_offer_request(
        &self,
        request: &MakeOffer,
    ) -> WalletResult<MakeOfferResponse> {
        let response: MakeOfferResponse = self.call("make_offer", request).await?;
        if response.offer.trim().is_empty() {
            return Err(WalletError::parse("make_offer returned an empty offer"));
        }
        tracing::info!(len = response.offer.len(), "offer created");
        Ok(response)
    }

    /// Saves an offer string to the wallet's offer list.
    pub(crate) async fn import_offer_request(&self, offer: &str) -> WalletResult<()> {
        let offer = offer.trim();
        if offer.is_empty() {
            return Err(WalletError::invalid_input("Offer is empty"));
        }
        let _: serde_json::Value = self.call("import_offer", &json!({ "offer": offer })).await?;
        Ok(())
    }

    pub(crate) async fn list_offers(&self) -> WalletResult<Vec<OfferRecord>> {
        let response: GetOffersResponse = self.call("get_offers", &json!({})).await?;
        Ok(response.offers)
    }
}
