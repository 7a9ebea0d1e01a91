//! DID profile commands for WalletClient.

use serde::Deserialize;
use serde_json::json;

use super::WalletClient;
use crate::client::WalletResult;
use crate::domain::{CreateDid, DidRecord, TransactionResponse, UpdateDid, WalletError};

#[derive(Debug, Deserialize)]
pub(super) struct GetDidsResponse {
    #[serde(default)]
    pub dids: Vec<DidRecord>,
}

impl WalletClient {
    pub(crate) async fn list_dids(&self) -> WalletResult<Vec<DidRecord>> {
        let response: GetDidsResponse = self.call("get_dids", &json!({})).await?;
        Ok(response.dids)
    }

    pub(crate) async fn update_did_request(&self, request: &UpdateDid) -> WalletResult<()> {
        let _: serde_json::Value = self.call("update_did", request).await?;
        Ok(())
    }

    /// Creates a profile. The name must not be blank.
    pub(crate) async fn create_did_request(
        &self,
        request: &CreateDid,
    ) -> WalletResult<TransactionResponse> {
        if request.name.trim().is_empty() {
            return Err(WalletError::invalid_input("Profile name is required"));
        }
        self.call("create_did", request).await
    }
}
