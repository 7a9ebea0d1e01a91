//! DID profile records and profile commands.

use serde::{Deserialize, Serialize};

/// A DID profile owned by the wallet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DidRecord {
    pub launcher_id: String,
    #[serde(default)]
    pub name: Option<String>,
    pub visible: bool,
    #[serde(default)]
    pub created_height: Option<u32>,
}

impl DidRecord {
    /// Display name, falling back to "Untitled Profile".
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("Untitled Profile")
    }
}

/// Request body of the `update_did` command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateDid {
    pub did_id: String,
    pub name: Option<String>,
    pub visible: bool,
}

/// Request body of the `create_did` command. `fee` is in base units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateDid {
    pub name: String,
    pub fee: String,
}

/// Summary of a submitted transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionResponse {
    #[serde(default)]
    pub summary: TransactionSummary,
    #[serde(default)]
    pub coin_spends: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionSummary {
    #[serde(default)]
    pub fee: String,
    #[serde(default)]
    pub inputs: Vec<serde_json::Value>,
}

/// Splits profiles into what the list shows.
///
/// Hidden profiles are only included when `show_hidden` is set.
#[must_use]
pub fn visible_dids(dids: &[DidRecord], show_hidden: bool) -> Vec<&DidRecord> {
    dids.iter().filter(|did| show_hidden || did.visible).collect()
}

/// Returns `true` if any profile is hidden.
#[must_use]
pub fn has_hidden(dids: &[DidRecord]) -> bool {
    dids.iter().any(|did| !did.visible)
}
