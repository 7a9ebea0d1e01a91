//! NFT records, media payloads, and the media URI builder.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

/// Image source shown whenever no thumbnail has been resolved.
pub const PLACEHOLDER_URI: &str = "offerdesk:placeholder/nft";

/// An NFT owned by the wallet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NftRecord {
    pub launcher_id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub collection_name: Option<String>,
    #[serde(default = "default_visible")]
    pub visible: bool,
}

const fn default_visible() -> bool {
    true
}

impl NftRecord {
    /// Display name, falling back to "Unknown".
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("Unknown")
    }
}

/// Media blob attached to an NFT. `blob` is base64 encoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NftData {
    pub mime_type: String,
    pub blob: String,
}

/// Sort order for catalog pages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NftSortMode {
    #[default]
    Name,
    Recent,
}

/// Query for one page of the NFT catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetNfts {
    pub offset: u32,
    pub limit: u32,
    pub include_hidden: bool,
    /// `"all"`, `"none"`, or a collection id.
    pub collection_id: String,
    pub sort_mode: NftSortMode,
}

impl GetNfts {
    /// Query for page `page` of the visible catalog sorted by name.
    #[must_use]
    pub fn visible_page(page: u32, page_size: u32) -> Self {
        Self {
            offset: page.saturating_mul(page_size),
            limit: page_size,
            include_hidden: false,
            collection_id: "all".to_string(),
            sort_mode: NftSortMode::Name,
        }
    }
}

/// Builds a displayable image source for an NFT's media.
///
/// Returns [`PLACEHOLDER_URI`] when there is no media, or when the blob is not
/// valid base64, so a broken image never reaches the view.
#[must_use]
pub fn nft_uri(data: Option<&NftData>) -> String {
    match data {
        Some(NftData { mime_type, blob })
            if !mime_type.is_empty() && STANDARD.decode(blob).is_ok() =>
        {
            format!("data:{mime_type};base64,{blob}")
        }
        _ => PLACEHOLDER_URI.to_string(),
    }
}

/// Returns `true` if `uri` is the placeholder image source.
#[must_use]
pub fn is_placeholder(uri: &str) -> bool {
    uri == PLACEHOLDER_URI
}

/// Short human label for a media URI, e.g. `image/png`.
#[must_use]
pub fn media_label(uri: &str) -> &str {
    uri.strip_prefix("data:")
        .and_then(|rest| rest.split_once(';'))
        .map_or("no image", |(mime, _)| mime)
}

// ============================================================================
// Tests
// ============================================================================
