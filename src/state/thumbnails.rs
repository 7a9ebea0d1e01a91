//! Session-local cache of NFT thumbnails.
//!
//! Entries are only ever added or overwritten, never evicted. An id is handed
//! out for fetching at most once at a time; the in-flight set is released when
//! the result (or failure) comes back.

use std::collections::{HashMap, HashSet};

use crate::domain::NftData;
use crate::domain::nft::{PLACEHOLDER_URI, is_placeholder, nft_uri};

#[derive(Debug, Default)]
pub struct ThumbnailCache {
    uris: HashMap<String, String>,
    in_flight: HashSet<String>,
}

impl ThumbnailCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, nft_id: &str) -> Option<&str> {
        self.uris.get(nft_id).map(String::as_str)
    }

    /// Resolved URI for `nft_id`, or the placeholder image.
    #[must_use]
    pub fn uri_or_placeholder(&self, nft_id: &str) -> &str {
        self.get(nft_id).unwrap_or(PLACEHOLDER_URI)
    }

    #[must_use]
    pub fn is_in_flight(&self, nft_id: &str) -> bool {
        self.in_flight.contains(nft_id)
    }

    /// Number of NFTs with a resolved image.
    #[must_use]
    pub fn cached_count(&self) -> usize {
        self.uris.len()
    }

    /// Marks every id that is neither cached nor in flight as in flight and
    /// returns those ids, in input order and without repeats.
    pub fn claim<'a>(&mut self, nft_ids: impl IntoIterator<Item = &'a str>) -> Vec<String> {
        let mut claimed = Vec::new();
        for id in nft_ids {
            if id.is_empty() || self.uris.contains_key(id) || self.in_flight.contains(id) {
                continue;
            }
            self.in_flight.insert(id.to_string());
            claimed.push(id.to_string());
        }
        claimed
    }

    /// Records the outcome of a fetch. A missing or undecodable blob leaves
    /// the cache as is.
    pub fn merge(&mut self, nft_id: &str, data: Option<&NftData>) {
        self.in_flight.remove(nft_id);
        let Some(data) = data else {
            return;
        };
        let uri = nft_uri(Some(data));
        if !is_placeholder(&uri) {
            self.uris.insert(nft_id.to_string(), uri);
        }
    }
}
