//! API response type definitions.

use serde::Deserialize;

/// Album listing returned by the listing endpoint.
///
/// Item order is album playback order.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Listing {
    #[serde(rename = "Items")]
    pub items: Vec<ListingItem>,
}

/// One entry of an album listing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ListingItem {
    /// Display name, used as the file name.
    #[serde(rename = "Kw")]
    pub display_name: String,

    /// Item id passed to download URL resolution.
    #[serde(rename = "Iid")]
    pub internal_id: u64,
}

impl Listing {
    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Item at a 1-based position.
    pub fn get(&self, position: usize) -> Option<&ListingItem> {
        position.checked_sub(1).and_then(|i| self.items.get(i))
    }
}
