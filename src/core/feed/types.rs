use serde::{Deserialize, Serialize};

/// One syndicated entry as served by `/api/feeds`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct FeedItem {
    pub title: String,
    pub description: String,
    pub link: String,
}

/// Entries grouped by the host they were syndicated from.
///
/// `favicon` is carried verbatim: the server may send a URL or base64 image bytes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct SourceFeed {
    pub host: String,
    pub favicon: String,
    pub items: Vec<FeedItem>,
}
