//! Outbound links for the shop and waitlist buttons.

use serde::Serialize;

/// External destinations the front end opens in a new tab.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ExternalLinks {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preorder_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub waitlist_url: Option<String>,
}
