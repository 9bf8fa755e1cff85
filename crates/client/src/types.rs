//! Wire types as the client sees them.
//!
//! Timestamps stay opaque strings here; the client never computes with
//! them, it only renders and round-trips them.

use serde::{Deserialize, Serialize};

use giftlist_core::types::DbId;

/// A wishlist as returned by the service, items newest first.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wishlist {
    pub id: DbId,
    pub chat_id: String,
    pub created_at: String,
    pub updated_at: String,
    pub items: Vec<WishlistItem>,
}

/// A wishlist item as returned by the service.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistItem {
    pub id: DbId,
    pub wishlist_id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub link: Option<String>,
    pub image_url: Option<String>,
    pub is_reserved: bool,
    pub reserved_by: Option<String>,
    pub is_bought: bool,
    pub created_at: String,
    pub updated_at: String,
}

/// Request body for adding an item.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewItem {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Partial reservation/purchase update.
///
/// Absent fields are skipped on the wire; `reserved_by` keeps the nested
/// `Option` so an explicit `null` can be sent (`Some(None)`) while an
/// untouched field is omitted entirely (`None`).
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemPatchRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_reserved: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reserved_by: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_bought: Option<bool>,
}
