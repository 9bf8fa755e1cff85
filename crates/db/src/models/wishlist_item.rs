//! Wishlist item model.

use giftlist_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `wishlist_items` table.
#[derive(Debug, Clone, Serialize, FromRow)]
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
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new wishlist item.
///
/// The handler validates the title and trims the optional fields before
/// the insert; empty-after-trim optional fields become `None`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWishlistItem {
    pub title: String,
    pub description: Option<String>,
    pub link: Option<String>,
    pub image_url: Option<String>,
}
