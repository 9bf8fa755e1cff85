//! Wishlist model.

use giftlist_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::wishlist_item::WishlistItem;

/// A row from the `wishlists` table.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Wishlist {
    pub id: DbId,
    pub chat_id: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A wishlist together with its items, newest first.
///
/// Serializes flat: the wishlist fields plus an `items` array, which is
/// the shape the get-or-create and lookup endpoints return.
#[derive(Debug, Clone, Serialize)]
pub struct WishlistWithItems {
    #[serde(flatten)]
    pub wishlist: Wishlist,
    pub items: Vec<WishlistItem>,
}

/// DTO for the get-or-create request body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetOrCreateWishlist {
    pub chat_id: String,
}
