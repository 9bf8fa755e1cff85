//! Repository for the `wishlists` table.

use sqlx::PgPool;

use giftlist_core::types::DbId;

use crate::models::wishlist::{Wishlist, WishlistWithItems};
use crate::repositories::wishlist_item_repo::WishlistItemRepo;

/// Column list for wishlists queries.
const COLUMNS: &str = "id, chat_id, created_at, updated_at";

/// Provides lookup and get-or-create operations for wishlists.
pub struct WishlistRepo;

impl WishlistRepo {
    /// Get the wishlist for a chat, creating an empty one on first access.
    ///
    /// A single upsert against the `uq_wishlists_chat_id` constraint, so
    /// two concurrent first-access calls still produce one row. The
    /// conflict arm writes back the same `chat_id` so `RETURNING` yields
    /// the existing row without touching its timestamps meaningfully.
    pub async fn get_or_create(pool: &PgPool, chat_id: &str) -> Result<Wishlist, sqlx::Error> {
        let query = format!(
            "INSERT INTO wishlists (chat_id) VALUES ($1)
             ON CONFLICT (chat_id) DO UPDATE SET chat_id = EXCLUDED.chat_id
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Wishlist>(&query)
            .bind(chat_id)
            .fetch_one(pool)
            .await
    }

    /// Find a wishlist by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Wishlist>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM wishlists WHERE id = $1");
        sqlx::query_as::<_, Wishlist>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a wishlist by its external chat identifier.
    pub async fn find_by_chat_id(
        pool: &PgPool,
        chat_id: &str,
    ) -> Result<Option<Wishlist>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM wishlists WHERE chat_id = $1");
        sqlx::query_as::<_, Wishlist>(&query)
            .bind(chat_id)
            .fetch_optional(pool)
            .await
    }

    /// List every wishlist with its items, items newest first.
    ///
    /// Two queries total: wishlists, then all items ordered for grouping.
    pub async fn list_all_with_items(pool: &PgPool) -> Result<Vec<WishlistWithItems>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM wishlists ORDER BY created_at DESC");
        let wishlists = sqlx::query_as::<_, Wishlist>(&query).fetch_all(pool).await?;

        let items = WishlistItemRepo::list_all(pool).await?;

        let mut result: Vec<WishlistWithItems> = wishlists
            .into_iter()
            .map(|wishlist| WishlistWithItems {
                wishlist,
                items: Vec::new(),
            })
            .collect();

        // Items arrive newest-first; grouping preserves that order.
        for item in items {
            if let Some(entry) = result
                .iter_mut()
                .find(|entry| entry.wishlist.id == item.wishlist_id)
            {
                entry.items.push(item);
            }
        }

        Ok(result)
    }
}
