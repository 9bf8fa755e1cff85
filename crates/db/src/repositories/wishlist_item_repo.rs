//! Repository for the `wishlist_items` table.

use sqlx::PgPool;

use giftlist_core::reservation::ResolvedItemUpdate;
use giftlist_core::types::DbId;

use crate::models::wishlist_item::{CreateWishlistItem, WishlistItem};

/// Column list for wishlist_items queries.
const COLUMNS: &str = "id, wishlist_id, title, description, link, image_url, \
    is_reserved, reserved_by, is_bought, created_at, updated_at";

/// Provides CRUD operations for wishlist items.
pub struct WishlistItemRepo;

impl WishlistItemRepo {
    /// Create a new item under the given wishlist, returning the created row.
    ///
    /// Runs in a transaction that also touches the owning wishlist's
    /// `updated_at`, so adding an item counts as updating the list.
    pub async fn create(
        pool: &PgPool,
        wishlist_id: DbId,
        input: &CreateWishlistItem,
    ) -> Result<WishlistItem, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO wishlist_items (wishlist_id, title, description, link, image_url)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        let item = sqlx::query_as::<_, WishlistItem>(&query)
            .bind(wishlist_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.link)
            .bind(&input.image_url)
            .fetch_one(&mut *tx)
            .await?;

        sqlx::query("UPDATE wishlists SET updated_at = NOW() WHERE id = $1")
            .bind(wishlist_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(item)
    }

    /// Find a wishlist item by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<WishlistItem>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM wishlist_items WHERE id = $1");
        sqlx::query_as::<_, WishlistItem>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List items for a wishlist, newest first.
    pub async fn list_by_wishlist(
        pool: &PgPool,
        wishlist_id: DbId,
    ) -> Result<Vec<WishlistItem>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM wishlist_items
             WHERE wishlist_id = $1
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, WishlistItem>(&query)
            .bind(wishlist_id)
            .fetch_all(pool)
            .await
    }

    /// List all items across wishlists, newest first.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<WishlistItem>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM wishlist_items ORDER BY created_at DESC");
        sqlx::query_as::<_, WishlistItem>(&query)
            .fetch_all(pool)
            .await
    }

    /// Apply a resolved reservation update to an item, returning the
    /// updated row.
    ///
    /// One atomic UPDATE. The boolean flags use COALESCE; `reserved_by`
    /// needs a CASE because "not mentioned" and "set to NULL" are both
    /// valid inputs, so a separate marker parameter decides whether the
    /// column is written at all.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        update: &ResolvedItemUpdate,
    ) -> Result<Option<WishlistItem>, sqlx::Error> {
        let query = format!(
            "UPDATE wishlist_items SET
                is_reserved = COALESCE($2, is_reserved),
                reserved_by = CASE WHEN $3 THEN $4 ELSE reserved_by END,
                is_bought = COALESCE($5, is_bought),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, WishlistItem>(&query)
            .bind(id)
            .bind(update.is_reserved)
            .bind(update.reserved_by.is_some())
            .bind(update.reserved_by.clone().flatten())
            .bind(update.is_bought)
            .fetch_optional(pool)
            .await
    }

    /// Delete a wishlist item by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM wishlist_items WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
