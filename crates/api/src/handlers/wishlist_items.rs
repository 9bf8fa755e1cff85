//! Handlers for wishlist item creation, reservation updates, and deletion.
//!
//! The PATCH handler is the reservation workflow: the raw patch goes
//! through `giftlist_core::reservation::resolve_item_patch`, which
//! enforces the reserver-clearing and bought-implies-reserved rules
//! before anything reaches the database.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use giftlist_core::error::CoreError;
use giftlist_core::reservation::{resolve_item_patch, ItemPatch};
use giftlist_core::types::DbId;
use giftlist_core::wishlist::{normalize_optional_text, validate_title};
use giftlist_db::models::wishlist_item::CreateWishlistItem;
use giftlist_db::repositories::{WishlistItemRepo, WishlistRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /wishlists/{id}/items
///
/// Create an item under a wishlist. Title is required and trimmed;
/// optional text fields collapse to NULL when empty after trimming.
pub async fn create_item(
    State(state): State<AppState>,
    Path(wishlist_id): Path<DbId>,
    payload: Result<Json<CreateWishlistItem>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = payload?;

    let title = validate_title(&input.title).map_err(AppError::BadRequest)?;

    WishlistRepo::find_by_id(&state.pool, wishlist_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Wishlist",
                key: wishlist_id.to_string(),
            })
        })?;

    let input = CreateWishlistItem {
        title,
        description: normalize_optional_text(input.description),
        link: normalize_optional_text(input.link),
        image_url: normalize_optional_text(input.image_url),
    };

    let item = WishlistItemRepo::create(&state.pool, wishlist_id, &input).await?;

    tracing::info!(item_id = item.id, wishlist_id, "Wishlist item created");

    Ok((StatusCode::CREATED, Json(item)))
}

/// PATCH /wishlist-items/{id}
///
/// Apply a partial reservation/purchase update and return the updated
/// item. An empty patch is a validation error, not a no-op.
pub async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    payload: Result<Json<ItemPatch>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(patch) = payload?;

    let update = resolve_item_patch(&patch)?;

    let item = WishlistItemRepo::update(&state.pool, id, &update)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Item",
                key: id.to_string(),
            })
        })?;

    tracing::info!(
        item_id = id,
        is_reserved = item.is_reserved,
        is_bought = item.is_bought,
        "Wishlist item updated"
    );

    Ok(Json(item))
}

/// DELETE /wishlist-items/{id}
///
/// Delete an item, returning 204 on success and 404 when it was already
/// gone.
pub async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = WishlistItemRepo::delete(&state.pool, id).await?;

    if !deleted {
        tracing::warn!(item_id = id, "Attempted to delete non-existent item");
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Item",
            key: id.to_string(),
        }));
    }

    tracing::info!(item_id = id, "Wishlist item deleted");

    Ok(StatusCode::NO_CONTENT)
}
