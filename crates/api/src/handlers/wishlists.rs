//! Handlers for wishlist lookup and get-or-create.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use axum::Json;

use giftlist_core::error::CoreError;
use giftlist_core::wishlist::validate_chat_id;
use giftlist_db::models::wishlist::{GetOrCreateWishlist, WishlistWithItems};
use giftlist_db::repositories::{WishlistItemRepo, WishlistRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Query parameters for wishlist listing.
#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistQuery {
    pub chat_id: Option<String>,
}

/// GET /wishlists?chatId=
///
/// With a chat id: that chat's wishlist together with its items, 404 when
/// absent. Without a filter: every wishlist, each with its items.
pub async fn list_wishlists(
    State(state): State<AppState>,
    Query(params): Query<WishlistQuery>,
) -> AppResult<Response> {
    match params.chat_id {
        Some(chat_id) => {
            let wishlist = WishlistRepo::find_by_chat_id(&state.pool, &chat_id)
                .await?
                .ok_or_else(|| {
                    AppError::Core(CoreError::NotFound {
                        entity: "Wishlist for chat",
                        key: chat_id.clone(),
                    })
                })?;

            let items = WishlistItemRepo::list_by_wishlist(&state.pool, wishlist.id).await?;

            Ok(Json(WishlistWithItems { wishlist, items }).into_response())
        }
        None => {
            let wishlists = WishlistRepo::list_all_with_items(&state.pool).await?;
            Ok(Json(wishlists).into_response())
        }
    }
}

/// POST /wishlists
///
/// Idempotent get-or-create keyed on the chat id. Returns 200 with the
/// wishlist and its items whether or not a row was created.
pub async fn get_or_create_wishlist(
    State(state): State<AppState>,
    payload: Result<Json<GetOrCreateWishlist>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = payload?;

    validate_chat_id(&input.chat_id).map_err(AppError::BadRequest)?;

    let wishlist = WishlistRepo::get_or_create(&state.pool, &input.chat_id).await?;
    let items = WishlistItemRepo::list_by_wishlist(&state.pool, wishlist.id).await?;

    tracing::info!(
        chat_id = %wishlist.chat_id,
        wishlist_id = wishlist.id,
        "Wishlist ready"
    );

    Ok(Json(WishlistWithItems { wishlist, items }))
}
