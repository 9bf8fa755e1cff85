//! Route definitions for wishlists.
//!
//! ```text
//! GET    /wishlists              -> list_wishlists (all, or one by ?chatId=)
//! POST   /wishlists              -> get_or_create_wishlist
//! POST   /wishlists/{id}/items   -> create_item
//! ```

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{wishlist_items, wishlists};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/wishlists",
            get(wishlists::list_wishlists).post(wishlists::get_or_create_wishlist),
        )
        .route("/wishlists/{id}/items", post(wishlist_items::create_item))
}
