pub mod health;
pub mod wishlist_items;
pub mod wishlists;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /health                         service + database health
///
/// /wishlists                      list all, or one by ?chatId=
/// /wishlists                      get-or-create (POST)
/// /wishlists/{id}/items           add item (POST)
///
/// /wishlist-items/{id}            reservation/purchase patch (PATCH)
/// /wishlist-items/{id}            delete (DELETE)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(wishlists::router())
        .merge(wishlist_items::router())
}
