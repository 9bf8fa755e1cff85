//! Route definitions for wishlist items addressed by their own id.
//!
//! ```text
//! PATCH  /wishlist-items/{id}   -> update_item (reservation/purchase)
//! DELETE /wishlist-items/{id}   -> delete_item
//! ```

use axum::routing::patch;
use axum::Router;

use crate::handlers::wishlist_items;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route(
        "/wishlist-items/{id}",
        patch(wishlist_items::update_item).delete(wishlist_items::delete_item),
    )
}
