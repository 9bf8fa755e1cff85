//! Per-viewer view models.
//!
//! Computes what one viewer sees for each item: the observed state, the
//! actions they may take, and the reserver attribution. The honoree
//! sees reservation status but never who reserved, and gets no actions
//! at all, so the list stays a surprise.

use serde::Serialize;

use giftlist_core::capability::{is_honoree, observed_state, permitted_actions, Action, ItemState};
use giftlist_core::types::DbId;

use crate::types::{Wishlist, WishlistItem};

/// What one viewer sees for a single item.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemView {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub link: Option<String>,
    pub image_url: Option<String>,
    /// The item's state from this viewer's perspective.
    pub state: ItemState,
    /// Who reserved the item; always `None` for the honoree.
    pub reserved_by: Option<String>,
    /// Actions this viewer may take on the item.
    pub actions: Vec<Action>,
}

/// Compute one viewer's view of a whole wishlist, preserving item order.
pub fn wishlist_view(
    wishlist: &Wishlist,
    viewer_id: &str,
    honoree_id: Option<&str>,
) -> Vec<ItemView> {
    wishlist
        .items
        .iter()
        .map(|item| item_view(item, viewer_id, honoree_id))
        .collect()
}

/// Compute one viewer's view of a single item.
pub fn item_view(item: &WishlistItem, viewer_id: &str, honoree_id: Option<&str>) -> ItemView {
    let state = observed_state(
        viewer_id,
        item.is_reserved,
        item.reserved_by.as_deref(),
        item.is_bought,
    );

    let reserved_by = if is_honoree(viewer_id, honoree_id) {
        None
    } else {
        item.reserved_by.clone()
    };

    ItemView {
        id: item.id,
        title: item.title.clone(),
        description: item.description.clone(),
        link: item.link.clone(),
        image_url: item.image_url.clone(),
        state,
        reserved_by,
        actions: permitted_actions(viewer_id, honoree_id, state).to_vec(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
