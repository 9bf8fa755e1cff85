//! Viewer capability resolution.
//!
//! Which actions a viewer may take on a wishlist depends on exactly three
//! inputs: who is looking, who the honoree is, and what state the item is
//! in from that viewer's perspective. All permission checks in the client
//! and the presentation layer go through [`permitted_actions`] so the
//! rules cannot drift apart.

use serde::Serialize;

// ---------------------------------------------------------------------------
// Observable item state
// ---------------------------------------------------------------------------

/// An item's state as observed by one particular viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ItemState {
    Available,
    ReservedByMe,
    ReservedByOther,
    Bought,
}

/// Map stored reservation fields to the state a given viewer observes.
pub fn observed_state(
    viewer_id: &str,
    is_reserved: bool,
    reserved_by: Option<&str>,
    is_bought: bool,
) -> ItemState {
    if is_bought {
        ItemState::Bought
    } else if !is_reserved {
        ItemState::Available
    } else if reserved_by == Some(viewer_id) {
        ItemState::ReservedByMe
    } else {
        ItemState::ReservedByOther
    }
}

// ---------------------------------------------------------------------------
// Actions
// ---------------------------------------------------------------------------

/// A mutating action a viewer can request.
///
/// `Add` is list-level rather than item-level; it appears in every
/// permitted set of a viewer who may add items at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Action {
    Add,
    Reserve,
    Unreserve,
    MarkBought,
    Delete,
}

/// True when the viewer is the wishlist's designated honoree.
pub fn is_honoree(viewer_id: &str, honoree_id: Option<&str>) -> bool {
    honoree_id == Some(viewer_id)
}

/// Resolve the set of actions a viewer may take on an item in the given
/// observed state.
///
/// The honoree may take no action at all: the list must stay a surprise.
/// Items reserved by someone else are off limits entirely, and bought
/// items are final.
pub fn permitted_actions(
    viewer_id: &str,
    honoree_id: Option<&str>,
    state: ItemState,
) -> &'static [Action] {
    if is_honoree(viewer_id, honoree_id) {
        return &[];
    }

    match state {
        ItemState::Available => &[
            Action::Add,
            Action::Reserve,
            Action::MarkBought,
            Action::Delete,
        ],
        ItemState::ReservedByMe => &[
            Action::Add,
            Action::Unreserve,
            Action::MarkBought,
            Action::Delete,
        ],
        ItemState::ReservedByOther | ItemState::Bought => &[Action::Add],
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
