//! Per-viewer wishlist session with optimistic updates.
//!
//! Every mutating action follows the same shape: resolve the viewer's
//! capability, capture a [`Snapshot`], mutate the local wishlist, send
//! the confirming request, and on failure restore the snapshot and set
//! a user-visible error message. There is no automatic retry.

use giftlist_core::capability::{is_honoree, observed_state, permitted_actions, Action};
use giftlist_core::types::DbId;

use crate::api::WishlistApi;
use crate::error::ClientError;
use crate::snapshot::Snapshot;
use crate::types::{ItemPatchRequest, NewItem, Wishlist, WishlistItem};

/// Blocking yes/no confirmation, answered by the embedding UI.
///
/// Mark-bought and delete go through this before any state changes;
/// declining is a no-op.
pub trait Confirm {
    fn confirm(&self, prompt: &str) -> bool;
}

/// One viewer's live session against a wishlist.
pub struct WishlistSession<A: WishlistApi> {
    api: A,
    viewer_id: String,
    honoree_id: Option<String>,
    wishlist: Option<Wishlist>,
    last_error: Option<String>,
}

impl<A: WishlistApi> WishlistSession<A> {
    /// Create a session for a viewer.
    ///
    /// Both identities are runtime context handed in by the embedding
    /// application, never compiled-in defaults.
    pub fn new(api: A, viewer_id: impl Into<String>, honoree_id: Option<String>) -> Self {
        Self {
            api,
            viewer_id: viewer_id.into(),
            honoree_id,
            wishlist: None,
            last_error: None,
        }
    }

    /// The loaded wishlist, if any.
    pub fn wishlist(&self) -> Option<&Wishlist> {
        self.wishlist.as_ref()
    }

    /// The most recent user-facing error message, cleared on the next
    /// action.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn viewer_id(&self) -> &str {
        &self.viewer_id
    }

    pub fn honoree_id(&self) -> Option<&str> {
        self.honoree_id.as_deref()
    }

    /// Load (get-or-create) the wishlist for a chat.
    pub async fn load(&mut self, chat_id: &str) -> Result<(), ClientError> {
        self.last_error = None;

        match self.api.fetch_wishlist(chat_id).await {
            Ok(wishlist) => {
                self.wishlist = Some(wishlist);
                Ok(())
            }
            Err(e) => {
                tracing::warn!(chat_id, error = %e, "Failed to load wishlist");
                self.last_error = Some("Failed to load wishlist.".to_string());
                Err(e)
            }
        }
    }

    /// Add an item to the loaded wishlist. Denied to the honoree.
    ///
    /// Not optimistic: the item is inserted at the front of the list
    /// only once the server returns the created row.
    pub async fn add_item(&mut self, item: NewItem) -> Result<(), ClientError> {
        self.last_error = None;
        let wishlist_id = self.require_loaded()?.id;

        // Add is list-level; the only gate is the honoree rule.
        if is_honoree(&self.viewer_id, self.honoree_id.as_deref()) {
            return Err(self.deny("The honoree cannot change this list."));
        }

        match self.api.add_item(wishlist_id, &item).await {
            Ok(created) => {
                if let Some(wishlist) = self.wishlist.as_mut() {
                    wishlist.items.insert(0, created);
                }
                Ok(())
            }
            Err(e) => {
                self.last_error = Some(format!("Failed to add \"{}\".", item.title));
                Err(e)
            }
        }
    }

    /// Reserve an available item for the acting viewer.
    pub async fn reserve(&mut self, item_id: DbId) -> Result<(), ClientError> {
        self.last_error = None;
        let item = self.find_item(item_id)?.clone();

        if !self.permits(Action::Reserve, &item) {
            return Err(self.deny("This item cannot be reserved."));
        }

        let snapshot = self.capture()?;
        let viewer = self.viewer_id.clone();
        if let Some(local) = self.item_mut(item_id) {
            local.is_reserved = true;
            local.reserved_by = Some(viewer.clone());
        }

        let patch = ItemPatchRequest {
            is_reserved: Some(true),
            reserved_by: Some(Some(viewer)),
            is_bought: None,
        };
        let failure = format!("Failed to reserve \"{}\".", item.title);
        self.commit_patch(item_id, patch, snapshot, failure).await
    }

    /// Release the viewer's own reservation.
    ///
    /// Rejected locally, without a request, when the viewer is not the
    /// recorded reserver.
    pub async fn unreserve(&mut self, item_id: DbId) -> Result<(), ClientError> {
        self.last_error = None;
        let item = self.find_item(item_id)?.clone();

        if !self.permits(Action::Unreserve, &item) {
            return Err(self.deny("You can only unreserve items reserved by you."));
        }

        let snapshot = self.capture()?;
        if let Some(local) = self.item_mut(item_id) {
            local.is_reserved = false;
            local.reserved_by = None;
        }

        let patch = ItemPatchRequest {
            is_reserved: Some(false),
            reserved_by: Some(None),
            is_bought: None,
        };
        let failure = format!("Failed to unreserve \"{}\".", item.title);
        self.commit_patch(item_id, patch, snapshot, failure).await
    }

    /// Mark an item bought, reserving it at the same time.
    ///
    /// The reservation is attributed to the existing reserver when there
    /// is one, otherwise to the acting viewer.
    pub async fn mark_bought(
        &mut self,
        item_id: DbId,
        confirm: &dyn Confirm,
    ) -> Result<(), ClientError> {
        self.last_error = None;
        let item = self.find_item(item_id)?.clone();

        if !self.permits(Action::MarkBought, &item) {
            return Err(self.deny("This item cannot be marked as bought."));
        }

        if !confirm.confirm(&format!("Mark \"{}\" as bought?", item.title)) {
            return Ok(());
        }

        let reserver = item
            .reserved_by
            .clone()
            .unwrap_or_else(|| self.viewer_id.clone());

        let snapshot = self.capture()?;
        if let Some(local) = self.item_mut(item_id) {
            local.is_bought = true;
            local.is_reserved = true;
            local.reserved_by = Some(reserver.clone());
        }

        let patch = ItemPatchRequest {
            is_reserved: Some(true),
            reserved_by: Some(Some(reserver)),
            is_bought: Some(true),
        };
        let failure = format!("Failed to mark \"{}\" as bought.", item.title);
        self.commit_patch(item_id, patch, snapshot, failure).await
    }

    /// Delete a non-bought item the viewer is allowed to touch.
    pub async fn delete_item(
        &mut self,
        item_id: DbId,
        confirm: &dyn Confirm,
    ) -> Result<(), ClientError> {
        self.last_error = None;
        let item = self.find_item(item_id)?.clone();

        if !self.permits(Action::Delete, &item) {
            return Err(self.deny("This item cannot be deleted."));
        }

        if !confirm.confirm(&format!("Delete \"{}\"?", item.title)) {
            return Ok(());
        }

        let snapshot = self.capture()?;
        if let Some(wishlist) = self.wishlist.as_mut() {
            wishlist.items.retain(|i| i.id != item_id);
        }

        match self.api.delete_item(item_id).await {
            Ok(()) => Ok(()),
            Err(e) => {
                tracing::warn!(item_id, error = %e, "Delete failed, rolling back");
                self.wishlist = Some(snapshot.restore());
                self.last_error = Some(format!("Failed to delete \"{}\".", item.title));
                Err(e)
            }
        }
    }

    // -- internals -----------------------------------------------------------

    /// Send the confirming patch. On success the server row replaces the
    /// optimistic one; on failure the snapshot is restored and
    /// `failure_message` surfaced.
    async fn commit_patch(
        &mut self,
        item_id: DbId,
        patch: ItemPatchRequest,
        snapshot: Snapshot<Wishlist>,
        failure_message: String,
    ) -> Result<(), ClientError> {
        match self.api.patch_item(item_id, &patch).await {
            Ok(updated) => {
                self.replace_item(updated);
                Ok(())
            }
            Err(e) => {
                tracing::warn!(item_id, error = %e, "Patch failed, rolling back");
                self.wishlist = Some(snapshot.restore());
                self.last_error = Some(failure_message);
                Err(e)
            }
        }
    }

    fn require_loaded(&self) -> Result<&Wishlist, ClientError> {
        self.wishlist.as_ref().ok_or(ClientError::NotLoaded)
    }

    fn capture(&self) -> Result<Snapshot<Wishlist>, ClientError> {
        Ok(Snapshot::capture(self.require_loaded()?))
    }

    fn find_item(&self, item_id: DbId) -> Result<&WishlistItem, ClientError> {
        self.require_loaded()?
            .items
            .iter()
            .find(|i| i.id == item_id)
            .ok_or(ClientError::UnknownItem(item_id))
    }

    fn item_mut(&mut self, item_id: DbId) -> Option<&mut WishlistItem> {
        self.wishlist
            .as_mut()?
            .items
            .iter_mut()
            .find(|i| i.id == item_id)
    }

    fn replace_item(&mut self, updated: WishlistItem) {
        if let Some(wishlist) = self.wishlist.as_mut() {
            if let Some(slot) = wishlist.items.iter_mut().find(|i| i.id == updated.id) {
                *slot = updated;
            }
        }
    }

    fn permits(&self, action: Action, item: &WishlistItem) -> bool {
        let state = observed_state(
            &self.viewer_id,
            item.is_reserved,
            item.reserved_by.as_deref(),
            item.is_bought,
        );
        permitted_actions(&self.viewer_id, self.honoree_id.as_deref(), state).contains(&action)
    }

    fn deny(&mut self, message: &str) -> ClientError {
        self.last_error = Some(message.to_string());
        ClientError::PermissionDenied(message.to_string())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
