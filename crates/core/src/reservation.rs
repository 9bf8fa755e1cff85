//! Reservation state rules for wishlist items.
//!
//! A patch request carries any subset of `isReserved`, `reservedBy`, and
//! `isBought`. [`resolve_item_patch`] turns one into the concrete field
//! updates to apply, enforcing:
//!
//! - unreserving always clears the reserver, even when the same request
//!   names one;
//! - `reservedBy` must distinguish "absent" from "explicit null", hence
//!   the nested `Option`;
//! - marking bought also marks reserved, and a request that both buys and
//!   unreserves is contradictory;
//! - an empty patch is rejected rather than applied as a no-op.

use serde::Deserialize;

use crate::error::CoreError;

/// Partial update for a wishlist item, as received on the wire.
///
/// `reserved_by` is doubly optional: the outer `Option` is whether the
/// field appeared in the request at all, the inner one its value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemPatch {
    pub is_reserved: Option<bool>,
    #[serde(default)]
    pub reserved_by: Option<Option<String>>,
    pub is_bought: Option<bool>,
}

impl ItemPatch {
    /// True when no recognized field is present.
    pub fn is_empty(&self) -> bool {
        self.is_reserved.is_none() && self.reserved_by.is_none() && self.is_bought.is_none()
    }
}

/// Field updates ready to be applied to the stored item.
///
/// `reserved_by` keeps the set/unset distinction so the storage layer can
/// leave the column untouched when the patch never mentioned it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedItemUpdate {
    pub is_reserved: Option<bool>,
    pub reserved_by: Option<Option<String>>,
    pub is_bought: Option<bool>,
}

/// Resolve a raw patch into the updates to apply.
///
/// Returns a validation error for an empty patch or for the contradictory
/// `isBought: true` + `isReserved: false` combination.
pub fn resolve_item_patch(patch: &ItemPatch) -> Result<ResolvedItemUpdate, CoreError> {
    if patch.is_empty() {
        return Err(CoreError::Validation(
            "No valid update data provided".to_string(),
        ));
    }

    if patch.is_bought == Some(true) && patch.is_reserved == Some(false) {
        return Err(CoreError::Validation(
            "isBought requires the item to stay reserved".to_string(),
        ));
    }

    let mut update = ResolvedItemUpdate {
        is_reserved: patch.is_reserved,
        reserved_by: patch.reserved_by.clone(),
        is_bought: patch.is_bought,
    };

    // Unreserving clears the reserver no matter what the request says.
    if patch.is_reserved == Some(false) {
        update.reserved_by = Some(None);
    }

    // A bought item is always reserved.
    if patch.is_bought == Some(true) {
        update.is_reserved = Some(true);
    }

    Ok(update)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn patch(
        is_reserved: Option<bool>,
        reserved_by: Option<Option<&str>>,
        is_bought: Option<bool>,
    ) -> ItemPatch {
        ItemPatch {
            is_reserved,
            reserved_by: reserved_by.map(|inner| inner.map(str::to_string)),
            is_bought,
        }
    }

    // -- empty patch ---------------------------------------------------------

    #[test]
    fn empty_patch_rejected() {
        let result = resolve_item_patch(&ItemPatch::default());
        assert!(matches!(result, Err(CoreError::Validation(_))));
    }

    // -- unreserve clears reserver -------------------------------------------

    #[test]
    fn unreserve_clears_reserver() {
        let update = resolve_item_patch(&patch(Some(false), None, None)).unwrap();
        assert_eq!(update.is_reserved, Some(false));
        assert_eq!(update.reserved_by, Some(None));
    }

    #[test]
    fn unreserve_overrides_supplied_reserver() {
        let update = resolve_item_patch(&patch(Some(false), Some(Some("u1")), None)).unwrap();
        assert_eq!(update.is_reserved, Some(false));
        assert_eq!(update.reserved_by, Some(None));
    }

    // -- reserve -------------------------------------------------------------

    #[test]
    fn reserve_with_reserver() {
        let update = resolve_item_patch(&patch(Some(true), Some(Some("u1")), None)).unwrap();
        assert_eq!(update.is_reserved, Some(true));
        assert_eq!(update.reserved_by, Some(Some("u1".to_string())));
    }

    #[test]
    fn reserve_without_reserver_leaves_field_untouched() {
        let update = resolve_item_patch(&patch(Some(true), None, None)).unwrap();
        assert_eq!(update.is_reserved, Some(true));
        assert_eq!(update.reserved_by, None);
    }

    #[test]
    fn reserve_with_explicit_null_reserver() {
        let update = resolve_item_patch(&patch(Some(true), Some(None), None)).unwrap();
        assert_eq!(update.reserved_by, Some(None));
    }

    // -- independent reservedBy ----------------------------------------------

    #[test]
    fn reserver_alone_applied_as_given() {
        let update = resolve_item_patch(&patch(None, Some(Some("u2")), None)).unwrap();
        assert_eq!(update.is_reserved, None);
        assert_eq!(update.reserved_by, Some(Some("u2".to_string())));
    }

    // -- bought implies reserved ---------------------------------------------

    #[test]
    fn bought_forces_reserved() {
        let update = resolve_item_patch(&patch(None, None, Some(true))).unwrap();
        assert_eq!(update.is_bought, Some(true));
        assert_eq!(update.is_reserved, Some(true));
    }

    #[test]
    fn bought_with_reserver_keeps_reserver() {
        let update = resolve_item_patch(&patch(Some(true), Some(Some("u1")), Some(true))).unwrap();
        assert_eq!(update.is_bought, Some(true));
        assert_eq!(update.is_reserved, Some(true));
        assert_eq!(update.reserved_by, Some(Some("u1".to_string())));
    }

    #[test]
    fn bought_and_unreserved_contradiction_rejected() {
        let result = resolve_item_patch(&patch(Some(false), None, Some(true)));
        assert!(matches!(result, Err(CoreError::Validation(_))));
    }

    #[test]
    fn unbuying_does_not_touch_reservation() {
        let update = resolve_item_patch(&patch(None, None, Some(false))).unwrap();
        assert_eq!(update.is_bought, Some(false));
        assert_eq!(update.is_reserved, None);
        assert_eq!(update.reserved_by, None);
    }

    // -- wire decoding -------------------------------------------------------

    #[test]
    fn absent_and_null_reserver_are_distinct() {
        let absent: ItemPatch = serde_json::from_str(r#"{"isReserved": true}"#).unwrap();
        assert_eq!(absent.reserved_by, None);

        let null: ItemPatch =
            serde_json::from_str(r#"{"isReserved": true, "reservedBy": null}"#).unwrap();
        assert_eq!(null.reserved_by, Some(None));
    }
}
