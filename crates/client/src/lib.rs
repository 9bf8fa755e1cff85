//! Client data layer for the giftlist service.
//!
//! One [`session::WishlistSession`] per active viewer: it keeps the
//! in-memory wishlist snapshot, talks to the HTTP service through the
//! [`api::WishlistApi`] seam, applies mutating actions optimistically
//! with snapshot rollback on failure, and computes per-viewer view
//! models with the honoree rule applied.

pub mod api;
pub mod error;
pub mod session;
pub mod snapshot;
pub mod types;
pub mod view;
