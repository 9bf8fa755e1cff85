//! HTTP handler implementations, one module per resource.

pub mod wishlist_items;
pub mod wishlists;
