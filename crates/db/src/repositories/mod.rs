//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod wishlist_item_repo;
pub mod wishlist_repo;

pub use wishlist_item_repo::WishlistItemRepo;
pub use wishlist_repo::WishlistRepo;
