//! Row models and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//!
//! Wire names are camelCase (`chatId`, `isReserved`, ...) to match the
//! JSON contract the frontend already speaks.

pub mod wishlist;
pub mod wishlist_item;
