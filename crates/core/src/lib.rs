//! Domain logic for the giftlist service.
//!
//! Pure types and functions shared by the database layer, the HTTP API,
//! and the client data layer: identifiers, domain errors, input
//! validation, the reservation patch-resolution rules, and the
//! capability resolution that decides which actions a viewer may take.

pub mod capability;
pub mod error;
pub mod reservation;
pub mod types;
pub mod wishlist;
