//! Domain logic for the portfolio content backend.
//!
//! Everything in this crate is pure: no database, no HTTP. The store and the
//! API layer build on these rules.

pub mod catalog;
pub mod contact;
pub mod error;
pub mod localization;
pub mod pagination;
pub mod slug;
pub mod types;
