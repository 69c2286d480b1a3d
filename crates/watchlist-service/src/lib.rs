//! # watchlist-service
//!
//! Use cases of the watchlist. Every mutating operation takes the caller's
//! [`SessionContext`](watchlist_auth::SessionContext) explicitly and runs
//! guard, lookup, validation and write in that order.
//!
//! Services follow constructor injection; all dependencies are provided
//! at construction time.

pub mod catalog;
pub mod user;
pub mod validation;

pub use catalog::CatalogService;
pub use user::{AdminService, ForgeReport, UserService};
pub use validation::{EntryValidator, ValidationMode};

#[cfg(test)]
pub(crate) mod testing;
