//! Core type definitions used across the Watchlist workspace.

pub mod id;

pub use id::*;
