//! # watchlist-entity
//!
//! Domain entity models for Watchlist. Every struct in this crate
//! represents a database table row or the payload used to write one.
//! Row models derive `sqlx::FromRow`.

pub mod movie;
pub mod user;
