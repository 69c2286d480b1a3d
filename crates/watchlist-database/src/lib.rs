//! # watchlist-database
//!
//! SQLite connection management, embedded migrations, and the repository
//! implementations for the singleton user and the movie catalog.

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
