//! Custom Axum extractors.

pub mod path;
pub mod session;

pub use path::parse_movie_id;
pub use session::Session;
