//! Movie entries of the catalog.

pub mod model;

pub use model::{Movie, MovieFields};
