//! User entity (the singleton administrative account).

pub mod model;

pub use model::{NewUser, User};
