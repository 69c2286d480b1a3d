//! Request middleware.

pub mod compression;
pub mod logging;
pub mod session;
