//! Owner settings and administrative bootstrap.

pub mod admin;
pub mod service;

pub use admin::{AdminService, ForgeReport};
pub use service::UserService;
