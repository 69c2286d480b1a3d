//! Concrete repository implementations.

pub mod movie;
pub mod user;

pub use movie::MovieRepository;
pub use user::UserRepository;
