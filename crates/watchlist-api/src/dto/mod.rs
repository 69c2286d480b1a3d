//! Request forms and response views.

pub mod request;
pub mod response;
