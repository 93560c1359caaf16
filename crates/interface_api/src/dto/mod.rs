//! Request/response data transfer objects

pub mod quoting;
pub mod session;
