//! Request handlers

pub mod applications;
pub mod health;
pub mod policies;
pub mod quotes;
pub mod session;
