//! Core Kernel - Foundational types for the insurance portal
//!
//! This crate provides the building blocks used across the domain crates:
//! - Money and rate types with precise decimal arithmetic
//! - Strongly typed identifiers

pub mod identifiers;
pub mod money;

pub use identifiers::{ApplicationId, PolicyId};
pub use money::{Currency, Money, MoneyError, Rate};
