//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! portal test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built test data for common entities
//! - `builders`: Builder patterns for test data construction
//! - `stores`: Canned store implementations for gate and catalog tests
//! - `assertions`: Custom assertion helpers for domain types
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod stores;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use stores::*;
pub use assertions::*;
pub use generators::*;
