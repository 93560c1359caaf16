//! Premium Quoting Domain
//!
//! This crate implements the quoting core of the insurance portal: the
//! immutable per-product rate profile, the ephemeral user-edited quote
//! request, and the pure [`quote`] calculation that derives a premium
//! estimate or an age-range validation error.
//!
//! # Calculation
//!
//! ```rust
//! use core_kernel::{Currency, Money, PolicyId, Rate};
//! use domain_quoting::{quote, Gender, PolicyRateProfile, QuoteRequest};
//! use rust_decimal_macros::dec;
//!
//! let profile = PolicyRateProfile {
//!     policy_id: PolicyId::new(),
//!     name: "Term Life".to_string(),
//!     currency: Currency::USD,
//!     base_rate: Rate::from_percentage(dec!(0.5)),
//!     min_age: 18,
//!     max_age: 65,
//!     duration_options: vec![10, 20, 30],
//!     coverage_options: vec![Money::new(dec!(500000), Currency::USD)],
//! };
//! let request = QuoteRequest {
//!     age: 30,
//!     gender: Gender::Male,
//!     coverage: Money::new(dec!(500000), Currency::USD),
//!     duration_years: 20,
//!     smoker: false,
//! };
//!
//! let estimate = quote(&request, &profile).unwrap();
//! assert_eq!(estimate.annual.amount(), dec!(2750));
//! ```
//!
//! Estimates are derived, never stored; the engine has no hidden state.

pub mod engine;
pub mod error;
pub mod estimate;
pub mod ports;
pub mod profile;
pub mod request;

pub use engine::quote;
pub use error::QuoteError;
pub use estimate::PremiumEstimate;
pub use ports::{
    ApplicationSubmission, ApplicationSubmitter, RateProfileStore, SubmissionError,
    SubmittedApplication,
};
pub use profile::PolicyRateProfile;
pub use request::{Gender, QuoteDraft, QuoteRequest};
