//! Quote requests
//!
//! A quote request is ephemeral, user-edited input. On the quoting screen
//! the fields arrive one at a time, which [`QuoteDraft`] models; only a
//! fully populated draft becomes a [`QuoteRequest`] the engine will price.
//! Requests are never persisted.

use core_kernel::Money;
use serde::{Deserialize, Serialize};

/// Applicant gender options offered on the quoting form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

/// A complete, priceable quote request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteRequest {
    /// Applicant age in whole years
    pub age: u8,
    /// Applicant gender
    pub gender: Gender,
    /// Requested coverage amount (one of the profile's options)
    pub coverage: Money,
    /// Requested duration in years (one of the profile's options)
    pub duration_years: u32,
    /// Current smoker
    pub smoker: bool,
}

/// A partially filled quote form
///
/// Created empty when the quoting view mounts and mutated field by field.
/// While any field is missing, no estimate exists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuoteDraft {
    pub age: Option<u8>,
    pub gender: Option<Gender>,
    pub coverage: Option<Money>,
    pub duration_years: Option<u32>,
    pub smoker: Option<bool>,
}

impl QuoteDraft {
    /// Creates an empty draft
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the completed request, or `None` while any field is missing
    pub fn try_complete(&self) -> Option<QuoteRequest> {
        Some(QuoteRequest {
            age: self.age?,
            gender: self.gender?,
            coverage: self.coverage?,
            duration_years: self.duration_years?,
            smoker: self.smoker?,
        })
    }
}
