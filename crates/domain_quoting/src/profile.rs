//! Policy rate profiles
//!
//! A rate profile is the immutable pricing and eligibility reference data
//! for one insurance product. Profiles are supplied by an external policy
//! store and are never mutated during a quoting session.

use core_kernel::{Currency, Money, PolicyId, Rate};
use serde::{Deserialize, Serialize};

/// Pricing and eligibility parameters for one product
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolicyRateProfile {
    /// Product identifier
    pub policy_id: PolicyId,
    /// Product display name
    pub name: String,
    /// Currency the product is written in
    pub currency: Currency,
    /// Base premium rate, percent of coverage per year
    pub base_rate: Rate,
    /// Minimum applicant entry age, inclusive
    pub min_age: u8,
    /// Maximum applicant entry age, inclusive
    pub max_age: u8,
    /// The durations (in years) this product can be written for
    pub duration_options: Vec<u32>,
    /// The coverage amounts this product can be written for
    pub coverage_options: Vec<Money>,
}

impl PolicyRateProfile {
    /// Returns true if `age` falls within the product's entry ages
    pub fn accepts_age(&self, age: u8) -> bool {
        age >= self.min_age && age <= self.max_age
    }

    /// Returns true if `duration` is one of the product's duration options
    pub fn offers_duration(&self, duration_years: u32) -> bool {
        self.duration_options.contains(&duration_years)
    }

    /// Returns true if `coverage` is one of the product's coverage options
    pub fn offers_coverage(&self, coverage: &Money) -> bool {
        self.coverage_options.contains(coverage)
    }
}
