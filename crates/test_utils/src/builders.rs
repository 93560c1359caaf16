//! Test Data Builders
//!
//! Provides builder patterns for constructing test data with sensible defaults.
//! These builders allow tests to specify only the relevant fields while using
//! defaults for everything else.

use core_kernel::{Currency, Money, PolicyId, Rate};
use domain_quoting::{Gender, PolicyRateProfile, QuoteRequest};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::fixtures::MoneyFixtures;

/// Builder for constructing quote requests
///
/// Defaults to the reference scenario: a 30-year-old non-smoking male
/// taking 50,000 of coverage over 20 years.
pub struct QuoteRequestBuilder {
    age: u8,
    gender: Gender,
    coverage: Money,
    duration_years: u32,
    smoker: bool,
}

impl Default for QuoteRequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl QuoteRequestBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            age: 30,
            gender: Gender::Male,
            coverage: MoneyFixtures::usd_coverage_50k(),
            duration_years: 20,
            smoker: false,
        }
    }

    /// Sets the applicant age
    pub fn with_age(mut self, age: u8) -> Self {
        self.age = age;
        self
    }

    /// Sets the applicant gender
    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = gender;
        self
    }

    /// Sets the coverage amount
    pub fn with_coverage(mut self, coverage: Money) -> Self {
        self.coverage = coverage;
        self
    }

    /// Sets the duration in years
    pub fn with_duration_years(mut self, years: u32) -> Self {
        self.duration_years = years;
        self
    }

    /// Marks the applicant as a smoker
    pub fn smoker(mut self) -> Self {
        self.smoker = true;
        self
    }

    /// Builds the quote request
    pub fn build(self) -> QuoteRequest {
        QuoteRequest {
            age: self.age,
            gender: self.gender,
            coverage: self.coverage,
            duration_years: self.duration_years,
            smoker: self.smoker,
        }
    }
}

/// Builder for constructing rate profiles
pub struct RateProfileBuilder {
    policy_id: PolicyId,
    name: String,
    currency: Currency,
    base_rate_percent: Decimal,
    min_age: u8,
    max_age: u8,
    duration_options: Vec<u32>,
    coverage_options: Vec<Money>,
}

impl Default for RateProfileBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RateProfileBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            policy_id: PolicyId::new(),
            name: "Test Product".to_string(),
            currency: Currency::USD,
            base_rate_percent: dec!(0.5),
            min_age: 18,
            max_age: 65,
            duration_options: vec![10, 15, 20, 25, 30],
            coverage_options: vec![
                MoneyFixtures::usd_coverage_50k(),
                MoneyFixtures::usd_coverage_100k(),
            ],
        }
    }

    /// Sets the policy ID
    pub fn with_policy_id(mut self, id: PolicyId) -> Self {
        self.policy_id = id;
        self
    }

    /// Sets the product name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the base rate as a percentage of coverage per year
    pub fn with_base_rate_percent(mut self, percent: Decimal) -> Self {
        self.base_rate_percent = percent;
        self
    }

    /// Sets the entry age window (inclusive on both ends)
    pub fn with_age_window(mut self, min_age: u8, max_age: u8) -> Self {
        self.min_age = min_age;
        self.max_age = max_age;
        self
    }

    /// Sets the duration options
    pub fn with_duration_options(mut self, options: Vec<u32>) -> Self {
        self.duration_options = options;
        self
    }

    /// Sets the coverage options
    pub fn with_coverage_options(mut self, options: Vec<Money>) -> Self {
        self.coverage_options = options;
        self
    }

    /// Builds the rate profile
    pub fn build(self) -> PolicyRateProfile {
        PolicyRateProfile {
            policy_id: self.policy_id,
            name: self.name,
            currency: self.currency,
            base_rate: Rate::from_percentage(self.base_rate_percent),
            min_age: self.min_age,
            max_age: self.max_age,
            duration_options: self.duration_options,
            coverage_options: self.coverage_options,
        }
    }
}
