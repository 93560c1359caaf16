//! Quoting and application DTOs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use core_kernel::{ApplicationId, Currency, Money, PolicyId};
use domain_quoting::{
    Gender, PolicyRateProfile, PremiumEstimate, QuoteRequest, SubmittedApplication,
};

/// Quote form input
///
/// Gender and smoker are closed sets by deserialization; coverage and
/// duration are checked against the profile's enumerated options in the
/// handler. The age range here only rejects nonsense input; the product's
/// own entry ages are enforced by the engine.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct QuoteRequestDto {
    #[validate(range(min = 1, max = 130))]
    pub age: u8,
    pub gender: Gender,
    pub coverage: Decimal,
    pub duration_years: u32,
    pub smoker: bool,
}

impl QuoteRequestDto {
    /// Builds the domain request in the profile's currency
    pub fn to_request(&self, profile: &PolicyRateProfile) -> QuoteRequest {
        QuoteRequest {
            age: self.age,
            gender: self.gender,
            coverage: Money::new(self.coverage, profile.currency),
            duration_years: self.duration_years,
            smoker: self.smoker,
        }
    }
}

/// Premium estimate payload
#[derive(Debug, Serialize)]
pub struct EstimateResponse {
    pub monthly: Decimal,
    pub annual: Decimal,
    pub total: Decimal,
    pub currency: Currency,
}

impl From<PremiumEstimate> for EstimateResponse {
    fn from(estimate: PremiumEstimate) -> Self {
        Self {
            monthly: estimate.monthly.amount(),
            annual: estimate.annual.amount(),
            total: estimate.total.amount(),
            currency: estimate.annual.currency(),
        }
    }
}

/// Rate profile payload
#[derive(Debug, Serialize)]
pub struct RateProfileResponse {
    pub policy_id: PolicyId,
    pub name: String,
    pub currency: Currency,
    pub base_rate_percent: Decimal,
    pub min_age: u8,
    pub max_age: u8,
    pub duration_options: Vec<u32>,
    pub coverage_options: Vec<Decimal>,
}

impl From<PolicyRateProfile> for RateProfileResponse {
    fn from(profile: PolicyRateProfile) -> Self {
        Self {
            policy_id: profile.policy_id,
            name: profile.name,
            currency: profile.currency,
            base_rate_percent: profile.base_rate.as_percentage(),
            min_age: profile.min_age,
            max_age: profile.max_age,
            duration_options: profile.duration_options,
            coverage_options: profile
                .coverage_options
                .iter()
                .map(|c| c.amount())
                .collect(),
        }
    }
}

/// Application submission input
#[derive(Debug, Deserialize, Validate)]
pub struct SubmitApplicationRequest {
    pub policy_id: Uuid,
    #[validate(nested)]
    pub quote: QuoteRequestDto,
}

/// Created-application payload
#[derive(Debug, Serialize)]
pub struct ApplicationCreatedResponse {
    pub application_id: ApplicationId,
}

/// One row in the review dashboard
#[derive(Debug, Serialize)]
pub struct ApplicationSummary {
    pub application_id: ApplicationId,
    pub policy_id: PolicyId,
    pub applicant_email: String,
    pub annual: Decimal,
    pub total: Decimal,
    pub currency: Currency,
}

impl From<SubmittedApplication> for ApplicationSummary {
    fn from(accepted: SubmittedApplication) -> Self {
        Self {
            application_id: accepted.application_id,
            policy_id: accepted.submission.policy_id,
            applicant_email: accepted.submission.applicant_email,
            annual: accepted.submission.estimate.annual.amount(),
            total: accepted.submission.estimate.total.amount(),
            currency: accepted.submission.estimate.annual.currency(),
        }
    }
}
