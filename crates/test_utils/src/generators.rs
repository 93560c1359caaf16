//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random test data
//! that maintains domain invariants.

use core_kernel::{Currency, Money};
use domain_access::{Identity, Role};
use domain_quoting::{Gender, QuoteRequest};
use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::Name;
use fake::Fake;
use proptest::prelude::*;
use rust_decimal::Decimal;

/// Strategy for generating the portal's currencies
pub fn currency_strategy() -> impl Strategy<Value = Currency> {
    prop_oneof![
        Just(Currency::USD),
        Just(Currency::EUR),
        Just(Currency::GBP),
        Just(Currency::INR),
    ]
}

/// Strategy for generating a gender
pub fn gender_strategy() -> impl Strategy<Value = Gender> {
    prop_oneof![Just(Gender::Male), Just(Gender::Female)]
}

/// Strategy for generating a role
pub fn role_strategy() -> impl Strategy<Value = Role> {
    prop_oneof![Just(Role::Customer), Just(Role::Agent), Just(Role::Admin)]
}

/// Strategy for generating coverage amounts in whole thousands
pub fn coverage_strategy() -> impl Strategy<Value = Money> {
    (10i64..=1000i64).prop_map(|thousands| {
        Money::new(Decimal::new(thousands * 1000, 0), Currency::USD)
    })
}

/// Strategy for generating ages inside a standard 18-65 entry window
pub fn eligible_age_strategy() -> impl Strategy<Value = u8> {
    18u8..=65u8
}

/// Strategy for generating ages outside a standard 18-65 entry window
pub fn ineligible_age_strategy() -> impl Strategy<Value = u8> {
    prop_oneof![0u8..18u8, 66u8..=130u8]
}

/// Strategy for generating durations offered by the standard test profile
pub fn offered_duration_strategy() -> impl Strategy<Value = u32> {
    prop_oneof![Just(10u32), Just(15), Just(20), Just(25), Just(30)]
}

/// Strategy for generating complete quote requests an eligible applicant
/// could submit against the standard test profile
pub fn eligible_request_strategy() -> impl Strategy<Value = QuoteRequest> {
    (
        eligible_age_strategy(),
        gender_strategy(),
        coverage_strategy(),
        offered_duration_strategy(),
        any::<bool>(),
    )
        .prop_map(|(age, gender, coverage, duration_years, smoker)| QuoteRequest {
            age,
            gender,
            coverage,
            duration_years,
            smoker,
        })
}

/// Generates a random identity with a realistic email and display name
pub fn fake_identity() -> Identity {
    Identity {
        email: SafeEmail().fake(),
        display_name: Some(Name().fake()),
        photo_url: None,
    }
}
