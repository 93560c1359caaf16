//! Pre-built Test Fixtures
//!
//! Provides ready-to-use test data for common entities across the portal.
//! These fixtures are designed to be consistent and predictable for unit tests.

use core_kernel::{Currency, Money, PolicyId, Rate};
use domain_access::{Identity, Role};
use domain_quoting::PolicyRateProfile;
use rust_decimal_macros::dec;
use uuid::Uuid;

/// Fixture for Money test data
pub struct MoneyFixtures;

impl MoneyFixtures {
    /// Standard coverage amount used in the reference quoting scenario
    pub fn usd_coverage_50k() -> Money {
        Money::new(dec!(50000.00), Currency::USD)
    }

    /// Larger coverage option
    pub fn usd_coverage_100k() -> Money {
        Money::new(dec!(100000.00), Currency::USD)
    }

    /// Creates a zero amount
    pub fn usd_zero() -> Money {
        Money::zero(Currency::USD)
    }

    /// Creates a EUR amount for currency mismatch tests
    pub fn eur_coverage_50k() -> Money {
        Money::new(dec!(50000.00), Currency::EUR)
    }
}

/// Fixture for identifier test data
pub struct IdFixtures;

impl IdFixtures {
    /// Creates a deterministic policy ID for testing
    pub fn policy_id() -> PolicyId {
        PolicyId::from_uuid(uuid("550e8400-e29b-41d4-a716-446655440001"))
    }

    /// A second deterministic policy ID, for lookup-miss tests
    pub fn other_policy_id() -> PolicyId {
        PolicyId::from_uuid(uuid("550e8400-e29b-41d4-a716-446655440002"))
    }
}

fn uuid(s: &str) -> Uuid {
    Uuid::parse_str(s).unwrap()
}

/// Fixture for identity test data
pub struct IdentityFixtures;

impl IdentityFixtures {
    /// A customer identity
    pub fn customer() -> Identity {
        Identity {
            email: "customer@example.com".to_string(),
            display_name: Some("Casey Customer".to_string()),
            photo_url: None,
        }
    }

    /// An agent identity
    pub fn agent() -> Identity {
        Identity {
            email: "agent@example.com".to_string(),
            display_name: Some("Avery Agent".to_string()),
            photo_url: None,
        }
    }

    /// An admin identity
    pub fn admin() -> Identity {
        Identity {
            email: "admin@example.com".to_string(),
            display_name: Some("Alex Admin".to_string()),
            photo_url: None,
        }
    }

    /// An identity with no directory entry
    pub fn stranger() -> Identity {
        Identity::from_email("stranger@example.com")
    }

    /// The fixture identity for a given role
    pub fn for_role(role: Role) -> Identity {
        match role {
            Role::Customer => Self::customer(),
            Role::Agent => Self::agent(),
            Role::Admin => Self::admin(),
        }
    }
}

/// Fixture for rate profile test data
pub struct ProfileFixtures;

impl ProfileFixtures {
    /// A term life profile matching the reference quoting scenario:
    /// 0.5% base rate, entry ages 18-65, USD
    pub fn term_life() -> PolicyRateProfile {
        PolicyRateProfile {
            policy_id: IdFixtures::policy_id(),
            name: "Term Life".to_string(),
            currency: Currency::USD,
            base_rate: Rate::from_percentage(dec!(0.5)),
            min_age: 18,
            max_age: 65,
            duration_options: vec![10, 15, 20, 25, 30],
            coverage_options: vec![
                MoneyFixtures::usd_coverage_50k(),
                MoneyFixtures::usd_coverage_100k(),
                Money::new(dec!(250000.00), Currency::USD),
            ],
        }
    }

    /// A senior product with a narrow age window, for bound tests
    pub fn senior_term() -> PolicyRateProfile {
        PolicyRateProfile {
            policy_id: IdFixtures::other_policy_id(),
            name: "Senior Term".to_string(),
            currency: Currency::USD,
            base_rate: Rate::from_percentage(dec!(2.0)),
            min_age: 50,
            max_age: 80,
            duration_options: vec![5, 10],
            coverage_options: vec![
                Money::new(dec!(25000.00), Currency::USD),
                MoneyFixtures::usd_coverage_50k(),
            ],
        }
    }
}
