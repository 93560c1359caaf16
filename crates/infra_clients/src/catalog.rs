//! Product catalog adapter
//!
//! The policy store is reference data refreshed out of band, so the adapter
//! holds an immutable snapshot in memory. [`InMemoryProfileCatalog::seeded`]
//! loads the standard product line-up for development and tests.

use async_trait::async_trait;
use rust_decimal_macros::dec;

use core_kernel::{Currency, Money, PolicyId, Rate};
use domain_quoting::{PolicyRateProfile, RateProfileStore};

/// Immutable in-memory product catalog
#[derive(Debug, Clone, Default)]
pub struct InMemoryProfileCatalog {
    profiles: Vec<PolicyRateProfile>,
}

impl InMemoryProfileCatalog {
    /// Creates a catalog from the given profiles
    pub fn new(profiles: Vec<PolicyRateProfile>) -> Self {
        Self { profiles }
    }

    /// Creates a catalog with the standard product line-up
    pub fn seeded() -> Self {
        let usd = |amount| Money::new(amount, Currency::USD);
        Self::new(vec![
            PolicyRateProfile {
                policy_id: PolicyId::new_v7(),
                name: "Term Life".to_string(),
                currency: Currency::USD,
                base_rate: Rate::from_percentage(dec!(0.5)),
                min_age: 18,
                max_age: 65,
                duration_options: vec![10, 15, 20, 25, 30],
                coverage_options: vec![
                    usd(dec!(100000)),
                    usd(dec!(250000)),
                    usd(dec!(500000)),
                    usd(dec!(1000000)),
                ],
            },
            PolicyRateProfile {
                policy_id: PolicyId::new_v7(),
                name: "Whole Life".to_string(),
                currency: Currency::USD,
                base_rate: Rate::from_percentage(dec!(1.2)),
                min_age: 18,
                max_age: 60,
                duration_options: vec![15, 20, 25],
                coverage_options: vec![usd(dec!(100000)), usd(dec!(250000)), usd(dec!(500000))],
            },
            PolicyRateProfile {
                policy_id: PolicyId::new_v7(),
                name: "Senior Term".to_string(),
                currency: Currency::USD,
                base_rate: Rate::from_percentage(dec!(2.0)),
                min_age: 50,
                max_age: 80,
                duration_options: vec![5, 10, 15],
                coverage_options: vec![usd(dec!(50000)), usd(dec!(100000))],
            },
        ])
    }

    /// Returns true if the catalog holds no products
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

#[async_trait]
impl RateProfileStore for InMemoryProfileCatalog {
    async fn profile(&self, policy_id: PolicyId) -> Option<PolicyRateProfile> {
        self.profiles
            .iter()
            .find(|p| p.policy_id == policy_id)
            .cloned()
    }

    async fn list(&self) -> Vec<PolicyRateProfile> {
        self.profiles.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_seeded_catalog_lookup() {
        let catalog = InMemoryProfileCatalog::seeded();
        let profiles = catalog.list().await;
        assert_eq!(profiles.len(), 3);

        let first = catalog.profile(profiles[0].policy_id).await.unwrap();
        assert_eq!(first.name, profiles[0].name);

        assert!(catalog.profile(PolicyId::new()).await.is_none());
    }
}
