//! Premium estimates
//!
//! An estimate is derived, never stored: it exists only as the output of a
//! successful [`quote`](crate::engine::quote) over a valid request.

use core_kernel::Money;
use serde::{Deserialize, Serialize};

/// The derived premium figures for one quote
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PremiumEstimate {
    /// Premium per month, whole currency units
    pub monthly: Money,
    /// Premium per year, whole currency units
    pub annual: Money,
    /// Premium over the full duration, whole currency units
    pub total: Money,
}
