//! The premium quoting engine
//!
//! [`quote`] is a pure function of a quote request and a rate profile. The
//! multiplicative loadings are applied in a fixed order, and the rounding
//! convention is pinned by regression tests:
//!
//! - `annual` and `monthly` are rounded to whole units,
//! - `total` is computed from the *unrounded* annual figure multiplied by
//!   the duration, then rounded once. The upstream product computed totals
//!   this way, so `total` is not always `annual * duration` exactly.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::debug;

use core_kernel::Money;

use crate::error::QuoteError;
use crate::estimate::PremiumEstimate;
use crate::profile::PolicyRateProfile;
use crate::request::{Gender, QuoteRequest};

/// Age above which each year adds a loading
const AGE_LOADING_THRESHOLD: u8 = 30;
/// Loading per year of age above the threshold (2%)
const AGE_LOADING_PER_YEAR: Decimal = dec!(0.02);
/// Loading for male applicants (+10%)
const MALE_LOADING: Decimal = dec!(1.10);
/// Loading for smokers (+50%)
const SMOKER_LOADING: Decimal = dec!(1.50);
/// Durations strictly above this many years earn a discount
const LONG_DURATION_YEARS: u32 = 20;
/// Discount for long durations (-10%)
const LONG_DURATION_DISCOUNT: Decimal = dec!(0.90);

/// Months per year, as a decimal for the monthly split
const MONTHS_PER_YEAR: Decimal = dec!(12);

/// Computes a premium estimate for a request against a rate profile
///
/// Pure and synchronous: identical inputs always produce identical output.
/// The only validation performed here is the age gate; enumerated-choice
/// inputs (coverage, duration) are constrained at the interface boundary.
///
/// # Errors
///
/// Returns [`QuoteError::AgeBelowMinimum`] or [`QuoteError::AgeAboveMaximum`]
/// naming the violated bound. No estimate is produced in either case.
pub fn quote(
    request: &QuoteRequest,
    profile: &PolicyRateProfile,
) -> Result<PremiumEstimate, QuoteError> {
    if request.age < profile.min_age {
        return Err(QuoteError::AgeBelowMinimum {
            bound: profile.min_age,
        });
    }
    if request.age > profile.max_age {
        return Err(QuoteError::AgeAboveMaximum {
            bound: profile.max_age,
        });
    }

    // Base annual premium: coverage * base_rate / 100
    let mut annual = profile.base_rate.apply(&request.coverage);

    // Age loading: a single multiplicative factor, 2% per year above 30
    let years_above = Decimal::from(request.age.saturating_sub(AGE_LOADING_THRESHOLD));
    annual = annual.multiply(Decimal::ONE + years_above * AGE_LOADING_PER_YEAR);

    if request.gender == Gender::Male {
        annual = annual.multiply(MALE_LOADING);
    }

    if request.smoker {
        annual = annual.multiply(SMOKER_LOADING);
    }

    if request.duration_years > LONG_DURATION_YEARS {
        annual = annual.multiply(LONG_DURATION_DISCOUNT);
    }

    // Total uses the unrounded annual figure, rounded once at the end
    let total = annual
        .multiply(Decimal::from(request.duration_years))
        .round_to_unit();

    let annual_rounded = annual.round_to_unit();
    let monthly = Money::new(
        annual_rounded.amount() / MONTHS_PER_YEAR,
        annual_rounded.currency(),
    )
    .round_to_unit();

    debug!(
        annual = %annual_rounded,
        monthly = %monthly,
        total = %total,
        duration_years = request.duration_years,
        "Computed premium estimate"
    );

    Ok(PremiumEstimate {
        monthly,
        annual: annual_rounded,
        total,
    })
}
