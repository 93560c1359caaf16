//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for domain types that give
//! more meaningful error messages than standard assertions.

use core_kernel::Money;
use domain_quoting::PremiumEstimate;
use rust_decimal::Decimal;

/// Asserts that two Money values are approximately equal within a tolerance
///
/// # Panics
///
/// Panics if the currencies don't match or the amounts differ by more
/// than `tolerance`.
pub fn assert_money_approx_eq(actual: &Money, expected: &Money, tolerance: Decimal) {
    assert_eq!(
        actual.currency(),
        expected.currency(),
        "Currency mismatch: actual={}, expected={}",
        actual.currency(),
        expected.currency()
    );

    let diff = (actual.amount() - expected.amount()).abs();
    assert!(
        diff <= tolerance,
        "Money amounts differ by more than tolerance: actual={}, expected={}, diff={}, tolerance={}",
        actual.amount(),
        expected.amount(),
        diff,
        tolerance
    );
}

/// Asserts that a Money value is positive
pub fn assert_money_positive(money: &Money) {
    assert!(
        money.is_positive(),
        "Expected positive money, got {} {}",
        money.currency().symbol(),
        money.amount()
    );
}

/// Asserts that an estimate holds whole-unit, positive figures in one currency
///
/// Every published estimate must satisfy this regardless of the inputs
/// that produced it.
pub fn assert_estimate_well_formed(estimate: &PremiumEstimate) {
    for (label, figure) in [
        ("monthly", &estimate.monthly),
        ("annual", &estimate.annual),
        ("total", &estimate.total),
    ] {
        assert_money_positive(figure);
        assert_eq!(
            figure.amount(),
            figure.amount().trunc(),
            "Expected whole-unit {} premium, got {}",
            label,
            figure.amount()
        );
        assert_eq!(
            figure.currency(),
            estimate.annual.currency(),
            "Estimate figures must share one currency"
        );
    }
}
