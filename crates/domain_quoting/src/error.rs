//! Quoting domain errors

use thiserror::Error;

/// Errors from the quote calculation
///
/// Age is the only input the engine validates; coverage and duration are
/// constrained to a closed set at the interface boundary, so they cannot be
/// invalid by the time they reach the engine. Incomplete inputs suppress
/// computation instead of erroring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QuoteError {
    /// Applicant is younger than the policy's minimum entry age
    #[error("Applicant age is below the minimum entry age of {bound}")]
    AgeBelowMinimum { bound: u8 },

    /// Applicant is older than the policy's maximum entry age
    #[error("Applicant age is above the maximum entry age of {bound}")]
    AgeAboveMaximum { bound: u8 },
}

impl QuoteError {
    /// Returns the violated age bound
    pub fn bound(&self) -> u8 {
        match self {
            QuoteError::AgeBelowMinimum { bound } => *bound,
            QuoteError::AgeAboveMaximum { bound } => *bound,
        }
    }
}
