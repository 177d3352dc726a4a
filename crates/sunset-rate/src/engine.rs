//! Rate engine implementing the [`RateQuoter`] trait.
//!
//! Provides the production quote computation with linear daily decay of
//! the conversion rate. All arithmetic is integer-only with u128
//! intermediates for overflow safety.

use sunset_core::constants::SECONDS_PER_DAY;
use sunset_core::error::RateError;
use sunset_core::traits::RateQuoter;
use sunset_core::types::RateSchedule;

/// The production rate engine.
///
/// Implements [`RateQuoter`] against an immutable [`RateSchedule`]:
/// - Denominator grows by `discount_step_per_day` per full elapsed day
/// - Output is truncated toward zero
/// - Quoting at or past `swap_expiry` fails with `ExchangeClosed`
#[derive(Debug, Clone)]
pub struct RateEngine {
    schedule: RateSchedule,
}

impl RateEngine {
    /// Create an engine for the given schedule.
    ///
    /// The schedule is expected to come out of [`RateSchedule::new`] or
    /// [`RateSchedule::standard`], both of which uphold the structural
    /// invariants (window before expiry, positive base denominator).
    pub fn new(schedule: RateSchedule) -> Self {
        Self { schedule }
    }

    /// Engine for the production schedule.
    pub fn standard() -> Self {
        Self::new(RateSchedule::standard())
    }

    pub fn schedule(&self) -> &RateSchedule {
        &self.schedule
    }

    /// Full days elapsed since the discount window opened. Zero before
    /// the window starts.
    fn elapsed_days(&self, timestamp: u64) -> u64 {
        timestamp.saturating_sub(self.schedule.discount_window_start) / SECONDS_PER_DAY
    }
}

impl RateQuoter for RateEngine {
    fn quote(&self, amount: u64, timestamp: u64) -> Result<u64, RateError> {
        if timestamp >= self.schedule.swap_expiry {
            return Err(RateError::ExchangeClosed);
        }

        let numerator = (amount as u128)
            .checked_mul(self.schedule.rate_numerator as u128)
            .ok_or(RateError::ArithmeticOverflow)?;

        // Truncating division: never over-credit.
        let output = numerator / self.denominator_at(timestamp);

        u64::try_from(output).map_err(|_| RateError::ArithmeticOverflow)
    }

    fn denominator_at(&self, timestamp: u64) -> u128 {
        // Strictly positive: base > 0 is a schedule invariant.
        self.schedule.rate_denominator_base as u128
            + self.elapsed_days(timestamp) as u128 * self.schedule.discount_step_per_day as u128
    }
}
