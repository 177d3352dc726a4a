//! Core escrow types: asset and account identities, rate schedule.
//!
//! All amounts are u64 in the smallest asset unit. Identities are opaque
//! 32-byte values; the escrow never inspects them beyond equality.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::{
    DISCOUNT_STEP_PER_DAY, DISCOUNT_WINDOW_START, RATE_DENOMINATOR_BASE, RATE_NUMERATOR,
    SWAP_EXPIRY,
};
use crate::error::ScheduleError;

/// Opaque identity of a fungible asset ledger.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AssetId(pub [u8; 32]);

impl AssetId {
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl From<[u8; 32]> for AssetId {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

/// Opaque identity of an account holding asset balances.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AccountId(pub [u8; 32]);

impl AccountId {
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl From<[u8; 32]> for AccountId {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

/// Immutable rate parameters fixed at escrow creation.
///
/// The conversion applied to a deposit of `input` at time `t` is
/// `output = input * rate_numerator / denominator(t)` where the
/// denominator grows by `discount_step_per_day` per full day elapsed
/// since `discount_window_start`. After `swap_expiry` no exchange is
/// permitted at all.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct RateSchedule {
    pub discount_window_start: u64,
    pub discount_step_per_day: u64,
    pub rate_numerator: u64,
    pub rate_denominator_base: u64,
    pub swap_expiry: u64,
}

impl RateSchedule {
    /// Build a schedule, validating its structural invariants.
    pub fn new(
        discount_window_start: u64,
        discount_step_per_day: u64,
        rate_numerator: u64,
        rate_denominator_base: u64,
        swap_expiry: u64,
    ) -> Result<Self, ScheduleError> {
        if discount_window_start >= swap_expiry {
            return Err(ScheduleError::WindowNotBeforeExpiry {
                start: discount_window_start,
                expiry: swap_expiry,
            });
        }
        if rate_denominator_base == 0 {
            return Err(ScheduleError::ZeroDenominatorBase);
        }
        Ok(Self {
            discount_window_start,
            discount_step_per_day,
            rate_numerator,
            rate_denominator_base,
            swap_expiry,
        })
    }

    /// The production schedule (see [`crate::constants`]).
    pub fn standard() -> Self {
        Self {
            discount_window_start: DISCOUNT_WINDOW_START,
            discount_step_per_day: DISCOUNT_STEP_PER_DAY,
            rate_numerator: RATE_NUMERATOR,
            rate_denominator_base: RATE_DENOMINATOR_BASE,
            swap_expiry: SWAP_EXPIRY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::*;

    #[test]
    fn asset_id_displays_as_hex() {
        let mut bytes = [0u8; 32];
        bytes[0] = 0xab;
        bytes[31] = 0x01;
        let id = AssetId::from_bytes(bytes);
        let s = id.to_string();
        assert_eq!(s.len(), 64);
        assert!(s.starts_with("ab"));
        assert!(s.ends_with("01"));
    }

    #[test]
    fn standard_schedule_matches_constants() {
        let s = RateSchedule::standard();
        assert_eq!(s.discount_window_start, DISCOUNT_WINDOW_START);
        assert_eq!(s.discount_step_per_day, DISCOUNT_STEP_PER_DAY);
        assert_eq!(s.rate_numerator, RATE_NUMERATOR);
        assert_eq!(s.rate_denominator_base, RATE_DENOMINATOR_BASE);
        assert_eq!(s.swap_expiry, SWAP_EXPIRY);
    }

    #[test]
    fn standard_schedule_is_valid() {
        let s = RateSchedule::standard();
        let rebuilt = RateSchedule::new(
            s.discount_window_start,
            s.discount_step_per_day,
            s.rate_numerator,
            s.rate_denominator_base,
            s.swap_expiry,
        )
        .unwrap();
        assert_eq!(rebuilt, s);
    }

    #[test]
    fn rejects_window_not_before_expiry() {
        let err = RateSchedule::new(100, 1, 1, 1, 100).unwrap_err();
        assert_eq!(
            err,
            ScheduleError::WindowNotBeforeExpiry {
                start: 100,
                expiry: 100
            }
        );
        assert!(RateSchedule::new(101, 1, 1, 1, 100).is_err());
    }

    #[test]
    fn rejects_zero_denominator_base() {
        let err = RateSchedule::new(0, 1, 1, 0, 100).unwrap_err();
        assert_eq!(err, ScheduleError::ZeroDenominatorBase);
    }

    #[test]
    fn zero_step_schedule_is_allowed() {
        // A flat (non-decaying) schedule is structurally valid.
        assert!(RateSchedule::new(0, 0, 1, 1, 100).is_ok());
    }
}
