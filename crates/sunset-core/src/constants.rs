//! Protocol constants for the production migration schedule.
//!
//! All amounts are in the smallest asset unit; all timestamps are Unix
//! seconds. The schedule is fixed at build time: once an escrow is
//! deployed with these values they never change.

pub const SECONDS_PER_DAY: u64 = 86_400;

/// Start of the discount window: 2021-03-26 00:00:00 UTC.
///
/// Before this instant the full base rate applies; from here on the
/// denominator grows by [`DISCOUNT_STEP_PER_DAY`] per full elapsed day.
pub const DISCOUNT_WINDOW_START: u64 = 1_616_716_800;

/// Daily addition to the rate denominator during the discount window.
pub const DISCOUNT_STEP_PER_DAY: u64 = 4_000;

/// Base conversion fraction: `output = input * NUMERATOR / DENOMINATOR`.
///
/// At the window start this is exactly 1:5 (2_000_000 / 10_000_000).
pub const RATE_NUMERATOR: u64 = 2_000_000;
pub const RATE_DENOMINATOR_BASE: u64 = 10_000_000;

/// Length of the swap window in days. After expiry no exchange is
/// possible and the owner may sweep the remaining reserve.
pub const SWAP_WINDOW_DAYS: u64 = 365;

/// Hard cutoff: one year after the discount window opens.
pub const SWAP_EXPIRY: u64 = DISCOUNT_WINDOW_START + SWAP_WINDOW_DAYS * SECONDS_PER_DAY;
