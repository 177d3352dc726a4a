//! # sunset-rate — Decaying exchange-rate engine.
//!
//! All calculations use integer arithmetic only for determinism.
//!
//! The migration rate starts at `rate_numerator / rate_denominator_base`
//! (the most favorable rate ever offered) and strictly worsens as the
//! discount window elapses:
//! - **Linear denominator growth**: each full day after the window start
//!   adds `discount_step_per_day` to the denominator.
//! - **Truncating division**: output amounts round toward zero, never
//!   over-crediting the depositor.
//! - **Hard cutoff**: at `swap_expiry` quoting stops entirely.

pub mod engine;

pub use engine::RateEngine;
