//! Trait interfaces for the sunset escrow.
//!
//! These traits define the contracts between crates:
//! - [`RateQuoter`] — pure exchange-rate math (sunset-rate implements)
//! - [`AssetLedger`] — balance storage and transfer (sunset-escrow's
//!   in-memory `Bank` implements; a production deployment would back
//!   this with the real asset ledgers)

use crate::error::{LedgerError, RateError};
use crate::types::{AccountId, AssetId};

/// Pure computation of exchange quotes.
///
/// Deterministic given its two inputs and free of side effects, so it is
/// safe to call any number of times — the escrow uses it on the swap
/// path and off-band estimation tools may use it directly.
pub trait RateQuoter: Send + Sync {
    /// Amount of the new asset owed for `amount` of the legacy asset
    /// deposited at `timestamp`.
    ///
    /// # Errors
    ///
    /// - [`RateError::ExchangeClosed`] if `timestamp` is at or past the
    ///   schedule's swap expiry
    /// - [`RateError::ArithmeticOverflow`] if the output does not fit u64
    fn quote(&self, amount: u64, timestamp: u64) -> Result<u64, RateError>;

    /// The effective rate denominator at `timestamp`:
    /// `base + elapsed_days * step`. Exposed for estimation and tests.
    fn denominator_at(&self, timestamp: u64) -> u128;
}

/// Multi-asset balance storage with transfer.
///
/// The escrow depends only on this surface: balance query plus transfer.
/// Receive notification is modeled by the escrow's own entry points
/// (`deposit` for plain push transfers, `deposit_with_callback` for
/// ledgers that support transfer-with-callback), so a ledger variant
/// without the callback capability simply credits balances and the
/// deposit stays inert.
pub trait AssetLedger {
    /// Balance of `account` in `asset`. Unknown pairs are zero.
    fn balance_of(&self, asset: AssetId, account: AccountId) -> u64;

    /// Move `amount` of `asset` from `from` to `to`.
    ///
    /// Must be all-or-nothing: on error no balance has changed.
    fn transfer(
        &mut self,
        asset: AssetId,
        from: AccountId,
        to: AccountId,
        amount: u64,
    ) -> Result<(), LedgerError>;
}
