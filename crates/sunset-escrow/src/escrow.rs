//! The migration escrow state machine.
//!
//! A singleton [`MigrationEscrow`] holds a reserve of the new asset on
//! its own ledger account and exchanges incoming legacy-asset deposits
//! against it. The reserve is not tracked separately: the escrow's
//! balance of the new asset on the ledger IS the reserve.
//!
//! Every operation validates and computes its full effect before moving
//! any balance, so an operation either settles completely or leaves the
//! ledger exactly as it found it. The outbound payout is the only
//! external call on the swap path and happens last.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use sunset_core::error::EscrowError;
use sunset_core::traits::{AssetLedger, RateQuoter};
use sunset_core::types::{AccountId, AssetId, RateSchedule};
use sunset_rate::RateEngine;

/// Record of one settled exchange, kept in the escrow's event log.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct SwapReceipt {
    /// Depositor, also the payout recipient.
    pub from: AccountId,
    /// Legacy asset taken in.
    pub amount_in: u64,
    /// New asset paid out. May be zero late in the discount window when
    /// truncation eats the whole quote.
    pub amount_out: u64,
}

/// Result of a push-transfer deposit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReceiveOutcome {
    /// The deposit was the legacy asset and was exchanged.
    Swapped(SwapReceipt),
    /// The deposit was some other asset; it sits inert in the escrow's
    /// balance until the owner recovers it.
    Ignored,
}

/// One-way migration escrow.
///
/// Created once with both asset identities, the owner, and the rate
/// engine; none of these ever change. The escrow becomes inert after
/// the swap window expires and the owner sweeps the reserve.
#[derive(Debug, Clone)]
pub struct MigrationEscrow {
    legacy_asset: AssetId,
    new_asset: AssetId,
    owner: AccountId,
    /// The escrow's own ledger account, holding the reserve and any
    /// deposited or stray balances.
    account: AccountId,
    engine: RateEngine,
    drained: bool,
    events: Vec<SwapReceipt>,
}

impl MigrationEscrow {
    /// Create an escrow.
    ///
    /// # Errors
    ///
    /// [`EscrowError::IdenticalAssets`] if the legacy and new asset are
    /// the same ledger.
    pub fn new(
        legacy_asset: AssetId,
        new_asset: AssetId,
        owner: AccountId,
        account: AccountId,
        engine: RateEngine,
    ) -> Result<Self, EscrowError> {
        if legacy_asset == new_asset {
            return Err(EscrowError::IdenticalAssets);
        }
        Ok(Self {
            legacy_asset,
            new_asset,
            owner,
            account,
            engine,
            drained: false,
            events: Vec::new(),
        })
    }

    // --- receive hooks ---

    /// Handle an incoming push transfer of `amount` in `asset` from `from`.
    ///
    /// The legacy asset is exchanged immediately; any other asset is
    /// credited to the escrow and left inert (recoverable by the owner
    /// via [`withdraw_alien_asset`](Self::withdraw_alien_asset)), never
    /// an error.
    ///
    /// # Errors
    ///
    /// For legacy-asset deposits:
    /// - [`EscrowError::SwapWindowClosed`] at or after the swap expiry
    /// - [`EscrowError::InsufficientReserve`] if the payout exceeds the reserve
    /// - [`EscrowError::ArithmeticOverflow`] if the quote overflows
    /// - [`EscrowError::Ledger`] if `from` cannot cover `amount`
    ///
    /// On error the inbound transfer is not applied.
    pub fn deposit<L: AssetLedger>(
        &mut self,
        ledger: &mut L,
        asset: AssetId,
        from: AccountId,
        amount: u64,
        now: u64,
    ) -> Result<ReceiveOutcome, EscrowError> {
        if asset != self.legacy_asset {
            ledger.transfer(asset, from, self.account, amount)?;
            debug!(%asset, %from, amount, "inert deposit of non-legacy asset");
            return Ok(ReceiveOutcome::Ignored);
        }
        let receipt = self.execute_swap(ledger, from, amount, now)?;
        Ok(ReceiveOutcome::Swapped(receipt))
    }

    /// Handle a transfer-with-callback of `amount` in `asset` from `from`.
    ///
    /// Unlike the push path, a non-legacy asset is rejected outright at
    /// the callback boundary with
    /// [`EscrowError::UnrecognizedAssetCallback`] and no balance moves.
    /// Legacy-asset deposits behave exactly like [`deposit`](Self::deposit).
    pub fn deposit_with_callback<L: AssetLedger>(
        &mut self,
        ledger: &mut L,
        asset: AssetId,
        from: AccountId,
        amount: u64,
        now: u64,
    ) -> Result<SwapReceipt, EscrowError> {
        if asset != self.legacy_asset {
            return Err(EscrowError::UnrecognizedAssetCallback);
        }
        self.execute_swap(ledger, from, amount, now)
    }

    /// Exchange `amount` of the legacy asset for the new asset.
    ///
    /// Quote and reserve check come before either transfer; the inbound
    /// leg lands first and is rolled back if the payout leg fails, so
    /// the two legs settle as one unit.
    fn execute_swap<L: AssetLedger>(
        &mut self,
        ledger: &mut L,
        from: AccountId,
        amount: u64,
        now: u64,
    ) -> Result<SwapReceipt, EscrowError> {
        let amount_out = self.engine.quote(amount, now)?;

        let reserve = ledger.balance_of(self.new_asset, self.account);
        if reserve < amount_out {
            return Err(EscrowError::InsufficientReserve {
                have: reserve,
                need: amount_out,
            });
        }

        ledger.transfer(self.legacy_asset, from, self.account, amount)?;
        if let Err(e) = ledger.transfer(self.new_asset, self.account, from, amount_out) {
            // Return the inbound leg; the escrow holds `amount`, so this
            // cannot fail on the debit side.
            ledger.transfer(self.legacy_asset, self.account, from, amount)?;
            return Err(e.into());
        }

        let receipt = SwapReceipt {
            from,
            amount_in: amount,
            amount_out,
        };
        self.events.push(receipt);
        info!(%from, amount_in = amount, amount_out, "swapped legacy asset");
        Ok(receipt)
    }

    // --- owner operations ---

    /// Transfer the escrow's entire balance of `asset` to the owner.
    ///
    /// Only assets outside the migration pair qualify: the legacy asset
    /// stays in the escrow as an auditable record of what was taken in,
    /// and the new asset may only leave through
    /// [`withdraw_remaining_reserve`](Self::withdraw_remaining_reserve)
    /// so the expiry gate cannot be bypassed.
    ///
    /// Returns the amount moved (possibly zero).
    pub fn withdraw_alien_asset<L: AssetLedger>(
        &mut self,
        ledger: &mut L,
        caller: AccountId,
        asset: AssetId,
    ) -> Result<u64, EscrowError> {
        if caller != self.owner {
            return Err(EscrowError::Unauthorized);
        }
        if asset == self.legacy_asset || asset == self.new_asset {
            return Err(EscrowError::NotAnAlienAsset);
        }
        let amount = ledger.balance_of(asset, self.account);
        ledger.transfer(asset, self.account, self.owner, amount)?;
        info!(%asset, amount, "withdrew alien asset to owner");
        Ok(amount)
    }

    /// Sweep the remaining reserve to `to` once the swap window has closed.
    ///
    /// Idempotent in effect: a repeat call succeeds and moves zero.
    /// Returns the amount moved.
    pub fn withdraw_remaining_reserve<L: AssetLedger>(
        &mut self,
        ledger: &mut L,
        caller: AccountId,
        to: AccountId,
        now: u64,
    ) -> Result<u64, EscrowError> {
        if caller != self.owner {
            return Err(EscrowError::Unauthorized);
        }
        if now < self.engine.schedule().swap_expiry {
            return Err(EscrowError::WithdrawalNotYetAllowed);
        }
        let amount = ledger.balance_of(self.new_asset, self.account);
        ledger.transfer(self.new_asset, self.account, to, amount)?;
        self.drained = true;
        if amount == 0 {
            debug!(%to, "reserve sweep found nothing to withdraw");
        } else {
            info!(%to, amount, "swept remaining reserve");
        }
        Ok(amount)
    }

    // --- read-only queries ---

    /// Current reserve: the escrow's balance of the new asset.
    pub fn reserve<L: AssetLedger>(&self, ledger: &L) -> u64 {
        ledger.balance_of(self.new_asset, self.account)
    }

    /// Legacy asset accumulated by past swaps. Inspectable but never
    /// withdrawable.
    pub fn legacy_balance<L: AssetLedger>(&self, ledger: &L) -> u64 {
        ledger.balance_of(self.legacy_asset, self.account)
    }

    pub fn legacy_asset(&self) -> AssetId {
        self.legacy_asset
    }

    pub fn new_asset(&self) -> AssetId {
        self.new_asset
    }

    pub fn owner(&self) -> AccountId {
        self.owner
    }

    pub fn account(&self) -> AccountId {
        self.account
    }

    pub fn schedule(&self) -> &RateSchedule {
        self.engine.schedule()
    }

    /// Whether the post-expiry sweep has run at least once.
    pub fn drained(&self) -> bool {
        self.drained
    }

    /// Settled swaps in order of settlement.
    pub fn events(&self) -> &[SwapReceipt] {
        &self.events
    }
}
