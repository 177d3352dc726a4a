//! In-memory multi-asset ledger.
//!
//! Provides the [`Bank`], an [`AssetLedger`] implementation backed by a
//! `HashMap` with no persistence. It stands in for the external asset
//! ledgers the escrow collaborates with; a production deployment would
//! back the trait with the real ledgers instead.
//!
//! Transfers are all-or-nothing: a failed transfer leaves every balance
//! untouched.

use std::collections::HashMap;

use sunset_core::error::LedgerError;
use sunset_core::traits::AssetLedger;
use sunset_core::types::{AccountId, AssetId};

/// In-memory balance store: `(asset, account) -> amount`.
///
/// Unknown pairs read as zero. Zero balances are pruned on debit so the
/// map only holds accounts that actually own something.
#[derive(Debug, Clone, Default)]
pub struct Bank {
    balances: HashMap<(AssetId, AccountId), u64>,
}

impl Bank {
    /// Create an empty bank.
    pub fn new() -> Self {
        Self::default()
    }

    /// Credit `amount` of `asset` to `account` out of thin air.
    ///
    /// Funding path for deployment and tests; the escrow itself never
    /// mints.
    pub fn mint(
        &mut self,
        asset: AssetId,
        account: AccountId,
        amount: u64,
    ) -> Result<(), LedgerError> {
        let balance = self.balances.entry((asset, account)).or_insert(0);
        *balance = balance
            .checked_add(amount)
            .ok_or(LedgerError::BalanceOverflow)?;
        Ok(())
    }

    /// Sum of all balances held in `asset` across every account.
    pub fn total_supply(&self, asset: AssetId) -> u128 {
        self.balances
            .iter()
            .filter(|((a, _), _)| *a == asset)
            .map(|(_, amount)| *amount as u128)
            .sum()
    }
}

impl AssetLedger for Bank {
    fn balance_of(&self, asset: AssetId, account: AccountId) -> u64 {
        self.balances.get(&(asset, account)).copied().unwrap_or(0)
    }

    fn transfer(
        &mut self,
        asset: AssetId,
        from: AccountId,
        to: AccountId,
        amount: u64,
    ) -> Result<(), LedgerError> {
        let have = self.balance_of(asset, from);
        if have < amount {
            return Err(LedgerError::InsufficientBalance { have, need: amount });
        }
        // A self-transfer is a no-op but the balance check above still applies.
        if from == to || amount == 0 {
            return Ok(());
        }
        // Validate the credit side before debiting anything.
        let to_balance = self.balance_of(asset, to);
        let credited = to_balance
            .checked_add(amount)
            .ok_or(LedgerError::BalanceOverflow)?;

        let remaining = have - amount;
        if remaining == 0 {
            self.balances.remove(&(asset, from));
        } else {
            self.balances.insert((asset, from), remaining);
        }
        self.balances.insert((asset, to), credited);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn asset(seed: u8) -> AssetId {
        AssetId([seed; 32])
    }

    fn account(seed: u8) -> AccountId {
        AccountId([seed; 32])
    }

    #[test]
    fn unknown_balance_is_zero() {
        let bank = Bank::new();
        assert_eq!(bank.balance_of(asset(1), account(1)), 0);
    }

    #[test]
    fn mint_and_transfer() {
        let mut bank = Bank::new();
        bank.mint(asset(1), account(1), 100).unwrap();
        bank.transfer(asset(1), account(1), account(2), 30).unwrap();
        assert_eq!(bank.balance_of(asset(1), account(1)), 70);
        assert_eq!(bank.balance_of(asset(1), account(2)), 30);
    }

    #[test]
    fn transfer_insufficient_balance() {
        let mut bank = Bank::new();
        bank.mint(asset(1), account(1), 10).unwrap();
        let err = bank
            .transfer(asset(1), account(1), account(2), 11)
            .unwrap_err();
        assert_eq!(err, LedgerError::InsufficientBalance { have: 10, need: 11 });
        // Nothing moved.
        assert_eq!(bank.balance_of(asset(1), account(1)), 10);
        assert_eq!(bank.balance_of(asset(1), account(2)), 0);
    }

    #[test]
    fn transfer_is_per_asset() {
        let mut bank = Bank::new();
        bank.mint(asset(1), account(1), 100).unwrap();
        // Same account, different asset: no funds.
        assert!(bank.transfer(asset(2), account(1), account(2), 1).is_err());
    }

    #[test]
    fn self_transfer_validates_balance() {
        let mut bank = Bank::new();
        bank.mint(asset(1), account(1), 5).unwrap();
        bank.transfer(asset(1), account(1), account(1), 5).unwrap();
        assert_eq!(bank.balance_of(asset(1), account(1)), 5);
        assert!(bank.transfer(asset(1), account(1), account(1), 6).is_err());
    }

    #[test]
    fn zero_transfer_from_empty_account() {
        let mut bank = Bank::new();
        bank.transfer(asset(1), account(1), account(2), 0).unwrap();
        assert_eq!(bank.balance_of(asset(1), account(2)), 0);
    }

    #[test]
    fn mint_overflow() {
        let mut bank = Bank::new();
        bank.mint(asset(1), account(1), u64::MAX).unwrap();
        assert_eq!(
            bank.mint(asset(1), account(1), 1),
            Err(LedgerError::BalanceOverflow)
        );
    }

    #[test]
    fn credit_overflow_rolls_back() {
        let mut bank = Bank::new();
        bank.mint(asset(1), account(1), 50).unwrap();
        bank.mint(asset(1), account(2), u64::MAX - 10).unwrap();
        let err = bank
            .transfer(asset(1), account(1), account(2), 50)
            .unwrap_err();
        assert_eq!(err, LedgerError::BalanceOverflow);
        assert_eq!(bank.balance_of(asset(1), account(1)), 50);
        assert_eq!(bank.balance_of(asset(1), account(2)), u64::MAX - 10);
    }

    #[test]
    fn debit_to_zero_prunes_entry() {
        let mut bank = Bank::new();
        bank.mint(asset(1), account(1), 10).unwrap();
        bank.transfer(asset(1), account(1), account(2), 10).unwrap();
        assert_eq!(bank.balance_of(asset(1), account(1)), 0);
        assert_eq!(bank.total_supply(asset(1)), 10);
    }

    proptest! {
        #[test]
        fn transfer_preserves_total_supply(
            start_a in 0u64..1_000_000,
            start_b in 0u64..1_000_000,
            amount in 0u64..2_000_000,
        ) {
            let mut bank = Bank::new();
            bank.mint(asset(1), account(1), start_a).unwrap();
            bank.mint(asset(1), account(2), start_b).unwrap();
            let supply_before = bank.total_supply(asset(1));

            let _ = bank.transfer(asset(1), account(1), account(2), amount);

            prop_assert_eq!(bank.total_supply(asset(1)), supply_before);
        }
    }
}
