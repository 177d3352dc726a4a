//! Shared test helpers for the end-to-end escrow tests.

use sunset_core::types::{AccountId, AssetId};
use sunset_escrow::{Bank, MigrationEscrow};
use sunset_rate::RateEngine;

/// One whole token in smallest units.
pub const UNIT: u64 = 100_000_000;

pub const LEGACY: AssetId = AssetId([0xAA; 32]);
pub const NEW: AssetId = AssetId([0xBB; 32]);
pub const OWNER: AccountId = AccountId([0x01; 32]);
pub const ESCROW_ACCOUNT: AccountId = AccountId([0x02; 32]);
pub const DAO: AccountId = AccountId([0x09; 32]);

/// Simple asset id from a seed byte.
pub fn asset(seed: u8) -> AssetId {
    AssetId([seed; 32])
}

/// Simple account id from a seed byte.
pub fn account(seed: u8) -> AccountId {
    AccountId([seed; 32])
}

/// Deployed launch setup: escrow funded with `reserve` units of the new
/// asset, running the production schedule.
pub fn launch(reserve: u64) -> (Bank, MigrationEscrow) {
    let mut bank = Bank::new();
    bank.mint(NEW, ESCROW_ACCOUNT, reserve).unwrap();
    let escrow = MigrationEscrow::new(
        LEGACY,
        NEW,
        OWNER,
        ESCROW_ACCOUNT,
        RateEngine::standard(),
    )
    .unwrap();
    (bank, escrow)
}

/// Give `user` a legacy-asset balance to migrate.
pub fn fund_user(bank: &mut Bank, user: AccountId, amount: u64) {
    bank.mint(LEGACY, user, amount).unwrap();
}
