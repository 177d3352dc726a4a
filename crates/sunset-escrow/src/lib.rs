//! # sunset-escrow — One-way migration escrow.
//!
//! Holds a pre-funded reserve of the new asset and pays it out whenever
//! the legacy asset arrives, at the rate computed by sunset-rate:
//! - **Two receive paths**: a plain push transfer ([`MigrationEscrow::deposit`])
//!   and a transfer-with-callback ([`MigrationEscrow::deposit_with_callback`]).
//!   An unrecognized asset is inert on the push path but a hard failure on
//!   the callback path.
//! - **All-or-nothing settlement**: every check (asset identity, quote,
//!   reserve) happens before any balance moves, so a failed swap leaves
//!   no trace.
//! - **Owner recovery**: alien-asset withdrawal at any time, reserve
//!   sweep only after the swap window expires.
//!
//! The [`Bank`](ledger::Bank) is the in-memory [`AssetLedger`]
//! implementation standing in for the external asset ledgers.
//!
//! [`AssetLedger`]: sunset_core::traits::AssetLedger

pub mod escrow;
pub mod ledger;

pub use escrow::{MigrationEscrow, ReceiveOutcome, SwapReceipt};
pub use ledger::Bank;
