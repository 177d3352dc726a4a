//! Error types for the sunset migration escrow.
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("discount window start {start} is not before swap expiry {expiry}")] WindowNotBeforeExpiry { start: u64, expiry: u64 },
    #[error("rate denominator base must be positive")] ZeroDenominatorBase,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RateError {
    #[error("exchange closed: swap window has expired")] ExchangeClosed,
    #[error("arithmetic overflow")] ArithmeticOverflow,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("insufficient balance: have {have}, need {need}")] InsufficientBalance { have: u64, need: u64 },
    #[error("balance overflow")] BalanceOverflow,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EscrowError {
    #[error("unauthorized: caller is not the owner")] Unauthorized,
    #[error("not an alien asset")] NotAnAlienAsset,
    #[error("withdrawal not yet allowed")] WithdrawalNotYetAllowed,
    #[error("unrecognized asset in transfer callback")] UnrecognizedAssetCallback,
    #[error("swap window closed")] SwapWindowClosed,
    #[error("insufficient reserve: have {have}, need {need}")] InsufficientReserve { have: u64, need: u64 },
    #[error("arithmetic overflow in rate computation")] ArithmeticOverflow,
    #[error("legacy and new asset must differ")] IdenticalAssets,
    #[error(transparent)] Ledger(#[from] LedgerError),
}

impl From<RateError> for EscrowError {
    fn from(e: RateError) -> Self {
        match e {
            RateError::ExchangeClosed => EscrowError::SwapWindowClosed,
            RateError::ArithmeticOverflow => EscrowError::ArithmeticOverflow,
        }
    }
}

#[derive(Error, Debug)]
pub enum SunsetError {
    #[error(transparent)] Schedule(#[from] ScheduleError),
    #[error(transparent)] Rate(#[from] RateError),
    #[error(transparent)] Ledger(#[from] LedgerError),
    #[error(transparent)] Escrow(#[from] EscrowError),
}
