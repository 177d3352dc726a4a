//! # sunset-core
//! Foundation types and traits for the sunset migration escrow.

pub mod constants;
pub mod error;
pub mod traits;
pub mod types;
