//! Shared fixtures for the escrow end-to-end tests.

pub mod helpers;
