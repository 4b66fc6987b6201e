//! # Integration tests
//!
//! Integration tests completely external from the crate. All code written in this module could be
//! written by an external user of the crate.
//!
//! ## Note
//!
//! The generated instances are only solved when the `slow` feature is enabled, as exhaustively
//! enumerating them takes a long time.

mod capital_budgeting;
#[cfg(feature = "slow")]
mod generated;
