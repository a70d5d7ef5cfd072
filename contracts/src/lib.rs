//! FundMe Contracts
//!
//! CSPR custody ledger with a USD-denominated minimum contribution.
//!
//! ## Architecture
//!
//! - **FundMe**: deposit ledger and owner-only sweep
//! - **AccessControl**: single immutable owner guard
//! - **PriceConverter**: CSPR -> USD conversion from an aggregator-style feed
//! - **MockV3Aggregator**: local price feed for tests and local deployments
//!
//! ## Round Lifecycle
//!
//! Deposits accumulate until the owner calls `withdraw`, which transfers the
//! whole balance and resets every funder record in one transaction.

#![cfg_attr(target_arch = "wasm32", no_std)]

#[cfg(target_arch = "wasm32")]
extern crate alloc;

// Re-export odra for downstream usage
pub use odra;

// Core module declarations
pub mod types;
pub mod errors;
pub mod events;
pub mod price_converter;

// Contract modules
pub mod access_control;
pub mod fund_me;
pub mod mock_aggregator;
