//! Ledger events.

use odra::prelude::*;
use odra::casper_types::U512;

/// A qualifying deposit was recorded
#[odra::event]
pub struct Funded {
    /// Contributor
    pub funder: Address,
    /// Native amount deposited, in motes
    pub amount: U512,
    /// USD value of the deposit (scaled by 1e18)
    pub usd_value: U512,
}

/// The owner swept the custodied balance and the round was reset
#[odra::event]
pub struct Withdrawn {
    /// Receiver of the swept balance
    pub recipient: Address,
    /// Amount transferred, in motes
    pub amount: U512,
    /// Funder sequence length before the reset
    pub funders_cleared: u32,
}
