//! Common types used across the ledger and the price feed.

use odra::prelude::*;
use odra::casper_types::U512;

use crate::errors::FundMeError;

/// Round data reported by an aggregator-style price feed
#[odra::odra_type]
pub struct RoundData {
    /// Round identifier (0 = no round reported yet)
    pub round_id: u64,
    /// Price in feed units (scaled by 10^decimals)
    pub answer: i64,
    /// Timestamp when the round started
    pub started_at: u64,
    /// Timestamp when the answer was last updated
    pub updated_at: u64,
    /// Round in which the answer was computed
    pub answered_in_round: u64,
}

/// Validated feed price, ready for conversion
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct FeedPrice {
    /// Strictly positive price in feed units
    pub answer: U512,
    /// Decimal places of `answer`
    pub decimals: u8,
}

impl FeedPrice {
    /// Validate a reported round. Fails closed on an empty round or a
    /// non-positive answer.
    pub fn from_round(round: &RoundData, decimals: u8) -> Result<Self, FundMeError> {
        if round.round_id == 0 || round.answer <= 0 {
            return Err(FundMeError::OracleUnavailable);
        }

        Ok(Self {
            answer: U512::from(round.answer as u64),
            decimals,
        })
    }
}

/// Staged sweep, built before any storage write
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct SweepPlan {
    /// Receiver of the custodied balance (the owner)
    pub recipient: Address,
    /// Full custodied balance at staging time
    pub amount: U512,
    /// Length of the funder sequence to reset
    pub funders_cleared: u32,
}
