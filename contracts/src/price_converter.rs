//! Price Converter
//!
//! Converts native CSPR amounts into USD using an aggregator-style feed.
//!
//! Both operands are normalized to 18 decimals before multiplying:
//! - amount: motes (9 decimals) -> 18 decimals
//! - price: feed decimals (usually 8) -> 18 decimals
//!
//! usd_value = amount_18 * price_18 / 1e18, so the result is USD scaled by 1e18.

use odra::prelude::*;
use odra::casper_types::{RuntimeArgs, U512};
use odra::CallDef;

use crate::errors::FundMeError;
use crate::types::{FeedPrice, RoundData};

/// Decimals of the native unit (1 CSPR = 1e9 motes)
pub const NATIVE_DECIMALS: u8 = 9;

/// Common fixed-point precision for conversion
pub const PRICE_DECIMALS: u8 = 18;

/// Minimum contribution: 50 USD scaled by 1e18
pub const MINIMUM_USD: u128 = 50_000_000_000_000_000_000;

/// Rescale `value` from `from_decimals` to `to_decimals`.
pub fn rescale(value: U512, from_decimals: u8, to_decimals: u8) -> Result<U512, FundMeError> {
    if from_decimals == to_decimals {
        return Ok(value);
    }

    let gap = from_decimals.abs_diff(to_decimals);
    let factor = U512::from(10u64)
        .checked_pow(U512::from(gap))
        .ok_or(FundMeError::ArithmeticOverflow)?;

    if from_decimals < to_decimals {
        value.checked_mul(factor).ok_or(FundMeError::ArithmeticOverflow)
    } else {
        Ok(value / factor)
    }
}

/// Value of `amount` motes in USD, scaled by 1e18.
pub fn to_usd(amount: U512, price: &FeedPrice) -> Result<U512, FundMeError> {
    let amount_18 = rescale(amount, NATIVE_DECIMALS, PRICE_DECIMALS)?;
    let price_18 = rescale(price.answer, price.decimals, PRICE_DECIMALS)?;
    let precision = rescale(U512::one(), 0, PRICE_DECIMALS)?;

    amount_18
        .checked_mul(price_18)
        .map(|product| product / precision)
        .ok_or(FundMeError::ArithmeticOverflow)
}

/// Whether `usd_value` meets the minimum contribution.
pub fn meets_minimum(usd_value: U512) -> bool {
    usd_value >= U512::from(MINIMUM_USD)
}

/// Helper for price feed queries
pub struct PriceConverter;

impl PriceConverter {
    /// Read and validate the latest price from the feed.
    pub fn latest_price(env: &odra::ContractEnv, feed: Address) -> Result<FeedPrice, FundMeError> {
        let round_call = CallDef::new("latest_round_data", false, RuntimeArgs::new());
        let round = env.call_contract::<RoundData>(feed, round_call);

        let decimals_call = CallDef::new("decimals", false, RuntimeArgs::new());
        let decimals = env.call_contract::<u8>(feed, decimals_call);

        FeedPrice::from_round(&round, decimals)
    }

    /// Convert `amount` motes to USD (1e18) at the feed's latest price.
    pub fn conversion_rate(
        env: &odra::ContractEnv,
        feed: Address,
        amount: U512,
    ) -> Result<U512, FundMeError> {
        let price = Self::latest_price(env, feed)?;
        to_usd(amount, &price)
    }

    /// Version reported by the feed
    pub fn version(env: &odra::ContractEnv, feed: Address) -> u64 {
        let call_def = CallDef::new("version", false, RuntimeArgs::new());
        env.call_contract::<u64>(feed, call_def)
    }
}
