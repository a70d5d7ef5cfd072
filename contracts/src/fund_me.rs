//! FundMe Contract
//!
//! Custodies CSPR deposits for a single owner.
//!
//! - `fund`: payable; the attached value must be worth at least 50 USD at the
//!   price feed's latest price. Each qualifying deposit is added to the
//!   funder's running total and appended to the funder sequence.
//! - `withdraw`: owner only; sends the whole balance to the owner and resets
//!   every recorded amount and the funder sequence.
//!
//! Every entry point is all-or-nothing: a revert discards storage writes and
//! returns the attached value to the caller.

use odra::prelude::*;
use odra::casper_types::U512;

use crate::access_control::AccessControl;
use crate::errors::FundMeError;
use crate::events::{Funded, Withdrawn};
use crate::price_converter::{self, PriceConverter, MINIMUM_USD};
use crate::types::SweepPlan;

/// FundMe ledger contract
#[odra::module(events = [Funded, Withdrawn])]
pub struct FundMe {
    /// Owner guard
    access: SubModule<AccessControl>,
    /// Price feed address (immutable after init)
    price_feed: Var<Address>,
    /// Cumulative amount per funder in the current round
    address_to_amount_funded: Mapping<Address, U512>,
    /// Funder sequence: index -> funder, one entry per qualifying deposit
    funders: Mapping<u32, Address>,
    /// Funder sequence length; slots at or past it are stale
    funders_len: Var<u32>,
}

#[odra::module]
impl FundMe {
    /// Initialize with the price feed. The deployer becomes the owner.
    pub fn init(&mut self, price_feed: Address) {
        let deployer = self.env().caller();
        self.access.initialize(deployer);
        self.price_feed.set(price_feed);
        self.funders_len.set(0);
    }

    // ========== Ledger ==========

    /// Deposit the attached CSPR
    #[odra(payable)]
    pub fn fund(&mut self) {
        let caller = self.env().caller();
        let amount = self.env().attached_value();

        let usd_value = self.unwrap_or_revert(PriceConverter::conversion_rate(
            &self.env(),
            self.get_price_feed(),
            amount,
        ));
        if !price_converter::meets_minimum(usd_value) {
            self.env().revert(FundMeError::InsufficientValue);
        }

        let funded = self.address_to_amount_funded.get(&caller).unwrap_or_default();
        let total = self.unwrap_or_revert(
            funded.checked_add(amount).ok_or(FundMeError::ArithmeticOverflow),
        );

        let index = self.funders_len.get().unwrap_or(0);
        let next_len = self.unwrap_or_revert(
            index.checked_add(1).ok_or(FundMeError::ArithmeticOverflow),
        );

        self.address_to_amount_funded.set(&caller, total);
        self.funders.set(&index, caller);
        self.funders_len.set(next_len);

        self.env().emit_event(Funded {
            funder: caller,
            amount,
            usd_value,
        });
    }

    // ========== Sweep (Owner Only) ==========

    /// Send the whole balance to the owner and reset the round
    pub fn withdraw(&mut self) {
        self.access.require_owner();

        let plan = self.stage_sweep();
        self.commit_sweep(plan);
    }

    // ========== View Functions ==========

    /// Cumulative amount funded by `funder` in the current round
    pub fn get_address_to_amount_funded(&self, funder: Address) -> U512 {
        self.address_to_amount_funded.get(&funder).unwrap_or_default()
    }

    /// Funder at `index` in the sequence
    pub fn get_funder(&self, index: u32) -> Address {
        let funder = if index < self.get_funders_count() {
            self.funders.get(&index)
        } else {
            None
        };
        match funder {
            Some(funder) => funder,
            None => self.env().revert(FundMeError::FunderIndexOutOfRange),
        }
    }

    /// Length of the funder sequence
    pub fn get_funders_count(&self) -> u32 {
        self.funders_len.get().unwrap_or(0)
    }

    pub fn get_owner(&self) -> Address {
        self.access.get_owner()
    }

    pub fn get_price_feed(&self) -> Address {
        match self.price_feed.get() {
            Some(feed) => feed,
            None => self.env().revert(FundMeError::InvalidConfig),
        }
    }

    /// Version of the price feed interface
    pub fn get_version(&self) -> u64 {
        PriceConverter::version(&self.env(), self.get_price_feed())
    }

    /// USD value (1e18) of `amount` motes at the latest price
    pub fn get_conversion_rate(&self, amount: U512) -> U512 {
        self.unwrap_or_revert(PriceConverter::conversion_rate(
            &self.env(),
            self.get_price_feed(),
            amount,
        ))
    }

    /// Minimum contribution in USD (1e18)
    pub fn get_minimum_usd(&self) -> U512 {
        U512::from(MINIMUM_USD)
    }

    /// Custodied balance
    pub fn get_balance(&self) -> U512 {
        self.env().self_balance()
    }

    // ========== Internal Functions ==========

    /// Read everything the sweep needs and run every check. No writes.
    fn stage_sweep(&self) -> SweepPlan {
        let recipient = self.access.get_owner();
        self.unwrap_or_revert(ensure_transferable(&recipient));

        SweepPlan {
            recipient,
            amount: self.env().self_balance(),
            funders_cleared: self.get_funders_count(),
        }
    }

    fn commit_sweep(&mut self, plan: SweepPlan) {
        for index in 0..plan.funders_cleared {
            if let Some(funder) = self.funders.get(&index) {
                self.address_to_amount_funded.set(&funder, U512::zero());
            }
        }
        self.funders_len.set(0);

        if !plan.amount.is_zero() {
            self.env().transfer_tokens(&plan.recipient, &plan.amount);
        }

        self.env().emit_event(Withdrawn {
            recipient: plan.recipient,
            amount: plan.amount,
            funders_cleared: plan.funders_cleared,
        });
    }
}

impl FundMe {
    fn unwrap_or_revert<T>(&self, result: Result<T, FundMeError>) -> T {
        match result {
            Ok(value) => value,
            Err(error) => self.env().revert(error),
        }
    }
}

/// Native CSPR can only be sent directly to an account.
pub fn ensure_transferable(recipient: &Address) -> Result<(), FundMeError> {
    match recipient {
        Address::Contract(_) => Err(FundMeError::TransferFailed),
        _ => Ok(()),
    }
}
