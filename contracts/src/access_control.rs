//! Access Control Module
//!
//! Single-owner guard for privileged ledger operations.
//! The owner is captured once at initialization and never reassigned;
//! there is no ownership transfer.

use odra::prelude::*;
use crate::errors::FundMeError;

/// Owner guard, embedded as a submodule by contracts that need it
#[odra::module]
pub struct AccessControl {
    /// Privileged owner
    owner: Var<Address>,
}

#[odra::module]
impl AccessControl {
    /// Set the owner once. Reverts if an owner is already set.
    pub fn initialize(&mut self, owner: Address) {
        if self.owner.get().is_some() {
            self.env().revert(FundMeError::AlreadyInitialized);
        }
        self.owner.set(owner);
    }

    /// Get the owner
    pub fn get_owner(&self) -> Address {
        match self.owner.get() {
            Some(owner) => owner,
            None => self.env().revert(FundMeError::InvalidConfig),
        }
    }

    /// Check if account is the owner
    pub fn is_owner(&self, account: Address) -> bool {
        self.owner.get() == Some(account)
    }

    /// Revert if caller is not the owner
    pub fn require_owner(&self) {
        if !self.is_owner(self.env().caller()) {
            self.env().revert(FundMeError::NotOwner);
        }
    }
}
