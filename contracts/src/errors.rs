//! Ledger error definitions.

use odra::prelude::*;

/// FundMe ledger errors
#[repr(u16)]
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum FundMeError {
    // Ledger errors (1xx)
    InsufficientValue = 100,
    FunderIndexOutOfRange = 101,

    // Oracle errors (2xx)
    OracleUnavailable = 200,
    ArithmeticOverflow = 201,

    // Access control errors (4xx)
    NotOwner = 400,

    // Transfer errors (5xx)
    TransferFailed = 500,

    // Configuration errors (9xx)
    AlreadyInitialized = 900,
    InvalidConfig = 901,
}

impl FundMeError {
    pub const fn message(&self) -> &'static str {
        match self {
            // Ledger
            FundMeError::InsufficientValue => "You need to spend more CSPR!",
            FundMeError::FunderIndexOutOfRange => "Funder index out of range",

            // Oracle
            FundMeError::OracleUnavailable => "Oracle price unavailable or invalid",
            FundMeError::ArithmeticOverflow => "Arithmetic overflow in price conversion",

            // Access control
            FundMeError::NotOwner => "Unauthorized: caller is not owner",

            // Transfer
            FundMeError::TransferFailed => "Transfer to owner failed",

            // Config
            FundMeError::AlreadyInitialized => "Already initialized",
            FundMeError::InvalidConfig => "Invalid configuration parameter",
        }
    }
}

impl core::fmt::Display for FundMeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.message())
    }
}

impl From<FundMeError> for OdraError {
    fn from(error: FundMeError) -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            OdraError::user(error as u16)
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            OdraError::user(error as u16, error.message())
        }
    }
}
