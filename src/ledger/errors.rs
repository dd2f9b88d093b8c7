//! Ledger error types.

use thiserror::Error;

use super::models::Chips;

/// Ledger errors
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum LedgerError {
    /// Balance cannot cover the requested stake
    #[error("insufficient funds: available {available}, required {required}")]
    InsufficientFunds { available: Chips, required: Chips },

    /// Stakes and credits must be positive
    #[error("invalid amount: {0}")]
    InvalidAmount(Chips),

    /// Credit would overflow the balance
    #[error("balance overflow")]
    BalanceOverflow,

    /// Resolution or refund requested with no stake in escrow
    #[error("nothing staked")]
    NothingStaked,

    /// A new stake requested while a round's stake is still in escrow
    #[error("stake of {pending} already in escrow")]
    AlreadyStaked { pending: Chips },
}

/// Result type for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;
