//! Table error types.

use thiserror::Error;

use crate::cards::DeckExhausted;
use crate::ledger::{Chips, LedgerError};

/// Errors that can occur while driving a table
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum TableError {
    /// Balance, escrow, or overflow problems from the shared ledger
    #[error(transparent)]
    Ledger(#[from] LedgerError),

    /// The round's deck ran dry; the round fails closed and the stake is
    /// refunded
    #[error(transparent)]
    Deck(#[from] DeckExhausted),

    /// A wager that cannot reach settlement: zero amount, a green color
    /// bet, an off-layout number, dozen, or column
    #[error("malformed bet: {reason}")]
    MalformedBet { reason: String },

    /// A stake override of zero
    #[error("invalid stake: {0}")]
    InvalidStake(Chips),

    /// A layout game started with nothing on the layout
    #[error("no bets placed")]
    NoBetsPlaced,

    /// Abandonment attempted with cards or a spin in flight
    #[error("round in flight; cards or spin already committed")]
    RoundInFlight,

    /// Abandonment would forfeit a committed stake or discard placed bets
    /// and was not confirmed
    #[error("abandoning now forfeits committed chips; confirmation required")]
    ConfirmationRequired,

    /// A shell action was forwarded with no active table
    #[error("no table selected")]
    NoTableSelected,
}

/// Result type for table operations
pub type TableResult<T> = Result<T, TableError>;
