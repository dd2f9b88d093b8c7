//! Ledger data models.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Type alias for whole chips. Every stake, payout, and balance is a whole
/// number of chips; there are no fractional wagers anywhere in the rules.
pub type Chips = u32;

/// What a journal entry records.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// Round cost moved from the balance into escrow.
    Stake,
    /// Escrow resolved; `amount` is what came back (zero on a loss).
    Payout,
    /// Escrow returned untouched after a faulted round.
    Refund,
    /// Balance set back to the configured starting amount.
    Reset,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let repr = match self {
            Self::Stake => "stake",
            Self::Payout => "payout",
            Self::Refund => "refund",
            Self::Reset => "reset",
        };
        write!(f, "{repr}")
    }
}

/// One journal line. The journal is in-memory and process-lifetime only;
/// it exists so rounds can be audited (stake precedes deal, every stake has
/// exactly one matching payout or refund).
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct LedgerEntry {
    pub kind: EntryKind,
    pub amount: Chips,
    pub balance_after: Chips,
}
