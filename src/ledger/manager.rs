//! The ledger itself: balance, escrow, and journal.

use log::debug;
use serde::{Deserialize, Serialize};

use super::errors::{LedgerError, LedgerResult};
use super::models::{Chips, EntryKind, LedgerEntry};

/// The single balance shared by every table, with the in-flight round's
/// stake held in escrow between deal and resolution.
///
/// Invariants:
/// - the balance is never negative (unsigned plus checked arithmetic);
/// - a stake leaves the balance before any card is dealt or wheel spun;
/// - every stake is resolved or refunded exactly once.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Ledger {
    balance: Chips,
    staked: Chips,
    journal: Vec<LedgerEntry>,
}

impl Ledger {
    #[must_use]
    pub fn new(starting_balance: Chips) -> Self {
        Self {
            balance: starting_balance,
            staked: 0,
            journal: Vec::new(),
        }
    }

    /// Chips available for the next stake.
    #[must_use]
    pub fn balance(&self) -> Chips {
        self.balance
    }

    /// Chips in escrow for the round in flight, zero between rounds.
    #[must_use]
    pub fn staked(&self) -> Chips {
        self.staked
    }

    #[must_use]
    pub fn can_afford(&self, amount: Chips) -> bool {
        self.balance >= amount
    }

    /// Every debit and credit so far, oldest first.
    #[must_use]
    pub fn entries(&self) -> &[LedgerEntry] {
        &self.journal
    }

    /// Move a round's cost from the balance into escrow.
    pub fn stake(&mut self, amount: Chips) -> LedgerResult<()> {
        if amount == 0 {
            return Err(LedgerError::InvalidAmount(amount));
        }
        if self.staked > 0 {
            return Err(LedgerError::AlreadyStaked {
                pending: self.staked,
            });
        }
        if self.balance < amount {
            return Err(LedgerError::InsufficientFunds {
                available: self.balance,
                required: amount,
            });
        }
        self.balance -= amount;
        self.staked = amount;
        self.record(EntryKind::Stake, amount);
        Ok(())
    }

    /// Resolve the escrowed stake: credit what the round returned (zero on
    /// a loss) and clear the escrow. Errors if nothing is staked, which is
    /// the backstop against settling a round twice.
    pub fn resolve(&mut self, returned: Chips) -> LedgerResult<Chips> {
        if self.staked == 0 {
            return Err(LedgerError::NothingStaked);
        }
        let balance = self
            .balance
            .checked_add(returned)
            .ok_or(LedgerError::BalanceOverflow)?;
        self.balance = balance;
        self.staked = 0;
        self.record(EntryKind::Payout, returned);
        Ok(returned)
    }

    /// Return the escrowed stake untouched. Used when a round faults after
    /// its stake was committed but before it could be judged.
    pub fn refund(&mut self) -> LedgerResult<Chips> {
        if self.staked == 0 {
            return Err(LedgerError::NothingStaked);
        }
        let refunded = self.staked;
        // Cannot overflow: the stake came out of this same balance.
        self.balance += refunded;
        self.staked = 0;
        self.record(EntryKind::Refund, refunded);
        Ok(refunded)
    }

    /// Set the balance back to a starting amount. Only legal between
    /// rounds; an escrowed stake must be resolved first.
    pub fn reset(&mut self, starting_balance: Chips) -> LedgerResult<()> {
        if self.staked > 0 {
            return Err(LedgerError::AlreadyStaked {
                pending: self.staked,
            });
        }
        self.balance = starting_balance;
        self.record(EntryKind::Reset, starting_balance);
        Ok(())
    }

    fn record(&mut self, kind: EntryKind, amount: Chips) {
        debug!("ledger {kind}: {amount} (balance {})", self.balance);
        self.journal.push(LedgerEntry {
            kind,
            amount,
            balance_after: self.balance,
        });
    }
}
