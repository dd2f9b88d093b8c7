//! The stake ledger: one balance shared by every table.
//!
//! This module implements:
//! - A single non-negative chip balance with checked arithmetic
//! - Stake escrow: the round cost is moved out of the balance before any
//!   card is dealt or wheel spun, and resolved exactly once
//! - An in-memory journal of every debit and credit for auditing rounds
//!
//! ## Example
//!
//! ```
//! use pocket_casino::ledger::Ledger;
//!
//! let mut ledger = Ledger::new(10);
//! ledger.stake(1)?;
//! assert_eq!(ledger.balance(), 9);
//!
//! // A 6-for-1 flush on a one-chip stake.
//! ledger.resolve(6)?;
//! assert_eq!(ledger.balance(), 15);
//! # Ok::<(), pocket_casino::ledger::LedgerError>(())
//! ```

pub mod errors;
pub mod manager;
pub mod models;

pub use errors::{LedgerError, LedgerResult};
pub use manager::Ledger;
pub use models::{Chips, EntryKind, LedgerEntry};
