//! # Pocket Casino
//!
//! Six casino mini-games — draw poker, multi-hand poker, blackjack,
//! baccarat, roulette, slots — behind one shared bankroll and one
//! tick-driven round lifecycle.
//!
//! The crate is the game core only: pure rule engines, the stake ledger,
//! and a generic per-round state machine. Rendering, input mapping, and
//! the frame clock live in the embedding adapter.
//!
//! ## Architecture
//!
//! - [`rules`]: one pure evaluator per game — a dealt hand, drawn wheel
//!   number, or sampled payline in; a categorical outcome and settlement
//!   arithmetic out.
//! - [`ledger`]: the single balance, with stakes escrowed before any card
//!   is dealt and resolved exactly once per round.
//! - [`table`]: the generic round controller (`Table<G>`), parameterized
//!   by a per-game [`table::GameFlow`] and enum-dispatched for adapters
//!   as [`CasinoTable`].
//! - [`casino`]: the shell that seats one table at a time over the shared
//!   bankroll.
//!
//! Everything is single-threaded and cooperative: the adapter calls
//! [`Casino::tick`] once per frame (reference cadence 30 ticks per
//! second), and timed phases such as a spinning wheel are countdowns that
//! auto-fire their next transition at zero.
//!
//! ## Example
//!
//! ```
//! use pocket_casino::{Casino, GameKind, RoundPhase};
//!
//! let mut casino = Casino::default();
//! casino.enter(GameKind::Slots)?;
//!
//! // One spin: the stake leaves the balance before the reels move.
//! casino.start_round(None)?;
//! assert_eq!(casino.balance(), 9);
//!
//! // Drive the frame clock until the reels land.
//! while casino.view().is_some_and(|view| view.phase == RoundPhase::Spinning) {
//!     casino.tick(1);
//! }
//! let view = casino.view().expect("still seated");
//! assert_eq!(view.phase, RoundPhase::Result);
//! assert!(view.outcome.is_some());
//! # Ok::<(), pocket_casino::TableError>(())
//! ```

pub mod cards;
pub mod casino;
pub mod ledger;
pub mod rules;
pub mod table;

pub use cards::{Card, Deck, DeckExhausted, Rank, Suit};
pub use casino::Casino;
pub use ledger::{Chips, Ledger, LedgerError};
pub use table::{
    CasinoConfig, CasinoTable, Decision, GameKind, Outcome, OutcomeCategory, RoundPhase, Scene,
    TICKS_PER_SECOND, TableApi, TableError, TableResult, TableView, Ticks, Timings,
};
