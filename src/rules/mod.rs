//! Pure rule engines, one per game.
//!
//! Every function in this module tree is a terminating computation over
//! values: a hand, wheel number, or payline in; a category and settlement
//! arithmetic out. No randomness, no ledger access, no phase state. The
//! round controller owns all of that and calls in here exactly once per
//! round.

pub mod baccarat;
pub mod blackjack;
pub mod poker;
pub mod roulette;
pub mod slots;
