//! Round phase definitions for the table lifecycle.
//!
//! Each phase represents a specific point in a round's life. Timed phases
//! carry a countdown on the table; the frame clock decrements it and a zero
//! auto-fires the next transition.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Frame ticks. The reference cadence is 30 ticks per second; every
/// duration constant in [`Timings`](super::Timings) is calibrated to it.
pub type Ticks = u32;

/// The phase a table is in. Exactly one is active per table; the table's
/// transition function is the sole mutator.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundPhase {
    /// Between rounds, nothing committed. Fixed-stake games rest here.
    Idle,
    /// Layout games' resting phase: wagers can be placed and cleared,
    /// nothing escrowed yet.
    Betting,
    /// Timed hold while the initial deal lands.
    Dealing,
    /// Awaiting a player decision: hold toggles, draw, hit, stand.
    Deciding,
    /// Timed hold while third cards land.
    Drawing,
    /// Timed hold while the wheel or reels spin.
    Spinning,
    /// Timed landing pause before the result shows.
    Revealing,
    /// The round is settled and its outcome is on display.
    Result,
    /// Terminal: the balance cannot cover another round.
    GameOver,
    /// Terminal round error, distinguishable from an ordinary loss. The
    /// stake was refunded.
    Faulted,
}

impl RoundPhase {
    /// Phases with cards or a spin in flight; abandonment is rejected here
    /// and decisions are ignored.
    #[must_use]
    pub fn in_flight(self) -> bool {
        matches!(
            self,
            Self::Dealing | Self::Drawing | Self::Spinning | Self::Revealing
        )
    }
}

impl fmt::Display for RoundPhase {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let repr = match self {
            Self::Idle => "idle",
            Self::Betting => "betting",
            Self::Dealing => "dealing",
            Self::Deciding => "deciding",
            Self::Drawing => "drawing",
            Self::Spinning => "spinning",
            Self::Revealing => "revealing",
            Self::Result => "result",
            Self::GameOver => "game over",
            Self::Faulted => "faulted",
        };
        write!(f, "{repr}")
    }
}
