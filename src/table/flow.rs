//! The per-game flow seam the generic table drives.
//!
//! Each game implements [`GameFlow`]: how to deal, which decisions it
//! accepts, how timed phases advance, and how the finished round is
//! judged. The table owns everything else — stake escrow, countdowns,
//! settlement, and the terminal states.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::config::Timings;
use super::errors::TableResult;
use super::phase::{RoundPhase, Ticks};
use crate::cards::{Card, DeckExhausted};
use crate::ledger::Chips;
use crate::rules::baccarat::BaccaratSide;
use crate::rules::blackjack::BlackjackOutcome;
use crate::rules::poker::HandRank;
use crate::rules::roulette::{RouletteBet, color_of};
use crate::rules::slots::{Payline, SlotSymbol, SlotsWin};

/// The six games the shell hosts.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GameKind {
    DrawPoker,
    MultiPoker,
    Blackjack,
    Baccarat,
    Roulette,
    Slots,
}

impl fmt::Display for GameKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let repr = match self {
            Self::DrawPoker => "Draw Poker",
            Self::MultiPoker => "Multi Poker",
            Self::Blackjack => "Blackjack",
            Self::Baccarat => "Baccarat",
            Self::Roulette => "Roulette",
            Self::Slots => "Slots",
        };
        write!(f, "{repr}")
    }
}

/// A player decision submitted through the adapter. Decisions a game does
/// not accept in its current phase are ignored, not raised.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    /// Toggle the hold flag on one card of the poker hand.
    ToggleHold(usize),
    /// Replace every unheld card and judge the hand(s).
    Draw,
    /// Take another blackjack card.
    Hit,
    /// Stop; the dealer plays out and the round is judged.
    Stand,
    /// Put chips on a baccarat side. Chips already on another side move
    /// with the wager.
    BaccaratBet { side: BaccaratSide, amount: Chips },
    /// Put chips on a roulette wager, accumulating per (kind, target).
    RouletteBet { bet: RouletteBet, amount: Chips },
    /// Take everything off the layout.
    ClearBets,
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let repr = match self {
            Self::ToggleHold(slot) => format!("toggle hold {slot}"),
            Self::Draw => "draw".to_string(),
            Self::Hit => "hit".to_string(),
            Self::Stand => "stand".to_string(),
            Self::BaccaratBet { side, amount } => format!("{amount} on {side}"),
            Self::RouletteBet { bet, amount } => format!("{amount} on {bet}"),
            Self::ClearBets => "clear bets".to_string(),
        };
        write!(f, "{repr}")
    }
}

/// A transition a flow hands back to the table: the phase to enter and
/// the countdown to hold it for.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Step {
    pub phase: RoundPhase,
    pub countdown: Ticks,
}

impl Step {
    /// An immediate transition.
    #[must_use]
    pub fn to(phase: RoundPhase) -> Self {
        Self {
            phase,
            countdown: 0,
        }
    }

    /// A timed hold; the frame clock fires the next transition.
    #[must_use]
    pub fn hold(phase: RoundPhase, countdown: Ticks) -> Self {
        Self { phase, countdown }
    }
}

/// What a finished round came to, typed per game.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeCategory {
    Poker(HandRank),
    /// One rank per simultaneous hand, in hand order.
    MultiPoker(Vec<HandRank>),
    Blackjack(BlackjackOutcome),
    Baccarat {
        winner: BaccaratSide,
        player_value: u8,
        banker_value: u8,
    },
    Roulette {
        winning_number: u8,
    },
    /// `None` is a losing payline.
    Slots(Option<SlotsWin>),
}

impl fmt::Display for OutcomeCategory {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let repr = match self {
            Self::Poker(rank) => rank.to_string(),
            Self::MultiPoker(ranks) => {
                let paying = ranks.iter().filter(|rank| rank.is_winner()).count();
                format!("{paying} of {} hands paid", ranks.len())
            }
            Self::Blackjack(outcome) => outcome.to_string(),
            Self::Baccarat {
                winner: BaccaratSide::Tie,
                ..
            } => "Tie!".to_string(),
            Self::Baccarat { winner, .. } => format!("{winner} Wins!"),
            Self::Roulette { winning_number } => {
                format!("{winning_number} {}!", color_of(*winning_number))
            }
            Self::Slots(Some(SlotsWin::ThreeOfAKind(SlotSymbol::Seven))) => {
                "JACKPOT! Three 7s!".to_string()
            }
            Self::Slots(Some(win)) => win.to_string(),
            Self::Slots(None) => "No Win".to_string(),
        };
        write!(f, "{repr}")
    }
}

/// The judgment of one round: computed once, immutable afterward,
/// consumed by the ledger settlement and the adapter.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Outcome {
    pub category: OutcomeCategory,
    /// Chips that were at risk.
    pub staked: Chips,
    /// Chips handed back: zero on a loss, the stake on a push, more on a
    /// win.
    pub returned: Chips,
}

impl Outcome {
    /// Net winnings were positive (a push is not a win).
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.returned > self.staked
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.category)
    }
}

/// What the adapter should draw, per game. Hidden information (the
/// dealer's hole card, an unlanded wheel number) is withheld by the flow,
/// not by the adapter.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Scene {
    /// One hand in draw poker; the base hand then every drawn hand in
    /// multi poker.
    Poker {
        hands: Vec<Vec<Card>>,
        held: Vec<bool>,
    },
    Blackjack {
        player: Vec<Card>,
        dealer: Vec<Card>,
        /// The dealer's second card is withheld until the round is judged.
        hole_hidden: bool,
    },
    Baccarat {
        player: Vec<Card>,
        banker: Vec<Card>,
        wager: Option<(BaccaratSide, Chips)>,
    },
    Roulette {
        layout: Vec<(RouletteBet, Chips)>,
        winning_number: Option<u8>,
    },
    Slots {
        payline: Option<Payline>,
    },
}

/// The capability set a game exposes to the generic table.
///
/// Flows hold the round's cards, layout, and committed spin results. They
/// never touch the ledger; the table escrows before `deal` and resolves
/// right after `settle`.
pub trait GameFlow {
    fn kind(&self) -> GameKind;

    /// The phase the game rests in between rounds.
    fn resting_phase(&self) -> RoundPhase {
        RoundPhase::Idle
    }

    /// Chips the next round costs at the given per-hand stake. Layout
    /// games sum their layout instead.
    fn round_cost(&self, stake: Chips) -> Chips {
        stake
    }

    /// The cheapest possible next round, for the out-of-funds sweep.
    fn min_cost(&self, stake: Chips) -> Chips {
        self.round_cost(stake)
    }

    /// Anything standing in the way of a start, before the stake is
    /// committed (an empty layout, say).
    fn validate_start(&self) -> TableResult<()> {
        Ok(())
    }

    /// Deal or spin. The stake is already escrowed; an error faults the
    /// round and the table refunds it.
    fn deal(&mut self, timings: &Timings) -> Result<Step, DeckExhausted>;

    /// A decision in the current phase. `Ok(None)` means the decision is
    /// not accepted here and is ignored. `available` is the uncommitted
    /// balance, for layout affordability checks.
    fn decide(
        &mut self,
        phase: RoundPhase,
        decision: &Decision,
        available: Chips,
        timings: &Timings,
    ) -> TableResult<Option<Step>>;

    /// A timed phase's countdown reached zero.
    fn advance(&mut self, phase: RoundPhase, timings: &Timings) -> Result<Step, DeckExhausted>;

    /// Judge the round. Called exactly once per round, on the transition
    /// into [`RoundPhase::Result`].
    fn settle(&mut self, staked: Chips) -> Outcome;

    /// What the adapter should draw right now.
    fn scene(&self, phase: RoundPhase) -> Scene;

    /// Wagers placed but not yet escrowed (layout games).
    fn open_wagers(&self) -> Chips {
        0
    }

    /// Drop the finished round's cards or payline. Kept layouts survive.
    fn clear_round(&mut self) {}

    /// Take everything off the layout.
    fn clear_layout(&mut self) {}
}
