//! The generic round controller and its per-game instantiations.
//!
//! [`Table`] wraps a [`GameFlow`] and owns everything game-independent:
//! atomic stake escrow with the deal, countdowns for the timed phases,
//! exactly-once settlement, the out-of-funds sweep, and the cancellation
//! rules. The closed [`CasinoTable`] enum erases the six instantiations
//! for the adapter.

pub mod config;
pub mod errors;
pub mod flow;
pub mod games;
pub mod phase;

pub use config::{CasinoConfig, TICKS_PER_SECOND, Timings};
pub use errors::{TableError, TableResult};
pub use flow::{Decision, GameFlow, GameKind, Outcome, OutcomeCategory, Scene, Step};
pub use phase::{RoundPhase, Ticks};

use enum_dispatch::enum_dispatch;
use log::{debug, error, info, warn};
use serde::{Deserialize, Serialize};

use crate::ledger::{Chips, Ledger};
use games::{Baccarat, Blackjack, DrawPoker, MultiPoker, Roulette, Slots};

/// A snapshot of everything the adapter needs to render one frame.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct TableView {
    pub game: GameKind,
    pub phase: RoundPhase,
    /// Ticks left in the current timed phase, zero otherwise.
    pub countdown: Ticks,
    pub balance: Chips,
    /// Chips in escrow for the round in flight.
    pub staked: Chips,
    /// The settled round's judgment, present from `Result` until the next
    /// round starts.
    pub outcome: Option<Outcome>,
    /// Whether a winning result's flashing label is lit this frame.
    pub flash_visible: bool,
    pub scene: Scene,
}

/// The action-driven API one table exposes to the presentation adapter.
///
/// The shared ledger is passed in per call; the exclusive borrow is what
/// serializes every mutation of it.
#[enum_dispatch]
pub trait TableApi {
    fn game_kind(&self) -> GameKind;

    fn phase(&self) -> RoundPhase;

    /// Escrow the round's cost and deal or spin, atomically. An
    /// unaffordable stake leaves balance and phase untouched.
    fn start_round(&mut self, ledger: &mut Ledger, stake: Option<Chips>)
    -> TableResult<RoundPhase>;

    /// Submit a player decision. Decisions the game does not accept in
    /// the current phase are ignored, not raised.
    fn submit(&mut self, ledger: &mut Ledger, decision: Decision) -> TableResult<RoundPhase>;

    /// Advance pending countdowns by `elapsed` ticks. Infallible: a round
    /// fault becomes the `Faulted` phase with the stake refunded.
    fn tick(&mut self, ledger: &mut Ledger, elapsed: Ticks) -> RoundPhase;

    /// Snapshot the table for rendering.
    fn view(&self, ledger: &Ledger) -> TableView;

    /// Walk away. Legal freely from safe phases; with chips committed it
    /// needs confirmation, and with cards or a spin in flight it is
    /// rejected outright.
    fn abandon(&mut self, ledger: &mut Ledger, confirm: bool) -> TableResult<()>;
}

/// One game instance: a flow plus the game-independent round mechanics.
#[derive(Debug)]
pub struct Table<G> {
    game: G,
    config: CasinoConfig,
    phase: RoundPhase,
    countdown: Ticks,
    flash: Ticks,
    outcome: Option<Outcome>,
}

impl<G: GameFlow> Table<G> {
    #[must_use]
    pub fn new(game: G, config: CasinoConfig) -> Self {
        let phase = game.resting_phase();
        Self {
            game,
            config,
            phase,
            countdown: 0,
            flash: 0,
            outcome: None,
        }
    }

    /// The settled outcome, if the round has reached `Result`.
    #[must_use]
    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    /// Phases from which a new round may start.
    fn accepts_start(&self) -> bool {
        match self.phase {
            RoundPhase::Idle
            | RoundPhase::Betting
            | RoundPhase::GameOver
            | RoundPhase::Faulted => true,
            RoundPhase::Result => self.countdown == 0,
            _ => false,
        }
    }

    /// Enter a step's phase; settlement fires on the transition into
    /// `Result`, exactly once per round.
    fn apply(&mut self, ledger: &mut Ledger, step: Step) -> RoundPhase {
        debug!("{}: {} -> {}", self.game.kind(), self.phase, step.phase);
        if self.phase == RoundPhase::Result && step.phase != RoundPhase::Result {
            // The displayed outcome belongs to the finished round only.
            self.outcome = None;
            self.flash = 0;
        }
        self.phase = step.phase;
        self.countdown = step.countdown;
        if self.phase == RoundPhase::Result {
            self.settle(ledger);
        }
        self.phase
    }

    fn settle(&mut self, ledger: &mut Ledger) {
        let outcome = self.game.settle(ledger.staked());
        match ledger.resolve(outcome.returned) {
            Ok(_) => {
                info!(
                    "{}: {} (staked {}, returned {})",
                    self.game.kind(),
                    outcome.category,
                    outcome.staked,
                    outcome.returned
                );
                if outcome.is_win() {
                    self.flash = self.config.timings.flash_duration;
                }
                self.outcome = Some(outcome);
            }
            Err(err) => {
                // Nothing was in escrow, so this round was already
                // resolved; fail it closed rather than settle twice.
                error!("{}: settlement rejected: {err}", self.game.kind());
                self.fault(ledger);
            }
        }
    }

    /// Fail the round closed: refund the escrow and surface a terminal
    /// phase distinguishable from a loss.
    fn fault(&mut self, ledger: &mut Ledger) {
        if ledger.staked() > 0 {
            if let Err(err) = ledger.refund() {
                error!("{}: refund failed: {err}", self.game.kind());
            }
        }
        self.outcome = None;
        self.phase = RoundPhase::Faulted;
        self.countdown = 0;
        self.flash = 0;
    }

    /// The out-of-funds sweep: resting with no escrow and no way to pay
    /// for the cheapest next round is the explicit terminal state.
    fn sweep(&mut self, ledger: &Ledger) {
        let resting = matches!(self.phase, RoundPhase::Idle | RoundPhase::Betting)
            || (self.phase == RoundPhase::Result && self.countdown == 0);
        if resting
            && ledger.staked() == 0
            && !ledger.can_afford(self.game.min_cost(self.config.default_stake))
        {
            info!("{}: cannot afford another round", self.game.kind());
            self.phase = RoundPhase::GameOver;
            self.countdown = 0;
        }
    }
}

impl<G: GameFlow> TableApi for Table<G> {
    fn game_kind(&self) -> GameKind {
        self.game.kind()
    }

    fn phase(&self) -> RoundPhase {
        self.phase
    }

    fn start_round(
        &mut self,
        ledger: &mut Ledger,
        stake: Option<Chips>,
    ) -> TableResult<RoundPhase> {
        if !self.accepts_start() {
            warn!("{}: start ignored in {}", self.game.kind(), self.phase);
            return Ok(self.phase);
        }
        let stake = match stake {
            Some(0) => return Err(TableError::InvalidStake(0)),
            Some(stake) => stake,
            None => self.config.default_stake,
        };
        self.game.validate_start()?;
        // Escrow before any card is dealt or wheel spun; an unaffordable
        // cost errors out here with nothing changed.
        ledger.stake(self.game.round_cost(stake))?;
        self.outcome = None;
        self.flash = 0;
        match self.game.deal(&self.config.timings) {
            Ok(step) => Ok(self.apply(ledger, step)),
            Err(err) => {
                error!("{}: deal faulted: {err}", self.game.kind());
                self.fault(ledger);
                Err(err.into())
            }
        }
    }

    fn submit(&mut self, ledger: &mut Ledger, decision: Decision) -> TableResult<RoundPhase> {
        match self
            .game
            .decide(self.phase, &decision, ledger.balance(), &self.config.timings)
        {
            Ok(Some(step)) => Ok(self.apply(ledger, step)),
            Ok(None) => {
                debug!(
                    "{}: \"{decision}\" ignored in {}",
                    self.game.kind(),
                    self.phase
                );
                Ok(self.phase)
            }
            Err(err @ TableError::Deck(_)) => {
                error!("{}: decision faulted: {err}", self.game.kind());
                self.fault(ledger);
                Err(err)
            }
            Err(err) => Err(err),
        }
    }

    fn tick(&mut self, ledger: &mut Ledger, elapsed: Ticks) -> RoundPhase {
        self.flash = self.flash.saturating_sub(elapsed);
        if self.countdown > 0 {
            self.countdown = self.countdown.saturating_sub(elapsed);
            if self.countdown == 0 {
                if self.phase == RoundPhase::Result {
                    // A timed result pause expired: back to resting.
                    self.game.clear_round();
                    self.outcome = None;
                    self.phase = self.game.resting_phase();
                } else {
                    match self.game.advance(self.phase, &self.config.timings) {
                        Ok(step) => {
                            self.apply(ledger, step);
                        }
                        Err(err) => {
                            error!("{}: advance faulted: {err}", self.game.kind());
                            self.fault(ledger);
                        }
                    }
                }
            }
        }
        self.sweep(ledger);
        self.phase
    }

    fn view(&self, ledger: &Ledger) -> TableView {
        let interval = self.config.timings.flash_interval.max(1);
        TableView {
            game: self.game.kind(),
            phase: self.phase,
            countdown: self.countdown,
            balance: ledger.balance(),
            staked: ledger.staked(),
            outcome: self.outcome.clone(),
            flash_visible: self.flash > 0 && (self.flash / interval) % 2 == 0,
            scene: self.game.scene(self.phase),
        }
    }

    fn abandon(&mut self, ledger: &mut Ledger, confirm: bool) -> TableResult<()> {
        if self.phase.in_flight() {
            return Err(TableError::RoundInFlight);
        }
        let committed = ledger.staked() > 0;
        let open = self.game.open_wagers() > 0;
        if (committed || open) && !confirm {
            return Err(TableError::ConfirmationRequired);
        }
        if committed {
            // Confirmed abandonment forfeits the escrow so the ledger is
            // never left debited without a resolution.
            let forfeited = ledger.staked();
            ledger.resolve(0)?;
            info!("{}: abandoned, {forfeited} forfeited", self.game.kind());
        }
        self.game.clear_round();
        self.game.clear_layout();
        self.outcome = None;
        self.phase = self.game.resting_phase();
        self.countdown = 0;
        self.flash = 0;
        Ok(())
    }
}

pub type DrawPokerTable = Table<DrawPoker>;
pub type MultiPokerTable = Table<MultiPoker>;
pub type BlackjackTable = Table<Blackjack>;
pub type BaccaratTable = Table<Baccarat>;
pub type RouletteTable = Table<Roulette>;
pub type SlotsTable = Table<Slots>;

/// The closed set of tables the casino can seat the player at.
#[enum_dispatch(TableApi)]
#[derive(Debug)]
pub enum CasinoTable {
    DrawPoker(DrawPokerTable),
    MultiPoker(MultiPokerTable),
    Blackjack(BlackjackTable),
    Baccarat(BaccaratTable),
    Roulette(RouletteTable),
    Slots(SlotsTable),
}

impl CasinoTable {
    /// Seat a fresh table for `kind`.
    #[must_use]
    pub fn open(kind: GameKind, config: CasinoConfig) -> Self {
        match kind {
            GameKind::DrawPoker => Table::new(DrawPoker::new(), config).into(),
            GameKind::MultiPoker => {
                let hands = config.multi_hands;
                Table::new(MultiPoker::new(hands), config).into()
            }
            GameKind::Blackjack => Table::new(Blackjack::new(), config).into(),
            GameKind::Baccarat => Table::new(Baccarat::new(), config).into(),
            GameKind::Roulette => Table::new(Roulette::new(), config).into(),
            GameKind::Slots => Table::new(Slots::new(), config).into(),
        }
    }
}
