//! Baccarat: one side wagered, timed deal and draw holds, the tableau.

use crate::cards::{Card, Deck, DeckExhausted};
use crate::ledger::{Chips, LedgerError};
use crate::rules::baccarat::{self, BaccaratSide};
use crate::table::config::Timings;
use crate::table::errors::{TableError, TableResult};
use crate::table::flow::{Decision, GameFlow, GameKind, Outcome, OutcomeCategory, Scene, Step};
use crate::table::phase::RoundPhase;

/// One coup with a single side wagered at a time. Placing chips on a
/// different side moves the whole wager there.
#[derive(Debug, Default)]
pub struct Baccarat {
    deck: Deck,
    player: Vec<Card>,
    banker: Vec<Card>,
    wager: Option<(BaccaratSide, Chips)>,
}

impl Baccarat {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl GameFlow for Baccarat {
    fn kind(&self) -> GameKind {
        GameKind::Baccarat
    }

    fn resting_phase(&self) -> RoundPhase {
        RoundPhase::Betting
    }

    fn round_cost(&self, _stake: Chips) -> Chips {
        self.wager.map_or(0, |(_, amount)| amount)
    }

    fn min_cost(&self, _stake: Chips) -> Chips {
        1
    }

    fn validate_start(&self) -> TableResult<()> {
        if self.wager.is_none() {
            return Err(TableError::NoBetsPlaced);
        }
        Ok(())
    }

    fn deal(&mut self, timings: &Timings) -> Result<Step, DeckExhausted> {
        self.deck = Deck::shuffled();
        self.player = self.deck.deal_many(2)?;
        self.banker = self.deck.deal_many(2)?;
        Ok(Step::hold(RoundPhase::Dealing, timings.baccarat_deal))
    }

    fn decide(
        &mut self,
        phase: RoundPhase,
        decision: &Decision,
        available: Chips,
        _timings: &Timings,
    ) -> TableResult<Option<Step>> {
        if !matches!(phase, RoundPhase::Betting | RoundPhase::Result) {
            return Ok(None);
        }
        match decision {
            Decision::BaccaratBet { side, amount } => {
                if *amount == 0 {
                    return Err(TableError::MalformedBet {
                        reason: "zero amount".to_string(),
                    });
                }
                if *amount > available {
                    return Err(TableError::Ledger(LedgerError::InsufficientFunds {
                        available,
                        required: *amount,
                    }));
                }
                if phase == RoundPhase::Result {
                    self.clear_round();
                }
                self.wager = Some((*side, *amount));
                Ok(Some(Step::to(RoundPhase::Betting)))
            }
            Decision::ClearBets => {
                if phase == RoundPhase::Result {
                    self.clear_round();
                }
                self.wager = None;
                Ok(Some(Step::to(RoundPhase::Betting)))
            }
            _ => Ok(None),
        }
    }

    fn advance(&mut self, phase: RoundPhase, timings: &Timings) -> Result<Step, DeckExhausted> {
        match phase {
            RoundPhase::Dealing => {
                // A natural on either side ends the coup on the spot.
                if baccarat::is_natural(&self.player) || baccarat::is_natural(&self.banker) {
                    Ok(Step::to(RoundPhase::Result))
                } else {
                    Ok(Step::hold(RoundPhase::Drawing, timings.baccarat_draw))
                }
            }
            _ => {
                let player_value = baccarat::hand_value(&self.player);
                let mut player_third = None;
                if baccarat::player_draws(player_value) {
                    let third = self.deck.deal()?;
                    player_third = Some(third.rank.baccarat_points());
                    self.player.push(third);
                }
                let banker_value = baccarat::hand_value(&self.banker);
                if baccarat::banker_draws(banker_value, player_third) {
                    self.banker.push(self.deck.deal()?);
                }
                Ok(Step::to(RoundPhase::Result))
            }
        }
    }

    fn settle(&mut self, staked: Chips) -> Outcome {
        let player_value = baccarat::hand_value(&self.player);
        let banker_value = baccarat::hand_value(&self.banker);
        let winner = baccarat::winner(player_value, banker_value);
        let returned = match self.wager {
            Some((side, _)) => baccarat::returned(side, winner, staked),
            None => 0,
        };
        Outcome {
            category: OutcomeCategory::Baccarat {
                winner,
                player_value,
                banker_value,
            },
            staked,
            returned,
        }
    }

    fn scene(&self, _phase: RoundPhase) -> Scene {
        Scene::Baccarat {
            player: self.player.clone(),
            banker: self.banker.clone(),
            wager: self.wager,
        }
    }

    fn open_wagers(&self) -> Chips {
        self.wager.map_or(0, |(_, amount)| amount)
    }

    fn clear_round(&mut self) {
        self.player.clear();
        self.banker.clear();
    }

    fn clear_layout(&mut self) {
        self.wager = None;
    }
}
