//! Roulette: a multi-bet layout, one uniform draw, independent settlement.

use rand::Rng;
use std::collections::BTreeMap;

use crate::cards::DeckExhausted;
use crate::ledger::{Chips, LedgerError};
use crate::rules::roulette::{MAX_NUMBER, RouletteBet};
use crate::table::config::Timings;
use crate::table::errors::{TableError, TableResult};
use crate::table::flow::{Decision, GameFlow, GameKind, Outcome, OutcomeCategory, Scene, Step};
use crate::table::phase::RoundPhase;

/// A layout of concurrent wagers keyed by (kind, target). The layout
/// survives the result so a round can be repeated; placing a fresh bet
/// from the result starts a new layout.
#[derive(Debug, Default)]
pub struct Roulette {
    bets: BTreeMap<RouletteBet, Chips>,
    winning: Option<u8>,
}

impl Roulette {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn layout_total(&self) -> Chips {
        self.bets.values().sum()
    }
}

impl GameFlow for Roulette {
    fn kind(&self) -> GameKind {
        GameKind::Roulette
    }

    fn resting_phase(&self) -> RoundPhase {
        RoundPhase::Betting
    }

    fn round_cost(&self, _stake: Chips) -> Chips {
        self.layout_total()
    }

    fn min_cost(&self, _stake: Chips) -> Chips {
        1
    }

    fn validate_start(&self) -> TableResult<()> {
        if self.bets.is_empty() {
            return Err(TableError::NoBetsPlaced);
        }
        Ok(())
    }

    fn deal(&mut self, timings: &Timings) -> Result<Step, DeckExhausted> {
        // The number is committed now; views withhold it until it lands.
        self.winning = Some(rand::rng().random_range(0..=MAX_NUMBER));
        Ok(Step::hold(RoundPhase::Spinning, timings.roulette_spin))
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
            Decision::RouletteBet { bet, amount } => {
                if *amount == 0 {
                    return Err(TableError::MalformedBet {
                        reason: "zero amount".to_string(),
                    });
                }
                if !bet.is_valid() {
                    return Err(TableError::MalformedBet {
                        reason: format!("off-layout target: {bet}"),
                    });
                }
                if phase == RoundPhase::Result {
                    // A fresh wager after a result starts a new layout.
                    self.bets.clear();
                    self.winning = None;
                }
                let required = self.layout_total() + amount;
                if required > available {
                    return Err(TableError::Ledger(LedgerError::InsufficientFunds {
                        available,
                        required,
                    }));
                }
                *self.bets.entry(*bet).or_insert(0) += amount;
                Ok(Some(Step::to(RoundPhase::Betting)))
            }
            Decision::ClearBets => {
                self.bets.clear();
                self.winning = None;
                Ok(Some(Step::to(RoundPhase::Betting)))
            }
            _ => Ok(None),
        }
    }

    fn advance(&mut self, phase: RoundPhase, timings: &Timings) -> Result<Step, DeckExhausted> {
        match phase {
            RoundPhase::Spinning => Ok(Step::hold(RoundPhase::Revealing, timings.roulette_reveal)),
            _ => Ok(Step::to(RoundPhase::Result)),
        }
    }

    fn settle(&mut self, staked: Chips) -> Outcome {
        let winning_number = self.winning.unwrap_or(0);
        let returned = self.bets.iter().fold(0, |acc: Chips, (bet, amount)| {
            acc.saturating_add(bet.returned(*amount, winning_number))
        });
        Outcome {
            category: OutcomeCategory::Roulette { winning_number },
            staked,
            returned,
        }
    }

    fn scene(&self, phase: RoundPhase) -> Scene {
        let landed = matches!(phase, RoundPhase::Revealing | RoundPhase::Result);
        Scene::Roulette {
            layout: self.bets.iter().map(|(bet, amount)| (*bet, *amount)).collect(),
            winning_number: if landed { self.winning } else { None },
        }
    }

    fn open_wagers(&self) -> Chips {
        self.layout_total()
    }

    fn clear_round(&mut self) {
        self.winning = None;
    }

    fn clear_layout(&mut self) {
        self.bets.clear();
        self.winning = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::roulette::{Color, Parity};

    fn timings() -> Timings {
        Timings::default()
    }

    fn place(game: &mut Roulette, phase: RoundPhase, bet: RouletteBet, amount: Chips) {
        game.decide(
            phase,
            &Decision::RouletteBet { bet, amount },
            1_000,
            &timings(),
        )
        .unwrap();
    }

    #[test]
    fn bets_accumulate_per_kind_and_target() {
        let mut game = Roulette::new();
        place(&mut game, RoundPhase::Betting, RouletteBet::Straight(17), 5);
        place(&mut game, RoundPhase::Betting, RouletteBet::Straight(17), 5);
        place(&mut game, RoundPhase::Betting, RouletteBet::Color(Color::Red), 10);
        assert_eq!(game.bets.get(&RouletteBet::Straight(17)), Some(&10));
        assert_eq!(game.round_cost(1), 20);
    }

    #[test]
    fn malformed_bets_never_reach_the_layout() {
        let mut game = Roulette::new();
        for (bet, amount) in [
            (RouletteBet::Straight(37), 1),
            (RouletteBet::Color(Color::Green), 1),
            (RouletteBet::Dozen(4), 1),
            (RouletteBet::Straight(17), 0),
        ] {
            let err = game
                .decide(
                    RoundPhase::Betting,
                    &Decision::RouletteBet { bet, amount },
                    1_000,
                    &timings(),
                )
                .unwrap_err();
            assert!(matches!(err, TableError::MalformedBet { .. }));
        }
        assert!(game.bets.is_empty());
    }

    #[test]
    fn layout_beyond_the_balance_is_blocked() {
        let mut game = Roulette::new();
        place(&mut game, RoundPhase::Betting, RouletteBet::Straight(5), 8);
        let err = game
            .decide(
                RoundPhase::Betting,
                &Decision::RouletteBet {
                    bet: RouletteBet::Parity(Parity::Odd),
                    amount: 5,
                },
                10,
                &timings(),
            )
            .unwrap_err();
        assert!(matches!(
            err,
            TableError::Ledger(LedgerError::InsufficientFunds {
                available: 10,
                required: 13
            })
        ));
        assert_eq!(game.layout_total(), 8);
    }

    #[test]
    fn spin_commits_a_number_but_views_withhold_it() {
        let mut game = Roulette::new();
        place(&mut game, RoundPhase::Betting, RouletteBet::Straight(5), 1);
        let step = game.deal(&timings()).unwrap();
        assert_eq!(step, Step::hold(RoundPhase::Spinning, 180));
        assert!(game.winning.is_some());
        match game.scene(RoundPhase::Spinning) {
            Scene::Roulette { winning_number, .. } => assert_eq!(winning_number, None),
            other => panic!("unexpected scene: {other:?}"),
        }
        match game.scene(RoundPhase::Revealing) {
            Scene::Roulette { winning_number, .. } => assert!(winning_number.is_some()),
            other => panic!("unexpected scene: {other:?}"),
        }
    }

    #[test]
    fn settlement_resolves_every_bet_independently() {
        let mut game = Roulette::new();
        place(&mut game, RoundPhase::Betting, RouletteBet::Straight(17), 10);
        place(&mut game, RoundPhase::Betting, RouletteBet::Color(Color::Red), 10);
        place(&mut game, RoundPhase::Betting, RouletteBet::Parity(Parity::Odd), 10);
        game.winning = Some(17);
        let outcome = game.settle(30);
        // Straight 17 returns 360, red loses, odd returns 20.
        assert_eq!(outcome.returned, 380);
        assert_eq!(
            outcome.category,
            OutcomeCategory::Roulette { winning_number: 17 }
        );
    }

    #[test]
    fn fresh_bet_after_a_result_starts_a_new_layout() {
        let mut game = Roulette::new();
        place(&mut game, RoundPhase::Betting, RouletteBet::Straight(17), 10);
        game.winning = Some(3);
        place(&mut game, RoundPhase::Result, RouletteBet::Dozen(1), 2);
        assert_eq!(game.layout_total(), 2);
        assert_eq!(game.winning, None);
    }

    #[test]
    fn the_kept_layout_can_be_restaked() {
        let mut game = Roulette::new();
        place(&mut game, RoundPhase::Betting, RouletteBet::Straight(17), 10);
        game.winning = Some(3);
        // No new bet placed: the layout survives for a repeat round.
        assert_eq!(game.validate_start(), Ok(()));
        assert_eq!(game.round_cost(1), 10);
    }
}
