//! Blackjack: deal, hit or stand, synchronous dealer playout.

use crate::cards::{Card, Deck, DeckExhausted};
use crate::ledger::Chips;
use crate::rules::blackjack;
use crate::table::config::Timings;
use crate::table::errors::TableResult;
use crate::table::flow::{Decision, GameFlow, GameKind, Outcome, OutcomeCategory, Scene, Step};
use crate::table::phase::RoundPhase;

/// One player hand against the dealer.
#[derive(Debug, Default)]
pub struct Blackjack {
    deck: Deck,
    player: Vec<Card>,
    dealer: Vec<Card>,
}

impl Blackjack {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// House policy: draw to 17, stand on every 17 including soft.
    fn play_dealer(&mut self) -> Result<(), DeckExhausted> {
        while blackjack::dealer_draws(blackjack::hand_value(&self.dealer)) {
            self.dealer.push(self.deck.deal()?);
        }
        Ok(())
    }
}

impl GameFlow for Blackjack {
    fn kind(&self) -> GameKind {
        GameKind::Blackjack
    }

    fn deal(&mut self, _timings: &Timings) -> Result<Step, DeckExhausted> {
        self.deck = Deck::shuffled();
        self.player = self.deck.deal_many(2)?;
        self.dealer = self.deck.deal_many(2)?;
        // A natural on either side ends the round before any decision.
        if blackjack::is_blackjack(&self.player) || blackjack::is_blackjack(&self.dealer) {
            Ok(Step::to(RoundPhase::Result))
        } else {
            Ok(Step::to(RoundPhase::Deciding))
        }
    }

    fn decide(
        &mut self,
        phase: RoundPhase,
        decision: &Decision,
        _available: Chips,
        _timings: &Timings,
    ) -> TableResult<Option<Step>> {
        if phase != RoundPhase::Deciding {
            return Ok(None);
        }
        match decision {
            Decision::Hit => {
                self.player.push(self.deck.deal()?);
                if blackjack::is_bust(&self.player) {
                    // The dealer never plays into a busted hand.
                    Ok(Some(Step::to(RoundPhase::Result)))
                } else {
                    Ok(Some(Step::to(RoundPhase::Deciding)))
                }
            }
            Decision::Stand => {
                self.play_dealer()?;
                Ok(Some(Step::to(RoundPhase::Result)))
            }
            _ => Ok(None),
        }
    }

    fn advance(&mut self, _phase: RoundPhase, _timings: &Timings) -> Result<Step, DeckExhausted> {
        Ok(Step::to(RoundPhase::Result))
    }

    fn settle(&mut self, staked: Chips) -> Outcome {
        let outcome = blackjack::resolve(&self.player, &self.dealer);
        Outcome {
            category: OutcomeCategory::Blackjack(outcome),
            staked,
            returned: outcome.returned(staked),
        }
    }

    fn scene(&self, phase: RoundPhase) -> Scene {
        let hole_hidden = phase == RoundPhase::Deciding;
        let dealer = if hole_hidden {
            self.dealer.first().copied().into_iter().collect()
        } else {
            self.dealer.clone()
        };
        Scene::Blackjack {
            player: self.player.clone(),
            dealer,
            hole_hidden,
        }
    }

    fn clear_round(&mut self) {
        self.player.clear();
        self.dealer.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};
    use crate::rules::blackjack::BlackjackOutcome;

    fn timings() -> Timings {
        Timings::default()
    }

    fn card(rank: Rank) -> Card {
        Card::new(rank, Suit::Spade)
    }

    #[test]
    fn deal_gives_two_cards_each() {
        let mut game = Blackjack::new();
        let step = game.deal(&timings()).unwrap();
        assert_eq!(game.player.len(), 2);
        assert_eq!(game.dealer.len(), 2);
        assert!(matches!(
            step.phase,
            RoundPhase::Deciding | RoundPhase::Result
        ));
    }

    #[test]
    fn hitting_to_a_bust_ends_the_round() {
        let mut game = Blackjack::new();
        game.deck = Deck::shuffled();
        game.player = vec![card(Rank::King), card(Rank::Queen)];
        game.dealer = vec![card(Rank::Nine), card(Rank::Seven)];
        // Hit until bust or 21; with 20 already, one card either busts or
        // makes 21 via an ace.
        let step = game
            .decide(RoundPhase::Deciding, &Decision::Hit, 0, &timings())
            .unwrap()
            .unwrap();
        if blackjack::is_bust(&game.player) {
            assert_eq!(step.phase, RoundPhase::Result);
            let outcome = game.settle(5);
            assert_eq!(
                outcome.category,
                OutcomeCategory::Blackjack(BlackjackOutcome::PlayerBust)
            );
            assert_eq!(outcome.returned, 0);
        } else {
            assert_eq!(step.phase, RoundPhase::Deciding);
        }
    }

    #[test]
    fn standing_plays_the_dealer_to_seventeen() {
        let mut game = Blackjack::new();
        game.deck = Deck::shuffled();
        game.player = vec![card(Rank::King), card(Rank::Nine)];
        game.dealer = vec![Card::new(Rank::Two, Suit::Club), Card::new(Rank::Three, Suit::Heart)];
        let step = game
            .decide(RoundPhase::Deciding, &Decision::Stand, 0, &timings())
            .unwrap()
            .unwrap();
        assert_eq!(step.phase, RoundPhase::Result);
        let value = blackjack::hand_value(&game.dealer);
        assert!(value >= 17 || blackjack::is_bust(&game.dealer));
    }

    #[test]
    fn dealer_hole_card_is_hidden_until_resolution() {
        let mut game = Blackjack::new();
        game.player = vec![card(Rank::King), card(Rank::Nine)];
        game.dealer = vec![Card::new(Rank::Two, Suit::Club), Card::new(Rank::Three, Suit::Heart)];
        match game.scene(RoundPhase::Deciding) {
            Scene::Blackjack {
                dealer,
                hole_hidden,
                ..
            } => {
                assert!(hole_hidden);
                assert_eq!(dealer.len(), 1);
            }
            other => panic!("unexpected scene: {other:?}"),
        }
        match game.scene(RoundPhase::Result) {
            Scene::Blackjack {
                dealer,
                hole_hidden,
                ..
            } => {
                assert!(!hole_hidden);
                assert_eq!(dealer.len(), 2);
            }
            other => panic!("unexpected scene: {other:?}"),
        }
    }

    #[test]
    fn natural_pays_three_to_two() {
        let mut game = Blackjack::new();
        game.player = vec![card(Rank::Ace), card(Rank::King)];
        game.dealer = vec![Card::new(Rank::Nine, Suit::Club), Card::new(Rank::Eight, Suit::Heart)];
        let outcome = game.settle(2);
        assert_eq!(
            outcome.category,
            OutcomeCategory::Blackjack(BlackjackOutcome::PlayerBlackjack)
        );
        assert_eq!(outcome.returned, 5);
    }
}
