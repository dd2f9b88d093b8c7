//! Five-card draw poker: deal, hold toggles, one draw, judge.

use crate::cards::{Card, Deck, DeckExhausted, Rank, Suit};
use crate::ledger::Chips;
use crate::rules::poker::{self, HAND_SIZE, HandRank};
use crate::table::config::Timings;
use crate::table::errors::TableResult;
use crate::table::flow::{Decision, GameFlow, GameKind, Outcome, OutcomeCategory, Scene, Step};
use crate::table::phase::RoundPhase;

/// One five-card hand against the paytable.
#[derive(Debug, Default)]
pub struct DrawPoker {
    deck: Deck,
    hand: Option<[Card; HAND_SIZE]>,
    held: [bool; HAND_SIZE],
}

impl DrawPoker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl GameFlow for DrawPoker {
    fn kind(&self) -> GameKind {
        GameKind::DrawPoker
    }

    fn deal(&mut self, _timings: &Timings) -> Result<Step, DeckExhausted> {
        self.deck = Deck::shuffled();
        let mut hand = [Card::new(Rank::Two, Suit::Club); HAND_SIZE];
        for slot in &mut hand {
            *slot = self.deck.deal()?;
        }
        self.hand = Some(hand);
        self.held = [false; HAND_SIZE];
        Ok(Step::to(RoundPhase::Deciding))
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
            Decision::ToggleHold(slot) if *slot < HAND_SIZE => {
                self.held[*slot] = !self.held[*slot];
                Ok(Some(Step::to(RoundPhase::Deciding)))
            }
            Decision::Draw => {
                if let Some(hand) = self.hand.as_mut() {
                    for (slot, card) in hand.iter_mut().enumerate() {
                        if !self.held[slot] {
                            *card = self.deck.deal()?;
                        }
                    }
                }
                Ok(Some(Step::to(RoundPhase::Result)))
            }
            _ => Ok(None),
        }
    }

    fn advance(&mut self, _phase: RoundPhase, _timings: &Timings) -> Result<Step, DeckExhausted> {
        Ok(Step::to(RoundPhase::Result))
    }

    fn settle(&mut self, staked: Chips) -> Outcome {
        let rank = match &self.hand {
            Some(cards) => poker::evaluate(cards),
            None => HandRank::Nothing,
        };
        Outcome {
            category: OutcomeCategory::Poker(rank),
            staked,
            returned: rank.payout().saturating_mul(staked),
        }
    }

    fn scene(&self, _phase: RoundPhase) -> Scene {
        Scene::Poker {
            hands: self.hand.map(|hand| vec![hand.to_vec()]).unwrap_or_default(),
            held: self.held.to_vec(),
        }
    }

    fn clear_round(&mut self) {
        self.hand = None;
        self.held = [false; HAND_SIZE];
    }
}
