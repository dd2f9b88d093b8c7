//! Multi-hand poker: one base hand, N simultaneous draws.
//!
//! Every drawn hand keeps the held cards and fills the rest from its own
//! independently shuffled fresh deck, skipping cards equal to a held card
//! or to one already drawn for that hand. The independence is part of the
//! statistical model; the hands never share a shoe.

use crate::cards::{Card, Deck, DeckExhausted, Rank, Suit};
use crate::ledger::Chips;
use crate::rules::poker::{self, HAND_SIZE, HandRank};
use crate::table::config::Timings;
use crate::table::errors::TableResult;
use crate::table::flow::{Decision, GameFlow, GameKind, Outcome, OutcomeCategory, Scene, Step};
use crate::table::phase::RoundPhase;

/// N hands judged at once, each costing one stake.
#[derive(Debug)]
pub struct MultiPoker {
    hands: usize,
    deck: Deck,
    base: Option<[Card; HAND_SIZE]>,
    held: [bool; HAND_SIZE],
    drawn: Vec<[Card; HAND_SIZE]>,
}

impl MultiPoker {
    #[must_use]
    pub fn new(hands: usize) -> Self {
        Self {
            hands: hands.max(1),
            deck: Deck::default(),
            base: None,
            held: [false; HAND_SIZE],
            drawn: Vec::new(),
        }
    }

    /// Fill one hand's empty slots from a fresh deck, skipping duplicates
    /// of the held cards and of cards already placed in this hand.
    fn draw_one_hand(&self, base: &[Card; HAND_SIZE]) -> Result<[Card; HAND_SIZE], DeckExhausted> {
        let mut deck = Deck::shuffled();
        let mut hand = *base;
        for slot in 0..HAND_SIZE {
            if self.held[slot] {
                continue;
            }
            loop {
                let candidate = deck.deal()?;
                let clashes_held = (0..HAND_SIZE)
                    .any(|other| self.held[other] && base[other] == candidate);
                let clashes_drawn = (0..slot)
                    .any(|other| !self.held[other] && hand[other] == candidate);
                if !clashes_held && !clashes_drawn {
                    hand[slot] = candidate;
                    break;
                }
            }
        }
        Ok(hand)
    }
}

impl GameFlow for MultiPoker {
    fn kind(&self) -> GameKind {
        GameKind::MultiPoker
    }

    fn round_cost(&self, stake: Chips) -> Chips {
        stake.saturating_mul(self.hands as Chips)
    }

    fn deal(&mut self, _timings: &Timings) -> Result<Step, DeckExhausted> {
        self.deck = Deck::shuffled();
        let mut base = [Card::new(Rank::Two, Suit::Club); HAND_SIZE];
        for slot in &mut base {
            *slot = self.deck.deal()?;
        }
        self.base = Some(base);
        self.held = [false; HAND_SIZE];
        self.drawn.clear();
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
                let Some(base) = self.base else {
                    return Ok(Some(Step::to(RoundPhase::Result)));
                };
                let mut drawn = Vec::with_capacity(self.hands);
                for _ in 0..self.hands {
                    drawn.push(self.draw_one_hand(&base)?);
                }
                self.drawn = drawn;
                Ok(Some(Step::to(RoundPhase::Result)))
            }
            _ => Ok(None),
        }
    }

    fn advance(&mut self, _phase: RoundPhase, _timings: &Timings) -> Result<Step, DeckExhausted> {
        Ok(Step::to(RoundPhase::Result))
    }

    fn settle(&mut self, staked: Chips) -> Outcome {
        let per_hand = staked / self.hands as Chips;
        let ranks: Vec<HandRank> = self.drawn.iter().map(poker::evaluate).collect();
        let returned = ranks.iter().fold(0, |acc: Chips, rank| {
            acc.saturating_add(rank.payout().saturating_mul(per_hand))
        });
        Outcome {
            category: OutcomeCategory::MultiPoker(ranks),
            staked,
            returned,
        }
    }

    fn scene(&self, _phase: RoundPhase) -> Scene {
        let hands = if self.drawn.is_empty() {
            self.base.map(|base| vec![base.to_vec()]).unwrap_or_default()
        } else {
            self.drawn.iter().map(|hand| hand.to_vec()).collect()
        };
        Scene::Poker {
            hands,
            held: self.held.to_vec(),
        }
    }

    fn clear_round(&mut self) {
        self.base = None;
        self.held = [false; HAND_SIZE];
        self.drawn.clear();
    }
}
