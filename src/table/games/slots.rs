//! Slots: spin three reels, judge the payline, auto-return to idle.

use rand::Rng;

use crate::cards::DeckExhausted;
use crate::ledger::Chips;
use crate::rules::slots::{self, Payline, REEL_STRIPS, STRIP_LEN};
use crate::table::config::Timings;
use crate::table::errors::TableResult;
use crate::table::flow::{Decision, GameFlow, GameKind, Outcome, OutcomeCategory, Scene, Step};
use crate::table::phase::RoundPhase;

/// One three-reel machine with a single payline.
#[derive(Debug, Default)]
pub struct Slots {
    payline: Option<Payline>,
}

impl Slots {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl GameFlow for Slots {
    fn kind(&self) -> GameKind {
        GameKind::Slots
    }

    fn deal(&mut self, timings: &Timings) -> Result<Step, DeckExhausted> {
        // Uniform over each strip: symbol frequency is the odds model.
        let mut rng = rand::rng();
        self.payline = Some(REEL_STRIPS.map(|strip| strip[rng.random_range(0..STRIP_LEN)]));
        Ok(Step::hold(RoundPhase::Spinning, timings.slots_spin))
    }

    fn decide(
        &mut self,
        _phase: RoundPhase,
        _decision: &Decision,
        _available: Chips,
        _timings: &Timings,
    ) -> TableResult<Option<Step>> {
        // The machine has one action, the spin, and that is the start.
        Ok(None)
    }

    fn advance(&mut self, _phase: RoundPhase, timings: &Timings) -> Result<Step, DeckExhausted> {
        // The result holds on screen, then the machine idles itself.
        Ok(Step::hold(RoundPhase::Result, timings.slots_result))
    }

    fn settle(&mut self, staked: Chips) -> Outcome {
        let win = self.payline.as_ref().and_then(slots::evaluate);
        Outcome {
            category: OutcomeCategory::Slots(win),
            staked,
            returned: win.map_or(0, |win| win.payout().saturating_mul(staked)),
        }
    }

    fn scene(&self, phase: RoundPhase) -> Scene {
        let landed = matches!(phase, RoundPhase::Result | RoundPhase::Faulted);
        Scene::Slots {
            payline: if landed { self.payline } else { None },
        }
    }

    fn clear_round(&mut self) {
        self.payline = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::slots::{SlotSymbol, SlotsWin};

    fn timings() -> Timings {
        Timings::default()
    }

    #[test]
    fn spin_samples_every_reel_from_its_own_strip() {
        let mut game = Slots::new();
        let step = game.deal(&timings()).unwrap();
        assert_eq!(step, Step::hold(RoundPhase::Spinning, 90));
        let line = game.payline.unwrap();
        for (reel, symbol) in line.iter().enumerate() {
            assert!(REEL_STRIPS[reel].contains(symbol));
        }
    }

    #[test]
    fn the_payline_is_withheld_until_it_lands() {
        let mut game = Slots::new();
        game.deal(&timings()).unwrap();
        match game.scene(RoundPhase::Spinning) {
            Scene::Slots { payline } => assert_eq!(payline, None),
            other => panic!("unexpected scene: {other:?}"),
        }
        match game.scene(RoundPhase::Result) {
            Scene::Slots { payline } => assert!(payline.is_some()),
            other => panic!("unexpected scene: {other:?}"),
        }
    }

    #[test]
    fn the_result_pause_returns_the_machine_to_idle() {
        let mut game = Slots::new();
        let step = game.advance(RoundPhase::Spinning, &timings()).unwrap();
        assert_eq!(step, Step::hold(RoundPhase::Result, 60));
    }

    #[test]
    fn settlement_multiplies_the_stake() {
        let mut game = Slots::new();
        game.payline = Some([SlotSymbol::Cherry, SlotSymbol::Cherry, SlotSymbol::Seven]);
        let outcome = game.settle(3);
        assert_eq!(outcome.category, OutcomeCategory::Slots(Some(SlotsWin::TwoCherries)));
        assert_eq!(outcome.returned, 6);

        game.payline = Some([SlotSymbol::Bell, SlotSymbol::Seven, SlotSymbol::Bar]);
        let outcome = game.settle(3);
        assert_eq!(outcome.category, OutcomeCategory::Slots(None));
        assert_eq!(outcome.returned, 0);
    }

    #[test]
    fn oversized_stakes_saturate_the_settlement() {
        let mut game = Slots::new();
        game.payline = Some([SlotSymbol::Seven, SlotSymbol::Seven, SlotSymbol::Seven]);
        // 60-for-1 on 100M chips would wrap a u32; it clamps instead.
        let outcome = game.settle(100_000_000);
        assert_eq!(outcome.returned, Chips::MAX);
    }
}
