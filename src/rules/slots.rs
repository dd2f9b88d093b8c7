//! Slot machine reel strips and payline evaluation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Reels on the machine.
pub const NUM_REELS: usize = 3;

/// Symbols on each virtual reel strip.
pub const STRIP_LEN: usize = 20;

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub enum SlotSymbol {
    Cherry,
    Bar,
    DoubleBar,
    TripleBar,
    Bell,
    Seven,
}

impl SlotSymbol {
    /// Member of the bar family, for the mixed-bars line.
    #[must_use]
    pub fn is_bar(self) -> bool {
        matches!(self, Self::Bar | Self::DoubleBar | Self::TripleBar)
    }
}

impl fmt::Display for SlotSymbol {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let repr = match self {
            Self::Cherry => "Cherry",
            Self::Bar => "Bar",
            Self::DoubleBar => "Double Bar",
            Self::TripleBar => "Triple Bar",
            Self::Bell => "Bell",
            Self::Seven => "7",
        };
        write!(f, "{repr}")
    }
}

/// The three symbols landing on the single middle payline.
pub type Payline = [SlotSymbol; NUM_REELS];

/// The virtual strips, one per reel. Symbol frequency on the strip is the
/// whole odds model: a spin picks uniformly over a strip, so five cherries
/// on reel one make cherries five times likelier than the seven there.
pub const REEL_STRIPS: [[SlotSymbol; STRIP_LEN]; NUM_REELS] = {
    use SlotSymbol::{Bar, Bell, Cherry, DoubleBar, Seven, TripleBar};
    [
        [
            Cherry, Bar, Cherry, DoubleBar, Cherry, TripleBar, Cherry, Bell, Cherry, Seven, Bar,
            DoubleBar, Bar, Bell, Bar, TripleBar, Bar, Seven, Bar, Bell,
        ],
        [
            Cherry, Bar, DoubleBar, Bell, TripleBar, Seven, Bar, DoubleBar, Bell, Bar, Cherry,
            TripleBar, Bell, DoubleBar, Bar, Seven, Bell, TripleBar, DoubleBar, Cherry,
        ],
        [
            Cherry, Bell, Bar, Seven, DoubleBar, Bell, TripleBar, Bar, Cherry, DoubleBar, Bell,
            Bar, TripleBar, Seven, Cherry, Bell, Bar, DoubleBar, TripleBar, Seven,
        ],
    ]
};

/// A winning line, best to worst. The variants never stack: evaluation
/// stops at the first match in this order.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum SlotsWin {
    /// All three reels show the same symbol.
    ThreeOfAKind(SlotSymbol),
    /// Three bar-family symbols of mixed weights.
    AnyBars,
    /// Cherries on reels one and two; reel three is irrelevant.
    TwoCherries,
    /// A cherry on reel one alone.
    OneCherry,
}

impl SlotsWin {
    /// For-1 multipliers: multiplier times stake is the full return.
    #[must_use]
    pub fn payout(self) -> u32 {
        match self {
            Self::ThreeOfAKind(SlotSymbol::Seven) => 60,
            Self::ThreeOfAKind(SlotSymbol::TripleBar) => 20,
            Self::ThreeOfAKind(SlotSymbol::DoubleBar) => 15,
            Self::ThreeOfAKind(SlotSymbol::Bar) => 10,
            Self::ThreeOfAKind(SlotSymbol::Bell) => 10,
            Self::ThreeOfAKind(SlotSymbol::Cherry) => 5,
            Self::AnyBars => 5,
            Self::TwoCherries => 2,
            Self::OneCherry => 1,
        }
    }
}

impl fmt::Display for SlotsWin {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let repr = match self {
            Self::ThreeOfAKind(SlotSymbol::Seven) => "Three Sevens".to_string(),
            Self::ThreeOfAKind(symbol) => format!("Three {symbol}s"),
            Self::AnyBars => "Any 3 Bars".to_string(),
            Self::TwoCherries => "Two Cherries".to_string(),
            Self::OneCherry => "One Cherry".to_string(),
        };
        write!(f, "{repr}")
    }
}

/// Judge a payline. First match in priority order wins; `None` is a loss.
#[must_use]
pub fn evaluate(line: &Payline) -> Option<SlotsWin> {
    if line[0] == line[1] && line[1] == line[2] {
        Some(SlotsWin::ThreeOfAKind(line[0]))
    } else if line.iter().all(|symbol| symbol.is_bar()) {
        Some(SlotsWin::AnyBars)
    } else if line[0] == SlotSymbol::Cherry && line[1] == SlotSymbol::Cherry {
        Some(SlotsWin::TwoCherries)
    } else if line[0] == SlotSymbol::Cherry {
        Some(SlotsWin::OneCherry)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use SlotSymbol::{Bar, Bell, Cherry, DoubleBar, Seven, TripleBar};

    #[test]
    fn exact_triples_outrank_the_family_lines() {
        assert_eq!(
            evaluate(&[Seven, Seven, Seven]),
            Some(SlotsWin::ThreeOfAKind(Seven))
        );
        assert_eq!(evaluate(&[Seven, Seven, Seven]).unwrap().payout(), 60);
        // Three matching bars pay as the exact triple, not as mixed bars.
        assert_eq!(
            evaluate(&[Bar, Bar, Bar]),
            Some(SlotsWin::ThreeOfAKind(Bar))
        );
        assert_eq!(evaluate(&[Bar, Bar, Bar]).unwrap().payout(), 10);
        assert_eq!(
            evaluate(&[Cherry, Cherry, Cherry]),
            Some(SlotsWin::ThreeOfAKind(Cherry))
        );
    }

    #[test]
    fn mixed_bars_pay_the_family_line() {
        assert_eq!(evaluate(&[Bar, DoubleBar, TripleBar]), Some(SlotsWin::AnyBars));
        assert_eq!(evaluate(&[TripleBar, Bar, Bar]), Some(SlotsWin::AnyBars));
        assert_eq!(evaluate(&[Bar, DoubleBar, Bell]), None);
    }

    #[test]
    fn two_cherries_need_reels_one_and_two() {
        // Reel three is irrelevant: this is the two-cherry line, not one.
        assert_eq!(evaluate(&[Cherry, Cherry, Seven]), Some(SlotsWin::TwoCherries));
        assert_eq!(evaluate(&[Cherry, Cherry, Seven]).unwrap().payout(), 2);
        assert_eq!(evaluate(&[Seven, Cherry, Cherry]), None);
    }

    #[test]
    fn one_cherry_counts_only_on_reel_one() {
        assert_eq!(evaluate(&[Cherry, Bell, Seven]), Some(SlotsWin::OneCherry));
        // A cherry on reel three does not upgrade the line.
        assert_eq!(evaluate(&[Cherry, Bell, Cherry]), Some(SlotsWin::OneCherry));
        assert_eq!(evaluate(&[Bell, Cherry, Cherry]), None);
    }

    #[test]
    fn losing_lines_pay_nothing() {
        assert_eq!(evaluate(&[Bar, Bell, Seven]), None);
        assert_eq!(evaluate(&[Bell, Seven, Bar]), None);
    }

    #[test]
    fn strips_carry_the_advertised_frequencies() {
        for strip in &REEL_STRIPS {
            assert_eq!(strip.len(), STRIP_LEN);
        }
        let reel_one_cherries = REEL_STRIPS[0]
            .iter()
            .filter(|&&symbol| symbol == Cherry)
            .count();
        let reel_one_sevens = REEL_STRIPS[0]
            .iter()
            .filter(|&&symbol| symbol == Seven)
            .count();
        assert_eq!(reel_one_cherries, 5);
        assert_eq!(reel_one_sevens, 2);
    }
}
