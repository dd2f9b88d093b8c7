//! Roulette bet kinds, number properties, and per-bet settlement.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::ledger::Chips;

/// Highest number on the layout.
pub const MAX_NUMBER: u8 = 36;

/// Physical pocket order of a European wheel, clockwise from zero.
/// Presentation only: adapters animate along it; the draw itself is a
/// uniform pick over the 37 numbers.
pub const WHEEL: [u8; 37] = [
    0, 32, 15, 19, 4, 21, 2, 25, 17, 34, 6, 27, 13, 36, 11, 30, 8, 23, 10, 5, 24, 16, 33, 1, 20,
    14, 31, 9, 22, 18, 29, 7, 28, 12, 35, 3, 26,
];

const RED_NUMBERS: [u8; 18] = [
    1, 3, 5, 7, 9, 12, 14, 16, 18, 19, 21, 23, 25, 27, 30, 32, 34, 36,
];

/// Pocket color. Green is the zero alone and cannot be wagered on.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub enum Color {
    Green,
    Red,
    Black,
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let repr = match self {
            Self::Green => "Green",
            Self::Red => "Red",
            Self::Black => "Black",
        };
        write!(f, "{repr}")
    }
}

/// Fixed number-to-color map: 0 green, 18 red, 18 black.
#[must_use]
pub fn color_of(number: u8) -> Color {
    if number == 0 {
        Color::Green
    } else if RED_NUMBERS.contains(&number) {
        Color::Red
    } else {
        Color::Black
    }
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub enum Parity {
    Even,
    Odd,
}

/// Low is 1-18, high is 19-36.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub enum TableHalf {
    Low,
    High,
}

/// A wager kind with its target. Splits, streets, corners, and six-lines
/// would slot in here as further variants with their own `covers`/`odds`
/// rows.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub enum RouletteBet {
    /// A single number, zero included.
    Straight(u8),
    /// Red or black; green is not a legal target.
    Color(Color),
    Parity(Parity),
    Half(TableHalf),
    /// Dozens 1..=3: 1-12, 13-24, 25-36.
    Dozen(u8),
    /// Columns 1..=3 by layout position: column 1 is {1, 4, ..., 34}.
    Column(u8),
}

impl RouletteBet {
    /// Whether the target is on the layout at all. Malformed targets are
    /// rejected at placement and never reach settlement.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        match self {
            Self::Straight(n) => *n <= MAX_NUMBER,
            Self::Color(color) => *color != Color::Green,
            Self::Parity(_) | Self::Half(_) => true,
            Self::Dozen(d) | Self::Column(d) => (1..=3).contains(d),
        }
    }

    /// Membership test: does this wager cover the winning number? The zero
    /// wins only for a straight bet on it; every outside bet misses it.
    #[must_use]
    pub fn covers(&self, number: u8) -> bool {
        match self {
            Self::Straight(n) => *n == number,
            Self::Color(color) => number != 0 && color_of(number) == *color,
            Self::Parity(parity) => {
                number != 0
                    && match parity {
                        Parity::Even => number % 2 == 0,
                        Parity::Odd => number % 2 == 1,
                    }
            }
            Self::Half(half) => match half {
                TableHalf::Low => (1..=18).contains(&number),
                TableHalf::High => (19..=36).contains(&number),
            },
            Self::Dozen(d) => number >= 1 && (number - 1) / 12 + 1 == *d,
            Self::Column(c) => number != 0 && number % 3 == c % 3,
        }
    }

    /// Fixed to-1 odds per kind.
    #[must_use]
    pub fn odds(&self) -> u32 {
        match self {
            Self::Straight(_) => 35,
            Self::Dozen(_) | Self::Column(_) => 2,
            Self::Color(_) | Self::Parity(_) | Self::Half(_) => 1,
        }
    }

    /// Chips handed back for an `amount` wager against the winning number:
    /// stake plus stake times odds on a hit, nothing on a miss. Saturates
    /// at the chip ceiling instead of wrapping.
    #[must_use]
    pub fn returned(&self, amount: Chips, winning: u8) -> Chips {
        if self.covers(winning) {
            amount.saturating_add(amount.saturating_mul(self.odds()))
        } else {
            0
        }
    }
}

impl fmt::Display for RouletteBet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let repr = match self {
            Self::Straight(n) => format!("Straight {n}"),
            Self::Color(color) => color.to_string(),
            Self::Parity(Parity::Even) => "Even".to_string(),
            Self::Parity(Parity::Odd) => "Odd".to_string(),
            Self::Half(TableHalf::Low) => "1-18".to_string(),
            Self::Half(TableHalf::High) => "19-36".to_string(),
            Self::Dozen(d) => format!("Dozen {d}"),
            Self::Column(c) => format!("Column {c}"),
        };
        write!(f, "{repr}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn wheel_lists_each_number_once() {
        let pockets: HashSet<u8> = WHEEL.into_iter().collect();
        assert_eq!(pockets.len(), 37);
        assert!(pockets.contains(&0));
        assert!(pockets.iter().all(|&n| n <= MAX_NUMBER));
    }

    #[test]
    fn color_map_splits_18_18_1() {
        let reds = (0..=MAX_NUMBER)
            .filter(|&n| color_of(n) == Color::Red)
            .count();
        let blacks = (0..=MAX_NUMBER)
            .filter(|&n| color_of(n) == Color::Black)
            .count();
        assert_eq!(reds, 18);
        assert_eq!(blacks, 18);
        assert_eq!(color_of(0), Color::Green);
    }

    #[test]
    fn seventeen_is_black_and_odd() {
        assert_eq!(color_of(17), Color::Black);
        assert!(RouletteBet::Parity(Parity::Odd).covers(17));
        assert!(!RouletteBet::Color(Color::Red).covers(17));
        assert!(RouletteBet::Color(Color::Black).covers(17));
    }

    #[test]
    fn zero_only_pays_a_straight_bet_on_it() {
        assert!(RouletteBet::Straight(0).covers(0));
        assert!(!RouletteBet::Color(Color::Red).covers(0));
        assert!(!RouletteBet::Color(Color::Black).covers(0));
        assert!(!RouletteBet::Parity(Parity::Even).covers(0));
        assert!(!RouletteBet::Half(TableHalf::Low).covers(0));
        assert!(!RouletteBet::Dozen(1).covers(0));
        assert!(!RouletteBet::Column(1).covers(0));
    }

    #[test]
    fn dozens_and_columns_partition_one_to_36() {
        for n in 1..=MAX_NUMBER {
            let dozens = (1..=3)
                .filter(|&d| RouletteBet::Dozen(d).covers(n))
                .count();
            let columns = (1..=3)
                .filter(|&c| RouletteBet::Column(c).covers(n))
                .count();
            assert_eq!(dozens, 1, "number {n}");
            assert_eq!(columns, 1, "number {n}");
        }
        assert!(RouletteBet::Dozen(2).covers(13));
        assert!(RouletteBet::Dozen(2).covers(24));
        assert!(RouletteBet::Column(1).covers(34));
        assert!(RouletteBet::Column(3).covers(36));
    }

    #[test]
    fn malformed_targets_are_invalid() {
        assert!(!RouletteBet::Straight(37).is_valid());
        assert!(!RouletteBet::Color(Color::Green).is_valid());
        assert!(!RouletteBet::Dozen(0).is_valid());
        assert!(!RouletteBet::Dozen(4).is_valid());
        assert!(!RouletteBet::Column(5).is_valid());
        assert!(RouletteBet::Straight(0).is_valid());
        assert!(RouletteBet::Half(TableHalf::High).is_valid());
    }

    #[test]
    fn straight_hit_returns_36_for_one() {
        assert_eq!(RouletteBet::Straight(17).returned(10, 17), 360);
        assert_eq!(RouletteBet::Color(Color::Red).returned(10, 17), 0);
        assert_eq!(RouletteBet::Color(Color::Black).returned(10, 17), 20);
        assert_eq!(RouletteBet::Dozen(2).returned(10, 17), 30);
    }

    #[test]
    fn huge_wagers_saturate_instead_of_wrapping() {
        // 36-for-1 on 100M chips still fits in a u32.
        assert_eq!(
            RouletteBet::Straight(17).returned(100_000_000, 17),
            3_600_000_000
        );
        // Past the chip ceiling the settlement clamps rather than wraps.
        assert_eq!(
            RouletteBet::Straight(17).returned(200_000_000, 17),
            Chips::MAX
        );
        assert_eq!(RouletteBet::Color(Color::Black).returned(Chips::MAX, 17), Chips::MAX);
    }
}
