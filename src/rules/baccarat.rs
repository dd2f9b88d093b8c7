//! Baccarat points, the third-card tableau, and settlement.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::cards::Card;
use crate::ledger::Chips;

/// A two-card total that ends the round on the spot.
pub const NATURAL: u8 = 8;

/// Hand value: point sum mod 10.
#[must_use]
pub fn hand_value(cards: &[Card]) -> u8 {
    let sum: u8 = cards.iter().map(|card| card.rank.baccarat_points()).sum();
    sum % 10
}

/// Natural: a two-card 8 or 9, either side, no further draws.
#[must_use]
pub fn is_natural(cards: &[Card]) -> bool {
    cards.len() == 2 && hand_value(cards) >= NATURAL
}

/// Player rule: draw a third card on a two-card total of 5 or less.
#[must_use]
pub fn player_draws(player_value: u8) -> bool {
    player_value <= 5
}

/// Banker tableau. `player_third` is the point value of the player's third
/// card, or `None` when the player stood.
#[must_use]
pub fn banker_draws(banker_value: u8, player_third: Option<u8>) -> bool {
    match player_third {
        None => banker_value <= 5,
        Some(p) => match banker_value {
            0..=2 => true,
            3 => p != 8,
            4 => (2..=7).contains(&p),
            5 => (4..=7).contains(&p),
            6 => p == 6 || p == 7,
            _ => false,
        },
    }
}

/// A side of the layout: what can be wagered on, and what can win.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub enum BaccaratSide {
    Player,
    Banker,
    Tie,
}

impl fmt::Display for BaccaratSide {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let repr = match self {
            Self::Player => "Player",
            Self::Banker => "Banker",
            Self::Tie => "Tie",
        };
        write!(f, "{repr}")
    }
}

/// Which side won the coup.
#[must_use]
pub fn winner(player_value: u8, banker_value: u8) -> BaccaratSide {
    match player_value.cmp(&banker_value) {
        std::cmp::Ordering::Greater => BaccaratSide::Player,
        std::cmp::Ordering::Less => BaccaratSide::Banker,
        std::cmp::Ordering::Equal => BaccaratSide::Tie,
    }
}

/// Chips handed back on a `stake` wager on `bet` when `won` took the coup.
///
/// Player pays 1:1. Banker pays 0.95:1 — the 5% commission comes off the
/// net win only, rounded half-up to whole chips, and the stake comes back
/// in full. Tie pays 8:1. A Player or Banker wager pushes on a Tie coup.
/// Saturates at the chip ceiling instead of wrapping.
#[must_use]
pub fn returned(bet: BaccaratSide, won: BaccaratSide, stake: Chips) -> Chips {
    if bet == won {
        return match bet {
            BaccaratSide::Player => stake.saturating_mul(2),
            BaccaratSide::Banker => {
                let total = u64::from(stake) + (19 * u64::from(stake) + 10) / 20;
                Chips::try_from(total).unwrap_or(Chips::MAX)
            }
            BaccaratSide::Tie => stake.saturating_mul(9),
        };
    }
    if won == BaccaratSide::Tie {
        // Side wagers push on a tie.
        return stake;
    }
    0
}
