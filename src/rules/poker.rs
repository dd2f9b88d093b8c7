//! Five-card draw poker hand evaluation and its paytable.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::cards::Card;

/// Cards in a poker hand.
pub const HAND_SIZE: usize = 5;

/// Poker hand categories, worst to best. The derived ordering is the
/// strict total order over categories; kickers never matter because hands
/// are judged against the paytable, not against each other.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub enum HandRank {
    Nothing,
    JacksOrBetter,
    TwoPair,
    ThreeOfAKind,
    Straight,
    Flush,
    FullHouse,
    FourOfAKind,
    StraightFlush,
    RoyalFlush,
}

impl HandRank {
    /// For-1 paytable: the multiplier times the stake is the full amount
    /// returned on a win, stake included. Jacks-or-better at 1 hands the
    /// stake straight back.
    #[must_use]
    pub fn payout(self) -> u32 {
        match self {
            Self::Nothing => 0,
            Self::JacksOrBetter => 1,
            Self::TwoPair => 2,
            Self::ThreeOfAKind => 3,
            Self::Straight => 4,
            Self::Flush => 6,
            Self::FullHouse => 9,
            Self::FourOfAKind => 25,
            Self::StraightFlush => 50,
            Self::RoyalFlush => 250,
        }
    }

    /// Whether this category pays anything at all.
    #[must_use]
    pub fn is_winner(self) -> bool {
        self.payout() > 0
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let repr = match self {
            Self::Nothing => "Nothing",
            Self::JacksOrBetter => "Jacks or Better",
            Self::TwoPair => "Two Pair",
            Self::ThreeOfAKind => "Three of a Kind",
            Self::Straight => "Straight",
            Self::Flush => "Flush",
            Self::FullHouse => "Full House",
            Self::FourOfAKind => "Four of a Kind",
            Self::StraightFlush => "Straight Flush",
            Self::RoyalFlush => "Royal Flush",
        };
        write!(f, "{repr}")
    }
}

/// Judge a five-card hand. Order of the cards never matters.
#[must_use]
pub fn evaluate(hand: &[Card; HAND_SIZE]) -> HandRank {
    // Rank histogram indexed by poker value 2..=14.
    let mut counts = [0u8; 15];
    for card in hand {
        counts[card.rank.value() as usize] += 1;
    }

    let is_flush = hand.iter().all(|card| card.suit == hand[0].suit);

    let mut values: [u8; HAND_SIZE] = hand.map(|card| card.rank.value());
    values.sort_unstable();
    let distinct = values.windows(2).all(|pair| pair[0] != pair[1]);
    // The wheel counts the ace as 1 for straight detection only.
    let wheel = values == [2, 3, 4, 5, 14];
    let is_straight = distinct && (values[4] - values[0] == 4 || wheel);

    let mut pairs = 0u8;
    let mut best_pair = 0u8;
    let mut has_trips = false;
    let mut has_quads = false;
    for (value, count) in counts.iter().enumerate() {
        match count {
            2 => {
                pairs += 1;
                best_pair = best_pair.max(value as u8);
            }
            3 => has_trips = true,
            4 => has_quads = true,
            _ => {}
        }
    }

    if is_straight && is_flush {
        // Ten-to-ace suited is royal; the suited wheel sorts ace-high but
        // its second card is a five, so it stays a plain straight flush.
        if values[4] == 14 && values[3] == 13 {
            HandRank::RoyalFlush
        } else {
            HandRank::StraightFlush
        }
    } else if has_quads {
        HandRank::FourOfAKind
    } else if has_trips && pairs == 1 {
        HandRank::FullHouse
    } else if is_flush {
        HandRank::Flush
    } else if is_straight {
        HandRank::Straight
    } else if has_trips {
        HandRank::ThreeOfAKind
    } else if pairs == 2 {
        HandRank::TwoPair
    } else if pairs == 1 && best_pair >= 11 {
        HandRank::JacksOrBetter
    } else {
        HandRank::Nothing
    }
}
