//! Playing cards and per-round decks shared by every card game.

use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Number of cards in a fresh deck.
pub const DECK_SIZE: usize = 52;

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub enum Suit {
    Club,
    Spade,
    Diamond,
    Heart,
}

impl Suit {
    /// All four suits, in deck-construction order.
    pub const ALL: [Self; 4] = [Self::Club, Self::Spade, Self::Diamond, Self::Heart];
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let repr = match self {
            Self::Club => "♣",
            Self::Spade => "♠",
            Self::Diamond => "♦",
            Self::Heart => "♥",
        };
        write!(f, "{repr}")
    }
}

/// Card rank. Ordering is poker ordering with the ace high; the ace-low
/// straight is a special case handled by the poker evaluator alone.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub enum Rank {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    /// All thirteen ranks, two through ace.
    pub const ALL: [Self; 13] = [
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
        Self::Ace,
    ];

    /// Poker value: 2..=10 at face, J=11, Q=12, K=13, A=14.
    #[must_use]
    pub fn value(self) -> u8 {
        match self {
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
            Self::Five => 5,
            Self::Six => 6,
            Self::Seven => 7,
            Self::Eight => 8,
            Self::Nine => 9,
            Self::Ten => 10,
            Self::Jack => 11,
            Self::Queen => 12,
            Self::King => 13,
            Self::Ace => 14,
        }
    }

    /// Blackjack value: faces count 10, the ace starts at 11 and is
    /// softened to 1 by the hand total, never here.
    #[must_use]
    pub fn blackjack_value(self) -> u8 {
        match self {
            Self::Ace => 11,
            Self::Ten | Self::Jack | Self::Queen | Self::King => 10,
            other => other.value(),
        }
    }

    /// Baccarat points: ace counts 1, tens and faces count 0.
    #[must_use]
    pub fn baccarat_points(self) -> u8 {
        match self {
            Self::Ace => 1,
            Self::Ten | Self::Jack | Self::Queen | Self::King => 0,
            other => other.value(),
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let repr = match self {
            Self::Jack => "J".to_string(),
            Self::Queen => "Q".to_string(),
            Self::King => "K".to_string(),
            Self::Ace => "A".to_string(),
            other => other.value().to_string(),
        };
        write!(f, "{repr}")
    }
}

/// A playing card. Plain value type; two cards of equal rank and suit are
/// the same card no matter which deck dealt them.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let repr = format!("{}{}", self.rank, self.suit);
        write!(f, "{repr:>3}")
    }
}

/// Dealing past the end of the deck. Rounds are sized so this cannot happen
/// with a fresh deck per hand; reaching it fails the round closed.
#[derive(Clone, Copy, Debug, Error, Eq, PartialEq)]
#[error("deck exhausted: all {DECK_SIZE} cards already dealt")]
pub struct DeckExhausted;

/// A deck of 52 distinct cards dealt front to back without replacement.
///
/// Every round that needs cards builds its own freshly shuffled deck and
/// owns it for the round's lifetime.
#[derive(Clone, Debug)]
pub struct Deck {
    cards: [Card; DECK_SIZE],
    deck_idx: usize,
}

impl Deck {
    /// A new deck, already shuffled.
    #[must_use]
    pub fn shuffled() -> Self {
        let mut deck = Self::default();
        deck.shuffle();
        deck
    }

    pub fn shuffle(&mut self) {
        self.cards.shuffle(&mut rand::rng());
        self.deck_idx = 0;
    }

    /// Deal the next card, front to back.
    pub fn deal(&mut self) -> Result<Card, DeckExhausted> {
        let card = *self.cards.get(self.deck_idx).ok_or(DeckExhausted)?;
        self.deck_idx += 1;
        Ok(card)
    }

    /// Deal `n` cards in order.
    pub fn deal_many(&mut self, n: usize) -> Result<Vec<Card>, DeckExhausted> {
        (0..n).map(|_| self.deal()).collect()
    }

    /// Cards not yet dealt.
    #[must_use]
    pub fn remaining(&self) -> usize {
        DECK_SIZE - self.deck_idx
    }
}

impl Default for Deck {
    fn default() -> Self {
        let mut cards = [Card::new(Rank::Two, Suit::Club); DECK_SIZE];
        for (i, rank) in Rank::ALL.into_iter().enumerate() {
            for (j, suit) in Suit::ALL.into_iter().enumerate() {
                cards[4 * i + j] = Card::new(rank, suit);
            }
        }
        Self { cards, deck_idx: 0 }
    }
}
