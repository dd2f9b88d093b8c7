//! Blackjack hand values, the dealer policy, and round resolution.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::cards::{Card, Rank};
use crate::ledger::Chips;

/// The target total.
pub const BLACKJACK: u8 = 21;

/// Dealer stands at this total or higher, soft or hard.
pub const DEALER_STAND: u8 = 17;

/// Hand total with soft-ace reduction: aces start at 11 and drop to 1 one
/// at a time while the total is over 21.
#[must_use]
pub fn hand_value(cards: &[Card]) -> u8 {
    let mut value: u8 = cards.iter().map(|card| card.rank.blackjack_value()).sum();
    let mut soft_aces = cards.iter().filter(|card| card.rank == Rank::Ace).count();
    while value > BLACKJACK && soft_aces > 0 {
        value -= 10;
        soft_aces -= 1;
    }
    value
}

/// Natural: exactly two cards totaling 21.
#[must_use]
pub fn is_blackjack(cards: &[Card]) -> bool {
    cards.len() == 2 && hand_value(cards) == BLACKJACK
}

#[must_use]
pub fn is_bust(cards: &[Card]) -> bool {
    hand_value(cards) > BLACKJACK
}

/// House policy: draw under 17, stand on every 17 including soft 17.
#[must_use]
pub fn dealer_draws(value: u8) -> bool {
    value < DEALER_STAND
}

/// How a blackjack round ended, in resolution-precedence order.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum BlackjackOutcome {
    PlayerBust,
    DealerBust,
    BothBlackjack,
    PlayerBlackjack,
    DealerBlackjack,
    PlayerWin,
    DealerWin,
    Push,
}

impl BlackjackOutcome {
    /// Chips handed back on a `stake` wager: nothing on a loss, the stake
    /// on a push, stake + stake on a plain win, and stake + 3:2 winnings
    /// (truncated to whole chips) on a natural. Saturates at the chip
    /// ceiling instead of wrapping.
    #[must_use]
    pub fn returned(self, stake: Chips) -> Chips {
        match self {
            Self::PlayerBust | Self::DealerBlackjack | Self::DealerWin => 0,
            Self::BothBlackjack | Self::Push => stake,
            Self::DealerBust | Self::PlayerWin => stake.saturating_mul(2),
            Self::PlayerBlackjack => {
                let total = u64::from(stake) + (3 * u64::from(stake)) / 2;
                Chips::try_from(total).unwrap_or(Chips::MAX)
            }
        }
    }

    #[must_use]
    pub fn is_player_win(self) -> bool {
        matches!(
            self,
            Self::DealerBust | Self::PlayerBlackjack | Self::PlayerWin
        )
    }
}

impl fmt::Display for BlackjackOutcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let repr = match self {
            Self::PlayerBust => "Player Busts!",
            Self::DealerBust => "Dealer Busts! Player Wins!",
            Self::BothBlackjack => "Push! (Both Blackjack)",
            Self::PlayerBlackjack => "Player Blackjack!",
            Self::DealerBlackjack => "Dealer Blackjack! Dealer Wins.",
            Self::PlayerWin => "Player Wins!",
            Self::DealerWin => "Dealer Wins.",
            Self::Push => "Push!",
        };
        write!(f, "{repr}")
    }
}

/// Judge the finished hands. Precedence: player bust, then dealer bust,
/// then naturals, then the totals.
#[must_use]
pub fn resolve(player: &[Card], dealer: &[Card]) -> BlackjackOutcome {
    if is_bust(player) {
        return BlackjackOutcome::PlayerBust;
    }
    if is_bust(dealer) {
        return BlackjackOutcome::DealerBust;
    }
    match (is_blackjack(player), is_blackjack(dealer)) {
        (true, true) => return BlackjackOutcome::BothBlackjack,
        (true, false) => return BlackjackOutcome::PlayerBlackjack,
        (false, true) => return BlackjackOutcome::DealerBlackjack,
        (false, false) => {}
    }
    match hand_value(player).cmp(&hand_value(dealer)) {
        std::cmp::Ordering::Greater => BlackjackOutcome::PlayerWin,
        std::cmp::Ordering::Less => BlackjackOutcome::DealerWin,
        std::cmp::Ordering::Equal => BlackjackOutcome::Push,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Suit;

    fn cards(ranks: &[Rank]) -> Vec<Card> {
        // Suits are irrelevant to blackjack values.
        ranks
            .iter()
            .map(|&rank| Card::new(rank, Suit::Spade))
            .collect()
    }

    #[test]
    fn two_aces_and_a_nine_soften_to_21() {
        let hand = cards(&[Rank::Ace, Rank::Ace, Rank::Nine]);
        assert_eq!(hand_value(&hand), 21);
        assert!(!is_blackjack(&hand));
    }

    #[test]
    fn ace_king_is_a_natural() {
        let hand = cards(&[Rank::Ace, Rank::King]);
        assert_eq!(hand_value(&hand), 21);
        assert!(is_blackjack(&hand));
    }

    #[test]
    fn twenty_one_in_three_cards_is_not_a_natural() {
        let hand = cards(&[Rank::Seven, Rank::Seven, Rank::Seven]);
        assert_eq!(hand_value(&hand), 21);
        assert!(!is_blackjack(&hand));
    }

    #[test]
    fn dealer_stands_on_soft_17() {
        let hand = cards(&[Rank::Ace, Rank::Six]);
        assert_eq!(hand_value(&hand), 17);
        assert!(!dealer_draws(hand_value(&hand)));
    }

    #[test]
    fn dealer_draws_under_17() {
        assert!(dealer_draws(16));
        assert!(!dealer_draws(17));
        assert!(!dealer_draws(21));
    }

    #[test]
    fn player_bust_loses_even_when_dealer_would_bust() {
        let player = cards(&[Rank::King, Rank::Queen, Rank::Five]);
        let dealer = cards(&[Rank::King, Rank::Nine, Rank::Eight]);
        assert_eq!(resolve(&player, &dealer), BlackjackOutcome::PlayerBust);
    }

    #[test]
    fn resolution_precedence_covers_naturals() {
        let natural = cards(&[Rank::Ace, Rank::King]);
        let twenty_one = cards(&[Rank::Seven, Rank::Seven, Rank::Seven]);
        let twenty = cards(&[Rank::King, Rank::Queen]);

        assert_eq!(
            resolve(&natural, &natural),
            BlackjackOutcome::BothBlackjack
        );
        assert_eq!(
            resolve(&natural, &twenty_one),
            BlackjackOutcome::PlayerBlackjack
        );
        assert_eq!(
            resolve(&twenty, &natural),
            BlackjackOutcome::DealerBlackjack
        );
        assert_eq!(resolve(&twenty_one, &twenty), BlackjackOutcome::PlayerWin);
        assert_eq!(resolve(&twenty, &twenty_one), BlackjackOutcome::DealerWin);
        assert_eq!(resolve(&twenty, &twenty), BlackjackOutcome::Push);
    }

    #[test]
    fn settlement_truncates_the_three_to_two() {
        assert_eq!(BlackjackOutcome::PlayerBlackjack.returned(1), 2);
        assert_eq!(BlackjackOutcome::PlayerBlackjack.returned(2), 5);
        assert_eq!(BlackjackOutcome::PlayerBlackjack.returned(10), 25);
        assert_eq!(BlackjackOutcome::PlayerWin.returned(10), 20);
        assert_eq!(BlackjackOutcome::Push.returned(10), 10);
        assert_eq!(BlackjackOutcome::PlayerBust.returned(10), 0);
    }

    #[test]
    fn huge_stakes_saturate_instead_of_wrapping() {
        // One billion at 3:2 still fits in a u32.
        assert_eq!(
            BlackjackOutcome::PlayerBlackjack.returned(1_000_000_000),
            2_500_000_000
        );
        // Past the chip ceiling the settlement clamps rather than wraps.
        assert_eq!(
            BlackjackOutcome::PlayerWin.returned(3_000_000_000),
            Chips::MAX
        );
        assert_eq!(
            BlackjackOutcome::PlayerBlackjack.returned(Chips::MAX),
            Chips::MAX
        );
    }
}
