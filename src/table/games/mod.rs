//! The six per-game flows the generic table instantiates.

mod baccarat;
mod blackjack;
mod draw_poker;
mod multi_poker;
mod roulette;
mod slots;

pub use baccarat::Baccarat;
pub use blackjack::Blackjack;
pub use draw_poker::DrawPoker;
pub use multi_poker::MultiPoker;
pub use roulette::Roulette;
pub use slots::Slots;
