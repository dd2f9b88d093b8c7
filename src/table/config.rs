//! Casino and timing configuration models.

use serde::{Deserialize, Serialize};

use super::phase::Ticks;
use crate::ledger::Chips;

/// Reference frame cadence. Every duration in [`Timings`] assumes the
/// frame clock calls `tick(1)` this many times per second.
pub const TICKS_PER_SECOND: Ticks = 30;

/// Duration constants for the timed phases, in ticks at the reference
/// cadence.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Timings {
    /// Wheel spin before the ball lands (6 seconds).
    pub roulette_spin: Ticks,

    /// Landing pause before the roulette result shows (1 second).
    pub roulette_reveal: Ticks,

    /// Reel spin before the payline lands (3 seconds).
    pub slots_spin: Ticks,

    /// Slots result display before the machine returns to idle (2 seconds).
    pub slots_result: Ticks,

    /// Hold while the baccarat initial deal lands (1 second).
    pub baccarat_deal: Ticks,

    /// Hold while baccarat third cards land (1 second).
    pub baccarat_draw: Ticks,

    /// Winning-result flash duration (1.5 seconds).
    pub flash_duration: Ticks,

    /// Ticks between flash visibility toggles.
    pub flash_interval: Ticks,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            roulette_spin: 180,
            roulette_reveal: 30,
            slots_spin: 90,
            slots_result: 60,
            baccarat_deal: 30,
            baccarat_draw: 30,
            flash_duration: 45,
            flash_interval: 5,
        }
    }
}

/// Casino configuration
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct CasinoConfig {
    /// Chips the bankroll starts with and resets to
    pub starting_balance: Chips,

    /// Stake per round when the start action carries no override
    pub default_stake: Chips,

    /// Simultaneous hands in multi-hand poker, each drawn from its own
    /// fresh deck
    pub multi_hands: usize,

    /// Timed phase durations
    pub timings: Timings,
}

impl Default for CasinoConfig {
    fn default() -> Self {
        Self {
            starting_balance: 10,
            default_stake: 1,
            multi_hands: 3,
            timings: Timings::default(),
        }
    }
}

impl CasinoConfig {
    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        if self.default_stake == 0 {
            return Err("default stake must be positive".to_string());
        }
        if self.starting_balance < self.default_stake {
            return Err(format!(
                "starting balance {} cannot cover the default stake {}",
                self.starting_balance, self.default_stake
            ));
        }
        if self.multi_hands == 0 {
            return Err("multi-hand poker needs at least one hand".to_string());
        }
        if self.timings.flash_interval == 0 {
            return Err("flash interval must be positive".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(CasinoConfig::default().validate(), Ok(()));
    }

    #[test]
    fn zero_stake_fails_validation() {
        let config = CasinoConfig {
            default_stake: 0,
            ..CasinoConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn balance_must_cover_the_stake() {
        let config = CasinoConfig {
            starting_balance: 1,
            default_stake: 5,
            ..CasinoConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn default_timings_match_the_reference_cadence() {
        let timings = Timings::default();
        assert_eq!(timings.roulette_spin, 6 * TICKS_PER_SECOND);
        assert_eq!(timings.slots_spin, 3 * TICKS_PER_SECOND);
        assert_eq!(timings.baccarat_deal, TICKS_PER_SECOND);
    }
}
