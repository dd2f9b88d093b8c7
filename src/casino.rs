//! The shell: one bankroll, one active table, game selection.

use log::info;

use crate::ledger::{Chips, Ledger};
use crate::table::{
    CasinoConfig, CasinoTable, Decision, GameKind, RoundPhase, TableApi, TableError, TableResult,
    TableView, Ticks,
};

/// The casino floor. Owns the shared ledger and whichever table the
/// player is seated at, and forwards the adapter's actions to it.
///
/// Single-threaded and tick-driven: the frame clock calls [`tick`]
/// (`Casino::tick`) once per frame, and every action completes
/// synchronously before the next one arrives.
#[derive(Debug)]
pub struct Casino {
    config: CasinoConfig,
    ledger: Ledger,
    table: Option<CasinoTable>,
}

impl Default for Casino {
    fn default() -> Self {
        Self::new(CasinoConfig::default())
    }
}

impl Casino {
    #[must_use]
    pub fn new(config: CasinoConfig) -> Self {
        let ledger = Ledger::new(config.starting_balance);
        Self {
            config,
            ledger,
            table: None,
        }
    }

    /// Chips available for the next stake.
    #[must_use]
    pub fn balance(&self) -> Chips {
        self.ledger.balance()
    }

    /// The shared ledger, journal included.
    #[must_use]
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// The table currently seated at, if any.
    #[must_use]
    pub fn table(&self) -> Option<&CasinoTable> {
        self.table.as_ref()
    }

    /// Sit down at a game. Any current table must be safely abandonable;
    /// chips committed there keep the player seated until confirmed away
    /// via [`leave`](Self::leave).
    pub fn enter(&mut self, kind: GameKind) -> TableResult<RoundPhase> {
        if let Some(table) = self.table.as_mut() {
            table.abandon(&mut self.ledger, false)?;
        }
        let table = CasinoTable::open(kind, self.config.clone());
        let phase = table.phase();
        info!("seated at {kind}");
        self.table = Some(table);
        Ok(phase)
    }

    /// Stand up from the current table, subject to the cancellation
    /// rules: free from safe phases, confirmation once chips are
    /// committed, rejected while cards or a spin are in flight.
    pub fn leave(&mut self, confirm: bool) -> TableResult<()> {
        let Some(table) = self.table.as_mut() else {
            return Ok(());
        };
        table.abandon(&mut self.ledger, confirm)?;
        info!("left the {} table", table.game_kind());
        self.table = None;
        Ok(())
    }

    pub fn start_round(&mut self, stake: Option<Chips>) -> TableResult<RoundPhase> {
        let table = self.table.as_mut().ok_or(TableError::NoTableSelected)?;
        table.start_round(&mut self.ledger, stake)
    }

    pub fn submit(&mut self, decision: Decision) -> TableResult<RoundPhase> {
        let table = self.table.as_mut().ok_or(TableError::NoTableSelected)?;
        table.submit(&mut self.ledger, decision)
    }

    /// Advance the active table's countdowns; `None` when not seated.
    pub fn tick(&mut self, elapsed: Ticks) -> Option<RoundPhase> {
        let table = self.table.as_mut()?;
        Some(table.tick(&mut self.ledger, elapsed))
    }

    /// Snapshot the active table for rendering; `None` when not seated.
    #[must_use]
    pub fn view(&self) -> Option<TableView> {
        self.table.as_ref().map(|table| table.view(&self.ledger))
    }

    /// Put the bankroll back to the configured starting amount. Only
    /// legal with no stake in escrow.
    pub fn reset_bankroll(&mut self) -> TableResult<()> {
        self.ledger.reset(self.config.starting_balance)?;
        info!("bankroll reset to {}", self.config.starting_balance);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::LedgerError;
    use crate::rules::roulette::RouletteBet;

    #[test]
    fn actions_without_a_table_are_rejected() {
        let mut casino = Casino::default();
        assert_eq!(casino.start_round(None), Err(TableError::NoTableSelected));
        assert_eq!(
            casino.submit(Decision::Draw),
            Err(TableError::NoTableSelected)
        );
        assert_eq!(casino.tick(1), None);
        assert!(casino.view().is_none());
    }

    #[test]
    fn entering_a_game_seats_a_fresh_table() {
        let mut casino = Casino::default();
        assert_eq!(casino.enter(GameKind::Blackjack), Ok(RoundPhase::Idle));
        assert_eq!(casino.enter(GameKind::Roulette), Ok(RoundPhase::Betting));
        assert_eq!(casino.balance(), 10);
    }

    #[test]
    fn switching_tables_mid_round_needs_an_explicit_leave() {
        let mut casino = Casino::default();
        casino.enter(GameKind::DrawPoker).unwrap();
        casino.start_round(None).unwrap();
        assert_eq!(
            casino.enter(GameKind::Slots),
            Err(TableError::ConfirmationRequired)
        );
        // Confirmed leave forfeits the stake, then the switch is free.
        casino.leave(true).unwrap();
        assert_eq!(casino.balance(), 9);
        assert!(casino.enter(GameKind::Slots).is_ok());
    }

    #[test]
    fn placed_bets_guard_against_a_silent_walkaway() {
        let mut casino = Casino::default();
        casino.enter(GameKind::Roulette).unwrap();
        casino
            .submit(Decision::RouletteBet {
                bet: RouletteBet::Straight(17),
                amount: 5,
            })
            .unwrap();
        assert_eq!(casino.leave(false), Err(TableError::ConfirmationRequired));
        // Bets are not escrowed; the confirmed leave just discards them.
        casino.leave(true).unwrap();
        assert_eq!(casino.balance(), 10);
    }

    #[test]
    fn bankroll_reset_restores_the_starting_amount() {
        let mut casino = Casino::default();
        casino.enter(GameKind::DrawPoker).unwrap();
        casino.start_round(None).unwrap();
        casino.submit(Decision::Draw).unwrap();
        casino.reset_bankroll().unwrap();
        assert_eq!(casino.balance(), 10);
    }

    #[test]
    fn bankroll_reset_is_blocked_mid_round() {
        let mut casino = Casino::default();
        casino.enter(GameKind::DrawPoker).unwrap();
        casino.start_round(None).unwrap();
        assert_eq!(
            casino.reset_bankroll(),
            Err(TableError::Ledger(LedgerError::AlreadyStaked { pending: 1 }))
        );
    }
}
