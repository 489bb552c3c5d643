use anchor_lang::prelude::*;

// ──────────────────────────────────────────────────────
// Game Room State — tracks lifecycle state
// ──────────────────────────────────────────────────────

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum GameRoomState {
    #[default]
    Open,      // Created and funded by player 1, waiting for player 2
    Active,    // Both bids escrowed, game in progress
    Settled,   // Pot released to the winner
    Cancelled, // Bids refunded
}

impl GameRoomState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, GameRoomState::Settled | GameRoomState::Cancelled)
    }
}

// ──────────────────────────────────────────────────────
// Dispute Ruling — how the game authority ends an active room
// without a commitment reveal
// ──────────────────────────────────────────────────────

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum DisputeRuling {
    AwardPlayer1, // Whole pot to player 1, room settled
    AwardPlayer2, // Whole pot to player 2, room settled
    RefundBoth,   // Each player gets their bid back, room cancelled
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeroed_state_reads_as_open() {
        assert_eq!(GameRoomState::default(), GameRoomState::Open);
        assert!(!GameRoomState::default().is_terminal());
        assert!(GameRoomState::Settled.is_terminal());
        assert!(GameRoomState::Cancelled.is_terminal());
    }
}
