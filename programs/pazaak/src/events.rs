use anchor_lang::prelude::*;
use crate::state::enums::*;

// ──────────────────────────────────────────────────────
// Events — emitted for off-chain indexing
// ──────────────────────────────────────────────────────

#[event]
pub struct GameConfigInitialized {
    pub config: Pubkey,
    pub config_authority: Pubkey,
    pub game_authority: Pubkey,
    pub token_mint: Pubkey,
    pub token_treasury: Pubkey,
    pub min_bid: u64,
}

#[event]
pub struct GameConfigUpdated {
    pub config: Pubkey,
    pub config_authority: Pubkey,
    pub game_authority: Pubkey,
    pub min_bid: u64,
    pub updated_at: i64,
}

#[event]
pub struct GameRoomCreated {
    pub room: Pubkey,
    pub room_id: u64,
    pub player1: Pubkey,
    pub token_bid: u64,
    pub cards_permutation_hash: [u8; 32],
    pub treasury: Pubkey,
    pub created_at: i64,
}

#[event]
pub struct GameRoomJoined {
    pub room: Pubkey,
    pub room_id: u64,
    pub player2: Pubkey,
    pub escrowed: u64,
    pub joined_at: i64,
}

#[event]
pub struct GameRoomCancelled {
    pub room: Pubkey,
    pub room_id: u64,
    pub cancelled_by: Pubkey,
    pub refund_amount: u64,
    pub cancelled_at: i64,
}

#[event]
pub struct GameRoomSettled {
    pub room: Pubkey,
    pub room_id: u64,
    pub winner: Pubkey,
    pub amount_paid: u64,
    pub revealed_seed: [u8; 32],
    pub settled_at: i64,
}

#[event]
pub struct DisputeResolved {
    pub room: Pubkey,
    pub room_id: u64,
    pub game_authority: Pubkey,
    pub ruling: DisputeRuling,
    pub paid_to_player1: u64,
    pub paid_to_player2: u64,
    pub resolved_at: i64,
}

#[event]
pub struct GameRoomClosed {
    pub room: Pubkey,
    pub room_id: u64,
    pub closed_by: Pubkey,
}
