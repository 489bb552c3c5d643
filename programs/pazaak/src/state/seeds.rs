use anchor_lang::prelude::*;

// ──────────────────────────────────────────────────────
// PDA seeds — every account the program controls is derived
// from one of these plus, for rooms, the room id (8 bytes LE).
//
// Clients recompute the same addresses off-chain; the
// `seeds = [...]` constraints re-derive them on every call.
// ──────────────────────────────────────────────────────

pub const GAME_CONFIG_SEED: &[u8] = b"pazaak-config";
pub const GAME_ROOM_SEED: &[u8] = b"pazaak-room";
pub const ROOM_TREASURY_SEED: &[u8] = b"pazaak-room-treasury";

/// Address of the singleton game config. Depends on nothing but the seed.
pub fn config_address() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[GAME_CONFIG_SEED], &crate::ID)
}

/// Address of the game room account for `room_id`.
pub fn room_address(room_id: u64) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[GAME_ROOM_SEED, room_id.to_le_bytes().as_ref()], &crate::ID)
}

/// Address of the escrow token account for `room_id`.
pub fn room_treasury_address(room_id: u64) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[ROOM_TREASURY_SEED, room_id.to_le_bytes().as_ref()],
        &crate::ID,
    )
}
