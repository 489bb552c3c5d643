use anchor_lang::prelude::*;

pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;

use instructions::*;
use state::config::ConfigUpdate;
use state::enums::*;

declare_id!("4vgRgThcJSXbP2a4qjwvWqxXwWxiDchUkpRvRQiuMUkR");

#[program]
pub mod pazaak {
    use super::*;

    // ──────────────────────────────────────────────────────
    // GAME CONFIG
    // ──────────────────────────────────────────────────────

    /// Initialize the game config singleton. Called once by the deployer,
    /// who becomes the config authority.
    pub fn initialize_game_config(
        ctx: Context<InitializeGameConfig>,
        game_authority: Pubkey,
        min_bid: u64,
    ) -> Result<()> {
        instructions::initialize_config::handler(ctx, game_authority, min_bid)
    }

    /// Change the minimal bid. Config authority only.
    pub fn update_min_bid(ctx: Context<UpdateGameConfig>, new_min_bid: u64) -> Result<()> {
        instructions::update_config::handler(
            ctx,
            ConfigUpdate {
                min_bid: Some(new_min_bid),
                ..ConfigUpdate::default()
            },
        )
    }

    /// Update game config. Config authority only.
    /// All fields are optional: pass None to keep current value.
    pub fn update_game_config(ctx: Context<UpdateGameConfig>, update: ConfigUpdate) -> Result<()> {
        instructions::update_config::handler(ctx, update)
    }

    // ──────────────────────────────────────────────────────
    // ROOM LIFECYCLE
    // ──────────────────────────────────────────────────────

    /// Create a room and escrow player 1's bid.
    /// `cards_permutation_hash` is sha256 of the seed revealed at settlement.
    pub fn create_room(
        ctx: Context<CreateRoom>,
        room_id: u64,
        token_bid: u64,
        cards_permutation_hash: [u8; 32],
    ) -> Result<()> {
        instructions::create_room::handler(ctx, room_id, token_bid, cards_permutation_hash)
    }

    /// Player 2 joins an open room and escrows a matching bid.
    pub fn join_room(ctx: Context<JoinRoom>, room_id: u64, expected_token_bid: u64) -> Result<()> {
        instructions::join_room::handler(ctx, room_id, expected_token_bid)
    }

    /// Player 1 or the game authority cancels an open room.
    /// Full refund to player 1.
    pub fn cancel_room(ctx: Context<CancelRoom>, room_id: u64) -> Result<()> {
        instructions::cancel_room::handler(ctx, room_id)
    }

    /// Reclaim the storage of a settled or cancelled room.
    pub fn close_room(ctx: Context<CloseRoom>, room_id: u64) -> Result<()> {
        instructions::close_room::handler(ctx, room_id)
    }

    // ──────────────────────────────────────────────────────
    // SETTLEMENT
    // ──────────────────────────────────────────────────────

    /// Reveal the card seed and pay the pot to the winner.
    /// Signed by the game authority, or by both players together.
    pub fn settle_room(
        ctx: Context<SettleRoom>,
        room_id: u64,
        winner: Pubkey,
        revealed_seed: [u8; 32],
    ) -> Result<()> {
        instructions::settle_room::handler(ctx, room_id, winner, revealed_seed)
    }

    /// Game authority ends an abandoned or disputed active room.
    pub fn resolve_dispute(
        ctx: Context<ResolveDispute>,
        room_id: u64,
        ruling: DisputeRuling,
    ) -> Result<()> {
        instructions::resolve_dispute::handler(ctx, room_id, ruling)
    }
}
