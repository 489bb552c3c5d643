use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::errors::PazaakError;
use crate::events::GameRoomSettled;
use crate::instructions::treasury;
use crate::state::commitment::SEED_LEN;
use crate::state::config::GameConfig;
use crate::state::room::GameRoom;
use crate::state::seeds::{GAME_CONFIG_SEED, GAME_ROOM_SEED, ROOM_TREASURY_SEED};

// ──────────────────────────────────────────────────────
// Settle Room — game authority, or both players co-signing
//
// The revealed seed must hash to the commitment stored at
// creation. On success the whole pot goes to the winner.
// ──────────────────────────────────────────────────────

#[derive(Accounts)]
#[instruction(room_id: u64)]
pub struct SettleRoom<'info> {
    /// Game authority, or one of the two players
    pub settler: Signer<'info>,

    /// The other player, when the players settle without the authority
    pub co_signer: Option<Signer<'info>>,

    #[account(
        seeds = [GAME_CONFIG_SEED],
        bump = config.bump,
    )]
    pub config: Account<'info, GameConfig>,

    #[account(
        mut,
        seeds = [GAME_ROOM_SEED, room_id.to_le_bytes().as_ref()],
        bump = game_room.bump,
    )]
    pub game_room: Account<'info, GameRoom>,

    #[account(
        mut,
        seeds = [ROOM_TREASURY_SEED, room_id.to_le_bytes().as_ref()],
        bump = game_room.treasury_bump,
    )]
    pub room_treasury: Account<'info, TokenAccount>,

    /// Winner's token account: owner checked against `winner` in the handler
    #[account(
        mut,
        token::mint = config.token_mint,
    )]
    pub winner_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

pub fn handler(
    ctx: Context<SettleRoom>,
    room_id: u64,
    winner: Pubkey,
    revealed_seed: [u8; SEED_LEN],
) -> Result<()> {
    let settler = ctx.accounts.settler.key();
    let co_signer = ctx.accounts.co_signer.as_ref().map(|signer| signer.key());
    let game_authority = ctx.accounts.config.game_authority;
    let balance = ctx.accounts.room_treasury.amount;

    ctx.accounts
        .game_room
        .authorize_settlement(&game_authority, &settler, co_signer.as_ref())?;
    let payouts = ctx
        .accounts
        .game_room
        .settle(winner, revealed_seed, balance)?;

    require_keys_eq!(
        ctx.accounts.winner_token_account.owner,
        winner,
        PazaakError::InvalidTokenAccount
    );
    let amount_paid = payouts
        .player1
        .checked_add(payouts.player2)
        .ok_or(PazaakError::Overflow)?;

    treasury::release(
        &ctx.accounts.token_program,
        &ctx.accounts.room_treasury,
        &ctx.accounts.winner_token_account,
        &ctx.accounts.game_room,
        amount_paid,
    )?;

    msg!(
        "Game room #{} settled by {}: winner={}, paid={}",
        room_id,
        settler,
        winner,
        amount_paid
    );

    emit!(GameRoomSettled {
        room: ctx.accounts.game_room.key(),
        room_id,
        winner,
        amount_paid,
        revealed_seed,
        settled_at: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
