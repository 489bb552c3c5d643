use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::events::GameRoomCancelled;
use crate::instructions::treasury;
use crate::state::config::GameConfig;
use crate::state::room::GameRoom;
use crate::state::seeds::{GAME_CONFIG_SEED, GAME_ROOM_SEED, ROOM_TREASURY_SEED};

// ──────────────────────────────────────────────────────
// Cancel Room — player 1 or game authority, open rooms only
//
// Refunds the single escrowed bid to player 1. Active rooms
// can only end through settlement or dispute resolution.
// ──────────────────────────────────────────────────────

#[derive(Accounts)]
#[instruction(room_id: u64)]
pub struct CancelRoom<'info> {
    pub caller: Signer<'info>,

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

    /// Player 1's token account to receive the refund
    #[account(
        mut,
        token::mint = config.token_mint,
        token::authority = game_room.player1,
    )]
    pub player1_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

pub fn handler(ctx: Context<CancelRoom>, room_id: u64) -> Result<()> {
    let caller = ctx.accounts.caller.key();
    let game_authority = ctx.accounts.config.game_authority;
    let balance = ctx.accounts.room_treasury.amount;

    let payouts = ctx
        .accounts
        .game_room
        .cancel(&caller, &game_authority, balance)?;

    treasury::release(
        &ctx.accounts.token_program,
        &ctx.accounts.room_treasury,
        &ctx.accounts.player1_token_account,
        &ctx.accounts.game_room,
        payouts.player1,
    )?;

    msg!(
        "Game room #{} cancelled by {}, refunded {}",
        room_id,
        caller,
        payouts.player1
    );

    emit!(GameRoomCancelled {
        room: ctx.accounts.game_room.key(),
        room_id,
        cancelled_by: caller,
        refund_amount: payouts.player1,
        cancelled_at: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
