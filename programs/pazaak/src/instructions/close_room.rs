use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::errors::PazaakError;
use crate::events::GameRoomClosed;
use crate::instructions::treasury;
use crate::state::config::GameConfig;
use crate::state::room::GameRoom;
use crate::state::seeds::{GAME_CONFIG_SEED, GAME_ROOM_SEED, ROOM_TREASURY_SEED};

// ──────────────────────────────────────────────────────
// Close Room — reclaim storage of a settled or cancelled room
//
// Closes the treasury token account and the room account, rent
// back to player 1. The room_id can be created again afterwards.
// ──────────────────────────────────────────────────────

#[derive(Accounts)]
#[instruction(room_id: u64)]
pub struct CloseRoom<'info> {
    /// Player 1 or the game authority
    pub caller: Signer<'info>,

    #[account(
        seeds = [GAME_CONFIG_SEED],
        bump = config.bump,
    )]
    pub config: Account<'info, GameConfig>,

    #[account(
        mut,
        close = player1,
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

    /// Receives tokens sent to the treasury after the room ended.
    /// Only required when the treasury is not empty.
    #[account(
        mut,
        token::mint = config.token_mint,
        token::authority = game_room.player1,
    )]
    pub player1_token_account: Option<Account<'info, TokenAccount>>,

    /// CHECK: The room creator, receives the rent of both accounts
    #[account(
        mut,
        constraint = player1.key() == game_room.player1 @ PazaakError::Unauthorized,
    )]
    pub player1: UncheckedAccount<'info>,

    pub token_program: Program<'info, Token>,
}

pub fn handler(ctx: Context<CloseRoom>, room_id: u64) -> Result<()> {
    let caller = ctx.accounts.caller.key();
    ctx.accounts
        .game_room
        .check_closable(&caller, &ctx.accounts.config.game_authority)?;

    let residue = ctx.accounts.game_room.residue_to_sweep(
        ctx.accounts.room_treasury.amount,
        ctx.accounts.player1_token_account.is_some(),
    )?;
    if let Some(player1_token_account) = ctx.accounts.player1_token_account.as_ref() {
        treasury::release(
            &ctx.accounts.token_program,
            &ctx.accounts.room_treasury,
            player1_token_account,
            &ctx.accounts.game_room,
            residue,
        )?;
    }
    treasury::close(
        &ctx.accounts.token_program,
        &ctx.accounts.room_treasury,
        ctx.accounts.player1.to_account_info(),
        &ctx.accounts.game_room,
    )?;

    msg!("Game room #{} closed by {}", room_id, caller);

    emit!(GameRoomClosed {
        room: ctx.accounts.game_room.key(),
        room_id,
        closed_by: caller,
    });

    Ok(())
}
