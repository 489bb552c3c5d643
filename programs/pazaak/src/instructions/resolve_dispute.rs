use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::errors::PazaakError;
use crate::events::DisputeResolved;
use crate::instructions::treasury;
use crate::state::config::GameConfig;
use crate::state::enums::DisputeRuling;
use crate::state::room::GameRoom;
use crate::state::seeds::{GAME_CONFIG_SEED, GAME_ROOM_SEED, ROOM_TREASURY_SEED};

// ──────────────────────────────────────────────────────
// Resolve Dispute — game authority only
//
// The only way to end an Active room without a valid reveal:
// award the pot from off-chain evidence, or refund both bids.
// Players can never pull funds out of an Active room alone.
// ──────────────────────────────────────────────────────

#[derive(Accounts)]
#[instruction(room_id: u64)]
pub struct ResolveDispute<'info> {
    #[account(
        constraint = game_authority.key() == config.game_authority @ PazaakError::Unauthorized,
    )]
    pub game_authority: Signer<'info>,

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

    /// Boxed to reduce stack frame size
    #[account(
        mut,
        token::mint = config.token_mint,
        token::authority = game_room.player1,
    )]
    pub player1_token_account: Box<Account<'info, TokenAccount>>,

    /// Owner checked against the room's player 2 in the handler
    #[account(
        mut,
        token::mint = config.token_mint,
    )]
    pub player2_token_account: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
}

pub fn handler(ctx: Context<ResolveDispute>, room_id: u64, ruling: DisputeRuling) -> Result<()> {
    let balance = ctx.accounts.room_treasury.amount;
    let payouts = ctx.accounts.game_room.resolve(ruling, balance)?;

    require!(
        ctx.accounts.game_room.player2 == Some(ctx.accounts.player2_token_account.owner),
        PazaakError::InvalidTokenAccount
    );

    treasury::release(
        &ctx.accounts.token_program,
        &ctx.accounts.room_treasury,
        &ctx.accounts.player1_token_account,
        &ctx.accounts.game_room,
        payouts.player1,
    )?;
    treasury::release(
        &ctx.accounts.token_program,
        &ctx.accounts.room_treasury,
        &ctx.accounts.player2_token_account,
        &ctx.accounts.game_room,
        payouts.player2,
    )?;

    msg!(
        "Game room #{} dispute resolved: {:?}, player1={}, player2={}",
        room_id,
        ruling,
        payouts.player1,
        payouts.player2
    );

    emit!(DisputeResolved {
        room: ctx.accounts.game_room.key(),
        room_id,
        game_authority: ctx.accounts.game_authority.key(),
        ruling,
        paid_to_player1: payouts.player1,
        paid_to_player2: payouts.player2,
        resolved_at: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
