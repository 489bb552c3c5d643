use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::events::GameRoomJoined;
use crate::instructions::treasury;
use crate::state::config::GameConfig;
use crate::state::room::GameRoom;
use crate::state::seeds::{GAME_CONFIG_SEED, GAME_ROOM_SEED, ROOM_TREASURY_SEED};

#[derive(Accounts)]
#[instruction(room_id: u64)]
pub struct JoinRoom<'info> {
    /// Player 2, funding the second bid
    pub player: Signer<'info>,

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

    #[account(
        mut,
        token::mint = config.token_mint,
        token::authority = player,
    )]
    pub player_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

pub fn handler(ctx: Context<JoinRoom>, room_id: u64, expected_token_bid: u64) -> Result<()> {
    let player = ctx.accounts.player.key();
    ctx.accounts.game_room.join(player, expected_token_bid)?;

    let token_bid = ctx.accounts.game_room.token_bid;
    treasury::deposit(
        &ctx.accounts.token_program,
        &ctx.accounts.player_token_account,
        &ctx.accounts.room_treasury,
        &ctx.accounts.player,
        token_bid,
    )?;
    ctx.accounts.room_treasury.reload()?;
    let escrowed = ctx.accounts.room_treasury.amount;
    ctx.accounts.game_room.check_escrow(escrowed)?;

    msg!("Game room #{} joined by {}, escrow {}", room_id, player, escrowed);

    emit!(GameRoomJoined {
        room: ctx.accounts.game_room.key(),
        room_id,
        player2: player,
        escrowed,
        joined_at: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
