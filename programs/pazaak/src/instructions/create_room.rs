use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::events::GameRoomCreated;
use crate::instructions::treasury;
use crate::state::config::GameConfig;
use crate::state::room::GameRoom;
use crate::state::seeds::{GAME_CONFIG_SEED, GAME_ROOM_SEED, ROOM_TREASURY_SEED};

#[derive(Accounts)]
#[instruction(room_id: u64)]
pub struct CreateRoom<'info> {
    /// Player 1, creating and funding the room
    #[account(mut)]
    pub player: Signer<'info>,

    /// Game config PDA: source of the mint and minimal bid
    #[account(
        seeds = [GAME_CONFIG_SEED],
        bump = config.bump,
    )]
    pub config: Account<'info, GameConfig>,

    /// The game room PDA: derived from room_id.
    /// Existing rooms fall through to the handler, which rejects them.
    #[account(
        init_if_needed,
        payer = player,
        space = GameRoom::LEN,
        seeds = [GAME_ROOM_SEED, room_id.to_le_bytes().as_ref()],
        bump,
    )]
    pub game_room: Account<'info, GameRoom>,

    /// The room treasury PDA token account, owned by the game room
    #[account(
        init_if_needed,
        payer = player,
        seeds = [ROOM_TREASURY_SEED, room_id.to_le_bytes().as_ref()],
        bump,
        token::mint = token_mint,
        token::authority = game_room,
    )]
    pub room_treasury: Account<'info, TokenAccount>,

    /// Player's token account (source of the bid)
    #[account(
        mut,
        token::mint = config.token_mint,
        token::authority = player,
    )]
    pub player_token_account: Account<'info, TokenAccount>,

    #[account(address = config.token_mint)]
    pub token_mint: Account<'info, Mint>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

pub fn handler(
    ctx: Context<CreateRoom>,
    room_id: u64,
    token_bid: u64,
    cards_permutation_hash: [u8; 32],
) -> Result<()> {
    ctx.accounts.config.check_bid(token_bid)?;

    let player = ctx.accounts.player.key();
    let treasury_key = ctx.accounts.room_treasury.key();
    ctx.accounts.game_room.open(
        room_id,
        player,
        token_bid,
        cards_permutation_hash,
        treasury_key,
        ctx.bumps.game_room,
        ctx.bumps.room_treasury,
    )?;

    // ── Escrow player 1's bid ──
    treasury::deposit(
        &ctx.accounts.token_program,
        &ctx.accounts.player_token_account,
        &ctx.accounts.room_treasury,
        &ctx.accounts.player,
        token_bid,
    )?;
    ctx.accounts.room_treasury.reload()?;
    ctx.accounts
        .game_room
        .check_escrow(ctx.accounts.room_treasury.amount)?;

    msg!("Game room #{} created by {} with bid {}", room_id, player, token_bid);

    emit!(GameRoomCreated {
        room: ctx.accounts.game_room.key(),
        room_id,
        player1: player,
        token_bid,
        cards_permutation_hash,
        treasury: treasury_key,
        created_at: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
