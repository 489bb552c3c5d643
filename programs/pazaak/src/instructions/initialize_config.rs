use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, TokenAccount};

use crate::events::GameConfigInitialized;
use crate::state::config::GameConfig;
use crate::state::seeds::GAME_CONFIG_SEED;

// ──────────────────────────────────────────────────────
// Initialize Game Config — called once by the config authority
//
// Creates the singleton GameConfig PDA. `init_if_needed` lets a
// repeated call reach the handler, which rejects it with
// AlreadyInitialized instead of an opaque allocation failure.
// ──────────────────────────────────────────────────────

#[derive(Accounts)]
pub struct InitializeGameConfig<'info> {
    /// The deployer, becomes the config authority
    #[account(mut)]
    pub config_authority: Signer<'info>,

    /// The game config PDA: singleton, derived from a fixed seed
    #[account(
        init_if_needed,
        payer = config_authority,
        space = GameConfig::LEN,
        seeds = [GAME_CONFIG_SEED],
        bump,
    )]
    pub config: Account<'info, GameConfig>,

    /// The SPL mint accepted as wager currency
    pub token_mint: Account<'info, Mint>,

    /// Platform token account: must hold the wager mint
    pub token_treasury: Account<'info, TokenAccount>,

    pub system_program: Program<'info, System>,
}

pub fn handler(
    ctx: Context<InitializeGameConfig>,
    game_authority: Pubkey,
    min_bid: u64,
) -> Result<()> {
    let config_authority = ctx.accounts.config_authority.key();
    let token_mint = ctx.accounts.token_mint.key();
    let token_treasury = ctx.accounts.token_treasury.key();
    let treasury_mint = ctx.accounts.token_treasury.mint;

    let config = &mut ctx.accounts.config;
    config.initialize(
        config_authority,
        game_authority,
        token_mint,
        token_treasury,
        treasury_mint,
        min_bid,
        ctx.bumps.config,
    )?;

    msg!(
        "Game config initialized: authority={}, game_authority={}, mint={}, min_bid={}",
        config.config_authority,
        config.game_authority,
        config.token_mint,
        config.min_bid
    );

    emit!(GameConfigInitialized {
        config: config.key(),
        config_authority: config.config_authority,
        game_authority: config.game_authority,
        token_mint: config.token_mint,
        token_treasury: config.token_treasury,
        min_bid,
    });

    Ok(())
}
