use anchor_lang::prelude::*;

use crate::events::GameConfigUpdated;
use crate::state::config::{ConfigUpdate, GameConfig};
use crate::state::seeds::GAME_CONFIG_SEED;

// ──────────────────────────────────────────────────────
// Update Game Config — config authority only
//
// Rewrites scalar fields in place; the account is never moved
// or deleted, so room instructions reading it are unaffected.
// ──────────────────────────────────────────────────────

#[derive(Accounts)]
pub struct UpdateGameConfig<'info> {
    /// Checked against the config authority in `GameConfig::apply`
    pub config_authority: Signer<'info>,

    /// The game config PDA
    #[account(
        mut,
        seeds = [GAME_CONFIG_SEED],
        bump = config.bump,
    )]
    pub config: Account<'info, GameConfig>,
}

pub fn handler(ctx: Context<UpdateGameConfig>, update: ConfigUpdate) -> Result<()> {
    let caller = ctx.accounts.config_authority.key();
    let config = &mut ctx.accounts.config;
    let previous_authority = config.config_authority;
    config.apply(&caller, &update)?;

    if let Some(min_bid) = update.min_bid {
        msg!("Minimal bid updated to {}", min_bid);
    }
    if let Some(game_authority) = update.game_authority {
        msg!("Game authority updated to {}", game_authority);
    }
    if let Some(new_config_authority) = update.new_config_authority {
        msg!(
            "Config authority transferred from {} to {}",
            previous_authority,
            new_config_authority
        );
    }

    emit!(GameConfigUpdated {
        config: config.key(),
        config_authority: config.config_authority,
        game_authority: config.game_authority,
        min_bid: config.min_bid,
        updated_at: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
