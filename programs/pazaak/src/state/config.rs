use anchor_lang::prelude::*;

use crate::errors::PazaakError;

// ──────────────────────────────────────────────────────
// Game Config — singleton PDA, initialized once by the config authority
//
// Stores the accepted wager token, the platform token treasury,
// the minimal bid, and the two authorities. Every room instruction
// reads it; only the config authority can rewrite it.
// ──────────────────────────────────────────────────────

#[account]
#[derive(Default)]
pub struct GameConfig {
    /// Can update config and hand the role over
    pub config_authority: Pubkey,

    /// Can cancel open rooms, settle rooms and resolve disputes
    pub game_authority: Pubkey,

    /// SPL mint accepted as wager currency
    pub token_mint: Pubkey,

    /// Platform-level token account, separate from every room treasury
    pub token_treasury: Pubkey,

    /// Minimal bid per player (in smallest token unit), always > 0
    pub min_bid: u64,

    /// PDA bump
    pub bump: u8,
}

impl GameConfig {
    pub const LEN: usize = 8   // discriminator
        + 32                    // config_authority
        + 32                    // game_authority
        + 32                    // token_mint
        + 32                    // token_treasury
        + 8                     // min_bid
        + 1                     // bump
        + 64;                   // padding for future fields

    /// A zeroed account (freshly allocated) has no config authority yet.
    pub fn is_initialized(&self) -> bool {
        self.config_authority != Pubkey::default()
    }

    /// Fills a freshly allocated config. `treasury_mint` is the mint
    /// of the `token_treasury` token account.
    pub fn initialize(
        &mut self,
        config_authority: Pubkey,
        game_authority: Pubkey,
        token_mint: Pubkey,
        token_treasury: Pubkey,
        treasury_mint: Pubkey,
        min_bid: u64,
        bump: u8,
    ) -> Result<()> {
        require!(!self.is_initialized(), PazaakError::AlreadyInitialized);
        Self::validate_min_bid(min_bid)?;
        require_keys_eq!(treasury_mint, token_mint, PazaakError::InvalidTreasuryMint);
        // A default authority would read as an uninitialized config.
        require_keys_neq!(config_authority, Pubkey::default(), PazaakError::InvalidParameter);

        self.config_authority = config_authority;
        self.game_authority = game_authority;
        self.token_mint = token_mint;
        self.token_treasury = token_treasury;
        self.min_bid = min_bid;
        self.bump = bump;
        Ok(())
    }

    /// Applies `update` only if the caller is the config authority and
    /// every provided field is valid; otherwise nothing changes.
    pub fn apply(&mut self, caller: &Pubkey, update: &ConfigUpdate) -> Result<()> {
        require_keys_eq!(*caller, self.config_authority, PazaakError::Unauthorized);
        if let Some(min_bid) = update.min_bid {
            Self::validate_min_bid(min_bid)?;
        }
        if let Some(new_config_authority) = update.new_config_authority {
            require_keys_neq!(
                new_config_authority,
                Pubkey::default(),
                PazaakError::InvalidParameter
            );
        }

        if let Some(min_bid) = update.min_bid {
            self.min_bid = min_bid;
        }
        if let Some(game_authority) = update.game_authority {
            self.game_authority = game_authority;
        }
        if let Some(new_config_authority) = update.new_config_authority {
            self.config_authority = new_config_authority;
        }
        Ok(())
    }

    pub fn validate_min_bid(min_bid: u64) -> Result<()> {
        require!(min_bid > 0, PazaakError::InvalidParameter);
        Ok(())
    }

    pub fn check_bid(&self, token_bid: u64) -> Result<()> {
        require!(token_bid >= self.min_bid, PazaakError::BelowMinBid);
        Ok(())
    }
}

/// What to update: all fields optional (None = don't change)
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default)]
pub struct ConfigUpdate {
    pub min_bid: Option<u64>,
    pub game_authority: Option<Pubkey>,
    pub new_config_authority: Option<Pubkey>,
}
