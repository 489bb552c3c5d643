use anchor_lang::prelude::*;
use anchor_spl::token::{self, CloseAccount, Token, TokenAccount, Transfer};

use crate::state::room::GameRoom;
use crate::state::seeds::GAME_ROOM_SEED;

// ──────────────────────────────────────────────────────
// Room treasury custody
//
// The treasury token account's authority is the game room PDA,
// so every withdrawal is signed with the room seeds. Deposits are
// signed by the funding player. All calls run inside the caller's
// instruction, so a failure reverts the room state with them.
// ──────────────────────────────────────────────────────

/// Moves a player's bid into the room treasury.
pub fn deposit<'info>(
    token_program: &Program<'info, Token>,
    from: &Account<'info, TokenAccount>,
    treasury: &Account<'info, TokenAccount>,
    player: &Signer<'info>,
    amount: u64,
) -> Result<()> {
    let transfer_ctx = CpiContext::new(
        token_program.to_account_info(),
        Transfer {
            from: from.to_account_info(),
            to: treasury.to_account_info(),
            authority: player.to_account_info(),
        },
    );
    token::transfer(transfer_ctx, amount)
}

/// Pays `amount` out of the room treasury. Zero amounts are skipped.
pub fn release<'info>(
    token_program: &Program<'info, Token>,
    treasury: &Account<'info, TokenAccount>,
    to: &Account<'info, TokenAccount>,
    room: &Account<'info, GameRoom>,
    amount: u64,
) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }

    let room_id = room.room_id.to_le_bytes();
    let bump = [room.bump];
    let seeds: &[&[u8]] = &[GAME_ROOM_SEED, room_id.as_ref(), &bump];
    let signer_seeds = &[seeds];

    let transfer_ctx = CpiContext::new_with_signer(
        token_program.to_account_info(),
        Transfer {
            from: treasury.to_account_info(),
            to: to.to_account_info(),
            authority: room.to_account_info(),
        },
        signer_seeds,
    );
    token::transfer(transfer_ctx, amount)
}

/// Closes the (empty) treasury token account, rent to `destination`.
pub fn close<'info>(
    token_program: &Program<'info, Token>,
    treasury: &Account<'info, TokenAccount>,
    destination: AccountInfo<'info>,
    room: &Account<'info, GameRoom>,
) -> Result<()> {
    let room_id = room.room_id.to_le_bytes();
    let bump = [room.bump];
    let seeds: &[&[u8]] = &[GAME_ROOM_SEED, room_id.as_ref(), &bump];
    let signer_seeds = &[seeds];

    let close_ctx = CpiContext::new_with_signer(
        token_program.to_account_info(),
        CloseAccount {
            account: treasury.to_account_info(),
            destination,
            authority: room.to_account_info(),
        },
        signer_seeds,
    );
    token::close_account(close_ctx)
}
