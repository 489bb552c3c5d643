use anchor_lang::prelude::*;

use crate::errors::PazaakError;
use crate::state::commitment::{CardsCommitment, SEED_LEN};
use crate::state::enums::*;

// ──────────────────────────────────────────────────────
// Game Room — one per wager session, PDA derived from room_id
//
// Owns (as token authority) its own treasury token account.
// Escrowed balance is token_bid × funded_players() while the
// room is live, and zero once it is settled or cancelled.
// ──────────────────────────────────────────────────────

#[account]
#[derive(Default)]
pub struct GameRoom {
    pub room_id: u64,

    // ── Participants ──
    pub player1: Pubkey,         // Creator, funded at creation
    pub player2: Option<Pubkey>, // Set on join

    // ── Wager ──
    pub token_bid: u64,     // Per-player bid, fixed at creation
    pub treasury: Pubkey,   // PDA token account holding the escrow

    // ── Fairness ──
    pub commitment: CardsCommitment,

    // ── State ──
    pub state: GameRoomState,
    pub winner: Option<Pubkey>,

    // ── PDA ──
    pub bump: u8,
    pub treasury_bump: u8,
}

/// Token amounts leaving the treasury when a room ends.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Payouts {
    pub player1: u64,
    pub player2: u64,
}

impl GameRoom {
    pub const LEN: usize = 8    // discriminator
        + 8                     // room_id
        + 32                    // player1
        + 1 + 32                // player2
        + 8                     // token_bid
        + 32                    // treasury
        + CardsCommitment::LEN  // commitment
        + 1                     // state
        + 1 + 32                // winner
        + 1                     // bump
        + 1                     // treasury_bump
        + 32;                   // padding for future fields

    /// A freshly allocated (zeroed) account has no creator.
    pub fn exists(&self) -> bool {
        self.player1 != Pubkey::default()
    }

    pub fn is_player(&self, key: &Pubkey) -> bool {
        self.player1 == *key || self.player2 == Some(*key)
    }

    pub fn funded_players(&self) -> u64 {
        match self.state {
            GameRoomState::Open => 1,
            GameRoomState::Active => 2,
            GameRoomState::Settled | GameRoomState::Cancelled => 0,
        }
    }

    pub fn expected_escrow(&self) -> Result<u64> {
        self.token_bid
            .checked_mul(self.funded_players())
            .ok_or(error!(PazaakError::Overflow))
    }

    /// Anyone can send tokens to the treasury, so only a shortfall is an error.
    pub fn check_escrow(&self, treasury_balance: u64) -> Result<()> {
        require!(
            treasury_balance >= self.expected_escrow()?,
            PazaakError::EscrowBalanceMismatch
        );
        Ok(())
    }

    // ──────────────────────────────────────────────────────
    // Lifecycle transitions
    // ──────────────────────────────────────────────────────

    pub fn open(
        &mut self,
        room_id: u64,
        player1: Pubkey,
        token_bid: u64,
        cards_permutation_hash: [u8; 32],
        treasury: Pubkey,
        bump: u8,
        treasury_bump: u8,
    ) -> Result<()> {
        require!(!self.exists(), PazaakError::RoomAlreadyExists);
        require!(token_bid > 0, PazaakError::InvalidParameter);

        self.room_id = room_id;
        self.player1 = player1;
        self.player2 = None;
        self.token_bid = token_bid;
        self.treasury = treasury;
        self.commitment = CardsCommitment::Committed {
            hash: cards_permutation_hash,
        };
        self.state = GameRoomState::Open;
        self.winner = None;
        self.bump = bump;
        self.treasury_bump = treasury_bump;
        Ok(())
    }

    pub fn join(&mut self, player2: Pubkey, expected_token_bid: u64) -> Result<()> {
        require!(self.state == GameRoomState::Open, PazaakError::RoomNotOpen);
        require!(expected_token_bid == self.token_bid, PazaakError::BidMismatch);
        require!(player2 != self.player1, PazaakError::SelfJoin);

        self.player2 = Some(player2);
        self.state = GameRoomState::Active;
        Ok(())
    }

    /// Open rooms only. Returns what goes back to player 1.
    pub fn cancel(
        &mut self,
        caller: &Pubkey,
        game_authority: &Pubkey,
        treasury_balance: u64,
    ) -> Result<Payouts> {
        require!(
            *caller == self.player1 || caller == game_authority,
            PazaakError::Unauthorized
        );
        require!(
            self.state == GameRoomState::Open,
            PazaakError::RoomNotCancellable
        );
        self.check_escrow(treasury_balance)?;

        self.state = GameRoomState::Cancelled;
        Ok(Payouts {
            player1: treasury_balance,
            player2: 0,
        })
    }

    // ──────────────────────────────────────────────────────
    // Settlement
    // ──────────────────────────────────────────────────────

    /// Either the game authority signs alone, or both players sign together.
    pub fn authorize_settlement(
        &self,
        game_authority: &Pubkey,
        settler: &Pubkey,
        co_signer: Option<&Pubkey>,
    ) -> Result<()> {
        if settler == game_authority {
            return Ok(());
        }
        let co_signed = match (self.player2, co_signer) {
            (Some(player2), Some(co_signer)) => {
                (*settler == self.player1 && *co_signer == player2)
                    || (*settler == player2 && *co_signer == self.player1)
            }
            _ => false,
        };
        require!(co_signed, PazaakError::Unauthorized);
        Ok(())
    }

    pub fn settle(
        &mut self,
        winner: Pubkey,
        revealed_seed: [u8; SEED_LEN],
        treasury_balance: u64,
    ) -> Result<Payouts> {
        require!(self.state == GameRoomState::Active, PazaakError::RoomNotActive);
        require!(self.is_player(&winner), PazaakError::InvalidWinner);
        let commitment = self.commitment.reveal(revealed_seed)?;
        self.check_escrow(treasury_balance)?;

        let payouts = self.award(&winner, treasury_balance)?;
        self.commitment = commitment;
        self.winner = Some(winner);
        self.state = GameRoomState::Settled;
        Ok(payouts)
    }

    /// Ends an active room without a reveal. The commitment stays sealed.
    pub fn resolve(&mut self, ruling: DisputeRuling, treasury_balance: u64) -> Result<Payouts> {
        require!(self.state == GameRoomState::Active, PazaakError::RoomNotActive);
        self.check_escrow(treasury_balance)?;
        let player2 = self.player2.ok_or(error!(PazaakError::RoomNotActive))?;

        let payouts = match ruling {
            DisputeRuling::AwardPlayer1 => {
                let player1 = self.player1;
                self.winner = Some(player1);
                self.state = GameRoomState::Settled;
                self.award(&player1, treasury_balance)?
            }
            DisputeRuling::AwardPlayer2 => {
                self.winner = Some(player2);
                self.state = GameRoomState::Settled;
                self.award(&player2, treasury_balance)?
            }
            DisputeRuling::RefundBoth => {
                // Player 2 gets exactly their bid; any surplus stays with the creator.
                let player1 = treasury_balance
                    .checked_sub(self.token_bid)
                    .ok_or(PazaakError::Overflow)?;
                self.state = GameRoomState::Cancelled;
                Payouts {
                    player1,
                    player2: self.token_bid,
                }
            }
        };
        Ok(payouts)
    }

    fn award(&self, winner: &Pubkey, treasury_balance: u64) -> Result<Payouts> {
        if *winner == self.player1 {
            Ok(Payouts {
                player1: treasury_balance,
                player2: 0,
            })
        } else if self.player2 == Some(*winner) {
            Ok(Payouts {
                player1: 0,
                player2: treasury_balance,
            })
        } else {
            err!(PazaakError::InvalidWinner)
        }
    }

    // ──────────────────────────────────────────────────────
    // Storage reclaim
    // ──────────────────────────────────────────────────────

    pub fn check_closable(&self, caller: &Pubkey, game_authority: &Pubkey) -> Result<()> {
        require!(
            *caller == self.player1 || caller == game_authority,
            PazaakError::Unauthorized
        );
        require!(self.state.is_terminal(), PazaakError::RoomNotFinished);
        Ok(())
    }

    /// Tokens left in a terminal room's treasury were sent after it ended.
    /// They can only be swept when player 1's token account is supplied.
    pub fn residue_to_sweep(&self, treasury_balance: u64, has_sweep_account: bool) -> Result<u64> {
        require!(
            treasury_balance == 0 || has_sweep_account,
            PazaakError::InvalidTokenAccount
        );
        Ok(treasury_balance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::assert_error;

    const BID: u64 = 1_000_000;
    const SEED: [u8; SEED_LEN] = [42u8; SEED_LEN];

    struct Fixture {
        room: GameRoom,
        player1: Pubkey,
        player2: Pubkey,
        authority: Pubkey,
    }

    fn open_room() -> Fixture {
        let player1 = Pubkey::new_unique();
        let mut room = GameRoom::default();
        room.open(
            5,
            player1,
            BID,
            CardsCommitment::hash_seed(&SEED),
            Pubkey::new_unique(),
            254,
            253,
        )
        .unwrap();
        Fixture {
            room,
            player1,
            player2: Pubkey::new_unique(),
            authority: Pubkey::new_unique(),
        }
    }

    fn active_room() -> Fixture {
        let mut f = open_room();
        f.room.join(f.player2, BID).unwrap();
        f
    }

    #[test]
    fn open_room_escrows_one_bid() {
        let f = open_room();
        assert_eq!(f.room.state, GameRoomState::Open);
        assert_eq!(f.room.player2, None);
        assert_eq!(f.room.expected_escrow().unwrap(), BID);
        assert!(!f.room.commitment.is_revealed());
    }

    #[test]
    fn reopening_a_live_room_fails() {
        let mut f = open_room();
        let err = f.room.open(5, Pubkey::new_unique(), BID, [0u8; 32], Pubkey::new_unique(), 1, 1);
        assert_error(err, PazaakError::RoomAlreadyExists);
        assert_eq!(f.room.token_bid, BID);
    }

    #[test]
    fn unclosed_terminal_room_blocks_reuse() {
        let mut f = open_room();
        f.room.cancel(&f.player1, &f.authority, BID).unwrap();
        let err = f.room.open(5, f.player1, BID, [0u8; 32], Pubkey::new_unique(), 1, 1);
        assert_error(err, PazaakError::RoomAlreadyExists);
    }

    #[test]
    fn closed_room_id_can_be_reused() {
        // Closing zeroes the account; the next create sees a default room.
        let mut room = GameRoom::default();
        assert!(!room.exists());
        room.open(5, Pubkey::new_unique(), BID, [1u8; 32], Pubkey::new_unique(), 1, 1)
            .unwrap();
        assert!(room.exists());
    }

    #[test]
    fn join_activates_room_with_double_escrow() {
        let f = active_room();
        assert_eq!(f.room.state, GameRoomState::Active);
        assert_eq!(f.room.player2, Some(f.player2));
        assert_eq!(f.room.expected_escrow().unwrap(), 2_000_000);
    }

    #[test]
    fn join_rejects_mismatched_bid() {
        let mut f = open_room();
        assert_error(f.room.join(f.player2, BID - 1), PazaakError::BidMismatch);
        assert_eq!(f.room.state, GameRoomState::Open);
    }

    #[test]
    fn join_rejects_creator() {
        let mut f = open_room();
        let player1 = f.player1;
        assert_error(f.room.join(player1, BID), PazaakError::SelfJoin);
    }

    #[test]
    fn join_rejects_active_room() {
        let mut f = active_room();
        assert_error(f.room.join(Pubkey::new_unique(), BID), PazaakError::RoomNotOpen);
        assert_eq!(f.room.player2, Some(f.player2));
    }

    #[test]
    fn creator_cancels_open_room_for_full_refund() {
        let mut f = open_room();
        let payouts = f.room.cancel(&f.player1, &f.authority, BID).unwrap();
        assert_eq!(payouts, Payouts { player1: BID, player2: 0 });
        assert_eq!(f.room.state, GameRoomState::Cancelled);
        assert_eq!(f.room.expected_escrow().unwrap(), 0);
    }

    #[test]
    fn game_authority_may_cancel_open_room() {
        let mut f = open_room();
        let authority = f.authority;
        assert!(f.room.cancel(&authority, &authority, BID).is_ok());
    }

    #[test]
    fn stranger_cannot_cancel() {
        let mut f = open_room();
        let stranger = Pubkey::new_unique();
        assert_error(f.room.cancel(&stranger, &f.authority, BID), PazaakError::Unauthorized);
        assert_eq!(f.room.state, GameRoomState::Open);
    }

    #[test]
    fn active_room_is_not_cancellable() {
        let mut f = active_room();
        assert_error(
            f.room.cancel(&f.player1, &f.authority, 2 * BID),
            PazaakError::RoomNotCancellable,
        );
    }

    #[test]
    fn cancel_detects_escrow_shortfall() {
        let mut f = open_room();
        assert_error(
            f.room.cancel(&f.player1, &f.authority, BID - 1),
            PazaakError::EscrowBalanceMismatch,
        );
        assert_eq!(f.room.state, GameRoomState::Open);
    }

    #[test]
    fn settle_with_matching_seed_pays_winner_the_pot() {
        let mut f = active_room();
        let payouts = f.room.settle(f.player1, SEED, 2 * BID).unwrap();
        assert_eq!(payouts, Payouts { player1: 2 * BID, player2: 0 });
        assert_eq!(f.room.state, GameRoomState::Settled);
        assert_eq!(f.room.winner, Some(f.player1));
        assert_eq!(
            f.room.commitment,
            CardsCommitment::Revealed {
                seed: SEED,
                hash: CardsCommitment::hash_seed(&SEED),
            }
        );
    }

    #[test]
    fn settle_pays_player2_when_they_win() {
        let mut f = active_room();
        let payouts = f.room.settle(f.player2, SEED, 2 * BID).unwrap();
        assert_eq!(payouts, Payouts { player1: 0, player2: 2 * BID });
    }

    #[test]
    fn settle_with_wrong_seed_leaves_room_active() {
        let mut f = active_room();
        let before = f.room.commitment;
        assert_error(
            f.room.settle(f.player1, [0u8; SEED_LEN], 2 * BID),
            PazaakError::CommitmentMismatch,
        );
        assert_eq!(f.room.state, GameRoomState::Active);
        assert_eq!(f.room.commitment, before);
        assert_eq!(f.room.winner, None);
    }

    #[test]
    fn settle_rejects_outsider_winner() {
        let mut f = active_room();
        assert_error(
            f.room.settle(Pubkey::new_unique(), SEED, 2 * BID),
            PazaakError::InvalidWinner,
        );
    }

    #[test]
    fn settle_requires_active_room() {
        let mut f = open_room();
        assert_error(f.room.settle(f.player1, SEED, BID), PazaakError::RoomNotActive);
    }

    #[test]
    fn terminal_rooms_reject_every_transition() {
        let mut settled = active_room();
        settled.room.settle(settled.player1, SEED, 2 * BID).unwrap();

        let mut cancelled = open_room();
        cancelled.room.cancel(&cancelled.player1, &cancelled.authority, BID).unwrap();

        for f in [&mut settled, &mut cancelled] {
            let state = f.room.state;
            assert_error(f.room.join(Pubkey::new_unique(), BID), PazaakError::RoomNotOpen);
            assert_error(
                f.room.cancel(&f.player1, &f.authority, 0),
                PazaakError::RoomNotCancellable,
            );
            assert_error(f.room.settle(f.player1, SEED, 0), PazaakError::RoomNotActive);
            assert_error(
                f.room.resolve(DisputeRuling::RefundBoth, 0),
                PazaakError::RoomNotActive,
            );
            assert_eq!(f.room.state, state);
        }
    }

    #[test]
    fn game_authority_alone_may_settle() {
        let f = active_room();
        assert!(f.room.authorize_settlement(&f.authority, &f.authority, None).is_ok());
    }

    #[test]
    fn both_players_co_signing_may_settle() {
        let f = active_room();
        assert!(f
            .room
            .authorize_settlement(&f.authority, &f.player1, Some(&f.player2))
            .is_ok());
        assert!(f
            .room
            .authorize_settlement(&f.authority, &f.player2, Some(&f.player1))
            .is_ok());
    }

    #[test]
    fn single_player_cannot_settle() {
        let f = active_room();
        assert_error(
            f.room.authorize_settlement(&f.authority, &f.player1, None),
            PazaakError::Unauthorized,
        );
        assert_error(
            f.room.authorize_settlement(&f.authority, &f.player1, Some(&f.player1)),
            PazaakError::Unauthorized,
        );
        assert_error(
            f.room.authorize_settlement(&f.authority, &f.player2, Some(&Pubkey::new_unique())),
            PazaakError::Unauthorized,
        );
    }

    #[test]
    fn dispute_award_settles_without_reveal() {
        let mut f = active_room();
        let payouts = f.room.resolve(DisputeRuling::AwardPlayer2, 2 * BID).unwrap();
        assert_eq!(payouts, Payouts { player1: 0, player2: 2 * BID });
        assert_eq!(f.room.state, GameRoomState::Settled);
        assert_eq!(f.room.winner, Some(f.player2));
        assert!(!f.room.commitment.is_revealed());

        let mut f = active_room();
        let payouts = f.room.resolve(DisputeRuling::AwardPlayer1, 2 * BID).unwrap();
        assert_eq!(payouts, Payouts { player1: 2 * BID, player2: 0 });
        assert_eq!(f.room.winner, Some(f.player1));
    }

    #[test]
    fn dispute_refund_splits_bids_back() {
        let mut f = active_room();
        let payouts = f.room.resolve(DisputeRuling::RefundBoth, 2 * BID).unwrap();
        assert_eq!(payouts, Payouts { player1: BID, player2: BID });
        assert_eq!(f.room.state, GameRoomState::Cancelled);
        assert_eq!(f.room.winner, None);
    }

    #[test]
    fn surplus_in_treasury_is_drained_with_the_pot() {
        let mut f = active_room();
        let payouts = f.room.settle(f.player2, SEED, 2 * BID + 7).unwrap();
        assert_eq!(payouts.player2, 2 * BID + 7);

        let mut f = active_room();
        let payouts = f.room.resolve(DisputeRuling::RefundBoth, 2 * BID + 7).unwrap();
        assert_eq!(payouts, Payouts { player1: BID + 7, player2: BID });
    }

    #[test]
    fn only_terminal_rooms_are_closable() {
        let mut f = open_room();
        assert_error(
            f.room.check_closable(&f.player1, &f.authority),
            PazaakError::RoomNotFinished,
        );
        f.room.cancel(&f.player1, &f.authority, BID).unwrap();
        assert!(f.room.check_closable(&f.player1, &f.authority).is_ok());
        assert!(f.room.check_closable(&f.authority, &f.authority).is_ok());
        assert_error(
            f.room.check_closable(&f.player2, &f.authority),
            PazaakError::Unauthorized,
        );
    }

    #[test]
    fn room_fits_allocated_space() {
        let mut f = active_room();
        f.room.settle(f.player1, SEED, 2 * BID).unwrap();
        let mut buf = Vec::new();
        f.room.try_serialize(&mut buf).unwrap();
        assert!(buf.len() <= GameRoom::LEN);
    }

    #[test]
    fn empty_treasury_closes_without_sweep_account() {
        let mut f = active_room();
        f.room.settle(f.player1, SEED, 2 * BID).unwrap();
        assert_eq!(f.room.residue_to_sweep(0, false).unwrap(), 0);
        assert_eq!(f.room.residue_to_sweep(0, true).unwrap(), 0);
    }

    #[test]
    fn late_deposit_needs_sweep_account() {
        let mut f = open_room();
        f.room.cancel(&f.player1, &f.authority, BID).unwrap();
        assert_error(f.room.residue_to_sweep(3, false), PazaakError::InvalidTokenAccount);
        assert_eq!(f.room.residue_to_sweep(3, true).unwrap(), 3);
    }
}
