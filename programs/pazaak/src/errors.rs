use anchor_lang::prelude::*;

#[error_code]
pub enum PazaakError {
    // ── Authorization errors ──
    #[msg("Caller lacks the authority required for this action")]
    Unauthorized,

    // ── Parameter errors ──
    #[msg("Invalid parameter: bids must be greater than zero")]
    InvalidParameter,

    #[msg("Bid is smaller than the minimal required bid")]
    BelowMinBid,

    #[msg("Token treasury mint does not match the configured token mint")]
    InvalidTreasuryMint,

    // ── Creation errors ──
    #[msg("Game config has already been initialized")]
    AlreadyInitialized,

    #[msg("A game room with this id already exists")]
    RoomAlreadyExists,

    // ── Status errors ──
    #[msg("Game room is not open for joining")]
    RoomNotOpen,

    #[msg("Game room is not active")]
    RoomNotActive,

    #[msg("Game room can only be cancelled while open")]
    RoomNotCancellable,

    #[msg("Game room has not reached a terminal state")]
    RoomNotFinished,

    // ── Join errors ──
    #[msg("Offered bid does not match the room bid")]
    BidMismatch,

    #[msg("Room creator cannot join their own room")]
    SelfJoin,

    // ── Settlement errors ──
    #[msg("Revealed seed does not match the cards permutation commitment")]
    CommitmentMismatch,

    #[msg("Winner must be one of the room players")]
    InvalidWinner,

    // ── Custody errors ──
    #[msg("Token account is not owned by the expected room player")]
    InvalidTokenAccount,

    #[msg("Room treasury balance does not match the funded bids")]
    EscrowBalanceMismatch,

    #[msg("Arithmetic overflow")]
    Overflow,
}

#[cfg(test)]
pub(crate) fn assert_error<T: std::fmt::Debug>(result: Result<T>, expected: PazaakError) {
    let err = result.expect_err("expected an error");
    let expected = anchor_lang::error::Error::from(expected);
    assert_eq!(ProgramError::from(err), ProgramError::from(expected));
}
